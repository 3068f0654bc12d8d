//! # extracttextpdf
//!
//! A small library (and binary) that turns a PDF into a single plain-text file.
//!
//! ## What this crate does
//!
//! 1. **Select a PDF**: asks a [`FileSelector`] for a path; the binary uses the
//!    native open-file dialog, filtered to `*.pdf` with an "All files" override.
//! 2. **Extract text**: loads the document with lopdf, reads the `/Info`
//!    title when present and extracts the text of every page in page order.
//! 3. **Name the output**: prefers the metadata title, falls back to the
//!    source file stem, and keeps only alphanumerics, spaces, hyphens and
//!    underscores.
//! 4. **Write it**: joins the pages with a blank line and writes the result as
//!    UTF-8 to `output/<name>.txt`, creating the directory when needed.
//!
//! ## Quick example
//!
//! ```no_run
//! use extracttextpdf::{Converter, ConverterConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let converter = Converter::new(ConverterConfig::default());
//! let conversion = converter.convert_file("report.pdf")?;
//!
//! println!("{} page(s) -> {}", conversion.page_count, conversion.output_path.display());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use thiserror::Error;

mod assembler;
mod converter;
mod extractor;
mod naming;
mod pdf_utils;
mod selector;
mod writer;

pub use assembler::{assemble_text, PAGE_SEPARATOR};
pub use converter::{Conversion, Converter};
pub use extractor::{ExtractedDocument, PdfTextExtractor};
pub use naming::{output_filename, sanitize, FALLBACK_STEM, OUTPUT_EXTENSION};
pub use selector::{FileFilter, FileSelector, NativeFileDialog};
pub use writer::OutputWriter;

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`Converter`].
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Directory the text file is written into. Created on demand, including
    /// any missing parents. Relative paths resolve against the current
    /// working directory.
    pub output_directory: PathBuf,

    /// Title shown on the file-open dialog.
    pub dialog_title: String,

    /// Filters offered by the file-open dialog, first one selected by default.
    pub filters: Vec<FileFilter>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from("output"),
            dialog_title: "Select a PDF".into(),
            filters: vec![
                FileFilter::new("PDF files", &["pdf"]),
                FileFilter::new("All files", &["*"]),
            ],
        }
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
///
/// Failures to extract the text of a single page are not errors: that page
/// simply contributes an empty string.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The user closed the file dialog without choosing a file.
    #[error("No file selected")]
    NoFileSelected,

    /// A filesystem I/O error occurred while reading the source document.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The underlying lopdf parser could not load the document.
    #[error("PDF parse error: {0}")]
    ParseError(#[from] lopdf::Error),

    /// The document parsed but lacks the structure needed to read its pages.
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    /// The output directory could not be created.
    #[error("Failed to create output directory '{}': {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("Failed to write '{}': {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ConvertError>;
