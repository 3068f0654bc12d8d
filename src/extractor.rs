use crate::{pdf_utils, ConvertError, Result};
use lopdf::Document;
use std::path::Path;

// ── ExtractedDocument ────────────────────────────────────────────────────────

/// Everything read from a PDF: its metadata title and the text of each page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// The `/Info` `/Title` entry, if the document has one.
    pub title: Option<String>,

    /// One entry per page, in page order. Pages that yield no text (or whose
    /// extraction failed) are empty strings.
    pub pages: Vec<String>,
}

// ── PdfTextExtractor ─────────────────────────────────────────────────────────

/// Reads metadata and per-page text from a PDF document.
///
/// ```no_run
/// use extracttextpdf::PdfTextExtractor;
///
/// let extractor = PdfTextExtractor::from_path("report.pdf").unwrap();
/// println!("title: {:?}", extractor.metadata_title());
/// for (i, text) in extractor.page_texts().enumerate() {
///     println!("page {}: {} chars", i + 1, text.chars().count());
/// }
/// ```
pub struct PdfTextExtractor {
    document: Document,
}

impl PdfTextExtractor {
    /// Load a PDF from the file system.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(&bytes)
    }

    /// Load a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = Document::load_mem(data)?;
        document
            .catalog()
            .map_err(|e| ConvertError::InvalidPdf(format!("missing or invalid catalog: {e}")))?;
        Ok(Self { document })
    }

    /// The document title from the information dictionary, or `None` when
    /// there is no `/Info`, no `/Title`, or the title is empty.
    pub fn metadata_title(&self) -> Option<String> {
        let info = pdf_utils::info_dictionary(&self.document)?;
        pdf_utils::text_string_from_dict(&self.document, info, b"Title")
    }

    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Text of every page, in page order.
    ///
    /// Pages are extracted lazily as the iterator is advanced; iterate again
    /// to start over.
    pub fn page_texts(&self) -> impl Iterator<Item = String> + '_ {
        self.document
            .get_pages()
            .into_keys()
            .map(move |page_number| self.page_text(page_number))
    }

    /// Read the title and all pages in one go.
    pub fn extract(&self) -> ExtractedDocument {
        ExtractedDocument {
            title: self.metadata_title(),
            pages: self.page_texts().collect(),
        }
    }

    /// Text of a single 1-based page. Extraction failures are logged and
    /// yield an empty string.
    fn page_text(&self, page_number: u32) -> String {
        match self.document.extract_text(&[page_number]) {
            // lopdf closes every text object with a newline; the page
            // separator already marks the boundary.
            Ok(text) => text.trim_end_matches(&['\n', '\r'][..]).to_string(),
            Err(e) => {
                log::warn!("page {page_number}: text extraction failed, leaving it empty: {e}");
                String::new()
            }
        }
    }

    /// Returns a reference to the underlying [`lopdf::Document`].
    pub fn document(&self) -> &Document {
        &self.document
    }
}
