use crate::{ConvertError, Result};
use std::fs;
use std::path::{Path, PathBuf};

// ── OutputWriter ─────────────────────────────────────────────────────────────

/// Persists assembled text into a fixed output directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_directory: PathBuf,
}

impl OutputWriter {
    pub fn new<P: Into<PathBuf>>(output_directory: P) -> Self {
        Self {
            output_directory: output_directory.into(),
        }
    }

    /// The directory files are written into.
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Write `text` as UTF-8 to `<output_directory>/<filename>`, creating the
    /// directory (and missing parents) first. An existing file is truncated.
    ///
    /// Returns the path of the written file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use extracttextpdf::OutputWriter;
    ///
    /// let path = OutputWriter::new("output").write_text("Notes.txt", "Hello\n\nWorld").unwrap();
    /// assert!(path.ends_with("Notes.txt"));
    /// ```
    pub fn write_text(&self, filename: &str, text: &str) -> Result<PathBuf> {
        let dir = &self.output_directory;
        fs::create_dir_all(dir).map_err(|source| ConvertError::OutputDirectory {
            path: dir.clone(),
            source,
        })?;

        let dest = dir.join(filename);
        fs::write(&dest, text.as_bytes()).map_err(|source| ConvertError::WriteFailed {
            path: dest.clone(),
            source,
        })?;

        log::info!("wrote {} bytes to {}", text.len(), dest.display());
        Ok(dest)
    }
}
