use crate::assembler::assemble_text;
use crate::extractor::{ExtractedDocument, PdfTextExtractor};
use crate::naming::output_filename;
use crate::selector::FileSelector;
use crate::writer::OutputWriter;
use crate::{ConvertError, ConverterConfig, Result};
use std::path::{Path, PathBuf};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The PDF that was read.
    pub source: PathBuf,

    /// Metadata title of the source, if it had one.
    pub title: Option<String>,

    pub page_count: usize,

    /// Where the text file was written.
    pub output_path: PathBuf,
}

// ── Converter ────────────────────────────────────────────────────────────────

/// Drives one run: select → extract → name → write.
///
/// Each stage consumes the previous one's output. The only early exit is a
/// cancelled selection ([`ConvertError::NoFileSelected`]); every other error
/// is fatal and returned as-is.
pub struct Converter {
    config: ConverterConfig,
    writer: OutputWriter,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        let writer = OutputWriter::new(config.output_directory.clone());
        Self { config, writer }
    }

    /// Returns a reference to the active [`ConverterConfig`].
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Ask `selector` for a PDF and convert it.
    ///
    /// Nothing is written when the selection is cancelled.
    pub fn run(&self, selector: &dyn FileSelector) -> Result<Conversion> {
        log::debug!("awaiting file selection");
        let source = selector
            .select_file()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConvertError::NoFileSelected)?;
        self.convert_file(source)
    }

    /// Extract `source` and write its text to the output directory.
    pub fn convert_file<P: AsRef<Path>>(&self, source: P) -> Result<Conversion> {
        let source = source.as_ref();
        log::debug!("extracting {}", source.display());
        let document = PdfTextExtractor::from_path(source)?.extract();
        self.write_document(source, document)
    }

    /// Name, assemble and write an already-extracted document.
    pub fn write_document(&self, source: &Path, document: ExtractedDocument) -> Result<Conversion> {
        let filename = output_filename(source, document.title.as_deref());
        log::debug!("naming output {filename:?}");

        let text = assemble_text(&document.pages);
        let output_path = self.writer.write_text(&filename, &text)?;

        Ok(Conversion {
            source: source.to_path_buf(),
            title: document.title,
            page_count: document.pages.len(),
            output_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter_in(dir: &Path) -> Converter {
        Converter::new(ConverterConfig {
            output_directory: dir.join("output"),
            ..Default::default()
        })
    }

    #[test]
    fn cancelled_selection_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let converter = converter_in(tmp.path());

        let err = converter.run(&|| -> Option<PathBuf> { None }).unwrap_err();

        assert!(matches!(err, ConvertError::NoFileSelected));
        assert!(!tmp.path().join("output").exists());
    }

    #[test]
    fn empty_path_counts_as_cancelled() {
        let tmp = tempfile::tempdir().unwrap();
        let err = converter_in(tmp.path())
            .run(&|| Some(PathBuf::new()))
            .unwrap_err();
        assert!(matches!(err, ConvertError::NoFileSelected));
    }

    #[test]
    fn missing_source_is_an_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.pdf");

        let err = converter_in(tmp.path()).run(&move || Some(missing.clone())).unwrap_err();

        assert!(matches!(err, ConvertError::IoError(_)), "{err:?}");
        assert!(!tmp.path().join("output").exists());
    }

    #[test]
    fn non_pdf_source_is_a_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let bogus = tmp.path().join("bogus.pdf");
        std::fs::write(&bogus, b"definitely not a pdf").unwrap();

        let err = converter_in(tmp.path()).convert_file(&bogus).unwrap_err();
        assert!(
            matches!(err, ConvertError::ParseError(_) | ConvertError::InvalidPdf(_)),
            "{err:?}"
        );
    }

    #[test]
    fn titled_document_is_named_after_title() {
        let tmp = tempfile::tempdir().unwrap();
        let document = ExtractedDocument {
            title: Some("Notes".into()),
            pages: vec!["Hello".into(), "World".into()],
        };

        let converter = converter_in(tmp.path());
        let conversion = converter
            .write_document(Path::new("/in/scan 01.pdf"), document)
            .unwrap();

        assert!(conversion.output_path.starts_with(&converter.config().output_directory));
        assert_eq!(conversion.output_path, tmp.path().join("output").join("Notes.txt"));
        assert_eq!(conversion.page_count, 2);
        assert_eq!(
            std::fs::read_to_string(&conversion.output_path).unwrap(),
            "Hello\n\nWorld"
        );
    }

    #[test]
    fn untitled_document_is_named_after_source() {
        let tmp = tempfile::tempdir().unwrap();
        let document = ExtractedDocument {
            title: None,
            pages: vec![String::new()],
        };

        let conversion = converter_in(tmp.path())
            .write_document(Path::new("/in/scan (01).pdf"), document)
            .unwrap();

        assert!(conversion.output_path.ends_with("scan 01.txt"));
        assert_eq!(std::fs::read_to_string(&conversion.output_path).unwrap(), "");
    }
}
