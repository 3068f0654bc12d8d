use crate::ConverterConfig;
use std::path::PathBuf;

/// A labelled group of file extensions offered by an open-file dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub label: String,

    /// Extensions without the leading dot; `"*"` matches everything.
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(label: &str, extensions: &[&str]) -> Self {
        Self {
            label: label.into(),
            extensions: extensions.iter().map(|e| (*e).to_string()).collect(),
        }
    }
}

/// Source of the document to convert.
///
/// Returning `None` means the user cancelled.
pub trait FileSelector {
    fn select_file(&self) -> Option<PathBuf>;
}

impl<F> FileSelector for F
where
    F: Fn() -> Option<PathBuf>,
{
    fn select_file(&self) -> Option<PathBuf> {
        self()
    }
}

// ── NativeFileDialog ─────────────────────────────────────────────────────────

/// The platform's open-file dialog.
///
/// Blocks until the user picks a file or dismisses the dialog.
#[derive(Debug, Clone)]
pub struct NativeFileDialog {
    title: String,
    filters: Vec<FileFilter>,
}

impl NativeFileDialog {
    pub fn new(title: impl Into<String>, filters: Vec<FileFilter>) -> Self {
        Self {
            title: title.into(),
            filters,
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(config.dialog_title.clone(), config.filters.clone())
    }
}

impl FileSelector for NativeFileDialog {
    fn select_file(&self) -> Option<PathBuf> {
        let dialog = self
            .filters
            .iter()
            .fold(rfd::FileDialog::new().set_title(&self.title), |dialog, filter| {
                dialog.add_filter(filter.label.as_str(), filter.extensions.as_slice())
            });
        dialog.pick_file()
    }
}
