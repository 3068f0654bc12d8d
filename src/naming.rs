//! Derives a filesystem-safe output filename for an extracted document.

use std::path::Path;

/// Extension appended to every output filename.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Stem used when neither the title nor the source filename leaves anything
/// after sanitization.
pub const FALLBACK_STEM: &str = "untitled";

/// Keep only alphanumeric characters, spaces, hyphens and underscores, then
/// strip trailing whitespace. Nothing is substituted or escaped.
///
/// ```
/// use extracttextpdf::sanitize;
///
/// assert_eq!(sanitize("Report: Q1/2024!"), "Report Q12024");
/// assert_eq!(sanitize("draft  "), "draft");
/// ```
pub fn sanitize(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|&c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    kept.trim_end().to_string()
}

/// Build the output filename (`<stem>.txt`) for `source_path`.
///
/// A present, non-empty `metadata_title` wins over the source file's stem.
/// If the chosen basis sanitizes to nothing, the source stem is tried next,
/// then [`FALLBACK_STEM`]; the result is never a bare extension.
///
/// ```
/// use extracttextpdf::output_filename;
///
/// assert_eq!(output_filename("doc.pdf", Some("My Report")), "My Report.txt");
/// assert_eq!(output_filename("/x/doc.pdf", None), "doc.txt");
/// ```
pub fn output_filename<P: AsRef<Path>>(source_path: P, metadata_title: Option<&str>) -> String {
    let source_stem = file_stem(source_path.as_ref());

    let from_title = metadata_title
        .filter(|t| !t.is_empty())
        .map(sanitize)
        .filter(|s| !s.is_empty());

    let stem = match from_title {
        Some(stem) => stem,
        None => {
            if let Some(title) = metadata_title.filter(|t| !t.is_empty()) {
                log::warn!("metadata title {title:?} has no usable characters, naming after the source file");
            }
            let from_source = sanitize(&source_stem);
            if from_source.is_empty() {
                FALLBACK_STEM.to_string()
            } else {
                from_source
            }
        }
    };

    format!("{stem}.{OUTPUT_EXTENSION}")
}

/// The final path component without its extension, or an empty string.
fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
