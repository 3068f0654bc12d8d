/// Separator placed between consecutive pages: one blank line.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Join per-page text into a single document, in the given order.
///
/// Every page contributes exactly one entry, empty pages included, so two
/// empty pages still produce a separator between them. Zero pages yield an
/// empty string.
///
/// ```
/// use extracttextpdf::assemble_text;
///
/// assert_eq!(assemble_text(&["A", "", "B"]), "A\n\n\n\nB");
/// ```
pub fn assemble_text<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::with_capacity(
        pages.iter().map(|p| p.as_ref().len()).sum::<usize>()
            + PAGE_SEPARATOR.len() * pages.len().saturating_sub(1),
    );
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            text.push_str(PAGE_SEPARATOR);
        }
        text.push_str(page.as_ref());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_keeps_its_separators() {
        assert_eq!(assemble_text(&["A", "", "B"]), "A\n\n\n\nB");
    }

    #[test]
    fn zero_pages_is_empty() {
        let pages: [&str; 0] = [];
        assert_eq!(assemble_text(&pages), "");
    }

    #[test]
    fn single_page_has_no_separator() {
        assert_eq!(assemble_text(&["only"]), "only");
    }

    #[test]
    fn two_empty_pages_still_separated() {
        assert_eq!(assemble_text(&["", ""]), "\n\n");
    }

    #[test]
    fn order_is_preserved() {
        let pages = vec!["3".to_string(), "1".to_string(), "2".to_string()];
        assert_eq!(assemble_text(&pages), "3\n\n1\n\n2");
    }
}
