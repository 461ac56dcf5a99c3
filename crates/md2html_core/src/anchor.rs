//! Anchor id generation for headings.
//!
//! The ids follow the links produced by VSCode's auto generated table of
//! contents, so that a TOC written in the markdown source keeps working once
//! the document has been converted to HTML.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that never make it into a TOC link.
static STRIPPED_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\[\](){}.,]").unwrap());

/// Converts heading text to the anchor id used by the editor's TOC links.
///
/// 1. Remove `[`, `]`, `(`, `)`, `{`, `}`, `.` and `,`
/// 2. Convert to lowercase
/// 3. Replace each space with a hyphen
///
/// Nothing else is touched: ids are not deduplicated and runs of spaces are
/// not collapsed, so `"remove . and ,"` yields `"remove--and-"`.
///
/// # Example
///
/// ```
/// use md2html_core::anchor::anchor_id;
///
/// assert_eq!(anchor_id("Ignore {[(brackets)]}"), "ignore-brackets");
/// ```
pub fn anchor_id(heading: &str) -> String {
    STRIPPED_CHARS
        .replace_all(heading, "")
        .to_lowercase()
        .replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_id() {
        assert_eq!(
            anchor_id("Testing the Heading Hyperlinker"),
            "testing-the-heading-hyperlinker"
        );
        assert_eq!(anchor_id("Ignore {[(brackets)]}"), "ignore-brackets");
        assert_eq!(anchor_id("Remove, and."), "remove-and");
    }

    #[test]
    fn test_unlisted_punctuation_is_kept() {
        assert_eq!(anchor_id("Usage: cli/args"), "usage:-cli/args");
        assert_eq!(anchor_id("Don't Panic!"), "don't-panic!");
        assert_eq!(anchor_id("Ünïcode Héading"), "ünïcode-héading");
    }

    #[test]
    fn test_spaces_are_not_collapsed() {
        assert_eq!(anchor_id("remove . and ,"), "remove--and-");
        assert_eq!(anchor_id("two  spaces"), "two--spaces");
    }

    #[test]
    fn test_anchor_id_is_idempotent() {
        for heading in [
            "Testing the Heading Hyperlinker",
            "Ignore {[(brackets)]}",
            "Remove, and.",
            "remove . and ,",
            "Mixed [Case] (Text), v1.2",
            "",
        ] {
            let once = anchor_id(heading);
            assert_eq!(anchor_id(&once), once, "heading: {heading:?}");
        }
    }
}
