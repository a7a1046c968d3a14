//! Text predicates: the non-ASCII test and the suppression marker.

/// Inline marker that exempts the containing fragment from reporting.
///
/// Matches the original checker's directive; detection is a plain
/// substring test, applied before any diagnostic is emitted.
pub const SUPPRESSION_MARKER: &str = "# noqa";

/// Returns true iff `text` contains at least one character whose code
/// point is >= 0x80.
///
/// No locale awareness and no Unicode category distinctions: emoji,
/// accented Latin, Cyrillic, and CJK all count identically. Total over any
/// input; the empty string is English.
#[must_use]
pub fn is_non_english(text: &str) -> bool {
    text.chars().any(|c| c as u32 >= 0x80)
}

/// Returns true iff `text` carries the inline suppression marker.
#[must_use]
pub fn is_suppressed(text: &str) -> bool {
    text.contains(SUPPRESSION_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_english() {
        assert!(!is_non_english("Hello, world!"));
        assert!(!is_non_english("# a comment with digits 0123"));
        assert!(!is_non_english("\t\n\r ~"));
    }

    #[test]
    fn empty_string_is_english() {
        assert!(!is_non_english(""));
    }

    #[test]
    fn cyrillic_is_non_english() {
        assert!(is_non_english("\u{41f}\u{440}\u{438}\u{432}\u{435}\u{442}"));
    }

    #[test]
    fn accented_latin_is_non_english() {
        assert!(is_non_english("caf\u{e9}"));
    }

    #[test]
    fn emoji_is_non_english() {
        assert!(is_non_english("Hello \u{1f30d}"));
    }

    #[test]
    fn single_non_ascii_char_in_ascii_text_triggers() {
        assert!(is_non_english("mostly ascii but \u{4e16} here"));
    }

    #[test]
    fn boundary_code_points() {
        assert!(!is_non_english("\u{7f}"));
        assert!(is_non_english("\u{80}"));
    }

    #[test]
    fn marker_suppresses() {
        assert!(is_suppressed("# \u{43f}\u{440}\u{438}\u{432}\u{435}\u{442}  # noqa"));
        assert!(is_suppressed("# noqa"));
    }

    #[test]
    fn marker_absent_does_not_suppress() {
        assert!(!is_suppressed("# plain comment"));
        assert!(!is_suppressed("# noq"));
        assert!(!is_suppressed(""));
    }
}
