//! Word-boundary whitespace classification.

/// Returns `true` for characters that separate words in whole-word mode.
///
/// Covers ASCII whitespace (space, tab, LF, CR, form feed, vertical tab),
/// no-break space, the Unicode space separators, zero-width space, the
/// line and paragraph separators, and the byte-order mark.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t'
            | '\n'
            | '\r'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200B}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `None` (a string edge) counts as a boundary.
pub fn is_boundary(c: Option<char>) -> bool {
    c.map_or(true, is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_whitespace() {
        for c in [' ', '\t', '\n', '\r', '\u{b}', '\u{c}'] {
            assert!(is_whitespace(c), "{c:?}");
        }
    }

    #[test]
    fn unicode_separators() {
        for c in [
            '\u{a0}', '\u{1680}', '\u{2000}', '\u{2005}', '\u{200a}', '\u{200b}', '\u{2028}',
            '\u{2029}', '\u{202f}', '\u{205f}', '\u{3000}', '\u{feff}',
        ] {
            assert!(is_whitespace(c), "{c:?}");
        }
    }

    #[test]
    fn punctuation_and_letters_are_not_whitespace() {
        for c in ['a', '.', ',', '-', '_', '0', '\u{200c}', '\u{2030}'] {
            assert!(!is_whitespace(c), "{c:?}");
        }
    }

    #[test]
    fn string_edge_is_boundary() {
        assert!(is_boundary(None));
        assert!(is_boundary(Some(' ')));
        assert!(!is_boundary(Some('x')));
    }
}
