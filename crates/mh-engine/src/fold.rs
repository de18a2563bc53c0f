//! Lowercased copies of text that remember where each byte came from.
//!
//! Lowercasing can change a character's encoded length, so matches found in
//! the folded copy are mapped back to byte offsets in the source text.

/// Lowercase `s` one character at a time.
///
/// Patterns and text nodes are both folded through this function so they
/// agree on every character.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// A lowercased text with an offset map back to its source.
#[derive(Debug, Clone)]
pub struct FoldedText {
    folded: String,
    /// For every byte of `folded`, the start and end byte of the source
    /// character it was produced from.
    origin: Vec<(usize, usize)>,
}

impl FoldedText {
    pub fn new(text: &str) -> Self {
        let mut folded = String::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len());
        for (start, c) in text.char_indices() {
            let end = start + c.len_utf8();
            for lower in c.to_lowercase() {
                folded.push(lower);
                origin.extend(std::iter::repeat((start, end)).take(lower.len_utf8()));
            }
        }
        Self { folded, origin }
    }

    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Map a non-empty `[start, end)` range of the folded text back to the
    /// smallest source range that covers it.
    pub fn to_source(&self, start: usize, end: usize) -> (usize, usize) {
        debug_assert!(start < end && end <= self.origin.len());
        (self.origin[start].0, self.origin[end - 1].1)
    }
}
