//! Find every span one entry matches in one text node.

use std::borrow::Cow;

use fancy_regex::Regex;
use tracing::warn;

use crate::fold::FoldedText;
use crate::normalize::Matcher;
use crate::range::MatchSpan;
use crate::whitespace::is_boundary;

/// Find all spans `matcher` produces in `text`, left to right.
///
/// `folded` is the lowercased copy of `text`; pass it when any entry needs
/// folding so it is computed once per node. It is built on demand if a
/// folding entry arrives without one.
pub fn find_spans(text: &str, folded: Option<&FoldedText>, matcher: &Matcher) -> Vec<MatchSpan> {
    match matcher {
        Matcher::Regex(re) => regex_spans(text, re),
        Matcher::Literal {
            needle,
            fold_case: false,
            whole_word,
        } => literal_spans(text, needle, *whole_word, |start, end| (start, end)),
        Matcher::Literal {
            needle,
            fold_case: true,
            whole_word,
        } => {
            let folded = match folded {
                Some(folded) => Cow::Borrowed(folded),
                None => Cow::Owned(FoldedText::new(text)),
            };
            literal_spans_in(text, folded.as_str(), needle, *whole_word, |start, end| {
                folded.to_source(start, end)
            })
        }
    }
}

fn regex_spans(text: &str, re: &Regex) -> Vec<MatchSpan> {
    let mut spans = Vec::new();
    // The iterator steps past empty matches itself; they are dropped so
    // every span stays non-empty.
    for found in re.find_iter(text) {
        match found {
            Ok(m) if m.start() < m.end() => spans.push(MatchSpan::new(m.start(), m.end())),
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "regex evaluation aborted, keeping earlier matches");
                break;
            }
        }
    }
    spans
}

fn literal_spans(
    text: &str,
    needle: &str,
    whole_word: bool,
    to_source: impl Fn(usize, usize) -> (usize, usize),
) -> Vec<MatchSpan> {
    literal_spans_in(text, text, needle, whole_word, to_source)
}

/// Scan `haystack` for non-overlapping occurrences of `needle`; spans are
/// mapped back into `text` through `to_source`.
fn literal_spans_in(
    text: &str,
    haystack: &str,
    needle: &str,
    whole_word: bool,
    to_source: impl Fn(usize, usize) -> (usize, usize),
) -> Vec<MatchSpan> {
    let mut spans = Vec::new();
    if needle.is_empty() {
        return spans;
    }

    let mut position = 0;
    while let Some(found) = haystack[position..].find(needle) {
        let hit = position + found;
        position = hit + needle.len();

        let (start, end) = to_source(hit, position);
        if whole_word
            && !(is_boundary(text[..start].chars().next_back())
                && is_boundary(text[end..].chars().next()))
        {
            continue;
        }
        spans.push(MatchSpan::new(start, end));
    }
    spans
}
