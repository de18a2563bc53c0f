//! Turn stored entries into executable matchers, once per scan.

use mh_config::SearchEntry;
use fancy_regex::Regex;
use tracing::{debug, warn};

use crate::fold::fold_case;

/// Why a stored entry could not take part in a scan.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("'{0}' is not a /pattern/ or /pattern/i literal")]
    NotARegexLiteral(String),

    #[error("invalid regular expression: {0}")]
    Compile(#[from] fancy_regex::Error),
}

/// How a normalized entry looks for matches.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Compiled regex; case sensitivity is baked in from the `i` flag.
    /// Lookaround and backreferences are supported.
    Regex(Regex),
    /// Literal needle. When `fold_case` is set the needle is already folded
    /// and is searched for in the folded copy of each text node.
    Literal {
        needle: String,
        fold_case: bool,
        whole_word: bool,
    },
}

#[derive(Debug, Clone)]
pub struct NormalizedEntry {
    /// Position in the stored list; names this entry's highlight layer.
    pub index: usize,
    pub color: String,
    pub matcher: Matcher,
}

/// Result of normalizing one stored list.
#[derive(Debug, Clone, Default)]
pub struct NormalizedEntries {
    pub entries: Vec<NormalizedEntry>,
    /// At least one literal entry matches case-insensitively, so text nodes
    /// need a folded copy.
    pub needs_case_fold: bool,
}

impl NormalizedEntries {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Parse a `/pattern/` or `/pattern/i` literal into a compiled regex.
pub fn parse_regex_literal(word: &str) -> Result<Regex, EntryError> {
    let not_literal = || EntryError::NotARegexLiteral(word.to_string());
    let body = word.strip_prefix('/').ok_or_else(not_literal)?;
    let (source, case_insensitive) = if let Some(source) = body.strip_suffix("/i") {
        (source, true)
    } else if let Some(source) = body.strip_suffix('/') {
        (source, false)
    } else {
        return Err(not_literal());
    };
    if source.is_empty() {
        return Err(not_literal());
    }
    let pattern = if case_insensitive {
        format!("(?i){source}")
    } else {
        source.to_string()
    };
    Ok(Regex::new(&pattern)?)
}

fn normalize_entry(entry: &SearchEntry) -> Result<Matcher, EntryError> {
    if entry.re {
        return Ok(Matcher::Regex(parse_regex_literal(entry.word.trim())?));
    }
    let fold = !entry.match_case;
    Ok(Matcher::Literal {
        needle: if fold {
            fold_case(&entry.word)
        } else {
            entry.word.clone()
        },
        fold_case: fold,
        whole_word: entry.whole_word,
    })
}

/// Normalize a stored list, dropping blank and malformed entries.
///
/// Dropped entries are logged; they never abort the scan.
pub fn normalize(raw: &[SearchEntry]) -> NormalizedEntries {
    let mut out = NormalizedEntries::default();

    for (index, entry) in raw.iter().enumerate() {
        if entry.is_blank() {
            debug!(entry = index, "skipping blank entry");
            continue;
        }
        match normalize_entry(entry) {
            Ok(matcher) => {
                if let Matcher::Literal {
                    fold_case: true, ..
                } = matcher
                {
                    out.needs_case_fold = true;
                }
                out.entries.push(NormalizedEntry {
                    index,
                    color: entry.color.clone(),
                    matcher,
                });
            }
            Err(e) => {
                warn!(entry = index, word = %entry.word, error = %e, "dropping entry");
            }
        }
    }

    out
}
