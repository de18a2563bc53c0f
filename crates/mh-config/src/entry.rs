//! The persisted search entry record.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Color given to a freshly added entry.
pub const DEFAULT_ENTRY_COLOR: &str = "#dd0000";

/// One user-defined highlight rule, exactly as persisted.
///
/// When `re` is true, `word` holds a `/pattern/` or `/pattern/i` literal and
/// the `match_case` / `whole_word` flags are ignored. Unknown fields in the
/// stored record are ignored; missing or `null` flags read as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default, deserialize_with = "null_as_false")]
    pub re: bool,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default, deserialize_with = "null_as_false")]
    pub match_case: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub whole_word: bool,
}

fn default_color() -> String {
    DEFAULT_ENTRY_COLOR.into()
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

static REGEX_LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/.+/i?$").unwrap());

/// Returns `true` if `word` has the `/pattern/` or `/pattern/i` shape.
pub fn is_regex_literal(word: &str) -> bool {
    REGEX_LITERAL_RE.is_match(word)
}

impl SearchEntry {
    /// A literal entry with the given options.
    pub fn literal(word: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            re: false,
            color: color.into(),
            match_case: false,
            whole_word: false,
        }
    }

    /// A regex entry; `word` must be in `/pattern/[i]` form.
    pub fn regex(word: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            re: true,
            color: color.into(),
            match_case: false,
            whole_word: false,
        }
    }

    /// Build an entry from what a user typed, classifying regex literals
    /// by shape. Flags are dropped for regex entries.
    pub fn from_typed(word: &str, color: &str, match_case: bool, whole_word: bool) -> Self {
        let re = is_regex_literal(word);
        Self {
            word: word.to_string(),
            re,
            color: color.to_string(),
            match_case: !re && match_case,
            whole_word: !re && whole_word,
        }
    }

    pub fn with_match_case(mut self, match_case: bool) -> Self {
        self.match_case = match_case;
        self
    }

    pub fn with_whole_word(mut self, whole_word: bool) -> Self {
        self.whole_word = whole_word;
        self
    }

    /// Entries whose word is blank after trimming never take part in a scan.
    pub fn is_blank(&self) -> bool {
        self.word.trim().is_empty()
    }
}

impl Default for SearchEntry {
    fn default() -> Self {
        Self::literal("", DEFAULT_ENTRY_COLOR)
    }
}
