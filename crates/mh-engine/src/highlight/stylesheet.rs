//! The engine's adopted stylesheet: one paint rule per highlight layer.

use tracing::warn;

use super::highlight_name;
use super::sanitize::validate_color;
use crate::range::EntryMatches;

/// Build the stylesheet text for a scan.
///
/// Every entry gets a `::highlight()` rule, matched or not. Entries with a
/// rejected color get no rule; their matches are still registered.
pub fn generate_css(entries: &[EntryMatches]) -> String {
    entries
        .iter()
        .filter_map(|entry| match validate_color(&entry.color) {
            Ok(()) => Some(format!(
                "::highlight({}) {{background-color: {};}}",
                highlight_name(entry.index),
                entry.color.trim()
            )),
            Err(e) => {
                warn!(entry = entry.index, error = %e, "color rejected, no paint rule");
                None
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
