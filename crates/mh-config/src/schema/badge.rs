//! Match-count badge behavior.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    /// How long the count stays visible, in milliseconds (valid range: 500-60000).
    pub clear_after_ms: u32,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            clear_after_ms: 5000,
        }
    }
}
