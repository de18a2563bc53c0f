//! Document traversal policy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Skip SVG, MathML and other non-HTML subtrees entirely.
    pub skip_foreign_namespaces: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            skip_foreign_namespaces: true,
        }
    }
}
