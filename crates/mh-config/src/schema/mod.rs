//! Application settings schema.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod badge;
mod logging;
mod minimap;
mod store;
mod walker;

pub use badge::*;
pub use logging::*;
pub use minimap::*;
pub use store::*;
pub use walker::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root settings for the `mh` shell and the scan engine it drives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MhConfig {
    pub store: StoreConfig,
    pub walker: WalkerConfig,
    pub badge: BadgeConfig,
    pub minimap: MinimapConfig,
    pub logging: LoggingConfig,
}
