//! Multi-highlight configuration.
//!
//! Two independent layers live here:
//!
//! - the persisted **entry store**: named lists of [`SearchEntry`] rules kept
//!   in a JSON key-value file, read fresh at the start of every scan;
//! - the **application settings** ([`MhConfig`]) loaded from TOML, with
//!   serde defaults for every section so partial files work.

pub mod entry;
pub mod schema;
pub mod store;
pub mod toml_loader;
pub mod transfer;
pub mod validation;

pub use entry::{SearchEntry, DEFAULT_ENTRY_COLOR};
pub use schema::{MhConfig, CONFIG_SCHEMA_VERSION};
pub use store::{ActiveList, EntryStore, JsonFileStore, MemoryStore};
pub use transfer::{export_entries, import_entries};

use mh_common::ConfigError;

/// Load settings from the platform default path and validate them.
pub fn load_config() -> Result<MhConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
