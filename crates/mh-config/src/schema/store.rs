//! Entry store location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the JSON entry store. `None` means `<config dir>/mh/store.json`.
    pub path: Option<PathBuf>,
}
