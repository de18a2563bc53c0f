//! Settings validation.
//!
//! Each check pushes a message into a shared list; the orchestrator folds
//! them into a single `ConfigError`.

mod helpers;


use crate::schema::MhConfig;
use mh_common::ConfigError;

use helpers::{validate_one_of, validate_range};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MhConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "badge.clear_after_ms",
        config.badge.clear_after_ms,
        500,
        60_000,
    );
    validate_range(&mut errors, "minimap.width", config.minimap.width, 4, 64);
    validate_range(
        &mut errors,
        "minimap.min_height",
        config.minimap.min_height,
        10,
        1000,
    );
    validate_one_of(&mut errors, "logging.level", &config.logging.level, LOG_LEVELS);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
