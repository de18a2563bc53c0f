pub mod errors;

pub use errors::{ConfigError, MhError, RenderError, StoreError};

pub type Result<T> = std::result::Result<T, MhError>;
