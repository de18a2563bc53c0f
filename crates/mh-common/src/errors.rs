use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("entry store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("entry store decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("highlight registration failed for '{name}': {reason}")]
    Registration { name: String, reason: String },

    #[error("stylesheet error: {0}")]
    Stylesheet(String),

    #[error("overlay error: {0}")]
    Overlay(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MhError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("page error: {0}")]
    Page(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("badge.clear_after_ms = 1".into());
        assert_eq!(
            err.to_string(),
            "config validation error: badge.clear_after_ms = 1"
        );
    }

    #[test]
    fn store_error_display() {
        let err = StoreError::Unavailable("locked".into());
        assert_eq!(err.to_string(), "entry store unavailable: locked");

        let err = StoreError::InvalidFormat("expected an array".into());
        assert_eq!(err.to_string(), "invalid format: expected an array");
    }

    #[test]
    fn store_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[test]
    fn render_error_display() {
        let err = RenderError::Registration {
            name: "mh-item-0".into(),
            reason: "registry sealed".into(),
        };
        assert_eq!(
            err.to_string(),
            "highlight registration failed for 'mh-item-0': registry sealed"
        );
    }

    #[test]
    fn mh_error_from_store() {
        let err: MhError = StoreError::Unavailable("gone".into()).into();
        assert!(matches!(err, MhError::Store(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn mh_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: MhError = io_err.into();
        assert!(matches!(err, MhError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn mh_error_other_variants() {
        let err = MhError::Page("no root element".into());
        assert_eq!(err.to_string(), "page error: no root element");

        let err = MhError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
