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
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("path error: {0}")]
    PathError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TesseraError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("script error: {0}")]
    Script(String),

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

        let err = ConfigError::ValidationError("split.min_ratio out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: split.min_ratio out of range"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::ClipboardError("access denied".into());
        assert_eq!(err.to_string(), "clipboard error: access denied");

        let err = PlatformError::NotSupported("primary selection".into());
        assert_eq!(err.to_string(), "not supported: primary selection");
    }

    #[test]
    fn tessera_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: TesseraError = config_err.into();
        assert!(matches!(err, TesseraError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn tessera_error_from_platform() {
        let platform_err = PlatformError::ClipboardError("no display".into());
        let err: TesseraError = platform_err.into();
        assert!(matches!(err, TesseraError::Platform(_)));
        assert!(err.to_string().contains("no display"));
    }

    #[test]
    fn tessera_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TesseraError = io_err.into();
        assert!(matches!(err, TesseraError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn tessera_error_other_variants() {
        let err = TesseraError::Script("line 3: unknown step".into());
        assert_eq!(err.to_string(), "script error: line 3: unknown step");

        let err = TesseraError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
