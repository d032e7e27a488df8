//! Error types for configuration loading and host resolution.

/// Errors that can occur when loading a `javelin.toml` manifest or resolving
/// the host platform.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the manifest file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing from the manifest.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// The architecture name is not one Javelin knows how to build for.
    #[error("unrecognized architecture '{0}'")]
    UnknownArch(String),

    /// The operating system name is not one Javelin knows how to build for.
    #[error("unrecognized operating system '{0}'")]
    UnknownOs(String),
}
