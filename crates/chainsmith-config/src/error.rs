use thiserror::Error;

/// Errors produced while resolving or validating toolchain configuration.
///
/// Messages reference environment variable names only. Signing-key
/// material must never appear in an error message.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("{var} is missing, empty, or not a valid http(s) URL")]
    MissingRpcUrl { var: String },

    #[error("{var} is missing or malformed (expected 64 hex characters)")]
    InvalidSigningKey { var: String },

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Global configuration already initialized")]
    AlreadyInitialized,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
