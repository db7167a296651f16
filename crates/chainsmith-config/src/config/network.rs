use crate::error::{ConfigError, ConfigResult};
use crate::secret::SigningKey;
use serde::{Deserialize, Serialize};
use url::Url;

/// A deployment target: RPC endpoint, chain identifier, and the signing
/// credential used to authorize transactions against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network name identifier
    pub name: String,

    /// RPC endpoint URL
    pub rpc_url: String,

    /// Numeric chain identifier
    pub chain_id: u64,

    /// Transaction signing key. Never serialized; a saved configuration
    /// carries no key material.
    #[serde(default, skip_serializing)]
    pub signing_key: Option<SigningKey>,
}

impl NetworkConfig {
    /// Whether this profile can authorize transactions, or is limited to
    /// read-only operations like compilation and calls.
    pub fn can_sign(&self) -> bool {
        self.signing_key.is_some()
    }

    /// Validate network configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Network name cannot be empty".to_string(),
            ));
        }

        if self.chain_id == 0 {
            return Err(ConfigError::ValidationFailed(format!(
                "Network '{}' chain id cannot be 0",
                self.name
            )));
        }

        if !is_valid_rpc_url(&self.rpc_url) {
            return Err(ConfigError::ValidationFailed(format!(
                "Network '{}' RPC URL is missing or not a valid http(s) URL",
                self.name
            )));
        }

        Ok(())
    }
}

/// Check that an RPC endpoint is a well-formed http(s) URL.
pub fn is_valid_rpc_url(raw: &str) -> bool {
    if raw.trim().is_empty() {
        return false;
    }
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Why a declared network could not be resolved.
///
/// Recorded per network in partial-resolution mode so read-only callers
/// keep a usable configuration while deployment against the failing
/// network stays blocked. Carries environment variable names only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkIssue {
    /// The RPC endpoint variable was absent, empty, or malformed.
    MissingRpcUrl { var: String },
    /// The signing key variable was absent or not 64 hex characters.
    InvalidSigningKey { var: String },
}

impl NetworkIssue {
    /// Replay the recorded issue as a `ConfigError`.
    pub fn to_error(&self) -> ConfigError {
        match self {
            NetworkIssue::MissingRpcUrl { var } => {
                ConfigError::MissingRpcUrl { var: var.clone() }
            }
            NetworkIssue::InvalidSigningKey { var } => {
                ConfigError::InvalidSigningKey { var: var.clone() }
            }
        }
    }
}
