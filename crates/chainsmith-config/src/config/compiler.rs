use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Solidity compiler version pinned by the toolchain.
pub const SOLC_VERSION: &str = "0.8.13";

/// Default optimizer run count.
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 200;

/// Compiler settings handed to the external compiler toolchain.
///
/// These are fixed project constants; the environment never affects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Compiler version string, e.g. "0.8.13"
    pub version: String,

    /// Optimizer settings
    pub optimizer: OptimizerSettings,

    /// Metadata emission settings
    pub metadata: MetadataSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerSettings {
    /// Enable the optimizer
    pub enabled: bool,

    /// Number of optimizer runs
    pub runs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSettings {
    /// Embed full source content in the metadata rather than just hashes
    pub use_literal_content: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            version: SOLC_VERSION.to_string(),
            optimizer: OptimizerSettings {
                enabled: true,
                runs: DEFAULT_OPTIMIZER_RUNS,
            },
            metadata: MetadataSettings {
                use_literal_content: true,
            },
        }
    }
}

impl CompilerConfig {
    /// Validate compiler settings
    pub fn validate(&self) -> ConfigResult<()> {
        if self.version.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Compiler version cannot be empty".to_string(),
            ));
        }

        // Expect a dotted numeric version like "0.8.13"
        let parts: Vec<&str> = self.version.split('.').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.parse::<u32>().is_err()) {
            return Err(ConfigError::ValidationFailed(format!(
                "Compiler version '{}' is not a dotted numeric version",
                self.version
            )));
        }

        if self.optimizer.enabled && self.optimizer.runs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Optimizer runs must be greater than 0 when the optimizer is enabled".to_string(),
            ));
        }

        Ok(())
    }
}
