use crate::networks::NetworkId;
use crate::{ConfigError, ConfigResult, ToolchainConfig};
use std::fmt::Write as _;
use std::str::FromStr;

/// Configuration validation utilities
pub struct ConfigValidator;

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, config: &ToolchainConfig) -> ConfigResult<()> {
        config.validate()
    }

    /// Perform comprehensive validation of a configuration
    pub fn validate_comprehensive(config: &ToolchainConfig) -> ConfigResult<()> {
        // Basic validation first
        config.validate()?;

        Self::validate_known_networks(config)?;
        Self::validate_expected_chain_ids(config)?;
        Self::validate_explorer_coverage(config)?;

        Ok(())
    }

    /// Every network name in the map must belong to the static set.
    /// Mostly relevant for file-loaded configurations, where the map is
    /// author-controlled rather than built from `NetworkId::ALL`.
    fn validate_known_networks(config: &ToolchainConfig) -> ConfigResult<()> {
        for name in config.networks.keys().chain(config.disabled.keys()) {
            NetworkId::from_str(name)?;
        }
        Ok(())
    }

    /// A profile claiming a known network name must carry that network's
    /// chain id, or downstream tooling would sign for the wrong chain.
    fn validate_expected_chain_ids(config: &ToolchainConfig) -> ConfigResult<()> {
        for (name, profile) in &config.networks {
            if let Ok(id) = NetworkId::from_str(name) {
                if profile.chain_id != id.chain_id() {
                    return Err(ConfigError::ValidationFailed(format!(
                        "Network '{}' has chain id {} but {} is expected",
                        name,
                        profile.chain_id,
                        id.chain_id()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Networks subject to explorer verification need an entry in the
    /// key map (the key itself may be absent).
    fn validate_explorer_coverage(config: &ToolchainConfig) -> ConfigResult<()> {
        for name in config.networks.keys() {
            if let Ok(id) = NetworkId::from_str(name) {
                if id.requires_explorer_key() && !config.explorer.covers(name) {
                    return Err(ConfigError::ValidationFailed(format!(
                        "Network '{}' requires explorer verification but has no key entry",
                        name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validate that a configuration actually targets the given network.
    pub fn validate_for_network(config: &ToolchainConfig, name: &str) -> ConfigResult<()> {
        let id = NetworkId::from_str(name)?;
        let profile = config.network(name)?;
        if profile.chain_id != id.chain_id() {
            return Err(ConfigError::ValidationFailed(format!(
                "Expected chain id {} for network '{}' but found {}",
                id.chain_id(),
                name,
                profile.chain_id
            )));
        }
        Ok(())
    }

    /// Generate a configuration report.
    ///
    /// Safe to print: signing keys are reported as configured or not,
    /// never by value, and explorer keys only by presence.
    pub fn generate_report(config: &ToolchainConfig) -> String {
        let mut report = String::new();

        let _ = writeln!(report, "Chainsmith Toolchain Configuration Report");
        let _ = writeln!(report, "=========================================\n");

        let _ = writeln!(report, "Compiler:");
        let _ = writeln!(report, "  Version: {}", config.compiler.version);
        let _ = writeln!(
            report,
            "  Optimizer: {} ({} runs)",
            if config.compiler.optimizer.enabled {
                "enabled"
            } else {
                "disabled"
            },
            config.compiler.optimizer.runs
        );
        let _ = writeln!(
            report,
            "  Literal metadata content: {}\n",
            config.compiler.metadata.use_literal_content
        );

        let _ = writeln!(report, "Networks:");
        for (name, profile) in &config.networks {
            let _ = writeln!(report, "  {}:", name);
            let _ = writeln!(report, "    RPC URL: {}", profile.rpc_url);
            let _ = writeln!(report, "    Chain ID: {}", profile.chain_id);
            let _ = writeln!(
                report,
                "    Signer: {}",
                if profile.can_sign() {
                    "configured"
                } else {
                    "not configured"
                }
            );
        }
        for (name, issue) in &config.disabled {
            let _ = writeln!(report, "  {}: disabled ({})", name, issue.to_error());
        }
        let _ = writeln!(report);

        let _ = writeln!(report, "Explorer verification:");
        for (name, key) in &config.explorer.api_keys {
            let _ = writeln!(
                report,
                "  {}: {}",
                name,
                if key.is_some() {
                    "API key set"
                } else {
                    "no API key (UNKNOWN)"
                }
            );
        }
        let _ = writeln!(report);

        let _ = writeln!(
            report,
            "Test runner timeout: {}ms",
            config.test_runner.timeout_ms
        );

        report
    }
}
