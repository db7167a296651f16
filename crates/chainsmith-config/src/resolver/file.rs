use crate::{ConfigError, ConfigResult, ToolchainConfig};
use std::path::Path;
use tokio::fs;

/// File-based configuration loader.
///
/// Saved files never contain signing keys; `NetworkConfig` skips the
/// field on serialization, so a written config can be committed or
/// shared and the credential re-resolved from the environment.
pub struct FileLoader;

impl FileLoader {
    /// Read, parse, and normalize a config file. Explorer coverage
    /// entries with no key are not representable on disk, so they are
    /// restored here before validation.
    async fn load_with<F>(path: &Path, parse: F) -> ConfigResult<ToolchainConfig>
    where
        F: FnOnce(&str) -> ConfigResult<ToolchainConfig>,
    {
        let content = fs::read_to_string(path).await?;

        let mut config = parse(&content)?;
        config.restore_explorer_coverage();

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub async fn load_toml<P: AsRef<Path>>(path: P) -> ConfigResult<ToolchainConfig> {
        Self::load_with(path.as_ref(), |content| Ok(toml::from_str(content)?)).await
    }

    /// Load configuration from a JSON file
    pub async fn load_json<P: AsRef<Path>>(path: P) -> ConfigResult<ToolchainConfig> {
        Self::load_with(path.as_ref(), |content| Ok(serde_json::from_str(content)?)).await
    }

    /// Auto-detect file format and load configuration
    pub async fn load_auto<P: AsRef<Path>>(path: P) -> ConfigResult<ToolchainConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::load_toml(path).await,
            Some("json") => Self::load_json(path).await,
            Some(ext) => Err(ConfigError::InvalidFormat(format!(
                "Unsupported file extension: {}",
                ext
            ))),
            None => {
                // Try TOML first, then JSON
                match Self::load_toml(path).await {
                    Ok(config) => Ok(config),
                    Err(_) => Self::load_json(path).await,
                }
            }
        }
    }

    /// Save configuration to a TOML file (key material is skipped)
    pub async fn save_toml<P: AsRef<Path>>(config: &ToolchainConfig, path: P) -> ConfigResult<()> {
        let content = toml::to_string_pretty(config)
            .map_err(|e| ConfigError::InvalidFormat(format!("TOML serialization failed: {}", e)))?;

        fs::write(path, content).await?;

        Ok(())
    }

    /// Save configuration to a JSON file (key material is skipped)
    pub async fn save_json<P: AsRef<Path>>(config: &ToolchainConfig, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(config)?;

        fs::write(path, content).await?;

        Ok(())
    }
}
