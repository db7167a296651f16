//! Configuration resolution pipeline

pub mod env;
pub mod file;
pub mod validation;

// Re-export the resolvers that other code expects
pub use env::EnvResolver;
pub use file::FileLoader;
pub use validation::ConfigValidator;

use crate::{ConfigResult, ToolchainConfig};
use std::collections::HashMap;
use std::path::Path;

/// How resolution reacts to a network whose endpoint or credential is
/// absent or malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolutionMode {
    /// Abort on the first failing network.
    #[default]
    FailFast,
    /// Record failing networks as disabled and keep the rest of the
    /// configuration usable (compile-only callers, explorer, timeout).
    Partial,
}

/// Main configuration resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigResolver {
    mode: ResolutionMode,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: ResolutionMode) -> Self {
        Self { mode }
    }

    /// Resolve from an explicit environment mapping.
    pub fn resolve(&self, env: &HashMap<String, String>) -> ConfigResult<ToolchainConfig> {
        EnvResolver::resolve(env, self.mode)
    }

    /// Convenience wrapper that snapshots the process environment and
    /// delegates to the pure resolver.
    pub fn resolve_from_process_env(&self) -> ConfigResult<ToolchainConfig> {
        let env: HashMap<String, String> = std::env::vars().collect();
        self.resolve(&env)
    }

    /// Load a configuration file (TOML or JSON), validating on load.
    pub async fn load_from_file<P: AsRef<Path>>(&self, path: P) -> ConfigResult<ToolchainConfig> {
        FileLoader::load_auto(path).await
    }
}
