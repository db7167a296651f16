//! Immutable configuration snapshots and reload support.
//!
//! A resolved configuration is never mutated in place. `ConfigManager`
//! hands out `Arc` snapshots; a reload resolves a complete fresh
//! instance and swaps it in only on success, so readers either see the
//! old configuration or the new one, never a half-updated mix.

use crate::error::{ConfigError, ConfigResult};
use crate::resolver::{EnvResolver, ResolutionMode};
use crate::ToolchainConfig;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

pub struct ConfigManager {
    current: RwLock<Arc<ToolchainConfig>>,
}

impl ConfigManager {
    pub fn new(initial: ToolchainConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// Snapshot of the current configuration. The returned `Arc` stays
    /// valid across later reloads.
    pub fn current(&self) -> Arc<ToolchainConfig> {
        // The guarded value is only ever a complete `Arc` swap, so a
        // poisoned lock still holds a consistent snapshot.
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Resolve a fresh configuration from the given environment mapping
    /// and swap it in. The previous snapshot is kept on failure.
    pub fn reload(
        &self,
        env: &HashMap<String, String>,
        mode: ResolutionMode,
    ) -> ConfigResult<Arc<ToolchainConfig>> {
        let fresh = Arc::new(EnvResolver::resolve(env, mode)?);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = fresh.clone();
        Ok(fresh)
    }
}

static GLOBAL: OnceLock<ConfigManager> = OnceLock::new();

/// Install the process-wide configuration. Explicit, once: a second call
/// fails with `AlreadyInitialized` instead of silently replacing state.
pub fn init_global(config: ToolchainConfig) -> ConfigResult<()> {
    GLOBAL
        .set(ConfigManager::new(config))
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// The process-wide configuration manager, if `init_global` has run.
pub fn global() -> Option<&'static ConfigManager> {
    GLOBAL.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CompilerConfig, ExplorerConfig, TestRunnerConfig};
    use crate::resolver::env::{PRIVATE_KEY_VAR, RPC_URL_VAR};
    use std::collections::BTreeMap;

    fn minimal_config() -> ToolchainConfig {
        ToolchainConfig {
            compiler: CompilerConfig::default(),
            networks: BTreeMap::new(),
            disabled: BTreeMap::new(),
            explorer: ExplorerConfig::default(),
            test_runner: TestRunnerConfig::default(),
        }
    }

    fn valid_env() -> HashMap<String, String> {
        HashMap::from([
            (RPC_URL_VAR.to_string(), "https://rpc.example/1".to_string()),
            (PRIVATE_KEY_VAR.to_string(), "a".repeat(64)),
        ])
    }

    #[test]
    fn reload_produces_a_fresh_instance() {
        let manager = ConfigManager::new(minimal_config());
        let before = manager.current();

        let reloaded = manager.reload(&valid_env(), ResolutionMode::FailFast).unwrap();

        // Old snapshot is untouched; the manager now serves the new one.
        assert!(before.networks.is_empty());
        assert_eq!(reloaded.networks.len(), 3);
        assert!(!Arc::ptr_eq(&before, &manager.current()));
        assert!(Arc::ptr_eq(&reloaded, &manager.current()));
    }

    #[test]
    fn failed_reload_keeps_previous_snapshot() {
        let manager = ConfigManager::new(minimal_config());
        let before = manager.current();

        let result = manager.reload(&HashMap::new(), ResolutionMode::FailFast);

        assert!(result.is_err());
        assert!(Arc::ptr_eq(&before, &manager.current()));
    }

    #[test]
    fn manager_survives_a_poisoned_lock() {
        let manager = Arc::new(ConfigManager::new(minimal_config()));

        let holder = Arc::clone(&manager);
        let _ = std::thread::spawn(move || {
            let _guard = holder.current.write().unwrap();
            panic!("panic while holding the write guard");
        })
        .join();

        // Readers still get the last complete snapshot, and a reload
        // swaps in a fresh one as usual.
        assert!(manager.current().networks.is_empty());
        let reloaded = manager.reload(&valid_env(), ResolutionMode::FailFast).unwrap();
        assert!(Arc::ptr_eq(&reloaded, &manager.current()));
    }

    #[test]
    fn global_init_is_explicit_and_once() {
        let _ = init_global(minimal_config());
        assert!(global().is_some());
        assert!(matches!(
            init_global(minimal_config()),
            Err(ConfigError::AlreadyInitialized)
        ));
    }
}
