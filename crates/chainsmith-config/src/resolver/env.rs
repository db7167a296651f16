use std::collections::{BTreeMap, HashMap};

use crate::config::network::is_valid_rpc_url;
use crate::config::{
    CompilerConfig, ExplorerConfig, NetworkConfig, NetworkIssue, TestRunnerConfig, ToolchainConfig,
};
use crate::error::{ConfigError, ConfigResult};
use crate::networks::NetworkId;
use crate::resolver::ResolutionMode;
use crate::secret::SigningKey;
use tracing::{debug, warn};

/// Shared RPC endpoint variable, used by every network lacking an override.
pub const RPC_URL_VAR: &str = "RPC_URL";

/// Shared signing key variable. Sensitive: the value must never reach
/// logs, error messages, or serialized output.
pub const PRIVATE_KEY_VAR: &str = "PRIVATEKEY";

/// Shared explorer API key variable (optional).
pub const API_KEY_VAR: &str = "APIKEY";

/// Optional override of the test-runner timeout constant.
pub const TEST_TIMEOUT_VAR: &str = "TEST_TIMEOUT_MS";

/// Environment-mapping-based configuration resolver.
///
/// Takes the environment as an explicit mapping rather than reading
/// process globals, so resolution is a pure function and tests can inject
/// arbitrary environments.
pub struct EnvResolver;

impl EnvResolver {
    /// Resolve a full `ToolchainConfig` from an environment mapping.
    ///
    /// Fail-fast mode returns the first per-network error, checking the
    /// RPC endpoint before the signing key so the error order is
    /// deterministic. Partial mode records failing networks in
    /// `disabled` and still returns compiler, explorer, and test-runner
    /// settings for callers that only need those.
    pub fn resolve(
        env: &HashMap<String, String>,
        mode: ResolutionMode,
    ) -> ConfigResult<ToolchainConfig> {
        let compiler = CompilerConfig::default();

        let mut networks = BTreeMap::new();
        let mut disabled = BTreeMap::new();
        for id in NetworkId::ALL {
            match Self::resolve_network(id, env) {
                Ok(profile) => {
                    debug!(network = %id, chain_id = id.chain_id(), "resolved network profile");
                    networks.insert(id.as_str().to_string(), profile);
                }
                Err(issue) => match mode {
                    ResolutionMode::FailFast => return Err(issue.to_error()),
                    ResolutionMode::Partial => {
                        warn!(network = %id, "network disabled: {}", issue.to_error());
                        disabled.insert(id.as_str().to_string(), issue);
                    }
                },
            }
        }

        let explorer = Self::resolve_explorer(env);
        let test_runner = Self::resolve_test_runner(env)?;

        let config = ToolchainConfig {
            compiler,
            networks,
            disabled,
            explorer,
            test_runner,
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolve one network profile. Per-network variables
    /// (`{PREFIX}_RPC_URL`, `{PREFIX}_PRIVATEKEY`) take precedence over
    /// the shared ones, which remain the fallback so a single shared
    /// credential keeps working.
    fn resolve_network(
        id: NetworkId,
        env: &HashMap<String, String>,
    ) -> Result<NetworkConfig, NetworkIssue> {
        // Endpoint presence is checked before the signing key, URL shape
        // after it: the error order stays deterministic for an empty
        // environment without masking a bad key behind a bad URL.
        let (rpc_var, rpc_url) = Self::scoped_var(env, id, RPC_URL_VAR);
        let rpc_url = rpc_url.ok_or_else(|| NetworkIssue::MissingRpcUrl {
            var: rpc_var.clone(),
        })?;

        let (key_var, raw_key) = Self::scoped_var(env, id, PRIVATE_KEY_VAR);
        let raw_key = raw_key.ok_or_else(|| NetworkIssue::InvalidSigningKey {
            var: key_var.clone(),
        })?;
        let signing_key = SigningKey::from_env_value(&key_var, &raw_key)
            .map_err(|_| NetworkIssue::InvalidSigningKey { var: key_var })?;

        if !is_valid_rpc_url(&rpc_url) {
            return Err(NetworkIssue::MissingRpcUrl { var: rpc_var });
        }

        let mut profile = id.profile();
        profile.rpc_url = rpc_url;
        profile.signing_key = Some(signing_key);
        Ok(profile)
    }

    /// Explorer keys for the networks subject to verification. Absent
    /// keys resolve to an explicit `None`; this step never fails.
    fn resolve_explorer(env: &HashMap<String, String>) -> ExplorerConfig {
        let mut explorer = ExplorerConfig::default();
        for id in NetworkId::ALL.into_iter().filter(|n| n.requires_explorer_key()) {
            let (var, key) = Self::scoped_var(env, id, API_KEY_VAR);
            if key.is_none() {
                warn!(network = %id, "{var} not set; explorer verification will be unauthenticated");
            }
            explorer.api_keys.insert(id.as_str().to_string(), key);
        }
        explorer
    }

    fn resolve_test_runner(env: &HashMap<String, String>) -> ConfigResult<TestRunnerConfig> {
        let mut test_runner = TestRunnerConfig::default();
        if let Some(raw) = env.get(TEST_TIMEOUT_VAR) {
            test_runner.timeout_ms = raw.parse().map_err(|_| {
                ConfigError::InvalidFormat(format!("{TEST_TIMEOUT_VAR} is not a valid integer"))
            })?;
        }
        Ok(test_runner)
    }

    /// Look up `{PREFIX}_{name}` then the shared `{name}`, returning the
    /// variable name that was consulted together with its value. Empty
    /// values count as unset.
    fn scoped_var(
        env: &HashMap<String, String>,
        id: NetworkId,
        name: &str,
    ) -> (String, Option<String>) {
        let scoped = format!("{}_{}", id.env_prefix(), name);
        if let Some(value) = env.get(&scoped).filter(|v| !v.trim().is_empty()) {
            return (scoped, Some(value.clone()));
        }
        let value = env.get(name).filter(|v| !v.trim().is_empty()).cloned();
        (name.to_string(), value)
    }
}
