use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Sentinel some explorer toolchains require in place of a real key.
///
/// Internally an absent key is an explicit `None`; the sentinel exists
/// only at the external-tool handoff boundary.
pub const UNKNOWN_API_KEY: &str = "UNKNOWN";

/// Block-explorer verification credentials, keyed by network name.
///
/// Only networks whose contracts get verified carry an entry. A present
/// entry with a `None` key means verification was requested but no
/// credential was supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Network name → optional API key. Entries without a key are
    /// omitted from serialized output (TOML has no null) and re-created
    /// at resolution time.
    #[serde(default, serialize_with = "present_keys")]
    pub api_keys: BTreeMap<String, Option<String>>,
}

fn present_keys<S>(map: &BTreeMap<String, Option<String>>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.collect_map(map.iter().filter_map(|(k, v)| v.as_ref().map(|v| (k, v))))
}

impl ExplorerConfig {
    /// Look up the key for a network, if one was supplied.
    pub fn key_for(&self, network: &str) -> Option<&str> {
        self.api_keys.get(network).and_then(|k| k.as_deref())
    }

    /// Key for a network, falling back to the sentinel external verifier
    /// tooling expects when no credential is configured.
    pub fn key_or_unknown(&self, network: &str) -> &str {
        self.key_for(network).unwrap_or(UNKNOWN_API_KEY)
    }

    /// Whether the given network is subject to explorer verification.
    pub fn covers(&self, network: &str) -> bool {
        self.api_keys.contains_key(network)
    }
}
