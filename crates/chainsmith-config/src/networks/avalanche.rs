use crate::config::NetworkConfig;

/// Avalanche C-Chain mainnet profile template
pub fn avalanche_profile() -> NetworkConfig {
    NetworkConfig {
        name: "avalanche".to_string(),
        rpc_url: String::new(),
        chain_id: 43114,
        signing_key: None,
    }
}
