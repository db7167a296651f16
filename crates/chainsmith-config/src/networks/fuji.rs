use crate::config::NetworkConfig;

/// Avalanche Fuji testnet profile template
pub fn fuji_profile() -> NetworkConfig {
    NetworkConfig {
        name: "fuji".to_string(),
        rpc_url: String::new(),
        chain_id: 43113,
        signing_key: None,
    }
}
