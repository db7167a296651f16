use crate::config::NetworkConfig;

/// Ethereum Sepolia testnet profile template
pub fn sepolia_profile() -> NetworkConfig {
    NetworkConfig {
        name: "sepolia".to_string(),
        rpc_url: String::new(),
        chain_id: 11_155_111,
        signing_key: None,
    }
}
