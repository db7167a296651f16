//! Static registry of supported deployment networks

pub mod avalanche;
pub mod fuji;
pub mod sepolia;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkId {
    Avalanche,
    Sepolia,
    Fuji,
}

impl NetworkId {
    /// Every network the toolchain can target.
    pub const ALL: [NetworkId; 3] = [NetworkId::Avalanche, NetworkId::Sepolia, NetworkId::Fuji];

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkId::Avalanche => "avalanche",
            NetworkId::Sepolia => "sepolia",
            NetworkId::Fuji => "fuji",
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            NetworkId::Avalanche => 43114,
            NetworkId::Sepolia => 11_155_111,
            NetworkId::Fuji => 43113,
        }
    }

    /// Whether contracts deployed to this network go through explorer
    /// verification (and therefore need an API key entry).
    pub fn requires_explorer_key(&self) -> bool {
        matches!(self, NetworkId::Avalanche | NetworkId::Fuji)
    }

    /// Prefix for per-network environment overrides, e.g.
    /// `AVALANCHE_RPC_URL` beats the shared `RPC_URL`.
    pub fn env_prefix(&self) -> &'static str {
        match self {
            NetworkId::Avalanche => "AVALANCHE",
            NetworkId::Sepolia => "SEPOLIA",
            NetworkId::Fuji => "FUJI",
        }
    }

    /// Template profile for this network (endpoint and credential are
    /// filled in by the resolver).
    pub fn profile(&self) -> crate::config::NetworkConfig {
        match self {
            NetworkId::Avalanche => avalanche::avalanche_profile(),
            NetworkId::Sepolia => sepolia::sepolia_profile(),
            NetworkId::Fuji => fuji::fuji_profile(),
        }
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NetworkId {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "avalanche" => Ok(NetworkId::Avalanche),
            "sepolia" => Ok(NetworkId::Sepolia),
            "fuji" => Ok(NetworkId::Fuji),
            _ => Err(crate::error::ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

// Re-export network profile templates
pub use avalanche::avalanche_profile;
pub use fuji::fuji_profile;
pub use sepolia::sepolia_profile;
