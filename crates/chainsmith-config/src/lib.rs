//! Chainsmith Toolchain Configuration Management
//!
//! This crate provides configuration resolution, validation, and reload
//! support for the Chainsmith contract toolchain: compiler settings,
//! per-network deployment profiles, block-explorer credentials, and the
//! test-runner timeout. The compiler, chain clients, and test runner are
//! external collaborators; they receive a validated `ToolchainConfig` and
//! nothing else.

pub mod config;
pub mod error;
pub mod networks;
pub mod reload;
pub mod resolver;
pub mod secret;

// Re-exports for convenience
pub use config::*;
pub use reload::{global, init_global, ConfigManager};
pub use resolver::{ConfigResolver, ConfigValidator, EnvResolver, FileLoader, ResolutionMode};
pub use secret::SigningKey;

// Re-export main types
pub use error::{ConfigError, ConfigResult};

// Re-export the static network registry
pub use networks::{avalanche_profile, fuji_profile, sepolia_profile, NetworkId};
