//! Configuration structures and types
pub mod compiler;
pub mod explorer;
pub mod network;
pub mod test_runner;
pub mod toolchain;

// Re-export main config types
pub use compiler::{CompilerConfig, MetadataSettings, OptimizerSettings};
pub use explorer::{ExplorerConfig, UNKNOWN_API_KEY};
pub use network::{NetworkConfig, NetworkIssue};
pub use test_runner::TestRunnerConfig;
pub use toolchain::ToolchainConfig;
