use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Default test timeout handed to the external test runner.
pub const DEFAULT_TEST_TIMEOUT_MS: u64 = 100_000_000;

/// Settings for the external test runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRunnerConfig {
    /// Per-test timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for TestRunnerConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TEST_TIMEOUT_MS,
        }
    }
}

impl TestRunnerConfig {
    /// Validate test runner settings
    pub fn validate(&self) -> ConfigResult<()> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "Test timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
