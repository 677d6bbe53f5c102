//! Chat behaviour configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_THINKING_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Pause before bot replies, in milliseconds
    #[serde(default = "default_thinking_delay")]
    pub thinking_delay_ms: u64,
}

impl ChatConfig {
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(ValidationError::ThinkingDelayTooLong);
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: default_thinking_delay(),
        }
    }
}

fn default_thinking_delay() -> u64 {
    500
}
