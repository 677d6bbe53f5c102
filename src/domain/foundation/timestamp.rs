//! Message timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// UTC instant a message entered the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wall-clock time as `HH:MM`, for chat transcripts.
    pub fn clock(&self) -> String {
        self.0.format("%H:%M").to_string()
    }
}
