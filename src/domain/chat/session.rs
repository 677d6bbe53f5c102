//! Per-conversation session state.

use serde::{Deserialize, Serialize};

use super::stage::ConversationStage;
use crate::domain::foundation::{StateMachine, ValidationError};

/// Everything the controller remembers about one conversation, apart from
/// the message log.
///
/// # Invariants
///
/// - `available_columns` is non-empty only while `stage.holds_dataset()`
/// - `stage` only changes through `enter`, which validates the hop
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    user_name: String,
    available_columns: Vec<String>,
    stage: ConversationStage,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn available_columns(&self) -> &[String] {
        &self.available_columns
    }

    pub fn stage(&self) -> ConversationStage {
        self.stage
    }

    pub fn set_user_name(&mut self, name: impl Into<String>) {
        self.user_name = name.into();
    }

    pub fn store_columns(&mut self, columns: Vec<String>) {
        self.available_columns = columns;
    }

    /// Moves to `target` if the stage table allows it.
    pub fn enter(&mut self, target: ConversationStage) -> Result<(), ValidationError> {
        self.stage = self.stage.transition_to(target)?;
        if !self.stage.holds_dataset() {
            self.available_columns.clear();
        }
        Ok(())
    }

    /// Clears name and columns; the stage is left to `enter`.
    pub fn clear(&mut self) {
        self.user_name.clear();
        self.available_columns.clear();
    }

    /// Returns true if the column invariant holds.
    pub fn is_consistent(&self) -> bool {
        self.available_columns.is_empty() || self.stage.holds_dataset()
    }
}
