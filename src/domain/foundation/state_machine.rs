//! State machine trait for stage enums.
//!
//! Gives every stage enum the same validated-transition surface, so the
//! controller never assigns a stage without checking the transition table.

use super::ValidationError;

/// Trait for enums that represent a finite state machine.
///
/// Implementors list their edges once; `transition_to` then rejects any hop
/// that is not in the table.
///
/// ```ignore
/// let next = ConversationStage::AwaitingFile.transition_to(ConversationStage::PostUpload)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Whether `target` is a listed edge from `self`.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Every state reachable in one hop.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns `target` if the hop is listed, otherwise an error naming both ends.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::illegal_transition(self, target))
        }
    }
}
