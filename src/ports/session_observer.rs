//! Session Observer Port - lets the surrounding application follow the chat.

use crate::domain::chat::ConversationStage;

/// Notified by the conversation controller.
///
/// The reset notification lets the application clear state the controller
/// does not own, such as plot selections.
pub trait SessionObserver: Send + Sync {
    /// A dataset was uploaded with these columns.
    fn dataset_loaded(&self, _columns: &[String]) {}

    /// The session was reset by `exit` or a reset request; everything was cleared.
    fn session_reset(&self);

    /// The session moved from one stage to another, intermediate stages included.
    fn stage_changed(&self, _from: ConversationStage, _to: ConversationStage) {}
}

/// Observer notifications as values, for observers that forward them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSignal {
    DatasetLoaded(Vec<String>),
    Reset,
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn session_reset(&self) {}
}
