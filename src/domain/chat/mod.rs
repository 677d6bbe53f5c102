//! Conversation domain module.
//!
//! The guided dialogue: stages, messages, metric phrases and the pure
//! transition function that ties them together.

mod message;
mod metric;
pub mod replies;
mod session;
mod stage;
mod transition;
mod upload;

pub use message::{ChatMessage, MessageBody, MessageLog, Row};
pub use metric::{
    catalogue_names, interpret_metric_line, parse_column_suffix, Metric, MetricLineError,
    MetricPhrase, MetricRequest, METRIC_CATALOGUE, SURFACE_FORMS,
};
pub use session::SessionState;
pub use stage::{BotMood, ConversationStage};
pub use transition::{
    is_exit_command, metric_line_effects, transition, ChatEvent, Effect, Transition,
};
pub use upload::UploadMethod;
