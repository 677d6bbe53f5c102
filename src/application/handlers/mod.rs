//! Application handlers.

mod conversation_controller;
mod results_panel;

pub use conversation_controller::{
    metric_replies, ConversationController, ConversationError, DEFAULT_THINKING_DELAY,
};
pub use results_panel::{
    PanelError, PanelState, ResultsPanel, NO_COLUMNS_ERROR, UNKNOWN_PLOT_ERROR,
};
