//! Plot Service Port - plots and dataset overview for the results panel.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::plot::{DatasetOverview, PlotFigure, PlotSelection};

#[async_trait]
pub trait PlotService: Send + Sync {
    /// Draws the selected plot for the current dataset.
    async fn plot(&self, selection: &PlotSelection) -> Result<PlotFigure, PlotError>;

    /// Fetches shape and quality counters of the current dataset.
    async fn overview(&self) -> Result<DatasetOverview, PlotError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    #[error("Plot rejected: {message}")]
    Rejected { message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid plot response: {0}")]
    InvalidResponse(String),
}

impl PlotError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Text shown in the panel.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { message } => message,
            Self::Transport(message) | Self::InvalidResponse(message) => message,
        }
    }
}
