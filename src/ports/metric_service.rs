//! Metric Service Port - evaluates a statistic on the uploaded dataset.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::chat::MetricRequest;

/// Port for metric evaluation.
#[async_trait]
pub trait MetricService: Send + Sync {
    /// Evaluates `request.metric` on `request.column`, or on every applicable
    /// column when no column is given.
    async fn evaluate(&self, request: &MetricRequest) -> Result<MetricOutcome, MetricServiceError>;
}

/// A successful answer from the metric service.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricOutcome {
    /// Column name to scalar or structured value, in service order.
    Computed(Map<String, Value>),
    /// The service declined, e.g. the metric does not apply to the column type.
    Declined { message: String },
}

/// Hard failures of a metric call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricServiceError {
    /// The service answered with an error and a description.
    #[error("Metric rejected: {message}")]
    Rejected { message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid metric response: {0}")]
    InvalidResponse(String),
}

impl MetricServiceError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Text supplied by the service, if it sent any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => Some(message),
            Self::Transport(_) | Self::InvalidResponse(_) => None,
        }
    }
}
