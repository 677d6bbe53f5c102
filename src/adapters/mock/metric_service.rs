//! Mock Metric Service.
//!
//! ```ignore
//! let service = MockMetricService::new().with_result(json!({"Age": 34.5}));
//! let outcome = service.evaluate(&request).await?;
//! assert_eq!(service.call_count(), 1);
//! ```

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::chat::MetricRequest;
use crate::ports::{MetricOutcome, MetricService, MetricServiceError};

/// A configured mock answer.
#[derive(Debug, Clone)]
pub enum MockMetricResponse {
    Outcome(MetricOutcome),
    Error(MetricServiceError),
}

/// Metric service answering from a queue.
#[derive(Debug, Clone, Default)]
pub struct MockMetricService {
    responses: Arc<Mutex<VecDeque<MockMetricResponse>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<MetricRequest>>>,
}

impl MockMetricService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a computed result. Non-object values become an empty result.
    pub fn with_result(self, result: Value) -> Self {
        let map = match result {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        self.push(MockMetricResponse::Outcome(MetricOutcome::Computed(map)))
    }

    /// Queues a soft failure message.
    pub fn with_declined(self, message: impl Into<String>) -> Self {
        self.push(MockMetricResponse::Outcome(MetricOutcome::Declined {
            message: message.into(),
        }))
    }

    /// Queues a hard failure.
    pub fn with_error(self, error: MetricServiceError) -> Self {
        self.push(MockMetricResponse::Error(error))
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<MetricRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn push(self, response: MockMetricResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    fn next_response(&self) -> MockMetricResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockMetricResponse::Outcome(MetricOutcome::Computed(Map::new())))
    }
}

#[async_trait]
impl MetricService for MockMetricService {
    async fn evaluate(&self, request: &MetricRequest) -> Result<MetricOutcome, MetricServiceError> {
        self.calls.lock().unwrap().push(request.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockMetricResponse::Outcome(outcome) => Ok(outcome),
            MockMetricResponse::Error(err) => Err(err),
        }
    }
}
