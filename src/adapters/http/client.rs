//! Analytics client - reqwest implementation of the service ports.
//!
//! One client covers the whole backend API:
//!
//! - `POST /upload` (multipart `file`) for `UploadService`
//! - `POST /calculate-metric` for `MetricService`
//! - `GET /plot` and `GET /upload-metrics` for `PlotService`
//!
//! ```ignore
//! let config = AnalyticsClientConfig::new("http://localhost:8000")
//!     .with_timeout(Duration::from_secs(30));
//! let client = AnalyticsClient::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

use super::dto::{
    detail_message, CalculateMetricRequest, CalculateMetricResponse, OverviewResponse,
    UploadResponse,
};
use crate::domain::chat::MetricRequest;
use crate::domain::plot::{DatasetOverview, PlotFigure, PlotSelection};
use crate::ports::{
    DatasetFile, MetricOutcome, MetricService, MetricServiceError, PlotError, PlotService,
    UploadError, UploadService, UploadedDataset,
};

/// Configuration for the analytics client.
#[derive(Debug, Clone)]
pub struct AnalyticsClientConfig {
    /// Base URL of the backend, without trailing path.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl AnalyticsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the analytics backend.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    config: AnalyticsClientConfig,
    client: Client,
}

impl AnalyticsClient {
    /// Creates a client with the given configuration.
    pub fn new(config: AnalyticsClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn transport_message(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!(
                "Request timed out after {}s",
                self.config.timeout.as_secs()
            )
        } else if err.is_connect() {
            format!("Connection failed: {}", err)
        } else {
            err.to_string()
        }
    }

    /// Reads the `detail` text of an error response, if any.
    async fn error_detail(response: Response) -> Option<String> {
        let status = response.status();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Error response {} had no JSON body: {}", status, e);
                return None;
            }
        };
        detail_message(&body)
    }
}

#[async_trait]
impl UploadService for AnalyticsClient {
    async fn upload(&self, file: DatasetFile) -> Result<UploadedDataset, UploadError> {
        tracing::debug!(file = %file.name, bytes = file.contents.len(), "Uploading dataset");

        let part = Part::bytes(file.contents).file_name(file.name);
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(self.transport_message(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = Self::error_detail(response).await;
            tracing::warn!("Upload failed with {}: {:?}", status, detail);
            return Err(UploadError::rejected(
                detail.unwrap_or_else(|| "Upload failed".to_string()),
            ));
        }

        let body: UploadResponse = response.json().await.map_err(|e| {
            UploadError::InvalidResponse(format!("Failed to parse upload response: {}", e))
        })?;

        tracing::info!(columns = body.columns.len(), "Dataset uploaded");
        Ok(UploadedDataset::new(body.columns, body.first_five_rows))
    }
}

#[async_trait]
impl MetricService for AnalyticsClient {
    async fn evaluate(&self, request: &MetricRequest) -> Result<MetricOutcome, MetricServiceError> {
        let payload = CalculateMetricRequest {
            metric_name: request.metric_name(),
            column_name: request.column.as_deref(),
        };
        tracing::debug!(metric = payload.metric_name, column = ?payload.column_name, "Calculating metric");

        let response = self
            .client
            .post(self.url("calculate-metric"))
            .json(&payload)
            .send()
            .await
            .map_err(|e| MetricServiceError::Transport(self.transport_message(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = Self::error_detail(response).await;
            tracing::warn!("Metric request failed with {}: {:?}", status, detail);
            return Err(MetricServiceError::rejected(
                detail.unwrap_or_else(|| "Failed to calculate metric.".to_string()),
            ));
        }

        let body: CalculateMetricResponse = response.json().await.map_err(|e| {
            MetricServiceError::InvalidResponse(format!("Failed to parse metric response: {}", e))
        })?;

        match body {
            CalculateMetricResponse {
                message: Some(message),
                ..
            } if !message.is_empty() => Ok(MetricOutcome::Declined { message }),
            CalculateMetricResponse {
                result: Some(result),
                ..
            } => Ok(MetricOutcome::Computed(result)),
            _ => Err(MetricServiceError::InvalidResponse(
                "Response has neither result nor message".to_string(),
            )),
        }
    }
}

#[async_trait]
impl PlotService for AnalyticsClient {
    async fn plot(&self, selection: &PlotSelection) -> Result<PlotFigure, PlotError> {
        let mut query = vec![("type", selection.kind.as_str())];
        if let Some(x) = selection.x_column.as_deref() {
            query.push(("x_column", x));
        }
        if let Some(y) = selection.y_column.as_deref() {
            query.push(("y_column", y));
        }
        tracing::debug!(?selection, "Fetching plot");

        let response = self
            .client
            .get(self.url("plot"))
            .query(&query)
            .send()
            .await
            .map_err(|e| PlotError::Transport(self.transport_message(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = Self::error_detail(response).await;
            tracing::warn!("Plot request failed with {}: {:?}", status, detail);
            return Err(PlotError::rejected(
                detail.unwrap_or_else(|| "Failed to fetch plot".to_string()),
            ));
        }

        let figure: Value = response.json().await.map_err(|e| {
            PlotError::InvalidResponse(format!("Failed to parse plot response: {}", e))
        })?;
        Ok(PlotFigure(figure))
    }

    async fn overview(&self) -> Result<DatasetOverview, PlotError> {
        let response = self
            .client
            .get(self.url("upload-metrics"))
            .send()
            .await
            .map_err(|e| PlotError::Transport(self.transport_message(&e)))?;

        if !response.status().is_success() {
            tracing::warn!("Overview request failed with {}", response.status());
            return Err(PlotError::rejected("Failed to fetch metrics"));
        }

        let body: OverviewResponse = response.json().await.map_err(|e| {
            PlotError::InvalidResponse(format!("Failed to parse overview response: {}", e))
        })?;
        Ok(body.metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client =
            AnalyticsClient::new(AnalyticsClientConfig::new("http://localhost:8000/")).unwrap();
        assert_eq!(client.url("upload"), "http://localhost:8000/upload");
    }

    #[test]
    fn default_timeout_is_thirty_seconds() {
        let config = AnalyticsClientConfig::new("http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let config = AnalyticsClientConfig::new("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2));
        let client = AnalyticsClient::new(config).unwrap();
        let err = client
            .evaluate(&MetricRequest::all_columns(crate::domain::chat::Metric::Mean))
            .await
            .unwrap_err();
        assert!(matches!(err, MetricServiceError::Transport(_)));
    }
}
