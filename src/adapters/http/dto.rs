//! Wire types of the analytics REST API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::chat::Row;
use crate::domain::plot::DatasetOverview;

/// Body of a successful `POST /upload`.
///
/// `summary` and `metrics` are also sent; the panel fetches the overview
/// itself from `/upload-metrics`.
#[derive(Debug, Deserialize)]
pub(super) struct UploadResponse {
    pub columns: Vec<String>,
    #[serde(default)]
    pub first_five_rows: Vec<Row>,
}

/// Body of `POST /calculate-metric`.
#[derive(Debug, Serialize)]
pub(super) struct CalculateMetricRequest<'a> {
    pub metric_name: &'a str,
    pub column_name: Option<&'a str>,
}

/// Body of a successful `POST /calculate-metric`.
///
/// Either `message` (the service declined) or `result` is present.
#[derive(Debug, Deserialize)]
pub(super) struct CalculateMetricResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<Map<String, Value>>,
}

/// Body of a successful `GET /upload-metrics`.
#[derive(Debug, Deserialize)]
pub(super) struct OverviewResponse {
    pub metrics: DatasetOverview,
}

/// Extracts the human-readable error from a `{"detail": ...}` body.
///
/// `detail` is either a string or an object with an `error` string.
pub(super) fn detail_message(body: &Value) -> Option<String> {
    let detail = body.get("detail")?;
    match detail {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(obj) => obj
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| Some(detail.to_string())),
        Value::Null | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_string() {
        assert_eq!(
            detail_message(&json!({"detail": "No dataset uploaded yet."})),
            Some("No dataset uploaded yet.".to_string())
        );
    }

    #[test]
    fn detail_error_object() {
        assert_eq!(
            detail_message(&json!({"detail": {"error": "X-column 'Q' not found in dataset."}})),
            Some("X-column 'Q' not found in dataset.".to_string())
        );
    }

    #[test]
    fn missing_detail() {
        assert_eq!(detail_message(&json!({"oops": 1})), None);
        assert_eq!(detail_message(&json!({"detail": ""})), None);
    }

    #[test]
    fn metric_request_sends_null_column() {
        let body = serde_json::to_value(CalculateMetricRequest {
            metric_name: "mean",
            column_name: None,
        })
        .unwrap();
        assert_eq!(body, json!({"metric_name": "mean", "column_name": null}));
    }

    #[test]
    fn upload_response_tolerates_missing_extras() {
        let body: UploadResponse = serde_json::from_value(json!({"columns": ["A"]})).unwrap();
        assert_eq!(body.columns, vec!["A".to_string()]);
        assert!(body.first_five_rows.is_empty());
    }
}
