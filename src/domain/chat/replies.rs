//! Bot reply texts.

use serde_json::Value;

use super::metric::Metric;
use super::upload::UploadMethod;

pub const GREETING: &str = "Hello! What's your name?";

pub const RESET_CONFIRMATION: &str =
    "You stopped the process. All data has been cleared. Hello! What's your name?";

pub const EXIT_HINT: &str = "You can stop the process by writing 'exit' at any time.";

pub const NOT_UNDERSTOOD: &str = "I'm not sure how to respond to that. Please upload a dataset or ask for a metric from the options provided.";

pub const ANALYSIS_COMPLETE: &str =
    "Analysis complete! Here are the first 5 rows of your dataset:";

pub const CHOOSE_AXES: &str =
    "Please choose your X and Y axes on the right side and select a plot type.";

pub const OFFER_METRICS: &str = "Would you like to evaluate some metrics? You can ask by typing the metric name, e.g., \"mean\" or \"std of column_name\". Here are some common ones:";

pub const INVALID_METRIC: &str =
    "Please specify a valid metric or use the format 'metric_name of column_name'.";

pub const PLEASE_WAIT: &str = "Sure! Give me a second...";

pub const UNEXPECTED_METRIC_ERROR: &str =
    "An unexpected error occurred while calculating the metric.";

pub fn welcome(name: &str) -> String {
    format!(
        "Nice to meet you, {}! How would you like to upload your dataset?",
        name
    )
}

pub fn upload_method_chosen(method: UploadMethod) -> String {
    format!(
        "You chose: {}. Please upload your {} file.",
        method.label(),
        method.format_name()
    )
}

pub fn file_received(file_name: &str) -> String {
    format!("Received file: {}. Analyzing...", file_name)
}

pub fn upload_failed(error_message: &str) -> String {
    format!(
        "Oops! Something went wrong uploading the file: {}",
        error_message
    )
}

pub fn column_not_found(column: &str) -> String {
    format!(
        "Column '{}' not found in your dataset. Please choose an existing column.",
        column
    )
}

/// One line per result entry, e.g. `The mean of your data is: Age: 34.5`.
pub fn metric_value(metric: Metric, column: &str, value: &Value) -> String {
    format!(
        "The {} of your data is: {}: {}",
        metric.as_str(),
        column,
        format_value(value)
    )
}

/// Objects are pretty-printed, arrays joined by commas, scalars shown bare.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        Value::Array(items) => items
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metric_value_renders_number() {
        assert_eq!(
            metric_value(Metric::Mean, "Age", &json!(34.5)),
            "The mean of your data is: Age: 34.5"
        );
    }

    #[test]
    fn strings_are_not_quoted() {
        assert_eq!(format_value(&json!("n/a")), "n/a");
    }

    #[test]
    fn objects_are_pretty_printed() {
        let rendered = format_value(&json!({"a": 1}));
        assert_eq!(rendered, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn arrays_are_comma_joined() {
        assert_eq!(format_value(&json!([1, 2, "x"])), "1,2,x");
    }

    #[test]
    fn null_renders_as_null() {
        assert_eq!(format_value(&Value::Null), "null");
    }

    #[test]
    fn upload_prompt_names_format() {
        assert_eq!(
            upload_method_chosen(UploadMethod::Csv),
            "You chose: Upload CSV. Please upload your CSV file."
        );
    }
}
