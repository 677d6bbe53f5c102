//! Metric phrases typed by the user and their canonical identifiers.
//!
//! A line such as `"STD of Age"` is read in two steps: a tokenizer recognises
//! the leading metric phrase (one of a closed set of surface forms), then a
//! separate parser reads the optional `of <column>` suffix.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical statistic identifiers understood by the metric service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Mean,
    Median,
    Mode,
    Std,
    Variance,
    Min,
    Max,
    Sum,
    Count,
    Skewness,
    Kurtosis,
    WordCount,
    CharCount,
    UniqueWords,
    AvgWordLength,
}

impl Metric {
    /// Canonical identifier sent to the metric service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Mode => "mode",
            Self::Std => "std",
            Self::Variance => "variance",
            Self::Min => "min",
            Self::Max => "max",
            Self::Sum => "sum",
            Self::Count => "count",
            Self::Skewness => "skewness",
            Self::Kurtosis => "kurtosis",
            Self::WordCount => "word_count",
            Self::CharCount => "char_count",
            Self::UniqueWords => "unique_words",
            Self::AvgWordLength => "avg_word_length",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every phrase a user may type for a metric, lower-case.
///
/// "average word length" is accepted on purpose, on top of the eighteen
/// leading forms the web client recognised; there it was only a synonym.
pub const SURFACE_FORMS: [(&str, Metric); 19] = [
    ("mean", Metric::Mean),
    ("median", Metric::Median),
    ("mode", Metric::Mode),
    ("std", Metric::Std),
    ("standard deviation", Metric::Std),
    ("variance", Metric::Variance),
    ("min", Metric::Min),
    ("max", Metric::Max),
    ("sum", Metric::Sum),
    ("count", Metric::Count),
    ("skewness", Metric::Skewness),
    ("kurtosis", Metric::Kurtosis),
    ("word count", Metric::WordCount),
    ("words", Metric::WordCount),
    ("char count", Metric::CharCount),
    ("characters", Metric::CharCount),
    ("unique words", Metric::UniqueWords),
    ("avg word length", Metric::AvgWordLength),
    ("average word length", Metric::AvgWordLength),
];

/// Display names listed to the user after an upload.
pub const METRIC_CATALOGUE: [(&str, Metric); 15] = [
    ("Mean", Metric::Mean),
    ("Median", Metric::Median),
    ("Mode", Metric::Mode),
    ("Std", Metric::Std),
    ("Variance", Metric::Variance),
    ("Min", Metric::Min),
    ("Max", Metric::Max),
    ("Sum", Metric::Sum),
    ("Count", Metric::Count),
    ("Skewness", Metric::Skewness),
    ("Kurtosis", Metric::Kurtosis),
    ("Word Count", Metric::WordCount),
    ("Char Count", Metric::CharCount),
    ("Unique Words", Metric::UniqueWords),
    ("Avg Word Length", Metric::AvgWordLength),
];

static FORMS_LONGEST_FIRST: Lazy<Vec<(&'static str, Metric)>> = Lazy::new(|| {
    let mut forms = SURFACE_FORMS.to_vec();
    forms.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    forms
});

/// Catalogue display names, in order.
pub fn catalogue_names() -> Vec<String> {
    METRIC_CATALOGUE.iter().map(|(name, _)| name.to_string()).collect()
}

/// Result of reading the leading metric phrase of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricPhrase<'a> {
    /// A known surface form, with the unread remainder of the line.
    Known { metric: Metric, rest: &'a str },
    /// The line does not start with any surface form.
    Unknown,
}

impl<'a> MetricPhrase<'a> {
    /// Reads the leading metric phrase, ignoring ASCII case.
    pub fn read(line: &'a str) -> Self {
        for (form, metric) in FORMS_LONGEST_FIRST.iter() {
            if let Some(rest) = strip_prefix_ignore_case(line, form) {
                return Self::Known {
                    metric: *metric,
                    rest,
                };
            }
        }
        Self::Unknown
    }
}

/// Parses what follows the metric phrase: nothing, or `of <column>`.
///
/// Whitespace before `of` is optional, at least one space must follow it, and
/// the column identifier is `[A-Za-z0-9_]+` running to the end of the line.
/// Returns `None` if the suffix does not fit that shape.
pub fn parse_column_suffix(rest: &str) -> Option<Option<String>> {
    let rest = rest.trim_start();
    if rest.is_empty() {
        return Some(None);
    }

    let after_of = strip_prefix_ignore_case(rest, "of")?;
    let column = after_of.trim_start();
    if column.len() == after_of.len() || column.is_empty() {
        return None;
    }
    if !column.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some(Some(column.to_string()))
}

/// A structured metric request derived from one line of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRequest {
    pub metric: Metric,
    pub column: Option<String>,
}

impl MetricRequest {
    /// Creates a request for every applicable column.
    pub fn all_columns(metric: Metric) -> Self {
        Self {
            metric,
            column: None,
        }
    }

    /// Creates a request for one column.
    pub fn for_column(metric: Metric, column: impl Into<String>) -> Self {
        Self {
            metric,
            column: Some(column.into()),
        }
    }

    /// Canonical metric identifier.
    pub fn metric_name(&self) -> &'static str {
        self.metric.as_str()
    }

    /// Parses `<metric> [of <column>]`, falling back to an exact catalogue name.
    pub fn parse(line: &str) -> Result<Self, MetricLineError> {
        let line = line.trim();

        if let MetricPhrase::Known { metric, rest } = MetricPhrase::read(line) {
            if let Some(column) = parse_column_suffix(rest) {
                return Ok(Self { metric, column });
            }
        }

        let lower = line.to_lowercase();
        METRIC_CATALOGUE
            .iter()
            .find(|(name, _)| name.to_lowercase() == lower)
            .map(|(_, metric)| Self::all_columns(*metric))
            .ok_or(MetricLineError::Unrecognized)
    }
}

/// Reasons a metric line is rejected before any service call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricLineError {
    #[error("no known metric in the request")]
    Unrecognized,

    #[error("column '{0}' is not in the dataset")]
    UnknownColumn(String),
}

/// Parses a metric line and checks the column against the uploaded dataset.
///
/// Column membership is an exact, case-sensitive match.
pub fn interpret_metric_line(
    line: &str,
    available_columns: &[String],
) -> Result<MetricRequest, MetricLineError> {
    let request = MetricRequest::parse(line)?;
    if let Some(column) = &request.column {
        if !available_columns.iter().any(|c| c == column) {
            return Err(MetricLineError::UnknownColumn(column.clone()));
        }
    }
    Ok(request)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}
