//! Plot kind and axis selection.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Plot types the analytics service can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    #[default]
    Histogram,
    Correlation,
    Boxplot,
    Scatter,
}

impl PlotKind {
    pub const ALL: [PlotKind; 4] = [
        Self::Histogram,
        Self::Correlation,
        Self::Boxplot,
        Self::Scatter,
    ];

    /// Value of the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Histogram => "histogram",
            Self::Correlation => "correlation",
            Self::Boxplot => "boxplot",
            Self::Scatter => "scatter",
        }
    }

    /// Correlation plots span the whole dataset and need no axis.
    pub fn needs_columns(&self) -> bool {
        !matches!(self, Self::Correlation)
    }

    /// Only scatter plots use a Y axis.
    pub fn uses_y_axis(&self) -> bool {
        matches!(self, Self::Scatter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown plot type '{0}'")]
pub struct UnknownPlotKind(pub String);

impl std::str::FromStr for PlotKind {
    type Err = UnknownPlotKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| UnknownPlotKind(s.to_string()))
    }
}

impl std::fmt::Display for PlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the panel asks the plot service for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotSelection {
    pub kind: PlotKind,
    pub x_column: Option<String>,
    pub y_column: Option<String>,
}

impl PlotSelection {
    /// Default axes for a freshly loaded dataset: first column on X, second on Y.
    pub fn for_columns(kind: PlotKind, columns: &[String]) -> Self {
        Self {
            kind,
            x_column: columns.first().cloned(),
            y_column: columns.get(1).cloned(),
        }
    }
}

/// A Plotly figure as returned by the service; rendered elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlotFigure(pub Value);

impl PlotFigure {
    /// Number of traces in the figure's `data` array.
    pub fn trace_count(&self) -> usize {
        self.0
            .get("data")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Title from `layout.title.text` or `layout.title`.
    pub fn title(&self) -> Option<&str> {
        let title = self.0.get("layout")?.get("title")?;
        title
            .get("text")
            .and_then(Value::as_str)
            .or_else(|| title.as_str())
    }
}
