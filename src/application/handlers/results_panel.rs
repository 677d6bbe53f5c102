//! Results panel handler - plot selection and dataset overview.

use std::sync::Arc;
use thiserror::Error;

use crate::application::BusyIndicator;
use crate::domain::plot::{DatasetOverview, PlotFigure, PlotKind, PlotSelection};
use crate::ports::{PlotService, SessionSignal};

pub const NO_COLUMNS_ERROR: &str = "No columns found in the uploaded dataset to generate plots.";
pub const UNKNOWN_PLOT_ERROR: &str = "An unknown error occurred while fetching the plot.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("Column '{0}' is not in the loaded dataset")]
    UnknownColumn(String),

    #[error("No dataset loaded")]
    NoDataset,
}

/// What the panel currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    pub loaded: bool,
    pub columns: Vec<String>,
    pub selection: PlotSelection,
    pub figure: Option<PlotFigure>,
    pub error: Option<String>,
    pub overview: Option<DatasetOverview>,
}

pub struct ResultsPanel {
    service: Arc<dyn PlotService>,
    busy: BusyIndicator,
    state: PanelState,
}

impl ResultsPanel {
    pub fn new(service: Arc<dyn PlotService>) -> Self {
        Self {
            service,
            busy: BusyIndicator::new(),
            state: PanelState::default(),
        }
    }

    pub fn with_busy_indicator(mut self, busy: BusyIndicator) -> Self {
        self.busy = busy;
        self
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Applies a notification from the conversation.
    pub async fn apply(&mut self, signal: SessionSignal) {
        match signal {
            SessionSignal::DatasetLoaded(columns) => self.dataset_loaded(columns).await,
            SessionSignal::Reset => self.reset(),
        }
    }

    /// Shows a freshly uploaded dataset with default axes.
    pub async fn dataset_loaded(&mut self, columns: Vec<String>) {
        self.state = PanelState {
            loaded: true,
            selection: PlotSelection::for_columns(self.state.selection.kind, &columns),
            columns,
            ..PanelState::default()
        };

        self.state.overview = {
            let _busy = self.busy.begin();
            match self.service.overview().await {
                Ok(overview) => Some(overview),
                Err(err) => {
                    tracing::warn!("Dataset overview unavailable: {}", err);
                    None
                }
            }
        };

        if self.state.columns.is_empty() {
            self.state.figure = None;
            self.state.overview = None;
            self.state.error = Some(NO_COLUMNS_ERROR.to_string());
            return;
        }
        self.refresh().await;
    }

    pub async fn select_plot(&mut self, kind: PlotKind) -> Result<(), PanelError> {
        self.require_dataset()?;
        self.state.selection.kind = kind;
        self.refresh().await;
        Ok(())
    }

    pub async fn select_x(&mut self, column: &str) -> Result<(), PanelError> {
        let column = self.known_column(column)?;
        self.state.selection.x_column = Some(column);
        self.refresh().await;
        Ok(())
    }

    pub async fn select_y(&mut self, column: &str) -> Result<(), PanelError> {
        let column = self.known_column(column)?;
        self.state.selection.y_column = Some(column);
        self.refresh().await;
        Ok(())
    }

    /// Back to defaults: histogram, no axes, nothing shown.
    pub fn reset(&mut self) {
        tracing::debug!("Results panel reset");
        self.state = PanelState::default();
    }

    /// Fetches the figure for the current selection.
    pub async fn refresh(&mut self) {
        let selection = &self.state.selection;
        if !self.state.loaded || (self.state.columns.is_empty() && selection.kind.needs_columns())
        {
            return;
        }

        let result = {
            let _busy = self.busy.begin();
            self.service.plot(selection).await
        };

        match result {
            Ok(figure) => {
                tracing::debug!(kind = %selection.kind, traces = figure.trace_count(), "Plot fetched");
                self.state.figure = Some(figure);
                self.state.error = None;
            }
            Err(err) => {
                tracing::warn!(kind = %selection.kind, "Plot failed: {}", err);
                let message = err.user_message();
                self.state.figure = None;
                self.state.error = Some(if message.is_empty() {
                    UNKNOWN_PLOT_ERROR.to_string()
                } else {
                    message.to_string()
                });
            }
        }
    }

    fn require_dataset(&self) -> Result<(), PanelError> {
        if self.state.loaded {
            Ok(())
        } else {
            Err(PanelError::NoDataset)
        }
    }

    fn known_column(&self, column: &str) -> Result<String, PanelError> {
        self.require_dataset()?;
        self.state
            .columns
            .iter()
            .find(|c| c.as_str() == column)
            .cloned()
            .ok_or_else(|| PanelError::UnknownColumn(column.to_string()))
    }
}
