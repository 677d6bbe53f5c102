//! Mock Plot Service.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::plot::{DatasetOverview, PlotFigure, PlotSelection};
use crate::ports::{PlotError, PlotService};

/// Plot service with queued figures and a fixed overview.
#[derive(Debug, Clone, Default)]
pub struct MockPlotService {
    figures: Arc<Mutex<VecDeque<Result<PlotFigure, PlotError>>>>,
    overview: Option<DatasetOverview>,
    requests: Arc<Mutex<Vec<PlotSelection>>>,
}

impl MockPlotService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_figure(self, figure: PlotFigure) -> Self {
        self.figures.lock().unwrap().push_back(Ok(figure));
        self
    }

    pub fn with_error(self, error: PlotError) -> Self {
        self.figures.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn with_overview(mut self, overview: DatasetOverview) -> Self {
        self.overview = Some(overview);
        self
    }

    /// Every selection the panel asked to draw.
    pub fn requests(&self) -> Vec<PlotSelection> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlotService for MockPlotService {
    async fn plot(&self, selection: &PlotSelection) -> Result<PlotFigure, PlotError> {
        self.requests.lock().unwrap().push(selection.clone());
        self.figures
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(PlotFigure(serde_json::json!({"data": [], "layout": {}}))))
    }

    async fn overview(&self) -> Result<DatasetOverview, PlotError> {
        self.overview
            .ok_or_else(|| PlotError::rejected("Failed to fetch metrics"))
    }
}
