//! Plot selection domain module.
//!
//! The results panel next to the chat: which plot is requested, on which
//! axes, and the dataset overview numbers.

mod overview;
mod selection;

pub use overview::DatasetOverview;
pub use selection::{PlotFigure, PlotKind, PlotSelection, UnknownPlotKind};
