//! In-memory adapters for tests and offline demos.
//!
//! Each mock answers from a queue of configured responses and records the
//! calls it received.

mod metric_service;
mod observer;
mod plot_service;
mod upload_service;

pub use metric_service::{MockMetricResponse, MockMetricService};
pub use observer::RecordingObserver;
pub use plot_service::MockPlotService;
pub use upload_service::MockUploadService;
