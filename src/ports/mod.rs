//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! conversation and the outside world. Adapters implement these ports.
//!
//! - `UploadService` - accepts a dataset file, returns its columns and preview
//! - `MetricService` - evaluates one metric over one or all columns
//! - `PlotService` - draws plots and reports the dataset overview
//! - `SessionObserver` - notified when a dataset loads or the session resets

mod metric_service;
mod plot_service;
mod session_observer;
mod upload_service;

pub use metric_service::{MetricOutcome, MetricService, MetricServiceError};
pub use plot_service::{PlotError, PlotService};
pub use session_observer::{NoopObserver, SessionObserver, SessionSignal};
pub use upload_service::{DatasetFile, UploadError, UploadService, UploadedDataset};
