//! Application layer - drives the domain through the ports.

mod busy;
pub mod handlers;

pub use busy::{BusyGuard, BusyIndicator};
