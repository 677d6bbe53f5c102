//! Domain layer - pure conversation and plot-selection types.
//!
//! Nothing in here performs I/O. Collaborator calls are described as
//! effects and carried out by the application layer.

pub mod chat;
pub mod foundation;
pub mod plot;
