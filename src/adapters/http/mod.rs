//! HTTP adapter for the analytics backend.

mod client;
mod dto;

pub use client::{AnalyticsClient, AnalyticsClientConfig};
