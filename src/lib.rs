//! Data Chat - conversational data-analysis assistant
//!
//! A guided chat that asks for the user's name, takes a CSV upload, and then
//! answers free-text metric requests ("mean of Age") by calling an analytics
//! backend. A results panel alongside the chat draws plots of the dataset.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
