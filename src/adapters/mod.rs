//! Adapters - implementations of the ports and the terminal front-end.

pub mod http;
pub mod mock;
pub mod signals;
pub mod terminal;
