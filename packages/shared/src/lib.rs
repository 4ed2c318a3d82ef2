//! Shared utilities for Parkways.

pub mod logger;

pub use logger::setup_logger;
