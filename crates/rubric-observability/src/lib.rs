//! # rubric-observability
//!
//! Tracing subscriber setup and span definitions shared by the engine crates.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter, LOG_ENV_VAR};
