//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through `tracing`
//! - JSON output for machine parsing, pretty output for terminals

pub mod logging;
