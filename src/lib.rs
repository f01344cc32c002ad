//! Configuration model and loader for the database proxy and its
//! distributed transaction coordinator.

pub mod config;
pub mod observability;

pub use config::{load, ConfigError, Configuration};
