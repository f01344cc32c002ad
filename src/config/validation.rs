//! Configuration validation.
//!
//! # Responsibilities
//! - Enforce the storage selection invariant (at most one driver)
//!
//! # Design Decisions
//! - Runs after serde has accepted the structure
//! - No other cross-field checks: name references are resolved by the
//!   bootstrap, not here

use crate::config::error::ConfigResult;
use crate::config::schema::Configuration;

/// Check semantic invariants of a parsed configuration.
pub fn validate_config(config: &Configuration) -> ConfigResult<()> {
    if let Some(dt) = &config.distributed_transaction {
        let driver = dt.storage.driver_type()?;
        tracing::debug!(storage_driver = driver, "Storage selection validated");
    }
    Ok(())
}
