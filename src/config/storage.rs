//! Transaction-log storage selection.
//!
//! `storage` is a one-of-many map keyed by driver name (e.g. `fs`, `s3`)
//! holding that driver's parameters. At most one driver may be present;
//! an empty map means no storage is configured.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::params::{ParamValue, Parameters};

static NO_PARAMETERS: Parameters = Parameters::new();

/// Storage driver selector for the transaction coordinator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Storage(BTreeMap<String, Parameters>);

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector with a single driver.
    pub fn with_driver(name: impl Into<String>, parameters: Parameters) -> Self {
        let mut drivers = BTreeMap::new();
        drivers.insert(name.into(), parameters);
        Self(drivers)
    }

    /// Returns the configured driver name, or `""` when none is configured.
    ///
    /// Fails with `AmbiguousStorageDriver` if more than one driver is present.
    pub fn driver_type(&self) -> ConfigResult<&str> {
        let mut drivers = self.0.keys();
        match (drivers.next(), drivers.next()) {
            (None, _) => Ok(""),
            (Some(name), None) => Ok(name),
            _ => Err(ConfigError::AmbiguousStorageDriver {
                drivers: self.0.keys().cloned().collect(),
            }),
        }
    }

    /// Returns the active driver's parameters. Empty when no driver is configured.
    pub fn parameters(&self) -> ConfigResult<&Parameters> {
        let driver = self.driver_type()?;
        Ok(self.0.get(driver).unwrap_or(&NO_PARAMETERS))
    }

    /// Insert or overwrite a parameter of the active driver.
    ///
    /// Only valid when exactly one driver is configured. Intended for
    /// startup code injecting late-bound defaults before the configuration
    /// is shared.
    pub fn set_parameter(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> ConfigResult<()> {
        let driver = self.driver_type()?.to_string();
        let params = self.0.get_mut(&driver).ok_or(ConfigError::NoStorageDriver)?;
        params.insert(key.into(), value.into());
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of driver entries, including ambiguous ones.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
