//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for a proxy
//! instance: listeners, executors, filters, data sources and the
//! distributed transaction coordinator. All types derive Serde traits for
//! deserialization from config files; wire names are snake_case.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::duration;
use crate::config::enums::{ExecuteMode, ProtocolType};
use crate::config::params::Parameters;
use crate::config::storage::Storage;

/// Root configuration for a proxy instance.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Configuration {
    /// Network endpoints to bind.
    pub listeners: Vec<Listener>,

    /// Request-processing units referenced by listeners.
    pub executors: Vec<Executor>,

    /// Pluggable filters referenced by name from listeners and executors.
    pub filters: Vec<Filter>,

    /// Backend connection descriptors.
    #[serde(rename = "data_source_cluster")]
    pub data_sources: Vec<DataSource>,

    /// Coordinator settings. `None` disables the coordinator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributed_transaction: Option<DistributedTransaction>,
}

impl Configuration {
    /// First executor with the given name.
    pub fn executor(&self, name: &str) -> Option<&Executor> {
        self.executors.iter().find(|e| e.name == name)
    }

    /// First filter with the given name.
    pub fn filter(&self, name: &str) -> Option<&Filter> {
        self.filters.iter().find(|f| f.name == name)
    }

    /// First data source with the given name.
    pub fn data_source(&self, name: &str) -> Option<&DataSource> {
        self.data_sources.iter().find(|d| d.name == name)
    }
}

/// A network endpoint with a protocol front-end binding.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Listener {
    /// Protocol front-end to instantiate. Must be given explicitly.
    pub protocol_type: ProtocolType,

    #[serde(default)]
    pub socket_address: SocketAddress,

    /// Filter names, in order.
    #[serde(default)]
    pub filters: Vec<String>,

    /// Parameters interpreted by the protocol front-end.
    #[serde(default)]
    pub config: Parameters,

    /// Name of the executor handling this listener's requests.
    #[serde(default)]
    pub executor: String,
}

/// Bind address and port.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SocketAddress {
    pub address: String,
    pub port: u16,
}

impl Default for SocketAddress {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 8881,
        }
    }
}

/// Named request-processing unit.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Executor {
    #[serde(default)]
    pub name: String,

    pub mode: ExecuteMode,

    #[serde(default)]
    pub config: Parameters,

    #[serde(default)]
    pub filters: Vec<String>,
}

/// Named pluggable processing step.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Filter {
    #[serde(default)]
    pub name: String,

    /// `None` when the filter needs no configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conf: Option<Parameters>,
}

/// Backend connection descriptor, passed through to the data-access layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DataSource {
    #[serde(default)]
    pub name: String,

    /// Every other field of the entry.
    #[serde(flatten)]
    pub properties: Parameters,
}

/// Distributed transaction coordinator tuning.
///
/// Retry periods drive background loops owned by the coordinator; they are
/// only carried here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DistributedTransaction {
    pub port: u16,

    /// Service-discovery locator.
    pub addressing: String,

    pub retry_dead_threshold: i64,
    pub max_commit_retry_timeout: i64,
    pub max_rollback_retry_timeout: i64,

    /// Release the lock of a rollback that exceeded its retry deadline.
    pub rollback_retry_timeout_unlock_enable: bool,

    #[serde(with = "duration")]
    pub async_committing_retry_period: Duration,
    #[serde(with = "duration")]
    pub committing_retry_period: Duration,
    #[serde(with = "duration")]
    pub rolling_back_retry_period: Duration,
    #[serde(with = "duration")]
    pub timeout_retry_period: Duration,

    pub enforcement_policy: EnforcementPolicy,
    pub server_parameters: ServerParameters,
    pub client_parameters: ClientParameters,

    /// Transaction-log backend, at most one driver.
    pub storage: Storage,
}

/// Keepalive enforcement applied to coordinator clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnforcementPolicy {
    /// Minimum interval a client should wait between pings.
    #[serde(with = "duration")]
    pub min_time: Duration,

    /// Allow pings when there are no active streams.
    pub permit_without_stream: bool,
}

/// Server-side connection lifecycle settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerParameters {
    #[serde(with = "duration")]
    pub max_connection_idle: Duration,
    #[serde(with = "duration")]
    pub max_connection_age: Duration,
    #[serde(with = "duration")]
    pub max_connection_age_grace: Duration,
    #[serde(with = "duration")]
    pub time: Duration,
    #[serde(with = "duration")]
    pub timeout: Duration,
}

/// Client-side keepalive settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientParameters {
    #[serde(with = "duration")]
    pub time: Duration,
    #[serde(with = "duration")]
    pub timeout: Duration,
    pub permit_without_stream: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_address_defaults() {
        let addr: SocketAddress = serde_yaml::from_str("{}").unwrap();
        assert_eq!(addr.address, "0.0.0.0");
        assert_eq!(addr.port, 8881);

        let listener: Listener = serde_yaml::from_str("protocol_type: http").unwrap();
        assert_eq!(listener.socket_address, SocketAddress::default());
        assert!(listener.filters.is_empty());
        assert!(listener.executor.is_empty());
    }

    #[test]
    fn test_partial_socket_address() {
        let addr: SocketAddress = serde_yaml::from_str("port: 13306").unwrap();
        assert_eq!(addr.address, "0.0.0.0");
        assert_eq!(addr.port, 13306);
    }

    #[test]
    fn test_protocol_type_is_mandatory() {
        let err = serde_yaml::from_str::<Listener>("executor: exec1").unwrap_err();
        assert!(err.to_string().contains("protocol_type"));
    }

    #[test]
    fn test_empty_configuration() {
        let config: Configuration = serde_yaml::from_str("{}").unwrap();
        assert!(config.listeners.is_empty());
        assert!(config.data_sources.is_empty());
        assert!(config.distributed_transaction.is_none());
    }

    #[test]
    fn test_filter_without_conf() {
        let filter: Filter = serde_yaml::from_str("name: metricFilter").unwrap();
        assert_eq!(filter.name, "metricFilter");
        assert!(filter.conf.is_none());
    }

    #[test]
    fn test_data_source_passthrough() {
        let yaml = r#"
name: employees
capacity: 10
dsn: root:123456@tcp(dbpack-mysql1:3306)/employees
"#;
        let ds: DataSource = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(ds.name, "employees");
        assert_eq!(ds.properties["capacity"].as_i64(), Some(10));
        assert!(!ds.properties.contains_key("name"));
    }

    #[test]
    fn test_distributed_transaction_defaults() {
        let dt: DistributedTransaction = serde_yaml::from_str("port: 8092").unwrap();
        assert_eq!(dt.port, 8092);
        assert_eq!(dt.committing_retry_period, Duration::ZERO);
        assert!(!dt.enforcement_policy.permit_without_stream);
        assert!(dt.storage.is_empty());
    }

    #[test]
    fn test_lookups() {
        let yaml = r#"
executors:
  - name: exec1
    mode: sdb
filters:
  - name: metricFilter
"#;
        let config: Configuration = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.executor("exec1").map(|e| e.mode), Some(ExecuteMode::Sdb));
        assert!(config.executor("exec2").is_none());
        assert!(config.filter("metricFilter").is_some());
        assert!(config.data_source("employees").is_none());
    }
}
