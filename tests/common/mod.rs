//! Shared utilities for configuration loading tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Write `contents` to a temp file whose name ends with `suffix`.
pub fn write_config(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("proxy-config-")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// A complete instance: one mysql listener, one executor, two filters,
/// one data source and a coordinator backed by the filesystem driver.
#[allow(dead_code)]
pub const FULL_YAML: &str = r#"
listeners:
  - protocol_type: mysql
    socket_address:
      address: 0.0.0.0
      port: 3306
    config:
      users:
        dksl: "123456"
      server_version: "8.0.27"
    executor: exec1
    filters:
      - metricFilter

executors:
  - name: exec1
    mode: sdb
    config:
      data_source_ref: employees
    filters:
      - conversionFilter
      - auditFilter

filters:
  - name: metricFilter
  - name: conversionFilter
    conf:
      enabled: true
  - name: auditFilter
    conf:
      level: 2

data_source_cluster:
  - name: employees
    capacity: 10
    max_capacity: 20
    idle_timeout: 60s
    dsn: root:123456@tcp(dbpack-mysql1:3306)/employees

distributed_transaction:
  port: 8092
  addressing: 127.0.0.1:8092
  retry_dead_threshold: 130000
  max_commit_retry_timeout: 120000
  max_rollback_retry_timeout: 120000
  rollback_retry_timeout_unlock_enable: true
  async_committing_retry_period: 10s
  committing_retry_period: 1s
  rolling_back_retry_period: 1s
  timeout_retry_period: 1s
  enforcement_policy:
    min_time: 5m
    permit_without_stream: true
  server_parameters:
    max_connection_idle: 15s
    max_connection_age: 30s
    max_connection_age_grace: 5s
    time: 5s
    timeout: 20s
  client_parameters:
    time: 10s
    timeout: 20s
    permit_without_stream: true
  storage:
    fs:
      path: /data
"#;
