//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML/JSON/TOML)
//!     → loader.rs (resolve, read & deserialize)
//!     → enums.rs / duration.rs / params.rs (field decoding)
//!     → validation.rs (storage selection invariant)
//!     → Configuration (immutable after startup)
//!     → shared via Arc to listeners and executors
//! ```
//!
//! # Design Decisions
//! - Loaded once at startup; there is no reload path
//! - Loader returns errors; the startup routine decides to exit
//! - Only `Storage::set_parameter` mutates, and only before sharing

pub mod duration;
pub mod enums;
pub mod error;
pub mod loader;
pub mod params;
pub mod schema;
pub mod storage;
pub mod validation;

pub use enums::{ExecuteMode, ProtocolType};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load, ConfigFormat};
pub use params::{ParamValue, Parameters};
pub use schema::Configuration;
pub use schema::{DataSource, DistributedTransaction, Executor, Filter, Listener, SocketAddress};
pub use storage::Storage;
