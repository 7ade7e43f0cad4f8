//! DBCode API - Typed Contract for the DBCode Extension
//!
//! This crate is the data contract between third-party consumers and the
//! DBCode database-management host. It defines the shapes exchanged over the
//! host boundary and the capability interface the host exposes; it contains
//! no connection storage and no database I/O of its own.
//!
//! # Core Principles
//! - Declarative shapes only (validation and storage stay in the host)
//! - Closed identifier sets (drivers are an enum, not free strings)
//! - Explicit wire format (camelCase, omitted optionals, no nulls)
//! - One result envelope for every operation, faults included
//!
//! # Architecture
//! Consumers acquire the host through a [`host::HostRegistry`], which
//! activates the host once on first use and caches its exports. The exports
//! carry the [`DbCodeApi`] capability trait; all connection management goes
//! through its three operations.
//!
//! # Module Organization
//! - [`error`] - Error types and stable error codes
//! - [`driver`] - Closed set of supported driver identifiers
//! - [`connection`] - Connection configuration shapes
//! - [`result`] - Operation result envelope
//! - [`api`] - The `DbCodeApi` capability trait and no-op placeholder
//! - [`host`] - Host registry, activation, and exports

pub mod error;      // Error handling infrastructure
pub mod driver;     // Supported driver identifiers
pub mod connection; // Connection configuration shapes
pub mod result;     // Operation result envelope
pub mod api;        // Capability interface
pub mod host;       // Host acquisition and registry

// Re-export commonly used types for convenience
pub use error::{ApiError, Result};
pub use driver::Driver;
pub use connection::{
    ConnectionConfig, ConnectionRole, ConnectionType, DriverOption, SavePasswordOption,
};
pub use result::ConnectionOperationResult;
pub use api::{DbCodeApi, NoopApi};
pub use host::{HostActivator, HostExports, HostRegistry, DBCODE_HOST_ID};
