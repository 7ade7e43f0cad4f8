//! Connection Configuration Types
//!
//! This module defines the declarative shape of a connection exchanged with
//! the DBCode host. A [`ConnectionConfig`] describes a connection the host
//! should create, update, or reference; it carries no behavior of its own.
//!
//! # Wire Shape
//! All fields use camelCase wire names. Optional fields are omitted from
//! output when unset, and the open maps (`driverOptions`, `filters`) are
//! omitted when empty. Unknown fields are ignored on input so configs
//! written by a newer host still parse.
//!
//! # Declared, Not Enforced
//! The types declare structure only. `connectionId` uniqueness, host/socket
//! exclusivity, SSL material, and driver options are all validated by the
//! host when a config is applied, never by this crate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::driver::Driver;

/// How the host reaches the database server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    /// Network endpoint; `host` and `port` apply
    Host,
    /// Local socket or file path; `socket` applies
    Socket,
}

impl ConnectionType {
    /// Get the wire identifier as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Socket => "socket",
        }
    }
}

/// Credential persistence policy for the connection's password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum SavePasswordOption {
    /// Never persist; the host prompts per session
    No,
    /// Persist in plain settings
    Yes,
    /// Keep in memory for the current session only
    Session,
    /// Persist encrypted with the host's key
    Encrypted,
    /// Persist in the editor's secret storage
    SecretStorage,
    /// Not applicable (driver has no password concept)
    #[serde(rename = "na")]
    NotApplicable,
    /// Resolve by running a user-supplied command
    Cmd,
}

impl SavePasswordOption {
    /// Get the wire identifier as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::No => "no",
            Self::Yes => "yes",
            Self::Session => "session",
            Self::Encrypted => "encrypted",
            Self::SecretStorage => "secretStorage",
            Self::NotApplicable => "na",
            Self::Cmd => "cmd",
        }
    }
}

/// Environment classification of a connection
///
/// The host uses the role for visual cues (e.g. a red badge on production)
/// and safety prompts; it has no protocol-level effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ConnectionRole {
    /// Production system
    Production,
    /// Testing system
    Testing,
    /// Development system
    Development,
    /// No role assigned; serializes as the empty string
    #[serde(rename = "")]
    Unassigned,
}

impl ConnectionRole {
    /// Get the wire identifier as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Testing => "testing",
            Self::Development => "development",
            Self::Unassigned => "",
        }
    }
}

/// Value of a driver-specific option
///
/// Driver options are an open, driver-defined map; only the value types are
/// constrained. Untagged on the wire: `"require"`, `10`, and `true` are all
/// valid values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum DriverOption {
    /// Boolean flag
    Bool(bool),
    /// Numeric value; integers survive round-trips as integers
    Number(serde_json::Number),
    /// Free-form string
    String(String),
}

impl From<bool> for DriverOption {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for DriverOption {
    fn from(value: i64) -> Self {
        Self::Number(serde_json::Number::from(value))
    }
}

impl From<&str> for DriverOption {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for DriverOption {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// One connection the host should create, update, or reference
///
/// `connection_id` is the sole identity: applying a config whose id already
/// exists in the host's store updates that entry in place, any other id
/// creates a new one. Everything beyond the four required fields is
/// optional and omitted from the wire when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    /// Globally unique identifier within the host's connection store
    pub connection_id: String,

    /// Display name shown in the host's connection browser
    pub name: String,

    /// Whether the endpoint is a network host or a local socket/file
    pub connection_type: ConnectionType,

    /// Engine the connection speaks to
    pub driver: Driver,

    /// Hostname (host-type connections)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Port number (host-type connections)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Socket or file path (socket-type connections)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,

    /// Username to authenticate with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Password to authenticate with
    /// WARNING: Sensitive data, do not log or include in error messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// How the host should persist the password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_password: Option<SavePasswordOption>,

    /// Initial database, schema, or file to open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Environment classification (production, testing, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ConnectionRole>,

    /// Accent color in the host's UI (e.g. "#ff4040")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Folder the connection is grouped under in the connection browser
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Time allowed for establishing a connection, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_timeout: Option<u64>,

    /// Time allowed for an individual request, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,

    /// Open the connection in read-only mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    /// Connect over SSL/TLS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,

    /// Path to the CA certificate (host-local path, read by the host)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_ca: Option<String>,

    /// Path to the client certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_cert: Option<String>,

    /// Path to the client private key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_key: Option<String>,

    /// Reject servers whose certificate fails verification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_reject_unauthorized: Option<bool>,

    /// Driver-specific options; keys are defined by the driver, not here
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub driver_options: HashMap<String, DriverOption>,

    /// Object filters per category (e.g. "schemas" -> patterns to show)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub filters: HashMap<String, Vec<String>>,

    /// Identifier of an externally-managed tunnel to route through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tunnel_id: Option<String>,
}

impl ConnectionConfig {
    /// Create a minimal host-type connection config
    ///
    /// Only the required fields are set; everything else starts unset and
    /// can be filled in with the `with_*` builders or directly.
    #[must_use]
    pub fn new(connection_id: impl Into<String>, name: impl Into<String>, driver: Driver) -> Self {
        Self {
            connection_id: connection_id.into(),
            name: name.into(),
            connection_type: ConnectionType::Host,
            driver,
            host: None,
            port: None,
            socket: None,
            username: None,
            password: None,
            save_password: None,
            database: None,
            role: None,
            color: None,
            group: None,
            connection_timeout: None,
            request_timeout: None,
            read_only: None,
            ssl: None,
            ssl_ca: None,
            ssl_cert: None,
            ssl_key: None,
            ssl_reject_unauthorized: None,
            driver_options: HashMap::new(),
            filters: HashMap::new(),
            tunnel_id: None,
        }
    }

    /// Set the network endpoint; marks the connection as host-type
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>, port: u16) -> Self {
        self.connection_type = ConnectionType::Host;
        self.host = Some(host.into());
        self.port = Some(port);
        self
    }

    /// Set the socket or file path; marks the connection as socket-type
    #[must_use]
    pub fn with_socket(mut self, socket: impl Into<String>) -> Self {
        self.connection_type = ConnectionType::Socket;
        self.socket = Some(socket.into());
        self
    }

    /// Set username and password
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the credential persistence policy
    #[must_use]
    pub fn with_save_password(mut self, save_password: SavePasswordOption) -> Self {
        self.save_password = Some(save_password);
        self
    }

    /// Set the initial database
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the environment role
    #[must_use]
    pub fn with_role(mut self, role: ConnectionRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Place the connection under a group folder
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Add one driver-specific option
    #[must_use]
    pub fn with_driver_option(
        mut self,
        key: impl Into<String>,
        value: impl Into<DriverOption>,
    ) -> Self {
        self.driver_options.insert(key.into(), value.into());
        self
    }

    /// Add one object filter category
    #[must_use]
    pub fn with_filter(mut self, category: impl Into<String>, patterns: Vec<String>) -> Self {
        self.filters.insert(category.into(), patterns);
        self
    }
}
