//! DBCode Capability Interface
//!
//! This module defines [`DbCodeApi`], the capability surface an activated
//! DBCode host exposes to consumers. The trait is object-safe; consumers
//! hold it as `Arc<dyn DbCodeApi>` handed out by the
//! [`host`](crate::host) registry.
//!
//! # Contract Semantics
//! All operations are single-shot request/response: no streaming, no
//! cancellation, no call-level timeout. Callers that need a timeout wrap
//! the future themselves. Concurrent calls are permitted; interleaving and
//! atomicity are the host's responsibility.
//!
//! Operations never reject with a transport error. Every outcome, including
//! host-internal faults, arrives as a
//! [`ConnectionOperationResult`](crate::ConnectionOperationResult).

use async_trait::async_trait;

use crate::connection::ConnectionConfig;
use crate::result::ConnectionOperationResult;

/// Capability surface of the DBCode host
///
/// Implemented by the host extension; consumed through the registry in
/// [`host`](crate::host). The shipped [`NoopApi`] is the only
/// implementation this crate provides.
#[async_trait]
pub trait DbCodeApi: Send + Sync {
    /// Create or update connections in the host's store
    ///
    /// Each element is matched by `connection_id`:
    /// - an id already present in the store updates that entry in place
    /// - any other id creates a new entry
    ///
    /// Element order within the batch carries no meaning. A batch yields one
    /// envelope; if any element fails the host's validation the envelope
    /// reports failure as a whole. Whether the remaining elements were
    /// applied is host-defined: the contract does not specify partial
    /// application, and host implementations must document their choice.
    async fn add_connections(&self, connections: &[ConnectionConfig]) -> ConnectionOperationResult;

    /// Remove connections from the host's store
    ///
    /// Each id with a matching entry removes it. Ids with no match are
    /// silently ignored; the envelope has no per-id channel to report them
    /// on, so removing only unknown ids still reports success.
    async fn remove_connections(&self, connection_ids: &[String]) -> ConnectionOperationResult;

    /// Reveal the host's connection browser panel
    ///
    /// Always brings the panel into view. With `Some(id)`, additionally
    /// selects and expands that connection. An unknown id still reveals the
    /// panel but reports failure for the selection; the single success flag
    /// cannot distinguish the two sub-effects.
    ///
    /// Defaulted so hosts built against the pre-reveal contract still
    /// satisfy the trait; such hosts report failure here.
    async fn reveal_connection(&self, connection_id: Option<&str>) -> ConnectionOperationResult {
        let _ = connection_id;
        ConnectionOperationResult::failure("revealConnection is not supported by this host")
    }
}

/// Placeholder capability used before a host is acquired
///
/// Every operation fails with a fixed message. Wiring this in as the
/// initial value lets consumers call the API unconditionally and treat
/// "host missing" like any other failed operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopApi;

impl NoopApi {
    fn unavailable() -> ConnectionOperationResult {
        ConnectionOperationResult::failure("DBCode host is not available")
    }
}

#[async_trait]
impl DbCodeApi for NoopApi {
    async fn add_connections(&self, _connections: &[ConnectionConfig]) -> ConnectionOperationResult {
        Self::unavailable()
    }

    async fn remove_connections(&self, _connection_ids: &[String]) -> ConnectionOperationResult {
        Self::unavailable()
    }

    async fn reveal_connection(&self, _connection_id: Option<&str>) -> ConnectionOperationResult {
        Self::unavailable()
    }
}
