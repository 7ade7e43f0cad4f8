//! Host Acquisition
//!
//! This module locates the DBCode host and hands out its capability
//! interface. Consumers never talk to the editor's extension machinery
//! directly; they ask a [`HostRegistry`] for a host identifier and receive
//! the host's [`HostExports`].
//!
//! # Activation
//! A registered host starts dormant. The first call to
//! [`HostRegistry::exports`] (or [`HostRegistry::api`]) runs the host's
//! [`HostActivator`] and caches the produced exports; later calls reuse the
//! cache. A failed activation is not cached, so the next call retries.
//!
//! # Identity
//! Hosts are keyed by an opaque identifier string. The DBCode host itself is
//! always [`DBCODE_HOST_ID`].

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::api::DbCodeApi;
use crate::error::{ApiError, Result};

/// Well-known identifier of the DBCode host extension
pub const DBCODE_HOST_ID: &str = "dbcode.dbcode";

/// Exported surface of an activated host
///
/// Mirrors what the host hands back after activation: an object with an
/// `api` property carrying the capability interface.
#[derive(Clone)]
pub struct HostExports {
    /// The host's capability interface
    pub api: Arc<dyn DbCodeApi>,
}

impl HostExports {
    /// Wrap a capability interface as host exports
    #[must_use]
    pub fn new(api: Arc<dyn DbCodeApi>) -> Self {
        Self { api }
    }
}

impl std::fmt::Debug for HostExports {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostExports").finish_non_exhaustive()
    }
}

/// Produces a host's exports on first use
///
/// Implementations bridge to whatever actually starts the host (activating
/// an editor extension, spawning a sidecar, wiring a test double).
///
/// # Errors
/// Implementations should report failures as
/// [`ApiError::ActivationFailed`]; the registry passes activation errors
/// through unchanged.
#[async_trait]
pub trait HostActivator: Send + Sync {
    /// Activate the host and produce its exports
    async fn activate(&self) -> Result<HostExports>;
}

/// Activator for a host that is already live
struct ReadyActivator {
    exports: HostExports,
}

#[async_trait]
impl HostActivator for ReadyActivator {
    async fn activate(&self) -> Result<HostExports> {
        Ok(self.exports.clone())
    }
}

#[derive(Clone)]
struct HostSlot {
    activator: Arc<dyn HostActivator>,
    exports: Arc<OnceCell<HostExports>>,
}

/// Registry mapping host identifiers to lazily-activated hosts
///
/// Interior-mutable; share one instance behind an `Arc`. Lookup and
/// registration take the lock briefly and never hold it across activation.
#[derive(Default)]
pub struct HostRegistry {
    slots: RwLock<HashMap<String, HostSlot>>,
}

impl HostRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a host under an identifier
    ///
    /// Replacing an existing registration discards its cached activation;
    /// the next acquisition activates the new registration.
    pub fn register(&self, host_id: impl Into<String>, activator: Arc<dyn HostActivator>) {
        let host_id = host_id.into();
        tracing::debug!(host = %host_id, "registering host activator");

        let slot = HostSlot { activator, exports: Arc::new(OnceCell::new()) };
        self.slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(host_id, slot);
    }

    /// Register a host whose capability interface is already live
    ///
    /// No activation step runs; the first acquisition returns the given
    /// interface directly.
    pub fn register_api(&self, host_id: impl Into<String>, api: Arc<dyn DbCodeApi>) {
        let exports = HostExports::new(api);
        self.register(host_id, Arc::new(ReadyActivator { exports }));
    }

    /// Whether a host is registered under the identifier
    #[must_use]
    pub fn contains(&self, host_id: &str) -> bool {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(host_id)
    }

    /// List registered host identifiers, sorted
    #[must_use]
    pub fn hosts(&self) -> Vec<String> {
        let mut hosts: Vec<String> = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        hosts.sort();
        hosts
    }

    /// Get a host's exports, activating the host on first use
    ///
    /// # Errors
    /// [`ApiError::HostNotFound`] if no host is registered under the
    /// identifier; the activator's error if activation fails. Activation
    /// failures are not cached and are retried on the next call.
    pub async fn exports(&self, host_id: &str) -> Result<HostExports> {
        let slot = {
            let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
            slots.get(host_id).cloned()
        };
        let Some(slot) = slot else {
            tracing::warn!(host = %host_id, "host not registered");
            return Err(ApiError::host_not_found(host_id));
        };

        let activated = slot
            .exports
            .get_or_try_init(|| async {
                tracing::debug!(host = %host_id, "activating host");
                let exports = slot.activator.activate().await?;
                tracing::debug!(host = %host_id, "host activated");
                Ok(exports)
            })
            .await;

        match activated {
            Ok(exports) => Ok(exports.clone()),
            Err(err) => {
                tracing::warn!(host = %host_id, error = %err, "host activation failed");
                Err(err)
            }
        }
    }

    /// Get a host's capability interface, activating the host on first use
    ///
    /// # Errors
    /// Same as [`HostRegistry::exports`].
    pub async fn api(&self, host_id: &str) -> Result<Arc<dyn DbCodeApi>> {
        Ok(self.exports(host_id).await?.api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NoopApi;
    use crate::result::ConnectionOperationResult;
    use std::fmt::{self, Write as _};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct OkApi;

    #[async_trait]
    impl DbCodeApi for OkApi {
        async fn add_connections(
            &self,
            _connections: &[crate::ConnectionConfig],
        ) -> ConnectionOperationResult {
            ConnectionOperationResult::ok()
        }

        async fn remove_connections(
            &self,
            _connection_ids: &[String],
        ) -> ConnectionOperationResult {
            ConnectionOperationResult::ok()
        }
    }

    struct CountingActivator {
        activations: AtomicUsize,
    }

    impl CountingActivator {
        fn new() -> Arc<Self> {
            Arc::new(Self { activations: AtomicUsize::new(0) })
        }
    }

    #[async_trait]
    impl HostActivator for CountingActivator {
        async fn activate(&self) -> Result<HostExports> {
            self.activations.fetch_add(1, Ordering::SeqCst);
            Ok(HostExports::new(Arc::new(OkApi)))
        }
    }

    struct FlakyActivator {
        attempts: AtomicUsize,
    }

    #[async_trait]
    impl HostActivator for FlakyActivator {
        async fn activate(&self) -> Result<HostExports> {
            if self.attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(ApiError::activation_failed(DBCODE_HOST_ID, "extension still loading"))
            } else {
                Ok(HostExports::new(Arc::new(OkApi)))
            }
        }
    }

    /// Collects every emitted event as a "field=value" line.
    struct RecordingSubscriber {
        events: Arc<Mutex<Vec<String>>>,
    }

    struct EventLine(String);

    impl tracing::field::Visit for EventLine {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
            let _ = write!(self.0, "{}={:?} ", field.name(), value);
        }
    }

    impl tracing::Subscriber for RecordingSubscriber {
        fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _attrs: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }

        fn record(&self, _id: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _id: &tracing::span::Id, _follows: &tracing::span::Id) {}

        fn event(&self, event: &tracing::Event<'_>) {
            let mut line = EventLine(String::new());
            event.record(&mut line);
            self.events.lock().unwrap().push(line.0);
        }

        fn enter(&self, _id: &tracing::span::Id) {}

        fn exit(&self, _id: &tracing::span::Id) {}
    }

    #[tokio::test]
    async fn test_register_and_contains() {
        let registry = HostRegistry::new();
        assert!(!registry.contains(DBCODE_HOST_ID));

        registry.register_api(DBCODE_HOST_ID, Arc::new(NoopApi));
        assert!(registry.contains(DBCODE_HOST_ID));
        assert_eq!(registry.hosts(), vec![DBCODE_HOST_ID.to_string()]);
    }

    #[tokio::test]
    async fn test_hosts_sorted() {
        let registry = HostRegistry::new();
        registry.register_api("zeta.host", Arc::new(NoopApi));
        registry.register_api("alpha.host", Arc::new(NoopApi));

        assert_eq!(registry.hosts(), vec!["alpha.host".to_string(), "zeta.host".to_string()]);
    }

    #[tokio::test]
    async fn test_unknown_host_not_found() {
        let registry = HostRegistry::new();
        let err = registry.exports("nobody.home").await.unwrap_err();

        assert_eq!(err.error_code(), "HOST_NOT_FOUND");
        assert!(err.message().contains("nobody.home"));
    }

    #[tokio::test]
    async fn test_activation_runs_once() {
        let registry = HostRegistry::new();
        let activator = CountingActivator::new();
        registry.register(DBCODE_HOST_ID, activator.clone());

        registry.exports(DBCODE_HOST_ID).await.unwrap();
        registry.exports(DBCODE_HOST_ID).await.unwrap();
        registry.api(DBCODE_HOST_ID).await.unwrap();

        assert_eq!(activator.activations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_acquisition_activates_once() {
        let registry = HostRegistry::new();
        let activator = CountingActivator::new();
        registry.register(DBCODE_HOST_ID, activator.clone());

        let (a, b) = tokio::join!(registry.exports(DBCODE_HOST_ID), registry.exports(DBCODE_HOST_ID));
        a.unwrap();
        b.unwrap();

        assert_eq!(activator.activations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_activation_retried() {
        let registry = HostRegistry::new();
        registry.register(
            DBCODE_HOST_ID,
            Arc::new(FlakyActivator { attempts: AtomicUsize::new(0) }),
        );

        let err = registry.exports(DBCODE_HOST_ID).await.unwrap_err();
        assert_eq!(err.error_code(), "ACTIVATION_FAILED");

        let exports = registry.exports(DBCODE_HOST_ID).await.unwrap();
        assert!(exports.api.add_connections(&[]).await.success);
    }

    #[tokio::test]
    async fn test_activation_outcome_logged_once() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let _guard =
            tracing::subscriber::set_default(RecordingSubscriber { events: events.clone() });

        let registry = HostRegistry::new();
        registry.register(DBCODE_HOST_ID, CountingActivator::new());

        registry.exports(DBCODE_HOST_ID).await.unwrap();
        registry.exports(DBCODE_HOST_ID).await.unwrap();

        let lines = events.lock().unwrap();
        assert!(lines.iter().any(|l| l.contains("activating host")));
        // The second acquisition hits the cache and must stay silent.
        let activated = lines.iter().filter(|l| l.contains("host activated")).count();
        assert_eq!(activated, 1);
    }

    #[tokio::test]
    async fn test_reregistration_discards_cached_activation() {
        let registry = HostRegistry::new();
        registry.register_api(DBCODE_HOST_ID, Arc::new(NoopApi));
        assert!(!registry.api(DBCODE_HOST_ID).await.unwrap().add_connections(&[]).await.success);

        registry.register_api(DBCODE_HOST_ID, Arc::new(OkApi));
        assert!(registry.api(DBCODE_HOST_ID).await.unwrap().add_connections(&[]).await.success);
    }

    #[tokio::test]
    async fn test_register_api_needs_no_activation_step() {
        let registry = HostRegistry::new();
        registry.register_api(DBCODE_HOST_ID, Arc::new(OkApi));

        let api = registry.api(DBCODE_HOST_ID).await.unwrap();
        assert!(api.remove_connections(&[]).await.success);
    }
}
