//! The fetch → parse → publish cycle.
//!
//! # Responsibilities
//! - Drive one synchronization attempt end to end
//! - Own the published table reference (single writer)
//! - Keep the last good table through any failure
//! - Broadcast a refresh notice after every attempt
//!
//! # Design Decisions
//! - Published table lives in an `ArcSwap`: readers load snapshots
//!   lock-free, the swap is a single atomic pointer replace
//! - An async mutex serializes attempts; a freshness check before the
//!   swap stops a queued older attempt from regressing the table

use std::sync::Arc;
use std::time::SystemTime;

use arc_swap::ArcSwap;
use tokio::sync::{broadcast, Mutex};
use url::Url;

use crate::fetch::ConfigFetcher;
use crate::observability::metrics;
use crate::routes::parser;
use crate::routes::table::RouteTable;
use crate::sync::outcome::{RefreshNotice, SyncError, SyncOutcome};

const NOTICE_CHANNEL_CAPACITY: usize = 16;

/// Orchestrates synchronization cycles and owns the published table.
pub struct RouteTableSynchronizer {
    fetcher: Arc<dyn ConfigFetcher>,
    source: Url,
    published: ArcSwap<RouteTable>,
    sync_gate: Mutex<()>,
    notices: broadcast::Sender<RefreshNotice>,
}

impl RouteTableSynchronizer {
    pub fn new(fetcher: Arc<dyn ConfigFetcher>, source: Url) -> Self {
        let (notices, _) = broadcast::channel(NOTICE_CHANNEL_CAPACITY);

        Self {
            fetcher,
            source,
            published: ArcSwap::from_pointee(RouteTable::empty()),
            sync_gate: Mutex::new(()),
            notices,
        }
    }

    /// The last successfully published table.
    ///
    /// Empty (version 0) until the first successful cycle. Never blocks:
    /// this is a lock-free snapshot load.
    pub fn current_table(&self) -> Arc<RouteTable> {
        self.published.load_full()
    }

    /// Subscribe to refresh notices, sent after every attempt.
    pub fn subscribe(&self) -> broadcast::Receiver<RefreshNotice> {
        self.notices.subscribe()
    }

    /// Run one synchronization cycle.
    ///
    /// Attempts queue behind an in-flight one rather than running
    /// concurrently. Failures are reported as data; the previously
    /// published table is left untouched.
    pub async fn sync(&self) -> SyncOutcome {
        let started_at = SystemTime::now();
        let _gate = self.sync_gate.lock().await;

        match self.attempt(started_at).await {
            Ok((table, changed)) => {
                metrics::record_sync_success(table.len(), table.version());
                self.notify(true, table.version(), changed);
                SyncOutcome::Success {
                    table,
                    fetched_at: started_at,
                }
            }
            Err(reason) => {
                tracing::error!(
                    source = %self.source,
                    kind = reason.kind(),
                    error = %reason,
                    "Route refresh failed, keeping current table"
                );
                metrics::record_sync_failure(reason.kind());
                let current = self.published.load();
                self.notify(false, current.version(), false);
                SyncOutcome::Failure {
                    reason,
                    occurred_at: SystemTime::now(),
                }
            }
        }
    }

    async fn attempt(&self, started_at: SystemTime) -> Result<(Arc<RouteTable>, bool), SyncError> {
        tracing::debug!(source = %self.source, "Fetching route configuration");

        let body = self.fetcher.fetch(&self.source).await?;
        let routes = parser::parse(&body)?;

        let current = self.published.load_full();
        // A queued attempt that started before the published table was
        // fetched must not overwrite it.
        if current.fetched_at() > started_at {
            return Err(SyncError::Superseded);
        }

        let changed = current.routes() != routes.as_slice();
        let version = if changed {
            current.version() + 1
        } else {
            current.version()
        };

        let table = Arc::new(RouteTable::new(version, started_at, routes));
        self.published.store(table.clone());

        for route in table.routes() {
            tracing::debug!(route_id = %route.id, destination = %route.destination, "Loaded route");
        }
        tracing::info!(
            source = %self.source,
            routes = table.len(),
            ids = ?table.routes().iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            version = table.version(),
            changed,
            "Route table published"
        );

        Ok((table, changed))
    }

    fn notify(&self, success: bool, version: u64, changed: bool) {
        // Send errors just mean nobody is subscribed.
        let _ = self.notices.send(RefreshNotice {
            success,
            version,
            changed,
            at: SystemTime::now(),
        });
    }
}
