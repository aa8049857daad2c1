//! The published route table.
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Shared as `Arc<RouteTable>`; superseded tables stay valid for
//!   readers still holding them
//! - Version bumps only when route content changes, so consumers can
//!   detect no-op refreshes cheaply

use std::time::SystemTime;

use crate::routes::definition::RouteDefinition;

/// The complete, ordered set of route definitions currently in effect.
#[derive(Debug, Clone)]
pub struct RouteTable {
    version: u64,
    fetched_at: SystemTime,
    routes: Vec<RouteDefinition>,
}

impl RouteTable {
    /// The table published before any sync cycle has succeeded.
    ///
    /// Stamped at the epoch so any real sync attempt is fresher.
    pub fn empty() -> Self {
        Self {
            version: 0,
            fetched_at: SystemTime::UNIX_EPOCH,
            routes: Vec::new(),
        }
    }

    /// Freeze a parsed route sequence into a table.
    pub fn new(version: u64, fetched_at: SystemTime, routes: Vec<RouteDefinition>) -> Self {
        Self {
            version,
            fetched_at,
            routes,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn fetched_at(&self) -> SystemTime {
        self.fetched_at
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look up a route by identifier.
    pub fn get(&self, id: &str) -> Option<&RouteDefinition> {
        self.routes.iter().find(|r| r.id == id)
    }

    /// Content equality, ignoring version and fetch time.
    pub fn same_routes(&self, other: &RouteTable) -> bool {
        self.routes == other.routes
    }
}
