//! Synchronization outcome types.

use std::sync::Arc;
use std::time::SystemTime;

use thiserror::Error;

use crate::fetch::FetchError;
use crate::routes::parser::ParseError;
use crate::routes::table::RouteTable;

/// Why a synchronization attempt failed.
///
/// None of these are fatal: every failure is recovered inside the
/// synchronizer and the previously published table stays authoritative.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),

    #[error("attempt superseded by a newer successful sync")]
    Superseded,
}

impl SyncError {
    /// Short label used for metrics and structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SyncError::Fetch(_) => "fetch",
            SyncError::Parse(_) => "parse",
            SyncError::Superseded => "superseded",
        }
    }
}

/// Result of one synchronization attempt.
#[derive(Debug)]
pub enum SyncOutcome {
    /// The table was published (possibly content-identical to the
    /// previous one).
    Success {
        table: Arc<RouteTable>,
        fetched_at: SystemTime,
    },

    /// The attempt failed; the previous table is untouched.
    Failure {
        reason: SyncError,
        occurred_at: SystemTime,
    },
}

impl SyncOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SyncOutcome::Success { .. })
    }
}

/// Broadcast to consumers after every refresh attempt.
///
/// Consumers decide whether to re-read the table; `version` only moves
/// when route content actually changed, so repeated notices are harmless.
#[derive(Debug, Clone)]
pub struct RefreshNotice {
    /// Whether the attempt published a table.
    pub success: bool,

    /// Version of the currently published table.
    pub version: u64,

    /// Whether this attempt changed route content.
    pub changed: bool,

    /// When the attempt completed.
    pub at: SystemTime,
}
