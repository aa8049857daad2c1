//! Route-table synchronization subsystem.
//!
//! # Data Flow
//! ```text
//! Scheduler tick or manual trigger
//!     → synchronizer.rs  sync()
//!     → fetch (bounded, one attempt)
//!     → parse (all-or-nothing)
//!     → freshness check → atomic swap of Arc<RouteTable>
//!     → RefreshNotice broadcast to consumers
//!
//! On any failure:
//!     previous table stays published, failure logged and counted,
//!     notice still broadcast
//! ```
//!
//! # Design Decisions
//! - Fail closed on old state: a broken fetch or document degrades to
//!   stale-but-correct routing, never to no routing
//! - At most one sync in flight; later attempts queue behind it
//! - Readers load the published table lock-free and never observe a
//!   partially built one

pub mod outcome;
pub mod synchronizer;

pub use outcome::{RefreshNotice, SyncError, SyncOutcome};
pub use synchronizer::RouteTableSynchronizer;
