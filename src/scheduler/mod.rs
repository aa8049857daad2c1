//! Refresh scheduling subsystem.
//!
//! # Data Flow
//! ```text
//! start(interval)
//!     → spawn ticker task (tokio interval)
//!     → every tick: synchronizer.sync()
//!
//! trigger_now()
//!     → manual-trigger channel → same task → sync()
//!       (periodic ticker is not reset)
//!
//! stop()
//!     → shutdown broadcast → task drains and exits
//!       (no tick fires after stop returns)
//! ```
//!
//! # Design Decisions
//! - One task runs all syncs, so ticks and manual triggers never overlap
//! - Explicit start/stop lifecycle; the ticker is owned, not ambient
//! - The first tick fires immediately, giving a freshly started
//!   scheduler an initial table without waiting a full interval

pub mod refresh;

pub use refresh::{RefreshScheduler, SchedulerError};
