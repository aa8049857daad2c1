//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Synchronizer and scheduler produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (sync counters, table gauges)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging; the config source URL is attached to every
//!   failure diagnostic
//! - Metric updates are cheap (atomic increments), safe on the sync path

pub mod logging;
pub mod metrics;
