//! Process lifecycle management.
//!
//! # Data Flow
//! ```text
//! SIGTERM/SIGINT
//!     → signals.rs (await shutdown signal)
//!     → main stops the refresh scheduler
//!     → in-flight sync finishes, process exits
//! ```
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Shutdown is graceful: the scheduler drains before exit

pub mod signals;

pub use signals::shutdown_signal;
