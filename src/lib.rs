//! Dynamic route-table synchronization for a gateway control plane.

pub mod config;
pub mod fetch;
pub mod lifecycle;
pub mod observability;
pub mod routes;
pub mod scheduler;
pub mod sync;

pub use config::schema::SyncConfig;
pub use routes::table::RouteTable;
pub use scheduler::RefreshScheduler;
pub use sync::RouteTableSynchronizer;
