//! Remote retrieval of the routes document.
//!
//! # Data Flow
//! ```text
//! Source URL (from config)
//!     → ConfigFetcher::fetch (one bounded attempt, no retries)
//!     → raw document text
//!     → handed to the parser by the synchronizer
//! ```
//!
//! # Design Decisions
//! - The transport client is injected behind a trait so the synchronizer
//!   never depends on a concrete HTTP stack
//! - No retries and no caching here; each scheduled tick is one
//!   independent attempt
//! - Every attempt is bounded by the configured timeout

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

pub mod http;

pub use http::HttpFetcher;

/// Error type for a single retrieval attempt.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("source unreachable: {0}")]
    Unreachable(String),

    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),

    #[error("source returned non-success status {0}")]
    NonSuccessStatus(u16),

    #[error("transport fault: {0}")]
    Transport(String),
}

/// Retrieves the routes document from a source location.
#[async_trait]
pub trait ConfigFetcher: Send + Sync {
    /// Perform one retrieval of the document body as text.
    async fn fetch(&self, source: &Url) -> Result<String, FetchError>;
}
