//! Shared utilities for integration testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use route_sync::fetch::{ConfigFetcher, FetchError};

/// A programmable in-memory fetcher.
///
/// Pops queued responses first, then keeps returning the fallback.
/// Counts calls so tests can verify tick cadence without a network.
pub struct StubFetcher {
    queued: Mutex<VecDeque<Result<String, FetchError>>>,
    fallback: Result<String, FetchError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StubFetcher {
    /// Always return `body` once the queue is drained.
    pub fn returning(body: &str) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback: Ok(body.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fail with an unreachable-source error.
    pub fn failing() -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback: Err(FetchError::Unreachable("connection refused".into())),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Sleep this long inside every fetch, to simulate a slow source.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a one-shot response served before the fallback.
    #[allow(dead_code)]
    pub fn push(&self, response: Result<String, FetchError>) {
        self.queued.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigFetcher for StubFetcher {
    async fn fetch(&self, _source: &Url) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let queued = self.queued.lock().unwrap().pop_front();
        match queued {
            Some(response) => response,
            None => self.fallback.clone(),
        }
    }
}
