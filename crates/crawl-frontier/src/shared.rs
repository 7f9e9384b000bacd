use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use url::Url;

use crate::CrawlRequest;
use crate::config::FrontierConfig;
use crate::error::ConfigError;
use crate::frontier::{CrawlFrontier, FeedOutcome, FrontierStats};

/// Cloneable handle that lets several fetch workers share one [`CrawlFrontier`].
///
/// Every call holds a single lock for its whole duration, so the duplicate check and the
/// insertion into the seen set cannot interleave between two workers feeding the same URL.
#[derive(Debug, Clone)]
pub struct SharedFrontier {
    inner: Arc<Mutex<CrawlFrontier>>,
}

impl SharedFrontier {
    pub fn new(config: &FrontierConfig) -> Result<Self, ConfigError> {
        Ok(Self::from(CrawlFrontier::new(config)?))
    }

    // No operation panics halfway through a mutation, so a poisoned frontier is still consistent.
    fn lock(&self) -> MutexGuard<'_, CrawlFrontier> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn has_next_request(&self) -> bool {
        self.lock().has_next_request()
    }

    pub fn next_request(&self) -> Option<CrawlRequest> {
        self.lock().next_request()
    }

    pub fn feed_request(&self, request: CrawlRequest) -> FeedOutcome {
        self.lock().feed_request(request)
    }

    /// Feeds a batch under one lock so no worker can dequeue a partial batch.
    pub fn feed_requests(&self, requests: impl IntoIterator<Item = CrawlRequest>) -> usize {
        let mut frontier = self.lock();
        requests
            .into_iter()
            .map(|request| frontier.feed_request(request))
            .filter(FeedOutcome::is_admitted)
            .count()
    }

    pub fn set_filter_duplicate_requests(&self, enabled: bool) {
        self.lock().set_filter_duplicate_requests(enabled);
    }

    pub fn set_filter_offsite_requests(&self, enabled: bool) {
        self.lock().set_filter_offsite_requests(enabled);
    }

    pub fn pending_len(&self) -> usize {
        self.lock().pending_len()
    }

    pub fn is_seen(&self, url: &Url) -> bool {
        self.lock().is_seen(url)
    }

    pub fn stats(&self) -> FrontierStats {
        self.lock().stats()
    }
}

impl From<CrawlFrontier> for SharedFrontier {
    fn from(frontier: CrawlFrontier) -> Self {
        Self {
            inner: Arc::new(Mutex::new(frontier)),
        }
    }
}
