use rustc_hash::FxHashSet;

use crate::CrawlRequest;

/// Remembers every URL admitted to the frontier for its whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct DuplicateFilter {
    enabled: bool,
    seen_urls: FxHashSet<String>,
}

impl DuplicateFilter {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            seen_urls: FxHashSet::default(),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` and records the URL if it may be admitted.
    ///
    /// While disabled every request passes, but its URL is still recorded so that
    /// re-enabling the filter later rejects URLs that were admitted in the meantime.
    pub fn admit_once(&mut self, request: &CrawlRequest) -> bool {
        let inserted = self.seen_urls.insert(request.identity_key().to_string());
        !self.enabled || inserted
    }

    pub fn is_seen(&self, identity_key: &str) -> bool {
        self.seen_urls.contains(identity_key)
    }

    pub fn seen_count(&self) -> usize {
        self.seen_urls.len()
    }
}
