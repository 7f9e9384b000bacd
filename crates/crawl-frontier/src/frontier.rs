use std::fmt;

use url::Url;

use crate::{CrawlRequest, CrawlStrategy};
use crate::config::FrontierConfig;
use crate::dedup::DuplicateFilter;
use crate::domain::ScopeFilter;
use crate::error::ConfigError;
use crate::queue::RequestQueue;

/// Why a fed request was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    Offsite,
    TooDeep,
    Duplicate,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Offsite => write!(f, "offsite"),
            Rejection::TooDeep => write!(f, "too deep"),
            Rejection::Duplicate => write!(f, "duplicate"),
        }
    }
}

/// Result of [`CrawlFrontier::feed_request`]. Rejection is routine filtering, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    Admitted,
    Rejected(Rejection),
}

impl FeedOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, FeedOutcome::Admitted)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrontierStats {
    pub admitted: usize,
    pub dequeued: usize,
    pub rejected_offsite: usize,
    pub rejected_too_deep: usize,
    pub rejected_duplicate: usize,
}

impl FrontierStats {
    pub fn rejected(&self) -> usize {
        self.rejected_offsite + self.rejected_too_deep + self.rejected_duplicate
    }

    fn record_rejection(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::Offsite => self.rejected_offsite += 1,
            Rejection::TooDeep => self.rejected_too_deep += 1,
            Rejection::Duplicate => self.rejected_duplicate += 1,
        }
    }
}

/// Decides which discovered URL is fetched next.
///
/// The frontier is seeded once from a [`FrontierConfig`]. The crawl loop then alternates
/// between [`next_request`](Self::next_request) and zero or more
/// [`feed_request`](Self::feed_request) calls for the links found on the fetched page.
/// An empty frontier means the crawl is complete.
#[derive(Debug)]
pub struct CrawlFrontier {
    scope: ScopeFilter,
    duplicates: DuplicateFilter,
    pending: RequestQueue,
    max_crawl_depth: Option<u32>,
    stats: FrontierStats,
}

impl CrawlFrontier {
    /// Builds the frontier and enqueues every seed, in order, at depth 0.
    ///
    /// Seeds define the in-scope domains and are never scope- or depth-filtered themselves.
    pub fn new(config: &FrontierConfig) -> Result<Self, ConfigError> {
        let mut frontier = Self {
            scope: ScopeFilter::new(config.filter_offsite_requests),
            duplicates: DuplicateFilter::new(config.filter_duplicate_requests),
            pending: RequestQueue::new(config.crawl_strategy),
            max_crawl_depth: config.max_crawl_depth,
            stats: FrontierStats::default(),
        };

        for seed_url in &config.seeds {
            let seed = CrawlRequest::seed(seed_url).map_err(ConfigError::InvalidSeed)?;
            frontier
                .scope
                .add_seed_domain(seed.top_private_domain().to_string());

            if frontier.duplicates.admit_once(&seed) {
                frontier.admit(seed);
            } else {
                tracing::debug!("Skipping duplicate seed: {}", seed_url);
                frontier.stats.record_rejection(Rejection::Duplicate);
            }
        }

        tracing::info!(
            seeds = config.seeds.len(),
            filter_duplicates = config.filter_duplicate_requests,
            filter_offsite = config.filter_offsite_requests,
            strategy = ?config.crawl_strategy,
            max_depth = ?config.max_crawl_depth,
            "Crawl frontier initialized"
        );

        Ok(frontier)
    }

    pub fn has_next_request(&self) -> bool {
        self.pending.has_pending()
    }

    /// Removes and returns the next request, or `None` once the frontier is exhausted.
    pub fn next_request(&mut self) -> Option<CrawlRequest> {
        let request = self.pending.pop()?;
        self.stats.dequeued += 1;
        tracing::trace!(
            depth = request.crawl_depth(),
            "Dequeued {}",
            request.request_url()
        );
        Some(request)
    }

    /// Admits the request if it passes the scope, depth and duplicate checks.
    pub fn feed_request(&mut self, request: CrawlRequest) -> FeedOutcome {
        match self.check(&request) {
            Some(rejection) => {
                tracing::debug!(
                    reason = %rejection,
                    "Rejected {} (referer: {})",
                    request.request_url(),
                    request.referer_url()
                );
                self.stats.record_rejection(rejection);
                FeedOutcome::Rejected(rejection)
            }
            None => {
                self.admit(request);
                FeedOutcome::Admitted
            }
        }
    }

    // The duplicate check goes last: it records the URL as seen on success.
    fn check(&mut self, request: &CrawlRequest) -> Option<Rejection> {
        if !self.scope.is_in_scope(request) {
            return Some(Rejection::Offsite);
        }
        if self
            .max_crawl_depth
            .is_some_and(|max| request.crawl_depth() > max)
        {
            return Some(Rejection::TooDeep);
        }
        if !self.duplicates.admit_once(request) {
            return Some(Rejection::Duplicate);
        }
        None
    }

    fn admit(&mut self, request: CrawlRequest) {
        tracing::debug!(
            depth = request.crawl_depth(),
            "Admitted {}",
            request.request_url()
        );
        self.stats.admitted += 1;
        self.pending.push(request);
    }

    /// Affects subsequent [`feed_request`](Self::feed_request) calls only.
    pub fn set_filter_duplicate_requests(&mut self, enabled: bool) {
        self.duplicates.set_enabled(enabled);
    }

    /// Affects subsequent [`feed_request`](Self::feed_request) calls only.
    pub fn set_filter_offsite_requests(&mut self, enabled: bool) {
        self.scope.set_enabled(enabled);
    }

    pub fn filters_duplicate_requests(&self) -> bool {
        self.duplicates.is_enabled()
    }

    pub fn filters_offsite_requests(&self) -> bool {
        self.scope.is_enabled()
    }

    pub fn crawl_strategy(&self) -> CrawlStrategy {
        self.pending.strategy()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the URL has ever been admitted, including already dequeued requests.
    pub fn is_seen(&self, url: &Url) -> bool {
        self.duplicates.is_seen(url.as_str())
    }

    pub fn seed_domains(&self) -> impl Iterator<Item = &str> {
        self.scope.seed_domains()
    }

    pub fn stats(&self) -> FrontierStats {
        self.stats
    }
}
