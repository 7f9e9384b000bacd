//! Request-scheduling core of a browser-driven web crawler.
//!
//! The [`CrawlFrontier`] decides which discovered URL is fetched next and whether a
//! discovered URL should be fetched at all. It performs no network I/O: the crawl loop
//! fetches pages, extracts links, and hands them back to the frontier.
//!
//! # Features
//!
//! - Breadth-first ordering (FIFO within each depth level), or depth-first on request
//! - Lifetime-wide duplicate filtering keyed by the parsed URL
//! - Same-site scope control based on the seeds' top-private domains
//! - Optional maximum crawl depth
//! - A lock-protected [`SharedFrontier`] handle for multi-worker crawls
//!
//! # Usage
//!
//! ```rust
//! use crawl_frontier::{CrawlFrontier, CrawlRequest, FrontierConfig};
//! use url::Url;
//!
//! # fn main() -> miette::Result<()> {
//! let config = FrontierConfig::default()
//!     .with_seed(Url::parse("https://example.com").unwrap())
//!     .filter_offsite_requests(true);
//! let mut frontier = CrawlFrontier::new(&config)?;
//!
//! while let Some(request) = frontier.next_request() {
//!     // Fetch `request.request_url()` and discover its links here.
//!     for link in ["https://example.com/about", "https://other.org/"] {
//!         frontier.feed_request(CrawlRequest::child_of(&request, link)?);
//!     }
//! }
//! assert_eq!(frontier.stats().dequeued, 2);
//! # Ok(())
//! # }
//! ```
pub mod config;
pub mod dedup;
pub mod domain;
pub mod error;
pub mod frontier;
pub mod queue;
pub mod request;
pub mod shared;

pub use config::FrontierConfig;
pub use domain::top_private_domain;
pub use error::{ConfigError, RequestError};
pub use frontier::{CrawlFrontier, FeedOutcome, FrontierStats, Rejection};
pub use queue::CrawlStrategy;
pub use request::{CrawlRequest, RequestOptions};
pub use shared::SharedFrontier;
