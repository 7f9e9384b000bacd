use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while assembling a [`crate::CrawlRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RequestError {
    #[error("Missing required field: `{field}`")]
    #[diagnostic(
        code(crawl_frontier::request::missing_field),
        help("Both `request_url` and `referer_url` must be set before building a crawl request.")
    )]
    MissingField { field: &'static str },

    #[error("Invalid URL '{url}': {reason}")]
    #[diagnostic(
        code(crawl_frontier::request::invalid_url),
        help("Crawl requests need an absolute URL whose host has a registrable domain (e.g. `sub.example.com`).")
    )]
    InvalidUrl { url: String, reason: String },
}

impl RequestError {
    pub(crate) fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading a [`crate::FrontierConfig`] or seeding a frontier from it.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to parse frontier configuration: {0}")]
    #[diagnostic(code(crawl_frontier::config::parse))]
    Parse(#[from] toml::de::Error),

    #[error("Invalid seed URL: {0}")]
    #[diagnostic(
        code(crawl_frontier::config::invalid_seed),
        help("Every seed must resolve to a top-private domain so that offsite filtering can use it.")
    )]
    InvalidSeed(#[source] RequestError),
}
