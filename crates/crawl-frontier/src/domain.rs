use rustc_hash::FxHashSet;
use url::{Host, Url};

use crate::CrawlRequest;
use crate::error::RequestError;

/// Returns the top-private domain (eTLD+1) of the URL's host using public-suffix rules.
///
/// `sub.example.com` resolves to `example.com`, `www.example.co.uk` to `example.co.uk`.
/// IP hosts, hosts that are themselves public suffixes and URLs without a host
/// are rejected with [`RequestError::InvalidUrl`].
pub fn top_private_domain(url: &Url) -> Result<String, RequestError> {
    let domain = match url.host() {
        Some(Host::Domain(domain)) => domain,
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {
            return Err(RequestError::invalid_url(
                url.as_str(),
                "host is an IP address",
            ));
        }
        None => return Err(RequestError::invalid_url(url.as_str(), "URL has no host")),
    };

    let domain = domain.trim_end_matches('.');
    psl::domain_str(domain)
        .map(|registrable| registrable.to_string())
        .ok_or_else(|| {
            RequestError::invalid_url(
                url.as_str(),
                format!("host '{}' has no registrable domain", domain),
            )
        })
}

/// Decides whether a request's site is within the crawl scope defined by the seeds.
#[derive(Debug, Clone, Default)]
pub struct ScopeFilter {
    enabled: bool,
    seed_domains: FxHashSet<String>,
}

impl ScopeFilter {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            seed_domains: FxHashSet::default(),
        }
    }

    pub fn add_seed_domain(&mut self, domain: impl Into<String>) {
        self.seed_domains.insert(domain.into());
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn seed_domains(&self) -> impl Iterator<Item = &str> {
        self.seed_domains.iter().map(String::as_str)
    }

    /// Always `true` while disabled; otherwise `true` iff the request's domain is a seed domain.
    pub fn is_in_scope(&self, request: &CrawlRequest) -> bool {
        !self.enabled || self.seed_domains.contains(request.top_private_domain())
    }
}
