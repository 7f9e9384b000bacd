use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::top_private_domain;
use crate::error::RequestError;

/// One URL to visit plus its provenance.
///
/// Requests are immutable once built; the frontier only ever moves them around.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrawlRequest {
    request_url: Url,
    referer_url: Url,
    top_private_domain: String,
    crawl_depth: u32,
}

/// Inputs for [`CrawlRequest::build`].
///
/// `crawl_depth` defaults to `referer_depth + 1` and `top_private_domain` defaults to the
/// registrable domain of `request_url`. Setting either explicitly overrides the derivation.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub request_url: Option<String>,
    pub referer_url: Option<String>,
    /// Depth of the page `referer_url` points at.
    pub referer_depth: u32,
    pub crawl_depth: Option<u32>,
    pub top_private_domain: Option<String>,
}

fn parse_url(input: &str) -> Result<Url, RequestError> {
    Url::parse(input).map_err(|e| RequestError::invalid_url(input, e.to_string()))
}

impl CrawlRequest {
    /// Validates the options and assembles a request. No network access happens here.
    pub fn build(options: RequestOptions) -> Result<Self, RequestError> {
        let RequestOptions {
            request_url,
            referer_url,
            referer_depth,
            crawl_depth,
            top_private_domain: domain,
        } = options;

        let request_url = request_url.ok_or(RequestError::MissingField {
            field: "request_url",
        })?;
        let referer_url = referer_url.ok_or(RequestError::MissingField {
            field: "referer_url",
        })?;

        let request_url = parse_url(&request_url)?;
        let referer_url = parse_url(&referer_url)?;

        let top_private_domain = match domain {
            Some(domain) => domain,
            None => top_private_domain(&request_url)?,
        };

        Ok(Self {
            request_url,
            referer_url,
            top_private_domain,
            crawl_depth: crawl_depth.unwrap_or_else(|| referer_depth.saturating_add(1)),
        })
    }

    /// A depth-0 request that refers to itself.
    pub fn seed(url: &Url) -> Result<Self, RequestError> {
        Ok(Self {
            request_url: url.clone(),
            referer_url: url.clone(),
            top_private_domain: top_private_domain(url)?,
            crawl_depth: 0,
        })
    }

    /// A request for `url` discovered on the page fetched for `parent`.
    pub fn child_of(parent: &CrawlRequest, url: &str) -> Result<Self, RequestError> {
        Self::build(RequestOptions {
            request_url: Some(url.to_string()),
            referer_url: Some(parent.request_url.to_string()),
            referer_depth: parent.crawl_depth,
            ..Default::default()
        })
    }

    pub fn request_url(&self) -> &Url {
        &self.request_url
    }

    pub fn referer_url(&self) -> &Url {
        &self.referer_url
    }

    pub fn top_private_domain(&self) -> &str {
        &self.top_private_domain
    }

    pub fn crawl_depth(&self) -> u32 {
        self.crawl_depth
    }

    /// Deduplication key: the parsed URL's serialization, exactly as the parser produced it.
    pub fn identity_key(&self) -> &str {
        self.request_url.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn options(request_url: &str, referer_url: &str) -> RequestOptions {
        RequestOptions {
            request_url: Some(request_url.to_string()),
            referer_url: Some(referer_url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_derives_defaults() {
        let request = CrawlRequest::build(RequestOptions {
            referer_depth: 2,
            ..options("http://sub.example.com/page.html", "http://example.com/")
        })
        .unwrap();

        assert_eq!(
            request.request_url().as_str(),
            "http://sub.example.com/page.html"
        );
        assert_eq!(request.referer_url().as_str(), "http://example.com/");
        assert_eq!(request.top_private_domain(), "example.com");
        assert_eq!(request.crawl_depth(), 3);
    }

    #[test]
    fn test_build_explicit_overrides() {
        let request = CrawlRequest::build(RequestOptions {
            referer_depth: 5,
            crawl_depth: Some(1),
            top_private_domain: Some("root-url.com".to_string()),
            ..options("http://root-url.com", "http://root-url.com")
        })
        .unwrap();

        assert_eq!(request.crawl_depth(), 1);
        assert_eq!(request.top_private_domain(), "root-url.com");
    }

    #[test]
    fn test_build_default_referer_depth_is_seed_level() {
        let request =
            CrawlRequest::build(options("http://root-url.com/child1.html", "http://root-url.com"))
                .unwrap();
        assert_eq!(request.crawl_depth(), 1);
    }

    #[test]
    fn test_build_depth_saturates() {
        let request = CrawlRequest::build(RequestOptions {
            referer_depth: u32::MAX,
            ..options("http://example.com/a", "http://example.com/")
        })
        .unwrap();
        assert_eq!(request.crawl_depth(), u32::MAX);
    }

    #[rstest]
    #[case(None, Some("http://example.com"), "request_url")]
    #[case(Some("http://example.com"), None, "referer_url")]
    #[case(None, None, "request_url")]
    fn test_build_missing_field(
        #[case] request_url: Option<&str>,
        #[case] referer_url: Option<&str>,
        #[case] expected: &'static str,
    ) {
        let result = CrawlRequest::build(RequestOptions {
            request_url: request_url.map(str::to_string),
            referer_url: referer_url.map(str::to_string),
            ..Default::default()
        });
        assert_eq!(
            result.unwrap_err(),
            RequestError::MissingField { field: expected }
        );
    }

    #[rstest]
    #[case("not a url", "http://example.com")]
    #[case("/relative/path", "http://example.com")]
    #[case("http://example.com", "::::")]
    #[case("http://192.168.0.1/admin", "http://example.com")]
    #[case("http://localhost:8080/", "http://example.com")]
    #[case("mailto:someone@example.com", "http://example.com")]
    #[case("http://./", "http://example.com")]
    fn test_build_invalid_url(#[case] request_url: &str, #[case] referer_url: &str) {
        let result = CrawlRequest::build(options(request_url, referer_url));
        assert!(
            matches!(result, Err(RequestError::InvalidUrl { .. })),
            "expected InvalidUrl for {} / {}: {:?}",
            request_url,
            referer_url,
            result
        );
    }

    #[test]
    fn test_explicit_domain_skips_derivation() {
        // A supplied domain is trusted, so IP hosts can still be used for fixtures.
        let request = CrawlRequest::build(RequestOptions {
            top_private_domain: Some("intranet".to_string()),
            ..options("http://10.0.0.1/", "http://10.0.0.1/")
        })
        .unwrap();
        assert_eq!(request.top_private_domain(), "intranet");
    }

    #[test]
    fn test_seed() {
        let url = Url::parse("http://www.root-url.com").unwrap();
        let seed = CrawlRequest::seed(&url).unwrap();

        assert_eq!(seed.request_url(), &url);
        assert_eq!(seed.referer_url(), &url);
        assert_eq!(seed.top_private_domain(), "root-url.com");
        assert_eq!(seed.crawl_depth(), 0);
    }

    #[test]
    fn test_child_of() {
        let seed = CrawlRequest::seed(&Url::parse("http://root-url.com").unwrap()).unwrap();
        let child = CrawlRequest::child_of(&seed, "http://root-url.com/child1.html").unwrap();
        let grandchild =
            CrawlRequest::child_of(&child, "http://blog.root-url.com/post#comments").unwrap();

        assert_eq!(child.referer_url(), seed.request_url());
        assert_eq!(child.crawl_depth(), 1);
        assert_eq!(grandchild.referer_url(), child.request_url());
        assert_eq!(grandchild.crawl_depth(), 2);
        assert_eq!(grandchild.top_private_domain(), "root-url.com");
    }

    #[test]
    fn test_identity_key_is_parsed_form() {
        let request =
            CrawlRequest::build(options("HTTP://Root-URL.com", "http://root-url.com")).unwrap();
        assert_eq!(request.identity_key(), "http://root-url.com/");
    }

    #[test]
    fn test_serialize_for_collaborators() {
        let seed = CrawlRequest::seed(&Url::parse("http://root-url.com").unwrap()).unwrap();
        let json = serde_json::to_value(&seed).unwrap();

        assert_eq!(json["request_url"], "http://root-url.com/");
        assert_eq!(json["top_private_domain"], "root-url.com");
        assert_eq!(json["crawl_depth"], 0);
    }
}
