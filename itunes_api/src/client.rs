//! HTTP client for the iTunes catalog API.

use std::sync::OnceLock;

use reqwest::{header::USER_AGENT, Method, Request};
use url::Url;

use crate::{
    config::ClientConfig,
    query::{LookupQuery, Query, QueryArgs, SearchQuery},
    types::{Envelope, Record},
    Error,
};

static DEFAULT_HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Process-wide transport used by clients constructed without one.
///
/// `reqwest::Client` is reference counted, so every default-constructed
/// [`Client`] shares one connection pool.
pub fn default_http_client() -> reqwest::Client {
    DEFAULT_HTTP_CLIENT
        .get_or_init(reqwest::Client::new)
        .clone()
}

/// HTTP client for the iTunes catalog API.
///
/// Holds an immutable [`ClientConfig`] and a shared transport. Every call to
/// [`search`](Client::search) or [`lookup`](Client::lookup) issues exactly one
/// GET request; there is no caching, retrying or pagination. Timeouts are a
/// property of the transport passed in.
#[derive(Clone, Debug)]
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Client {
    /// Creates a client for the production API. With `None` the process
    /// default transport is used.
    pub fn new(http: Option<reqwest::Client>) -> Self {
        Self::with_config(ClientConfig::default(), http)
    }

    pub fn with_config(config: ClientConfig, http: Option<reqwest::Client>) -> Self {
        Self {
            config,
            http: http.unwrap_or_else(default_http_client),
        }
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let config = ClientConfig::default().with_base_url(base_url)?;
        Ok(Self::with_config(config, None))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        self.config.base_url()
    }

    pub fn user_agent(&self) -> &str {
        self.config.user_agent()
    }

    /// Resolves a path or URL against the base URL using RFC 3986 reference
    /// resolution: `/x` replaces the base path, `x` is appended to the base
    /// directory, and an absolute URL replaces the base entirely.
    pub fn resolve(&self, reference: &str) -> Result<Url, Error> {
        check_reference(reference)?;
        let url = self.config.base_url().join(reference).map_err(|e| {
            tracing::error!("Failed to resolve {:?}: {}", reference, e);
            Error::malformed(reference, e)
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.host().is_none() {
            return Err(Error::malformed(reference, "not an http(s) URL with a host"));
        }
        Ok(url)
    }

    /// Builds a request for `reference` with the identifying `User-Agent`
    /// attached. Catalog calls never carry a body.
    pub fn new_request(&self, method: Method, reference: &str) -> Result<Request, Error> {
        let url = self.resolve(reference)?;
        let request = self
            .http
            .request(method, url)
            .header(USER_AGENT, self.config.user_agent())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build request for {:?}: {}", reference, e);
                Error::malformed(reference, e)
            })?;
        Ok(request)
    }

    /// Runs the `search` endpoint and returns its result records.
    pub async fn search(&self, args: &QueryArgs) -> Result<Vec<Record>, Error> {
        Ok(self.search_envelope(args).await?.results)
    }

    /// Runs the `lookup` endpoint and returns its result records.
    pub async fn lookup(&self, args: &QueryArgs) -> Result<Vec<Record>, Error> {
        Ok(self.lookup_envelope(args).await?.results)
    }

    pub async fn search_envelope(&self, args: &QueryArgs) -> Result<Envelope, Error> {
        self.do_affiliate_request(SearchQuery::ENDPOINT, args).await
    }

    pub async fn lookup_envelope(&self, args: &QueryArgs) -> Result<Envelope, Error> {
        self.do_affiliate_request(LookupQuery::ENDPOINT, args).await
    }

    pub async fn search_with(&self, query: &SearchQuery) -> Result<Vec<Record>, Error> {
        Ok(self.execute(query).await?.results)
    }

    pub async fn lookup_with(&self, query: &LookupQuery) -> Result<Vec<Record>, Error> {
        Ok(self.execute(query).await?.results)
    }

    /// Sends a typed query to its endpoint and returns the whole envelope.
    pub async fn execute<Q: Query>(&self, query: &Q) -> Result<Envelope, Error> {
        self.do_affiliate_request(Q::ENDPOINT, &query.to_args()).await
    }

    async fn do_affiliate_request(
        &self,
        endpoint: &str,
        args: &QueryArgs,
    ) -> Result<Envelope, Error> {
        let reference = if args.is_empty() {
            endpoint.to_string()
        } else {
            format!("{}?{}", endpoint, args.encode())
        };
        let request = self.new_request(Method::GET, &reference)?;
        tracing::debug!("GET {}", request.url());

        let resp = self.http.execute(request).await.map_err(|e| {
            tracing::error!("Failed to get {}: {}", endpoint, e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let envelope = Envelope::from_slice(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse {} response: {} | body: {}",
                endpoint,
                e,
                truncate_body(&body)
            );
            Error::Decode(e)
        })?;
        tracing::debug!(
            result_count = envelope.result_count,
            results = envelope.results.len(),
            "{} response decoded",
            endpoint
        );
        Ok(envelope)
    }
}

/// Rejects references that do not parse as an RFC 3986 URI reference but
/// that the WHATWG parser behind `Url::join` would silently accept.
fn check_reference(input: &str) -> Result<(), Error> {
    if let Some(c) = input.chars().find(|c| c.is_ascii_control()) {
        return Err(Error::malformed(input, format!("invalid control character {:?}", c)));
    }
    if input.starts_with(':') {
        return Err(Error::malformed(input, "missing protocol scheme"));
    }

    let head = input
        .split(|c: char| matches!(c, '/' | '?' | '#'))
        .next()
        .unwrap_or("");
    if let Some((scheme, _)) = head.split_once(':') {
        if !is_scheme(scheme) {
            return Err(Error::malformed(
                input,
                "first path segment in URL cannot contain colon",
            ));
        }
    }

    // Queries are passed through unvalidated; path and fragment are not.
    let (before_fragment, fragment) = input.split_once('#').unwrap_or((input, ""));
    let path = before_fragment.split('?').next().unwrap_or("");
    check_escapes(input, path)?;
    check_escapes(input, fragment)
}

fn check_escapes(input: &str, part: &str) -> Result<(), Error> {
    let bytes = part.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(Error::malformed(input, "invalid URL escape"));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        String::from_utf8_lossy(body).into_owned()
    } else {
        format!("{}...[truncated]", String::from_utf8_lossy(&body[..MAX]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

    #[test]
    fn new_client_uses_defaults() {
        let c = Client::new(None);
        assert_eq!(c.base_url().as_str(), DEFAULT_BASE_URL);
        assert_eq!(c.user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn new_request_resolves_relative_and_absolute_paths() {
        let c = Client::new(None);
        let out = format!("{}foo", DEFAULT_BASE_URL);

        let req = c.new_request(Method::GET, "foo").unwrap();
        assert_eq!(req.url().as_str(), out);

        let req = c.new_request(Method::GET, "/foo").unwrap();
        assert_eq!(req.url().as_str(), out);
        assert_eq!(req.method(), &Method::GET);
        assert!(req.body().is_none());
    }

    #[test]
    fn new_request_attaches_user_agent() {
        let c = Client::new(None);
        for reference in ["foo", "/foo", "search?term=x", "https://example.com/lookup"] {
            let req = c.new_request(Method::GET, reference).unwrap();
            assert_eq!(
                req.headers().get(USER_AGENT).unwrap().to_str().unwrap(),
                c.user_agent()
            );
        }
    }

    #[test]
    fn resolve_against_nested_base() {
        let c = Client::with_base_url("https://example.com/api/v1").unwrap();
        assert_eq!(
            c.resolve("search").unwrap().as_str(),
            "https://example.com/api/v1/search"
        );
        assert_eq!(
            c.resolve("/search").unwrap().as_str(),
            "https://example.com/search"
        );
        assert_eq!(
            c.resolve("../lookup?id=1").unwrap().as_str(),
            "https://example.com/api/lookup?id=1"
        );
        assert_eq!(
            c.resolve("http://other.example/x").unwrap().as_str(),
            "http://other.example/x"
        );
    }

    #[test]
    fn resolve_keeps_encoded_query() {
        let c = Client::new(None);
        let url = c.resolve("search?country=US&term=jack+johnson").unwrap();
        assert_eq!(url.path(), "/search");
        assert_eq!(url.query(), Some("country=US&term=jack+johnson"));
    }

    #[test]
    fn new_request_bad_url() {
        let c = Client::new(None);
        for bad in [":", ":foo", "1a:b/c", "foo%zz", "foo%4", "fo\no"] {
            let err = c.new_request(Method::GET, bad).unwrap_err();
            assert!(
                matches!(err, Error::MalformedUrl { .. }),
                "{:?} should be malformed, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn non_http_urls_are_malformed() {
        let c = Client::new(None);
        for bad in ["mailto:x@y.z", "file:///etc/hosts", "ftp://example.com/search"] {
            let err = c.new_request(Method::GET, bad).unwrap_err();
            assert!(
                matches!(err, Error::MalformedUrl { .. }),
                "{:?} should be malformed, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn query_escapes_are_not_validated() {
        let c = Client::new(None);
        let req = c.new_request(Method::GET, "search?q=%zz").unwrap();
        assert_eq!(req.url().path(), "/search");
        assert_eq!(req.url().query(), Some("q=%zz"));

        let err = c.new_request(Method::GET, "search?q=1#frag%z").unwrap_err();
        assert!(matches!(err, Error::MalformedUrl { .. }));
    }

    #[test]
    fn colon_after_first_segment_is_fine() {
        let c = Client::new(None);
        let url = c.resolve("a/b:c").unwrap();
        assert_eq!(url.as_str(), "https://itunes.apple.com/a/b:c");
        let url = c.resolve("search?term=a:b").unwrap();
        assert_eq!(url.query(), Some("term=a:b"));
    }

    #[test]
    fn scheme_detection() {
        assert!(is_scheme("https"));
        assert!(is_scheme("svn+ssh"));
        assert!(!is_scheme(""));
        assert!(!is_scheme("1http"));
        assert!(!is_scheme("ht tp"));
    }

    #[test]
    fn truncate_body_limits_length() {
        let long = vec![b'x'; 2500];
        let out = truncate_body(&long);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
        assert_eq!(truncate_body(b"short"), "short");
    }
}
