//! Remote Text Fetching
//!
//! Plain-text GETs against published spreadsheet exports and similar
//! endpoints. Responses are never cached: every request carries a `t=<ms>`
//! query parameter.

use std::time::Duration;

use thiserror::Error;

/// Default request timeout for remote text sources
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote fetch failures
#[derive(Debug, Error)]
pub enum FetchError {
    /// Reference is not an http(s) URL
    #[error("Not a fetchable reference: {0}")]
    NotFetchable(String),

    /// Connection, DNS, TLS or timeout failure
    #[error("Request failed: {0}")]
    Request(String),

    /// Server answered with a non-success status
    #[error("Remote returned status {0}")]
    Status(u16),

    /// Body could not be read as text
    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Whether `reference` looks like something we can GET.
#[inline]
pub fn is_fetchable(reference: &str) -> bool {
    reference.starts_with("http")
}

/// Add the cache-defeating `t` parameter to the query of `url`.
///
/// A `#fragment` stays at the end, since it is never sent to the server.
pub fn with_cache_buster(url: &str, stamp_ms: i64) -> String {
    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };

    let separator = if base.contains('?') { '&' } else { '?' };
    let mut busted = format!("{base}{separator}t={stamp_ms}");
    if let Some(fragment) = fragment {
        busted.push('#');
        busted.push_str(fragment);
    }
    busted
}

/// Source of remote text payloads
#[trait_variant::make(TextSource: Send)]
pub trait LocalTextSource {
    /// GET `url` and return the body when the status is a success.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// `reqwest`-backed text source
#[derive(Debug, Clone)]
pub struct HttpTextSource {
    client: reqwest::Client,
}

impl HttpTextSource {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(Self { client })
    }
}

impl TextSource for HttpTextSource {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        if !is_fetchable(url) {
            return Err(FetchError::NotFetchable(url.to_string()));
        }

        let url = with_cache_buster(url, chrono::Utc::now().timestamp_millis());
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        tracing::debug!(bytes = body.len(), "Fetched remote text");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    use axum::extract::{RawQuery, State};
    use axum::http::StatusCode;
    use axum::{Router, routing::get};

    use super::{
        DEFAULT_FETCH_TIMEOUT, FetchError, HttpTextSource, TextSource, is_fetchable,
        with_cache_buster,
    };

    #[test]
    fn test_is_fetchable() {
        assert!(is_fetchable("https://docs.google.com/spreadsheets/d/e/x/pub?output=csv"));
        assert!(is_fetchable("http://localhost:8080/users.csv"));
        assert!(!is_fetchable(""));
        assert!(!is_fetchable("file:///etc/passwd"));
        assert!(!is_fetchable("users.csv"));
    }

    #[test]
    fn test_cache_buster_joins_existing_query() {
        assert_eq!(
            with_cache_buster("https://example.com/pub?output=csv", 42),
            "https://example.com/pub?output=csv&t=42"
        );
    }

    #[test]
    fn test_cache_buster_starts_query() {
        assert_eq!(
            with_cache_buster("https://example.com/users.csv", 7),
            "https://example.com/users.csv?t=7"
        );
    }

    #[test]
    fn test_cache_buster_goes_before_fragment() {
        assert_eq!(
            with_cache_buster("https://example.com/pub?output=csv#gid=0", 9),
            "https://example.com/pub?output=csv&t=9#gid=0"
        );
        assert_eq!(
            with_cache_buster("https://example.com/users.csv#top", 9),
            "https://example.com/users.csv?t=9#top"
        );
    }

    #[tokio::test]
    async fn test_http_source_rejects_non_http() {
        let source = HttpTextSource::new(DEFAULT_FETCH_TIMEOUT).unwrap();
        let err = source.fetch_text("ftp://example.com/x").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFetchable(_)));
    }

    type Queries = Arc<Mutex<Vec<String>>>;

    /// Local sheet server recording the query string of every request
    async fn fake_sheet_server() -> (SocketAddr, Queries) {
        let queries: Queries = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route(
                "/pub",
                get(
                    |State(queries): State<Queries>, RawQuery(query): RawQuery| async move {
                        queries.lock().unwrap().push(query.unwrap_or_default());
                        "User,Pass,Role,Status\nsam,pw,viewer,active"
                    },
                ),
            )
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "down") }),
            )
            .with_state(queries.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (addr, queries)
    }

    #[tokio::test]
    async fn test_fetch_sends_cache_buster_and_returns_body() {
        let (addr, queries) = fake_sheet_server().await;
        let source = HttpTextSource::new(DEFAULT_FETCH_TIMEOUT).unwrap();

        let body = source
            .fetch_text(&format!("http://{addr}/pub?output=csv"))
            .await
            .unwrap();
        assert!(body.ends_with("sam,pw,viewer,active"));

        let queries = queries.lock().unwrap().clone();
        assert_eq!(queries.len(), 1);
        let stamp = queries[0]
            .strip_prefix("output=csv&t=")
            .expect("cache buster appended to the existing query");
        assert!(stamp.parse::<i64>().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_error_status_maps_to_status() {
        let (addr, _queries) = fake_sheet_server().await;
        let source = HttpTextSource::new(DEFAULT_FETCH_TIMEOUT).unwrap();

        let err = source
            .fetch_text(&format!("http://{addr}/broken"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status(500)));
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_request() {
        // Reserve a port, then free it so nothing is listening there
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpTextSource::new(DEFAULT_FETCH_TIMEOUT).unwrap();
        let err = source
            .fetch_text(&format!("http://{addr}/pub"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }
}
