//! Upstream HTTP gateway shared by all domain tools.
//!
//! Every tool invocation maps to exactly one outbound HTTP request. The
//! gateway encodes parameters as a query string for GET requests and as a
//! JSON body for POST requests, and returns the response body as text.
//!
//! The HTTP status code is deliberately not inspected: upstream error
//! payloads pass through to the caller unchanged.

use serde_json::Value;
use thiserror::Error;

/// Result type for gateway operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Errors that can occur while talking to an upstream service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The outbound request failed outright (DNS, connect, read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A parameter could not be encoded into the query string.
    #[error("Query encoding failed: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),
}

/// HTTP method used for an upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamMethod {
    Get,
    Post,
}

/// One outbound request, relative to a gateway's base URL.
///
/// Parameters keep their insertion order; some upstreams are sensitive to
/// query parameter ordering.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: UpstreamMethod,
    pub path: String,
    pub params: Vec<(String, Value)>,
}

impl UpstreamRequest {
    /// Create a GET request for the given relative path.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: UpstreamMethod::Get,
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Create a POST request for the given relative path.
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: UpstreamMethod::Post,
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter, preserving insertion order.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Encode the parameters as a query string.
    ///
    /// Values are coerced to plain strings: strings are taken verbatim,
    /// numbers and booleans through their display form.
    pub fn query_string(&self) -> UpstreamResult<String> {
        let pairs: Vec<(&str, String)> = self
            .params
            .iter()
            .map(|(name, value)| (name.as_str(), value_to_string(value)))
            .collect();
        Ok(serde_urlencoded::to_string(pairs)?)
    }

    /// Collect the parameters into a single JSON object for a POST body.
    pub fn body(&self) -> Value {
        Value::Object(self.params.iter().cloned().collect())
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Gateway to one upstream origin.
///
/// Cheap to construct; tools build one per invocation, so no state is
/// shared across concurrent calls.
#[derive(Debug, Clone)]
pub struct UpstreamGateway {
    base_url: String,
    http: reqwest::Client,
}

impl UpstreamGateway {
    /// Create a gateway for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// The full URL a request would be sent to.
    pub fn url_for(&self, request: &UpstreamRequest) -> UpstreamResult<String> {
        let mut url = format!("{}{}", self.base_url, request.path);
        if request.method == UpstreamMethod::Get && !request.params.is_empty() {
            url.push('?');
            url.push_str(&request.query_string()?);
        }
        Ok(url)
    }

    /// Send the request and return the response body as text.
    ///
    /// The status code is not interpreted as success or failure; callers
    /// receive whatever body the upstream produced.
    pub async fn send(&self, request: &UpstreamRequest) -> UpstreamResult<String> {
        let url = self.url_for(request)?;
        let response = match request.method {
            UpstreamMethod::Get => self.http.get(&url).send().await?,
            UpstreamMethod::Post => self.http.post(&url).json(&request.body()).send().await?,
        };
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::RawQuery;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};

    fn gateway(base: &str) -> UpstreamGateway {
        UpstreamGateway::new(base.to_string())
    }

    #[test]
    fn test_query_string_preserves_order() {
        let request = UpstreamRequest::get("/ontology/go/search")
            .param("query", "apoptosis")
            .param("limit", 25)
            .param("page", 1);
        assert_eq!(
            request.query_string().unwrap(),
            "query=apoptosis&limit=25&page=1"
        );
    }

    #[test]
    fn test_query_string_escapes_values() {
        let request = UpstreamRequest::get("/search").param("query", "heat shock");
        assert_eq!(request.query_string().unwrap(), "query=heat+shock");
    }

    #[test]
    fn test_url_without_params_has_no_query() {
        let request = UpstreamRequest::get("/BioC_json/12345/unicode");
        let url = gateway("https://example.org").url_for(&request).unwrap();
        assert_eq!(url, "https://example.org/BioC_json/12345/unicode");
    }

    #[test]
    fn test_post_body_collects_params() {
        let request = UpstreamRequest::post("/searches")
            .param("searchConfig", serde_json::json!({"parameters": {"q": "kinase"}}))
            .param("reportConfig", serde_json::json!({"tables": []}));
        let body = request.body();
        assert_eq!(
            body.pointer("/searchConfig/parameters/q").unwrap(),
            "kinase"
        );
        assert!(body.pointer("/reportConfig/tables").unwrap().is_array());
    }

    async fn spawn_echo_server() -> String {
        let app = Router::new().route(
            "/echo",
            get(|RawQuery(query): RawQuery| async move { query.unwrap_or_default() })
                .post(|Json(body): Json<serde_json::Value>| async move { body.to_string() }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_get_sends_query_params() {
        let base = spawn_echo_server().await;
        let request = UpstreamRequest::get("/echo")
            .param("query", "apoptosis")
            .param("limit", 25);
        let body = gateway(&base).send(&request).await.unwrap();
        assert_eq!(body, "query=apoptosis&limit=25");
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let base = spawn_echo_server().await;
        let request =
            UpstreamRequest::post("/echo").param("searchConfig", serde_json::json!({"a": 1}));
        let body = gateway(&base).send(&request).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value.pointer("/searchConfig/a").unwrap(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status_body_passes_through() {
        let app = Router::new().route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, "no such term") }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let request = UpstreamRequest::get("/missing");
        let body = gateway(&format!("http://{}", addr))
            .send(&request)
            .await
            .unwrap();
        assert_eq!(body, "no such term");
    }

    #[tokio::test]
    async fn test_concurrent_calls_do_not_cross_talk() {
        let base = spawn_echo_server().await;
        let gw = gateway(&base);

        let calls = (0..8).map(|i| {
            let gw = gw.clone();
            async move {
                let request = UpstreamRequest::get("/echo").param("id", format!("term-{}", i));
                (i, gw.send(&request).await.unwrap())
            }
        });

        for (i, body) in futures::future::join_all(calls).await {
            assert_eq!(body, format!("id=term-{}", i));
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_an_error() {
        // Nothing listens on this port.
        let request = UpstreamRequest::get("/echo");
        let result = gateway("http://127.0.0.1:1").send(&request).await;
        assert!(matches!(result, Err(UpstreamError::Transport(_))));
    }
}
