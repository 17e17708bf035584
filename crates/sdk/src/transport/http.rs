//! HTTP transport layer for the musclesworked SDK.

use crate::config::ClientConfig;
use crate::error::{MusclesWorkedError, MusclesWorkedResult};
use reqwest::{header, Client, Method};
use std::sync::Arc;
use tracing::{debug, warn};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// A single outbound API call, built fresh for every operation.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, already escaped, e.g. `/api/v1/exercises/squat/muscles`.
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
    /// Extra headers; these take precedence over the client defaults.
    pub headers: header::HeaderMap,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: header::HeaderMap::new(),
        }
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::get(path)
        }
    }

    /// Append one query parameter.
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Append query parameters.
    pub fn with_query(mut self, params: Vec<(&'static str, String)>) -> Self {
        self.query.extend(params);
        self
    }

    /// Set a header that overrides the client defaults.
    pub fn header(mut self, name: header::HeaderName, value: header::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> MusclesWorkedResult<Self> {
        let mut headers = header::HeaderMap::new();

        let mut api_key = header::HeaderValue::from_str(&config.api_key)
            .map_err(|_| MusclesWorkedError::Config("Invalid API key format".to_string()))?;
        api_key.set_sensitive(true);
        headers.insert(header::HeaderName::from_static(API_KEY_HEADER), api_key);

        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|_| MusclesWorkedError::Config("Invalid user agent".to_string()))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, config })
    }

    /// Configuration this transport was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a request and return the JSON body untouched.
    ///
    /// Non-success statuses become [`MusclesWorkedError::Api`]; failures before
    /// a status is known become [`MusclesWorkedError::Http`]. One attempt only.
    pub async fn execute(&self, request: ApiRequest) -> MusclesWorkedResult<serde_json::Value> {
        let url = self.config.endpoint(&request.path);
        debug!(method = %request.method, url = %url, "API request");

        let mut builder = self.client.request(request.method, &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder = builder.headers(request.headers);

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), url = %url, "API request failed");
            return Err(MusclesWorkedError::from_response(status, &body));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_transport(base_url: &str) -> HttpTransport {
        let config = Arc::new(ClientConfig::new(base_url, "mw_test_key"));
        HttpTransport::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_get_returns_body_verbatim() {
        let server = MockServer::start().await;
        let payload = json!({
            "exercise": "barbell_squat",
            "muscles": {"primary": ["quadriceps"], "secondary": [], "stabilizer": ["erector_spinae"]},
            "score": 0.75
        });

        Mock::given(method("GET"))
            .and(path("/api/v1/exercises/barbell_squat/muscles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let result = transport
            .execute(ApiRequest::get("/api/v1/exercises/barbell_squat/muscles"))
            .await
            .unwrap();

        assert_eq!(result, payload);
    }

    #[tokio::test]
    async fn test_default_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/search/muscles"))
            .and(header("X-Api-Key", "mw_test_key"))
            .and(header("Content-Type", "application/json"))
            .and(header("User-Agent", crate::config::DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let result = transport
            .execute(ApiRequest::get("/api/v1/search/muscles"))
            .await
            .unwrap();

        assert_eq!(result, json!([]));
    }

    #[tokio::test]
    async fn test_request_headers_override_defaults() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/search/muscles"))
            .and(header("User-Agent", "custom-agent/9.9"))
            .and(header("X-Api-Key", "mw_other_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let request = ApiRequest::get("/api/v1/search/muscles")
            .header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_static("custom-agent/9.9"),
            )
            .header(
                reqwest::header::HeaderName::from_static(API_KEY_HEADER),
                reqwest::header::HeaderValue::from_static("mw_other_key"),
            );

        let result = transport.execute(request).await.unwrap();
        assert_eq!(result, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/workouts/analyze"))
            .and(body_json(json!({"exercises": ["squat", "deadlift"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"coverage": 0.4})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let result = transport
            .execute(ApiRequest::post(
                "/api/v1/workouts/analyze",
                json!({"exercises": ["squat", "deadlift"]}),
            ))
            .await
            .unwrap();

        assert_eq!(result, json!({"coverage": 0.4}));
    }

    #[tokio::test]
    async fn test_query_parameters_are_encoded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/search/exercises"))
            .and(query_param("q", "bench press"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "barbell_bench_press"}])))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let result = transport
            .execute(ApiRequest::get("/api/v1/search/exercises").query("q", "bench press"))
            .await
            .unwrap();

        assert_eq!(result[0]["id"], "barbell_bench_press");
    }

    #[tokio::test]
    async fn test_error_detail_from_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/exercises/nope/muscles"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "exercise not found"})),
            )
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let result = transport
            .execute(ApiRequest::get("/api/v1/exercises/nope/muscles"))
            .await;

        match result {
            Err(MusclesWorkedError::Api { status, detail }) => {
                assert_eq!(status, 404);
                assert_eq!(detail, "exercise not found");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_without_json_uses_reason_phrase() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/search/muscles"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let transport = create_transport(&server.uri());
        let result = transport.execute(ApiRequest::get("/api/v1/search/muscles")).await;

        match result {
            Err(MusclesWorkedError::Api { status, detail }) => {
                assert_eq!(status, 503);
                assert_eq!(detail, "Service Unavailable");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_trailing_slashes_in_base_url() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/search/muscles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&server)
            .await;

        let plain = create_transport(&server.uri());
        let slashed = create_transport(&format!("{}///", server.uri()));

        plain.execute(ApiRequest::get("/api/v1/search/muscles")).await.unwrap();
        slashed.execute(ApiRequest::get("/api/v1/search/muscles")).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url.path(), requests[1].url.path());
    }

    #[tokio::test]
    async fn test_base_url_path_prefix_is_kept() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/proxy/api/v1/search/muscles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let transport = create_transport(&format!("{}/proxy/", server.uri()));
        transport.execute(ApiRequest::get("/api/v1/search/muscles")).await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Nothing listens on port 1.
        let transport = create_transport("http://127.0.0.1:1");
        let result = transport.execute(ApiRequest::get("/api/v1/search/muscles")).await;

        match result {
            Err(MusclesWorkedError::Http(_)) => {}
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_api_key_is_rejected() {
        let config = Arc::new(ClientConfig::new("http://localhost", "bad\nkey"));
        let result = HttpTransport::new(config);

        assert!(matches!(result, Err(MusclesWorkedError::Config(_))));
    }
}
