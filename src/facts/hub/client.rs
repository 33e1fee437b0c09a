//! Minimal HTTP client for the hub and hosting APIs.

use crate::facts::ProviderResult;
use core::time::Duration;
use ohno::{EnrichableExt, app_err};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

const USER_AGENT: &str = concat!("trustcard/", env!("CARGO_PKG_VERSION"));

/// Result of an API call
#[derive(Debug)]
pub enum ApiResult<T> {
    /// Request succeeded
    Success(T),

    /// Rate limited by the remote service
    RateLimited,

    /// The service refused the request for another reason (403 with quota left)
    Forbidden,

    /// The requested resource was not found (404)
    NotFound,

    /// Request failed
    Failed(ohno::AppError),
}

impl<T> ApiResult<T> {
    /// Fold the call outcome into a provider result, naming `what` in the messages.
    pub fn into_provider_result(self, what: &str) -> ProviderResult<T> {
        match self {
            Self::Success(data) => ProviderResult::Found(data),
            Self::RateLimited => ProviderResult::unavailable(format!("rate limited while fetching {what}")),
            Self::Forbidden => ProviderResult::unavailable(format!("access to {what} was refused")),
            Self::NotFound => ProviderResult::unavailable(format!("{what} not found")),
            Self::Failed(e) => ProviderResult::error(e.enrich_with(|| format!("fetching {what}"))),
        }
    }
}

#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
}

impl Client {
    /// Create a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> crate::Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Make a GET request and classify the result
    pub async fn api_call(&self, url: &str, accept: Option<&'static str>) -> ApiResult<reqwest::Response> {
        let mut request = self.client.get(url);
        if let Some(accept) = accept {
            request = request.header(ACCEPT, HeaderValue::from_static(accept));
        }

        let resp = match request.send().await {
            Ok(r) => r,
            Err(e) => return ApiResult::Failed(e.into()),
        };

        let status = resp.status();
        if status.is_success() {
            return ApiResult::Success(resp);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return ApiResult::RateLimited;
        }

        // GitHub also answers 403 for gated content and oversized contributor lists
        if status == StatusCode::FORBIDDEN {
            let exhausted = resp
                .headers()
                .get(RATE_LIMIT_REMAINING)
                .is_none_or(|remaining| remaining.as_bytes() == b"0");
            return if exhausted { ApiResult::RateLimited } else { ApiResult::Forbidden };
        }

        if status == StatusCode::NOT_FOUND {
            return ApiResult::NotFound;
        }

        match resp.error_for_status() {
            Err(e) => ApiResult::Failed(e.into()),
            Ok(_) => ApiResult::Failed(app_err!("unexpected HTTP status {status}")),
        }
    }

    /// GET a JSON document
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        match self.api_call(url, None).await {
            ApiResult::Success(resp) => match resp.json::<T>().await {
                Ok(data) => ApiResult::Success(data),
                Err(e) => ApiResult::Failed(ohno::AppError::from(e).enrich_with(|| format!("decoding response from {url}"))),
            },
            ApiResult::RateLimited => ApiResult::RateLimited,
            ApiResult::Forbidden => ApiResult::Forbidden,
            ApiResult::NotFound => ApiResult::NotFound,
            ApiResult::Failed(e) => ApiResult::Failed(e),
        }
    }

    /// GET a text body
    pub async fn get_text(&self, url: &str, accept: Option<&'static str>) -> ApiResult<String> {
        match self.api_call(url, accept).await {
            ApiResult::Success(resp) => match resp.text().await {
                Ok(text) => ApiResult::Success(text),
                Err(e) => ApiResult::Failed(ohno::AppError::from(e).enrich_with(|| format!("reading response body from {url}"))),
            },
            ApiResult::RateLimited => ApiResult::RateLimited,
            ApiResult::Forbidden => ApiResult::Forbidden,
            ApiResult::NotFound => ApiResult::NotFound,
            ApiResult::Failed(e) => ApiResult::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_with(status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resource"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    fn client() -> Client {
        Client::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_get_text_success() {
        let server = server_with(200, "hello").await;
        let result = client().get_text(&format!("{}/resource", server.uri()), None).await;
        assert!(matches!(result, ApiResult::Success(ref text) if text == "hello"));
    }

    #[tokio::test]
    async fn test_not_found() {
        let server = server_with(404, "").await;
        let result = client().get_text(&format!("{}/resource", server.uri()), None).await;
        assert!(matches!(result, ApiResult::NotFound));
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let server = server_with(429, "").await;
        let result = client().get_text(&format!("{}/resource", server.uri()), None).await;
        assert!(matches!(result, ApiResult::RateLimited));
    }

    #[tokio::test]
    async fn test_forbidden_without_quota_header_is_rate_limited() {
        let server = server_with(403, "").await;
        let result = client().get_text(&format!("{}/resource", server.uri()), None).await;
        assert!(matches!(result, ApiResult::RateLimited));
    }

    async fn forbidden_with_remaining(remaining: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resource"))
            .respond_with(
                ResponseTemplate::new(403)
                    .insert_header("x-ratelimit-remaining", remaining)
                    .set_body_string(r#"{"message":"The history or contributor list is too large to list contributors for this repository via the API."}"#),
            )
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_forbidden_with_exhausted_quota_is_rate_limited() {
        let server = forbidden_with_remaining("0").await;
        let result = client().get_json::<Vec<u32>>(&format!("{}/resource", server.uri())).await;
        assert!(matches!(result, ApiResult::RateLimited));
    }

    #[tokio::test]
    async fn test_forbidden_with_quota_left_is_refused() {
        let server = forbidden_with_remaining("4987").await;
        let result = client().get_json::<Vec<u32>>(&format!("{}/resource", server.uri())).await;
        assert!(matches!(result, ApiResult::Forbidden));

        match result.into_provider_result("contributors of 'o/r'") {
            ProviderResult::Unavailable(reason) => assert_eq!(&*reason, "access to contributors of 'o/r' was refused"),
            other => panic!("Expected Unavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_fails() {
        let server = server_with(500, "").await;
        let result = client().get_text(&format!("{}/resource", server.uri()), None).await;
        assert!(matches!(result, ApiResult::Failed(_)));
    }

    #[tokio::test]
    async fn test_get_json_decode_failure() {
        let server = server_with(200, "not json").await;
        let result = client().get_json::<Vec<u32>>(&format!("{}/resource", server.uri())).await;
        assert!(matches!(result, ApiResult::Failed(_)));
    }

    #[tokio::test]
    async fn test_accept_header_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resource"))
            .and(header("accept", "application/vnd.github.raw+json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("raw"))
            .mount(&server)
            .await;

        let result = client()
            .get_text(&format!("{}/resource", server.uri()), Some("application/vnd.github.raw+json"))
            .await;
        assert!(matches!(result, ApiResult::Success(ref text) if text == "raw"));
    }

    #[tokio::test]
    async fn test_unreachable_host_fails() {
        let result = client().get_text("http://127.0.0.1:1/resource", None).await;
        assert!(matches!(result, ApiResult::Failed(_)));
    }

    #[test]
    fn test_into_provider_result() {
        assert_eq!(ApiResult::Success(5).into_provider_result("thing").as_ref(), Some(&5));
        assert!(matches!(
            ApiResult::<u8>::NotFound.into_provider_result("thing"),
            ProviderResult::Unavailable(_)
        ));
        assert!(matches!(
            ApiResult::<u8>::RateLimited.into_provider_result("thing"),
            ProviderResult::Unavailable(_)
        ));
        assert!(matches!(
            ApiResult::<u8>::Failed(app_err!("boom")).into_provider_result("thing"),
            ProviderResult::Error(_)
        ));
    }
}
