//! HTTP client for the USAJobs REST API.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, HOST, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    endpoint::{CodeListEndpoint, SEARCH_PATH},
    query::{CodeListQuery, Query, QueryParams, SearchQuery},
    types::{ApiResponse, CodeListResponse, SearchResponse},
    Error,
};

/// Production API root. Endpoint paths are appended to it as-is.
pub const DEFAULT_BASE_URL: &str = "https://data.usajobs.gov/api";

/// Host the API expects in the `Host` header, whatever the base URL is.
pub const DEFAULT_HOST: &str = "data.usajobs.gov";

const AUTHORIZATION_KEY: &str = "authorization-key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the USAJobs API.
///
/// Holds the credentials and a shared `reqwest::Client`. It is read-only
/// after construction apart from [`Client::set_base_url`], so one instance
/// can serve concurrent calls.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_api_url: String,
    host: HeaderValue,
    user_agent: HeaderValue,
    api_token: HeaderValue,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_api_url", &self.base_api_url)
            .field("host", &self.host)
            .field("user_agent", &self.user_agent)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

impl Client {
    /// Creates a client for the production API.
    ///
    /// `user_agent` is the email address registered with USAJobs and
    /// `api_token` the key it issued. Both are required.
    pub fn new(user_agent: &str, api_token: &str) -> Result<Self, Error> {
        Self::builder(user_agent, api_token).build()
    }

    /// Starts a builder for overriding the base URL, host, or transport.
    pub fn builder(user_agent: &str, api_token: &str) -> ClientBuilder {
        ClientBuilder {
            user_agent: user_agent.to_string(),
            api_token: api_token.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            http: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    /// Redirects calls to another server. Meant for pointing a client at a
    /// local test double.
    pub fn set_base_url(&mut self, base_url: &str) {
        self.base_api_url = base_url.to_string();
    }

    /// Builds the GET request for `path` with the encoded options appended.
    ///
    /// The URL is `base + path`, plus `?query` only when at least one
    /// parameter was encoded. The request carries exactly the `Host`,
    /// `User-Agent`, and `Authorization-Key` headers.
    pub fn build_request<Q>(&self, path: &str, query: Option<&Q>) -> Result<reqwest::Request, Error>
    where
        Q: Query,
    {
        let params = match query {
            Some(query) => query.to_query_params()?,
            None => QueryParams::default(),
        };
        let url = self.get_url(path, &params)?;

        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(HOST, self.host.clone());
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers.insert(
            HeaderName::from_static(AUTHORIZATION_KEY),
            self.api_token.clone(),
        );

        let mut request = reqwest::Request::new(Method::GET, url);
        *request.headers_mut() = headers;
        Ok(request)
    }

    fn get_url(&self, path: &str, params: &QueryParams) -> Result<Url, Error> {
        let mut combined = format!("{}{}", self.base_api_url, path);
        if !params.is_empty() {
            combined.push('?');
            combined.push_str(&params.to_query_string());
        }
        Url::parse(&combined).map_err(|e| {
            Error::RequestConstruction(format!("invalid URL {:?}: {}", combined, e))
        })
    }

    /// Runs one call: encode, build, send, then decode the body into `T`.
    ///
    /// A non-success status is returned in [`ApiResponse::status`], not as
    /// an error; the body is decoded either way. If decoding fails the error
    /// carries the status, headers, and body.
    pub async fn call<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let request = self.build_request(path, query)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let resp = self.http.execute(request).await.map_err(|e| {
            tracing::debug!("Failed to get resource: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(|e| {
            tracing::debug!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;
        tracing::debug!(status = %status, bytes = body.len(), "received response");

        decode(status, headers, &body)
    }

    /// Fetches any code list.
    pub async fn code_list(
        &self,
        endpoint: CodeListEndpoint,
        query: Option<&CodeListQuery>,
    ) -> Result<ApiResponse<CodeListResponse>, Error> {
        self.call(endpoint.path(), query).await
    }

    /// Searches job announcements.
    pub async fn search(
        &self,
        query: Option<&SearchQuery>,
    ) -> Result<ApiResponse<SearchResponse>, Error> {
        self.call(SEARCH_PATH, query).await
    }

    pub async fn academic_honors(
        &self,
        query: Option<&CodeListQuery>,
    ) -> Result<ApiResponse<CodeListResponse>, Error> {
        self.code_list(CodeListEndpoint::AcademicHonors, query).await
    }

    pub async fn academic_levels(
        &self,
        query: Option<&CodeListQuery>,
    ) -> Result<ApiResponse<CodeListResponse>, Error> {
        self.code_list(CodeListEndpoint::AcademicLevels, query).await
    }

    pub async fn agency_subelements(
        &self,
        query: Option<&CodeListQuery>,
    ) -> Result<ApiResponse<CodeListResponse>, Error> {
        self.code_list(CodeListEndpoint::AgencySubelements, query).await
    }

    pub async fn application_statuses(
        &self,
        query: Option<&CodeListQuery>,
    ) -> Result<ApiResponse<CodeListResponse>, Error> {
        self.code_list(CodeListEndpoint::ApplicationStatuses, query)
            .await
    }

    pub async fn occupational_series(
        &self,
        query: Option<&CodeListQuery>,
    ) -> Result<ApiResponse<CodeListResponse>, Error> {
        self.code_list(CodeListEndpoint::OccupationalSeries, query)
            .await
    }

    pub async fn position_opening_statuses(
        &self,
        query: Option<&CodeListQuery>,
    ) -> Result<ApiResponse<CodeListResponse>, Error> {
        self.code_list(CodeListEndpoint::PositionOpeningStatuses, query)
            .await
    }

    pub async fn postal_codes(
        &self,
        query: Option<&CodeListQuery>,
    ) -> Result<ApiResponse<CodeListResponse>, Error> {
        self.code_list(CodeListEndpoint::PostalCodes, query).await
    }
}

/// Builder returned by [`Client::builder`].
pub struct ClientBuilder {
    user_agent: String,
    api_token: String,
    base_url: String,
    host: String,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Overrides the `Host` header value.
    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// Uses the given transport instead of the default one. Timeouts,
    /// proxies, and connection pooling are configured on it.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        if self.user_agent.is_empty() || self.api_token.is_empty() {
            return Err(Error::Configuration(
                "user agent and api token values required".to_string(),
            ));
        }

        let user_agent = header_value("user agent", &self.user_agent)?;
        let host = header_value("host", &self.host)?;
        let mut api_token = header_value("api token", &self.api_token)?;
        api_token.set_sensitive(true);

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .map_err(|e| {
                    Error::Configuration(format!("failed to build HTTP client: {}", e))
                })?,
        };

        Ok(Client {
            http,
            base_api_url: self.base_url,
            host,
            user_agent,
            api_token,
        })
    }
}

fn header_value(what: &str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::Configuration(format!("{} is not a valid header value", what)))
}

/// Decodes `body` into `T`. Unknown fields are ignored and missing ones
/// default, so only syntax errors and hard type mismatches fail.
fn decode<T>(status: StatusCode, headers: HeaderMap, body: &[u8]) -> Result<ApiResponse<T>, Error>
where
    T: DeserializeOwned,
{
    let status_text = status.canonical_reason().unwrap_or_default().to_string();
    match serde_json::from_slice::<T>(body) {
        Ok(data) => Ok(ApiResponse {
            status,
            status_text,
            headers,
            data,
        }),
        Err(source) => {
            let body = truncate_body(&String::from_utf8_lossy(body));
            tracing::warn!("Failed to parse resource: {} | status: {}", source, status);
            Err(Error::Decoding {
                status,
                status_text,
                headers,
                body,
                source,
            })
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new("tester@example.com", "tok123").unwrap()
    }

    #[test]
    fn new_requires_both_credentials() {
        assert!(matches!(
            Client::new("", "tok123"),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Client::new("tester@example.com", ""),
            Err(Error::Configuration(_))
        ));
        assert!(Client::new("tester@example.com", "tok123").is_ok());
    }

    #[test]
    fn new_accepts_any_non_empty_credentials() {
        assert!(Client::new(" ", " ").is_ok());
        assert!(Client::new("x", "y").is_ok());
    }

    #[test]
    fn new_rejects_credentials_that_cannot_be_headers() {
        assert!(matches!(
            Client::new("tester@example.com", "tok\n123"),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn debug_hides_token() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains("tok123"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn request_without_options_has_no_query() {
        let request = client()
            .build_request::<SearchQuery>("/search/", None)
            .unwrap();
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url().as_str(), "https://data.usajobs.gov/api/search/");
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn request_with_only_empty_options_has_no_query() {
        let request = client()
            .build_request("/search", Some(&SearchQuery::default()))
            .unwrap();
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn request_carries_exactly_the_identity_headers() {
        for endpoint in [CodeListEndpoint::AcademicHonors, CodeListEndpoint::PostalCodes] {
            let request = client()
                .build_request::<CodeListQuery>(endpoint.path(), None)
                .unwrap();
            let headers = request.headers();
            assert_eq!(headers.len(), 3);
            assert_eq!(headers["host"], "data.usajobs.gov");
            assert_eq!(headers["user-agent"], "tester@example.com");
            assert_eq!(headers["authorization-key"], "tok123");
        }
    }

    #[test]
    fn host_header_ignores_base_url() {
        let mut client = client();
        client.set_base_url("http://127.0.0.1:9999");
        let request = client
            .build_request::<SearchQuery>("/search", None)
            .unwrap();
        assert_eq!(request.url().as_str(), "http://127.0.0.1:9999/search");
        assert_eq!(request.headers()["host"], DEFAULT_HOST);
    }

    #[test]
    fn malformed_base_url_is_a_construction_error() {
        let client = Client::builder("tester@example.com", "tok123")
            .base_url("not a url")
            .build()
            .unwrap();
        let err = client
            .build_request::<SearchQuery>("/search", None)
            .unwrap_err();
        assert!(matches!(err, Error::RequestConstruction(_)));
    }

    #[test]
    fn encoding_errors_surface_before_sending() {
        let query = SearchQuery::default().with_location_name("Austin;Texas");
        let err = client().build_request("/search", Some(&query)).unwrap_err();
        assert!(matches!(
            err,
            Error::Encoding {
                field: "LocationName",
                ..
            }
        ));
    }

    #[test]
    fn decode_ignores_unknown_and_defaults_missing_fields() {
        let body = br#"{"CodeList":[{"ValidValue":[{"Code":"CL","Extra":1}],"id":"1"}],"New":true}"#;
        let resp: ApiResponse<CodeListResponse> =
            decode(StatusCode::OK, HeaderMap::new(), body).unwrap();
        let value = &resp.data.code_list[0].valid_value[0];
        assert_eq!(value.code, "CL");
        assert_eq!(value.value, "");
        assert_eq!(resp.data.date_generated, "");
        assert_eq!(resp.status_text, "OK");
    }

    #[test]
    fn decode_failure_keeps_status_and_body() {
        let err = decode::<CodeListResponse>(
            StatusCode::BAD_GATEWAY,
            HeaderMap::new(),
            b"<html>bad gateway</html>",
        )
        .unwrap_err();
        match err {
            Error::Decoding { status, body, .. } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body, "<html>bad gateway</html>");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_type_mismatch_is_an_error() {
        let err =
            decode::<CodeListResponse>(StatusCode::OK, HeaderMap::new(), br#"{"CodeList":"x"}"#)
                .unwrap_err();
        assert!(matches!(err, Error::Decoding { .. }));
        assert_eq!(err.status(), Some(StatusCode::OK));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
    }
}
