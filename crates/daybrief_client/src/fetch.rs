use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ConnectError;
use crate::models::{
    CalendarEventsResponse, ErrorBody, HealthResponse, RecentMessagesResponse, SummaryResponse,
};

/// Fallback message when an error body carries no `detail` field.
const GENERIC_API_ERROR: &str = "API request failed";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Strips exactly one trailing slash from a base URL.
pub fn normalize_base_url(base: &str) -> &str {
    base.strip_suffix('/').unwrap_or(base)
}

#[async_trait]
pub trait SummaryApi: Send + Sync {
    /// Combined day summary: greeting plus meeting/unread counts and events.
    async fn hello_summary(
        &self,
        base_url: &str,
        email: &str,
    ) -> Result<SummaryResponse, ConnectError>;

    /// Upcoming calendar events for the user.
    async fn calendar_events(
        &self,
        base_url: &str,
        email: &str,
    ) -> Result<CalendarEventsResponse, ConnectError>;

    /// Recent inbox messages for the user.
    async fn recent_messages(
        &self,
        base_url: &str,
        email: &str,
    ) -> Result<RecentMessagesResponse, ConnectError>;

    /// Service liveness probe.
    async fn health(&self, base_url: &str) -> Result<HealthResponse, ConnectError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpSummaryApi {
    settings: FetchSettings,
}

impl HttpSummaryApi {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ConnectError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ConnectError::Network(err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ConnectError> {
        let client = self.build_client()?;
        let response = client.get(url).send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.detail);
            return Err(ConnectError::Remote {
                message: detail.unwrap_or_else(|| GENERIC_API_ERROR.to_string()),
            });
        }

        serde_json::from_str(&body).map_err(|err| ConnectError::MalformedResponse(err.to_string()))
    }
}

fn plain_url(base_url: &str, path: &str) -> Result<Url, ConnectError> {
    let base = normalize_base_url(base_url);
    Url::parse(&format!("{base}{path}")).map_err(|err| ConnectError::InvalidUrl(err.to_string()))
}

fn user_url(base_url: &str, path: &str, email: &str) -> Result<Url, ConnectError> {
    let mut url = plain_url(base_url, path)?;
    url.query_pairs_mut().append_pair("user", email);
    Ok(url)
}

fn map_transport_error(err: reqwest::Error) -> ConnectError {
    if err.is_timeout() {
        return ConnectError::Network(format!("request timed out: {err}"));
    }
    ConnectError::Network(err.to_string())
}

#[async_trait]
impl SummaryApi for HttpSummaryApi {
    async fn hello_summary(
        &self,
        base_url: &str,
        email: &str,
    ) -> Result<SummaryResponse, ConnectError> {
        self.get_json(user_url(base_url, "/api/hello", email)?).await
    }

    async fn calendar_events(
        &self,
        base_url: &str,
        email: &str,
    ) -> Result<CalendarEventsResponse, ConnectError> {
        self.get_json(user_url(base_url, "/api/calendar/events", email)?)
            .await
    }

    async fn recent_messages(
        &self,
        base_url: &str,
        email: &str,
    ) -> Result<RecentMessagesResponse, ConnectError> {
        self.get_json(user_url(base_url, "/api/gmail/messages", email)?)
            .await
    }

    async fn health(&self, base_url: &str) -> Result<HealthResponse, ConnectError> {
        self.get_json(plain_url(base_url, "/health")?).await
    }
}
