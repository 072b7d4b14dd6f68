//! Client for the meetup.com events API.
//!
//! Only the first page of `GET /2/events` is consumed; the API decides how
//! many events that page holds.

use crate::error::ImportResult;
use reqwest::Client;
use serde::Deserialize;

/// Event record as returned in the `results` array
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub name: Option<String>,
    pub time: EventTime,
    #[serde(default)]
    pub group: Option<RawEventGroup>,
    /// Absent on draft events
    #[serde(default)]
    pub venue: Option<RawVenue>,
}

/// The `time` field; the API sends a number but strings are tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EventTime {
    Number(i64),
    Text(String),
}

impl EventTime {
    pub fn to_text(&self) -> String {
        match self {
            EventTime::Number(value) => value.to_string(),
            EventTime::Text(value) => value.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEventGroup {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawVenue {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub localized_country_name: Option<String>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub lat: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct EventsResponse {
    results: Vec<RawEvent>,
}

/// Parse an events response body into its `results`.
pub fn parse_events_response(body: &str) -> ImportResult<Vec<RawEvent>> {
    let response: EventsResponse = serde_json::from_str(body)?;
    Ok(response.results)
}

/// Anything that can list the events of a group by its url name.
#[allow(async_fn_in_trait)]
pub trait EventSource {
    async fn fetch_events(&self, group_url_name: &str) -> ImportResult<Vec<RawEvent>>;
}

/// HTTP client for `api.meetup.com`
pub struct MeetupApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl MeetupApiClient {
    pub fn with_client(
        http: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn events_url(&self) -> String {
        format!("{}/2/events", self.base_url)
    }
}

impl EventSource for MeetupApiClient {
    async fn fetch_events(&self, group_url_name: &str) -> ImportResult<Vec<RawEvent>> {
        tracing::debug!("Fetching events for group {}", group_url_name);

        // see https://www.meetup.com/meetup_api/auth/#keys
        let body = self
            .http
            .get(self.events_url())
            .query(&[("group_urlname", group_url_name), ("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let events = parse_events_response(&body)?;
        tracing::debug!("Group {} returned {} events", group_url_name, events.len());
        Ok(events)
    }
}
