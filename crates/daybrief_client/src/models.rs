use serde::Deserialize;

/// Combined day summary returned by `/api/hello`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub user: Option<String>,
    pub greeting: String,
    pub summary: SummaryCounts,
    pub events: Vec<EventItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SummaryCounts {
    pub upcoming_events: u32,
    pub unread_emails: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventItem {
    #[serde(default)]
    pub id: Option<String>,
    pub summary: String,
    /// RFC 3339 timestamp, bare `YYYY-MM-DD` for all-day events, or null.
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

/// Events listing returned by `/api/calendar/events`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarEventsResponse {
    pub user: String,
    pub events: Vec<EventItem>,
}

/// Inbox listing returned by `/api/gmail/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecentMessagesResponse {
    pub user: String,
    pub messages: Vec<MessageItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageItem {
    pub id: String,
    pub subject: String,
    #[serde(rename = "from")]
    pub sender: String,
    #[serde(default)]
    pub snippet: String,
}

/// Liveness probe body from `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error body shape the service uses for non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
