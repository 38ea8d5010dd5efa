//! Daybrief client: host capabilities and remote API access.
mod client;
mod config;
mod error;
mod fetch;
mod identity;
mod models;

pub use client::{ClientEvent, ClientHandle, ClientSettings};
pub use config::{ConfigStore, RonConfigStore, DEFAULT_API_URL};
pub use error::ConnectError;
pub use fetch::{normalize_base_url, FetchSettings, HttpSummaryApi, SummaryApi};
pub use identity::{
    resolve_active_email, AccountStatus, IdentityError, IdentityProvider, ProfileInfo,
    ProfileQuery, StoredProfileIdentity, PROFILE_FILENAME,
};
pub use models::{
    CalendarEventsResponse, ErrorBody, EventItem, HealthResponse, MessageItem,
    RecentMessagesResponse, SummaryCounts, SummaryResponse,
};
