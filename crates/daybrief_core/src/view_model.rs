/// Snapshot of everything the popup surface needs to draw.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PopupViewModel {
    pub endpoint: String,
    /// True while a connect cycle is in flight; disables the connect trigger.
    pub connecting: bool,
    pub content: ContentView,
    pub dirty: bool,
}

impl PopupViewModel {
    /// True once the current connect cycle reached a terminal render state.
    pub fn is_settled(&self) -> bool {
        matches!(self.content, ContentView::Summary(_) | ContentView::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentView {
    #[default]
    Empty,
    Loading,
    Summary(SummaryView),
    Error(String),
}

/// Display data extracted from a summary response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryView {
    pub greeting: String,
    pub upcoming_events: u32,
    pub unread_emails: u32,
    pub events: Vec<EventView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventView {
    pub title: String,
    /// Start timestamp as reported by the service: RFC 3339, a bare
    /// `YYYY-MM-DD` for all-day events, or absent.
    pub start: Option<String>,
}
