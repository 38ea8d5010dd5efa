use crate::view_model::{ContentView, PopupViewModel, SummaryView};

/// Progress detail while a connect cycle is in flight. The rendered view shows
/// a single loading indicator for both stages; the stage gates which response
/// messages are still valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectStage {
    ResolvingIdentity,
    FetchingSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Connecting(ConnectStage),
    Rendered(SummaryView),
    Failed(String),
}

/// Popup state: the endpoint input value plus the current connect phase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PopupState {
    endpoint: String,
    phase: Phase,
    dirty: bool,
}

impl PopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PopupViewModel {
        let content = match &self.phase {
            Phase::Idle => ContentView::Empty,
            Phase::Connecting(_) => ContentView::Loading,
            Phase::Rendered(summary) => ContentView::Summary(summary.clone()),
            Phase::Failed(message) => ContentView::Error(message.clone()),
        };
        PopupViewModel {
            endpoint: self.endpoint.clone(),
            connecting: matches!(self.phase, Phase::Connecting(_)),
            content,
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it. The shell uses this to coalesce
    /// re-renders of the popup document.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn set_endpoint(&mut self, value: String) {
        self.endpoint = value;
        self.mark_dirty();
    }

    pub(crate) fn stage(&self) -> Option<ConnectStage> {
        match self.phase {
            Phase::Connecting(stage) => Some(stage),
            _ => None,
        }
    }

    pub(crate) fn begin_connect(&mut self) {
        self.phase = Phase::Connecting(ConnectStage::ResolvingIdentity);
        self.mark_dirty();
    }

    pub(crate) fn advance_to_fetch(&mut self) {
        self.phase = Phase::Connecting(ConnectStage::FetchingSummary);
        self.mark_dirty();
    }

    pub(crate) fn complete(&mut self, summary: SummaryView) {
        self.phase = Phase::Rendered(summary);
        self.mark_dirty();
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.phase = Phase::Failed(message);
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
