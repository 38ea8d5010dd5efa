//! Daybrief core: pure popup state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{ConnectStage, PopupState};
pub use update::update;
pub use view_model::{ContentView, EventView, PopupViewModel, SummaryView};
