use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use client_logging::{client_debug, client_info};
use daybrief_core::{update, Msg, PopupState};

use super::document;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

/// Drive one popup session: restore the endpoint, connect, and republish the
/// popup document until the cycle reaches a terminal render state.
pub fn run_app() -> io::Result<()> {
    logging::initialize(LogDestination::File);

    let config_dir = default_config_dir();
    let output_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx, config_dir);

    let mut state = PopupState::new();
    state = dispatch(state, Msg::EndpointRestored(runner.load_endpoint()), &runner);
    // A single optional argument acts like a user edit of the endpoint field.
    if let Some(endpoint) = std::env::args().nth(1) {
        state = dispatch(state, Msg::EndpointEdited(endpoint), &runner);
    }
    state = dispatch(state, Msg::ConnectClicked, &runner);
    publish(&mut state, &output_dir)?;

    while !state.view().is_settled() {
        let Ok(msg) = msg_rx.recv() else { break };
        state = dispatch(state, msg, &runner);
        publish(&mut state, &output_dir)?;
    }

    client_info!(
        "popup settled; document at {:?}",
        output_dir.join(document::POPUP_FILENAME)
    );
    Ok(())
}

fn dispatch(state: PopupState, msg: Msg, runner: &EffectRunner) -> PopupState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

fn publish(state: &mut PopupState, output_dir: &Path) -> io::Result<()> {
    if state.consume_dirty() {
        let page = ui::render::render_page(&state.view());
        let path = document::write_popup_document(output_dir, &page)?;
        client_debug!("popup document updated at {:?}", path);
    }
    Ok(())
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("daybrief"))
        .unwrap_or_else(|| PathBuf::from("."))
}
