use crate::{ConnectStage, Effect, Msg, PopupState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PopupState, msg: Msg) -> (PopupState, Vec<Effect>) {
    let effects = match msg {
        Msg::EndpointRestored(value) => {
            state.set_endpoint(value);
            Vec::new()
        }
        Msg::EndpointEdited(value) => {
            state.set_endpoint(value.clone());
            vec![Effect::PersistEndpoint { value }]
        }
        Msg::ConnectClicked => {
            // Single-flight: a click while a cycle is in flight is a no-op.
            if state.stage().is_some() {
                return (state, Vec::new());
            }
            state.begin_connect();
            vec![Effect::ResolveIdentity]
        }
        Msg::IdentityResolved { email } => {
            if state.stage() != Some(ConnectStage::ResolvingIdentity) {
                return (state, Vec::new());
            }
            state.advance_to_fetch();
            // The fetch targets whatever endpoint is current when identity
            // resolves, matching the read-at-use timing of the input field.
            vec![Effect::FetchSummary {
                base_url: state.endpoint().to_string(),
                email,
            }]
        }
        Msg::SummaryReceived { summary } => {
            if state.stage() != Some(ConnectStage::FetchingSummary) {
                return (state, Vec::new());
            }
            state.complete(summary);
            Vec::new()
        }
        Msg::ConnectFailed { message } => {
            if state.stage().is_none() {
                return (state, Vec::new());
            }
            state.fail(message);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
