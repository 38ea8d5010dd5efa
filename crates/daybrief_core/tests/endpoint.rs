use daybrief_core::{update, Effect, Msg, PopupState};

#[test]
fn restored_endpoint_updates_view_without_persisting() {
    let (mut state, effects) = update(
        PopupState::new(),
        Msg::EndpointRestored("http://localhost:8000".to_string()),
    );

    assert_eq!(state.view().endpoint, "http://localhost:8000");
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
}

#[test]
fn edited_endpoint_is_persisted() {
    let (state, effects) = update(
        PopupState::new(),
        Msg::EndpointEdited("http://10.0.0.5:9000".to_string()),
    );

    assert_eq!(state.view().endpoint, "http://10.0.0.5:9000");
    assert_eq!(
        effects,
        vec![Effect::PersistEndpoint {
            value: "http://10.0.0.5:9000".to_string(),
        }]
    );
}

#[test]
fn edit_while_connecting_retargets_the_fetch() {
    let (state, _) = update(
        PopupState::new(),
        Msg::EndpointRestored("http://old.example.com".to_string()),
    );
    let (state, _) = update(state, Msg::ConnectClicked);
    let (state, _) = update(
        state,
        Msg::EndpointEdited("http://new.example.com".to_string()),
    );

    let (_state, effects) = update(
        state,
        Msg::IdentityResolved {
            email: "alice@example.com".to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::FetchSummary {
            base_url: "http://new.example.com".to_string(),
            email: "alice@example.com".to_string(),
        }]
    );
}
