use std::time::{Duration, Instant};

use daybrief_client::{ClientEvent, ClientHandle, ClientSettings, ConnectError};
use tempfile::tempdir;

fn wait_for_event(handle: &ClientHandle) -> ClientEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "no client event within 5s");
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn identity_failure_surfaces_only_the_message_text() {
    let dir = tempdir().expect("tempdir");
    let handle = ClientHandle::new(ClientSettings {
        profile_path: dir.path().join("profile.json"),
        ..ClientSettings::default()
    });

    handle.resolve_identity();

    match wait_for_event(&handle) {
        ClientEvent::IdentityResolved { result } => {
            let err = result.unwrap_err();
            assert_eq!(err, ConnectError::NoUserSignedIn);
            assert_eq!(err.to_string(), "No user signed in");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn resolved_identity_round_trips_through_the_handle() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("profile.json");
    std::fs::write(&path, r#"{ "email": "alice@example.com" }"#).expect("write profile");
    let handle = ClientHandle::new(ClientSettings {
        profile_path: path,
        ..ClientSettings::default()
    });

    handle.resolve_identity();

    match wait_for_event(&handle) {
        ClientEvent::IdentityResolved { result } => {
            assert_eq!(result.expect("email"), "alice@example.com");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
