use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::error::ConnectError;
use crate::fetch::{FetchSettings, HttpSummaryApi, SummaryApi};
use crate::identity::{
    resolve_active_email, IdentityProvider, StoredProfileIdentity, PROFILE_FILENAME,
};
use crate::models::SummaryResponse;

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub fetch: FetchSettings,
    /// Location of the host-written profile file.
    pub profile_path: PathBuf,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            fetch: FetchSettings::default(),
            profile_path: PathBuf::from(PROFILE_FILENAME),
        }
    }
}

enum ClientCommand {
    ResolveIdentity,
    FetchSummary { base_url: String, email: String },
}

/// Exactly one event is produced per issued command.
#[derive(Debug)]
pub enum ClientEvent {
    IdentityResolved {
        result: Result<String, ConnectError>,
    },
    SummaryFetched {
        result: Result<SummaryResponse, ConnectError>,
    },
}

/// Handle to the client thread: commands in, events out.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    events: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let identity: Arc<dyn IdentityProvider> =
            Arc::new(StoredProfileIdentity::new(settings.profile_path.clone()));
        let api: Arc<dyn SummaryApi> = Arc::new(HttpSummaryApi::new(settings.fetch.clone()));
        Self::with_capabilities(identity, api)
    }

    /// Build a handle over explicit capability implementations; tests inject
    /// fakes here.
    pub fn with_capabilities(
        identity: Arc<dyn IdentityProvider>,
        api: Arc<dyn SummaryApi>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let identity = identity.clone();
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(identity.as_ref(), api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            events: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn resolve_identity(&self) {
        let _ = self.cmd_tx.send(ClientCommand::ResolveIdentity);
    }

    pub fn fetch_summary(&self, base_url: impl Into<String>, email: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::FetchSummary {
            base_url: base_url.into(),
            email: email.into(),
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.events.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    identity: &dyn IdentityProvider,
    api: &dyn SummaryApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::ResolveIdentity => {
            let result = resolve_active_email(identity).await;
            let _ = event_tx.send(ClientEvent::IdentityResolved { result });
        }
        ClientCommand::FetchSummary { base_url, email } => {
            let result = api.hello_summary(&base_url, &email).await;
            let _ = event_tx.send(ClientEvent::SummaryFetched { result });
        }
    }
}
