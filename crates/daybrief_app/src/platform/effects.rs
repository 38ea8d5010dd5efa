use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use daybrief_client::{
    ClientEvent, ClientHandle, ClientSettings, ConfigStore, RonConfigStore, SummaryResponse,
    PROFILE_FILENAME,
};
use daybrief_core::{Effect, EventView, Msg, SummaryView};

pub struct EffectRunner {
    client: ClientHandle,
    config: RonConfigStore,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, config_dir: PathBuf) -> Self {
        let settings = ClientSettings {
            profile_path: config_dir.join(PROFILE_FILENAME),
            ..ClientSettings::default()
        };
        let client = ClientHandle::new(settings);
        let config = RonConfigStore::new(config_dir);
        let runner = Self { client, config };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    /// Endpoint persisted by a previous session, or the default.
    pub fn load_endpoint(&self) -> String {
        self.config.load_api_url()
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PersistEndpoint { value } => {
                    client_info!("PersistEndpoint len={}", value.len());
                    self.config.save_api_url(&value);
                }
                Effect::ResolveIdentity => {
                    client_info!("ResolveIdentity");
                    self.client.resolve_identity();
                }
                Effect::FetchSummary { base_url, email } => {
                    client_info!("FetchSummary base_url={}", base_url);
                    self.client.fetch_summary(base_url, email);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                let msg = match event {
                    ClientEvent::IdentityResolved { result } => match result {
                        Ok(email) => Msg::IdentityResolved { email },
                        Err(err) => {
                            client_warn!("identity resolution failed: {}", err);
                            Msg::ConnectFailed {
                                message: err.to_string(),
                            }
                        }
                    },
                    ClientEvent::SummaryFetched { result } => match result {
                        Ok(response) => Msg::SummaryReceived {
                            summary: map_summary(response),
                        },
                        Err(err) => {
                            client_warn!("summary fetch failed: {}", err);
                            Msg::ConnectFailed {
                                message: err.to_string(),
                            }
                        }
                    },
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_summary(response: SummaryResponse) -> SummaryView {
    SummaryView {
        greeting: response.greeting,
        upcoming_events: response.summary.upcoming_events,
        unread_emails: response.summary.unread_emails,
        events: response
            .events
            .into_iter()
            .map(|event| EventView {
                title: event.summary,
                start: event.start,
            })
            .collect(),
    }
}
