use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use client_logging::{client_error, client_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

/// Fallback endpoint when nothing was persisted yet.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const CONFIG_FILENAME: &str = "config.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedConfig {
    #[serde(rename = "apiUrl")]
    api_url: String,
}

/// Persistent endpoint configuration. Loading never fails; saving is
/// best-effort.
pub trait ConfigStore: Send + Sync {
    fn load_api_url(&self) -> String;
    fn save_api_url(&self, value: &str);
}

/// RON-file config store rooted in a caller-supplied directory.
#[derive(Debug, Clone)]
pub struct RonConfigStore {
    dir: PathBuf,
}

impl RonConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILENAME)
    }
}

impl ConfigStore for RonConfigStore {
    fn load_api_url(&self) -> String {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return DEFAULT_API_URL.to_string();
            }
            Err(err) => {
                client_warn!("Failed to read config from {:?}: {}", path, err);
                return DEFAULT_API_URL.to_string();
            }
        };

        match ron::from_str::<PersistedConfig>(&content) {
            Ok(config) => config.api_url,
            Err(err) => {
                client_warn!("Failed to parse config from {:?}: {}", path, err);
                DEFAULT_API_URL.to_string()
            }
        }
    }

    fn save_api_url(&self, value: &str) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            client_error!("Failed to create config dir {:?}: {}", self.dir, err);
            return;
        }

        let config = PersistedConfig {
            api_url: value.to_string(),
        };
        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&config, pretty) {
            Ok(text) => text,
            Err(err) => {
                client_error!("Failed to serialize config: {}", err);
                return;
            }
        };

        if let Err(err) = write_atomic(&self.dir, &self.path(), &content) {
            client_error!("Failed to write config to {:?}: {}", self.path(), err);
        }
    }
}

/// Write via a temp file in the same directory, then rename into place.
fn write_atomic(dir: &Path, target: &Path, content: &str) -> io::Result<()> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    // Replace any existing file so the rename also succeeds on Windows.
    if target.exists() {
        fs::remove_file(target)?;
    }
    tmp.persist(target).map_err(|err| err.error)?;
    Ok(())
}
