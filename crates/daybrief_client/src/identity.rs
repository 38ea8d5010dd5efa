use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::error::ConnectError;

/// Name of the profile file the host writes at sign-in.
pub const PROFILE_FILENAME: &str = "profile.json";

/// Which accounts the identity query should consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountStatus {
    /// Any signed-in account.
    #[default]
    Any,
    /// Only accounts with sync enabled.
    Synced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileQuery {
    pub account_status: AccountStatus,
}

/// Profile data the identity capability reports. An absent email means no
/// account is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ProfileInfo {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The capability itself failed (unreadable or corrupt profile state).
    #[error("{0}")]
    Platform(String),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn profile(&self, query: ProfileQuery) -> Result<ProfileInfo, IdentityError>;
}

/// Resolves the signed-in user's email, distinguishing a failing capability
/// from an empty result. Single attempt, no retry.
pub async fn resolve_active_email(provider: &dyn IdentityProvider) -> Result<String, ConnectError> {
    let info = provider
        .profile(ProfileQuery::default())
        .await
        .map_err(|IdentityError::Platform(message)| ConnectError::IdentityUnavailable(message))?;
    match info.email {
        Some(email) if !email.is_empty() => Ok(email),
        _ => Err(ConnectError::NoUserSignedIn),
    }
}

/// Identity provider backed by the JSON profile file the host maintains.
#[derive(Debug, Clone)]
pub struct StoredProfileIdentity {
    path: PathBuf,
}

impl StoredProfileIdentity {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl IdentityProvider for StoredProfileIdentity {
    async fn profile(&self, _query: ProfileQuery) -> Result<ProfileInfo, IdentityError> {
        // The profile file only exists for signed-in accounts, so both account
        // status filters read the same state.
        let content = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(ProfileInfo::default());
            }
            Err(err) => return Err(IdentityError::Platform(err.to_string())),
        };
        serde_json::from_str(&content).map_err(|err| IdentityError::Platform(err.to_string()))
    }
}
