// ABOUTME: Sequential profile existence check and load against the profile store

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::Profile;
use crate::store::{ProfileStore, StoreError};

/// Why a profile check failed. All variants surface to the user as the same message.
#[derive(Error, Debug)]
pub enum ProfileCheckError {
    #[error("Profile existence check failed: {0}")]
    Exists(#[source] StoreError),

    #[error("Profile load failed: {0}")]
    Load(#[source] StoreError),

    #[error("Stored profile could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Profile check timed out after {0:?}")]
    TimedOut(Duration),
}

pub type CheckOutcome = Result<Option<Profile>, ProfileCheckError>;

/// Ask the store whether a profile exists and, if so, load and decode it.
/// `Ok(None)` means no profile is stored.
pub async fn check_profile(store: &dyn ProfileStore) -> CheckOutcome {
    let exists = store.profile_exists().await.map_err(ProfileCheckError::Exists)?;
    if !exists {
        debug!("No stored profile");
        return Ok(None);
    }

    let json = store.load_profile(None).await.map_err(ProfileCheckError::Load)?;
    let profile = Profile::from_json(&json).map_err(ProfileCheckError::Decode)?;
    info!("Loaded existing profile from {}", store.profile_path().display());
    Ok(Some(profile))
}

/// [`check_profile`] bounded by an optional timeout
pub async fn check_profile_with_timeout(
    store: Arc<dyn ProfileStore>,
    timeout: Option<Duration>,
) -> CheckOutcome {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, check_profile(store.as_ref()))
            .await
            .unwrap_or(Err(ProfileCheckError::TimedOut(limit))),
        None => check_profile(store.as_ref()).await,
    }
}
