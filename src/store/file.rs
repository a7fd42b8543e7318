// ABOUTME: File-backed profile store keeping profile.json in the per-user data directory

use async_trait::async_trait;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{ProfileStore, StoreError};

const PROFILE_FILE_NAME: &str = "profile.json";

pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    /// Store rooted at an explicit profile file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `override_path` if given, else `<data dir>/profile.json`
    pub fn resolve(override_path: Option<&Path>) -> Result<Self, StoreError> {
        match override_path {
            Some(path) => Ok(Self::new(path)),
            None => Ok(Self::new(default_profile_path()?)),
        }
    }

    fn target(&self, path: Option<PathBuf>) -> PathBuf {
        path.unwrap_or_else(|| self.path.clone())
    }
}

/// Per-user application data directory
pub fn data_dir() -> Result<PathBuf, StoreError> {
    ProjectDirs::from("", "", "cvwizard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StoreError::DataDir)
}

pub fn default_profile_path() -> Result<PathBuf, StoreError> {
    Ok(data_dir()?.join(PROFILE_FILE_NAME))
}

#[async_trait]
impl ProfileStore for FileProfileStore {
    async fn profile_exists(&self) -> Result<bool, StoreError> {
        let exists = tokio::fs::try_exists(&self.path).await.map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        debug!("Profile at {} exists: {}", self.path.display(), exists);
        Ok(exists)
    }

    async fn load_profile(&self, path: Option<PathBuf>) -> Result<String, StoreError> {
        let path = self.target(path);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| StoreError::Read { path, source })
    }

    async fn save_profile(&self, contents: String, path: Option<PathBuf>) -> Result<(), StoreError> {
        let path = self.target(path);

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        tokio::fs::write(&path, contents)
            .await
            .map_err(|source| StoreError::Write {
                path: path.clone(),
                source,
            })?;
        info!("Saved profile to {}", path.display());
        Ok(())
    }

    fn profile_path(&self) -> PathBuf {
        self.path.clone()
    }
}
