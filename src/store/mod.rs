// ABOUTME: Boundary to the persisted profile store
// The wizard only ever asks whether a profile exists and for its serialized form

pub mod file;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

pub use file::FileProfileStore;

/// Errors raised by a profile store backend
#[derive(Error, Debug)]
pub enum StoreError {
    /// No per-user data directory could be determined
    #[error("Failed to determine app data directory")]
    DataDir,

    #[error("Failed to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persisted profile storage.
///
/// Absence of a profile is a normal `Ok(false)` from [`ProfileStore::profile_exists`],
/// never an error. Payloads are returned as serialized text; decoding is the caller's job.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Whether a profile is available at the standard location
    async fn profile_exists(&self) -> Result<bool, StoreError>;

    /// Read the serialized profile from `path`, or from the standard location when `None`
    async fn load_profile(&self, path: Option<PathBuf>) -> Result<String, StoreError>;

    /// Write a serialized profile to `path`, or to the standard location when `None`
    async fn save_profile(&self, contents: String, path: Option<PathBuf>) -> Result<(), StoreError>;

    /// The standard profile location
    fn profile_path(&self) -> PathBuf;
}
