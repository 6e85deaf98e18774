//! Persistent storage
//!
//! Key-value persistence for the packing list and the user's settings.

pub mod file;
pub mod memory;
pub mod settings;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::path::PathBuf;
use thiserror::Error;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "PACKLIST_DATA_DIR";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Could not determine the application data directory")]
    NoDataDir,
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Key-value storage the packing list is synchronized with.
///
/// Values are opaque serialized blobs; the caller owns the format.
pub trait PersistenceAdapter {
    /// Read the blob stored under `key`, `None` if nothing was ever saved
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored under `key`
    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError>;
}

impl<T: PersistenceAdapter + ?Sized> PersistenceAdapter for Box<T> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        (**self).save(key, blob)
    }
}

/// Get the application data directory
///
/// Windows: %APPDATA%/Packlist/data
/// Linux: ~/.local/share/packlist
/// macOS: ~/Library/Application Support/com.Packlist.Packlist
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    directories::ProjectDirs::from("com", "Packlist", "Packlist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
