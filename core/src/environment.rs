//! Environment traits - dependency injection for reducers.
//!
//! All external collaborators are abstracted behind traits and injected via
//! an application-defined Environment type. This crate ships the one
//! collaborator the architecture needs: a string-keyed store of serialized
//! values, plus a directory-backed implementation for production use.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by [`KeyValueStore`] implementations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing directory could not be created.
    #[error("failed to create storage directory {dir:?}: {source}")]
    CreateDir {
        /// Directory that could not be created
        dir: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A value could not be written.
    #[error("failed to write key {key:?}: {source}")]
    Write {
        /// Key whose value failed to write
        key: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// A string-keyed store of serialized values.
///
/// This is the persistence collaborator: applications serialize their data
/// to a string and file it under a fixed key. Reads are infallible by
/// design - a missing value and an unreadable value are the same thing to
/// the caller, which falls back to its default.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when no readable value exists.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrites the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Directory-backed [`KeyValueStore`], one file per key.
///
/// Values are stored at `<dir>/<key>.json`. The directory is created lazily
/// on the first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the stored values.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::CreateDir {
            dir: self.dir.clone(),
            source,
        })?;
        std::fs::write(self.path_for(key), value).map_err(|source| StorageError::Write {
            key: key.to_string(),
            source,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("microstore-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn get_missing_key_is_none() {
        let store = FileStore::new(temp_dir("missing"));
        assert_eq!(store.get("TODOS"), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = FileStore::new(temp_dir("roundtrip"));
        store.set("TODOS", "[]").unwrap();
        assert_eq!(store.get("TODOS").as_deref(), Some("[]"));

        store.set("TODOS", r#"[{"title":"A","completed":false}]"#).unwrap();
        assert_eq!(
            store.get("TODOS").as_deref(),
            Some(r#"[{"title":"A","completed":false}]"#)
        );
    }

    #[test]
    fn keys_are_isolated() {
        let store = FileStore::new(temp_dir("isolated"));
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert_eq!(store.get("b").as_deref(), Some("2"));
    }
}
