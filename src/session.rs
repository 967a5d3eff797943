//! Session identity backed by a small key-value store
//!
//! The backend partitions ingested candidate data per session id; the
//! client's only job is to mint one id per storage root and keep reusing it
//! until that storage is cleared. Storage sits behind a key-value trait so
//! the logic runs against an in-memory store in tests.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use uuid::Uuid;

use crate::config::Config;

/// Storage key holding the session id
pub const SESSION_ID_KEY: &str = "ai_recruiter_session_id";

/// Minimal persistent key-value interface
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-per-key store rooted at a directory
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)
            .with_context(|| format!("failed to create storage directory {}", root.display()))?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path)?.trim().to_string();
        Ok(if value.is_empty() { None } else { Some(value) })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.key_path(key), value)
            .with_context(|| format!("failed to write key {}", key))?;
        Ok(())
    }
}

/// In-memory store, used by tests in place of real storage
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Returns the stored session id, minting and persisting a UUID v4 on first use.
/// Repeated calls against the same store return the identical value.
pub fn get_or_create_session_id(store: &dyn KeyValueStore) -> Result<String> {
    if let Some(id) = store.get(SESSION_ID_KEY)? {
        return Ok(id);
    }

    let id = Uuid::new_v4().to_string();
    store.set(SESSION_ID_KEY, &id)?;
    Ok(id)
}

/// Best-effort session id resolution for CLI commands.
///
/// When no persistent storage context is available the result is the empty
/// string, and callers must not hand that to the backend as a real session.
pub fn resolve_session_id(config: &Config) -> String {
    let Some(root) = config.storage_path() else {
        return String::new();
    };

    match FileStore::open(root) {
        Ok(store) => get_or_create_session_id(&store).unwrap_or_default(),
        Err(err) => {
            tracing::warn!("session storage unavailable: {err:#}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_is_stable_within_a_store() {
        let store = MemoryStore::default();
        let first = get_or_create_session_id(&store).unwrap();
        let second = get_or_create_session_id(&store).unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_fresh_stores_mint_distinct_ids() {
        let a = get_or_create_session_id(&MemoryStore::default()).unwrap();
        let b = get_or_create_session_id(&MemoryStore::default()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_minted_id_is_a_uuid() {
        let store = MemoryStore::default();
        let id = get_or_create_session_id(&store).unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let first = {
            let store = FileStore::open(dir.path().to_path_buf()).unwrap();
            get_or_create_session_id(&store).unwrap()
        };
        let second = {
            let store = FileStore::open(dir.path().to_path_buf()).unwrap();
            get_or_create_session_id(&store).unwrap()
        };

        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_uses_configured_storage_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.session.storage_path = Some(dir.path().to_string_lossy().into_owned());

        let first = resolve_session_id(&config);
        let second = resolve_session_id(&config);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_file_store_treats_blank_value_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().to_path_buf()).unwrap();

        store.set(SESSION_ID_KEY, "  \n").unwrap();
        assert_eq!(store.get(SESSION_ID_KEY).unwrap(), None);

        // A fresh id gets minted over the blank value
        let id = get_or_create_session_id(&store).unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
