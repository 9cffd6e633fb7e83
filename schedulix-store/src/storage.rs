//! Durable session storage.
//!
//! The session lives under three independent string keys so that partial
//! reads stay possible (a token without a cached identity is still a
//! usable session; `auth::me` fills the rest in). Writes go through the
//! auth slice's transition handlers only; everything else treats the
//! store as read-only.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::PathBuf;

use parking_lot::RwLock;
use schedulix_core::models::{Identity, Tenant};
use thiserror::Error;

/// Raw bearer token string.
pub const TOKEN_KEY: &str = "token";
/// JSON-serialized identity record.
pub const USER_KEY: &str = "user";
/// JSON-serialized tenant record, present only when the identity has one.
pub const TENANT_KEY: &str = "tenant";

/// Result type for session storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur while reading or writing the session.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Key/value storage for the three session keys - must be implemented by
/// all storage backends.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// In-memory backend for testing and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.values.write().remove(key);
        Ok(())
    }
}

/// File-backed backend: one file per key under a directory. Survives
/// process restarts, which is what lets a session outlive a reload.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Everything the three keys held, decoded.
#[derive(Debug, Clone)]
pub struct PersistedSession {
    pub token: String,
    pub user: Option<Identity>,
    pub tenant: Option<Tenant>,
}

/// Read the persisted session. `None` when no token is present; the
/// other keys are ignored in that case, since an identity without a token
/// is not a session.
pub fn load_session(store: &dyn SessionStore) -> StorageResult<Option<PersistedSession>> {
    let Some(token) = store.get(TOKEN_KEY)? else {
        return Ok(None);
    };

    let user = match store.get(USER_KEY)? {
        Some(raw) => Some(serde_json::from_str(&raw)?),
        None => None,
    };
    let tenant = match store.get(TENANT_KEY)? {
        Some(raw) => Some(serde_json::from_str(&raw)?),
        None => None,
    };

    Ok(Some(PersistedSession { token, user, tenant }))
}

/// Persist a full session: token, identity, and the identity's tenant if
/// it has one (a stale tenant key from a previous session is removed).
pub fn save_session(store: &dyn SessionStore, token: &str, user: &Identity) -> StorageResult<()> {
    store.set(TOKEN_KEY, token)?;
    store.set(USER_KEY, &serde_json::to_string(user)?)?;
    match &user.tenant {
        Some(tenant) => store.set(TENANT_KEY, &serde_json::to_string(tenant)?)?,
        None => store.remove(TENANT_KEY)?,
    }
    Ok(())
}

/// Clear all three keys in one operation.
pub fn clear_session(store: &dyn SessionStore) -> StorageResult<()> {
    store.remove(TOKEN_KEY)?;
    store.remove(USER_KEY)?;
    store.remove(TENANT_KEY)?;
    Ok(())
}
