//! Persisted sign-in state over opaque key-value storage.
//!
//! The storage interface is deliberately tiny - `get`/`set`/`remove` over
//! string keys - mirroring the key-value store mobile clients get from
//! their platform. Two implementations ship here:
//!
//! - [`FileSessionStore`] - a JSON file on disk, written atomically
//! - [`MemorySessionStore`] - in-memory, for tests
//!
//! The signed-in user and their bearer token are serialized as a single
//! [`StoredSession`] record under the `"session"` key. The cart is never
//! stored here; only identity persists across restarts.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::types::UserProfile;

/// Key under which the session record is stored.
pub const SESSION_KEY: &str = "session";

/// Errors from session storage.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the backing store failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored value was not valid JSON.
    #[error("corrupt session data: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Opaque persistent key-value storage.
///
/// Values are opaque strings; callers own serialization.
pub trait SessionStore: Send + Sync {
    /// Fetch the value for `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove the value for `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

// =============================================================================
// Session record
// =============================================================================

/// The persisted sign-in record: user profile plus bearer token.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone, Serialize, Deserialize)]
pub struct StoredSession {
    /// The signed-in user.
    pub user: UserProfile,
    /// Bearer token for the orders/auth backend.
    ///
    /// Kept as a plain string only because it must round-trip through
    /// storage; in-memory consumers should use [`Self::token`].
    token: String,
    /// When the session was saved.
    pub saved_at: DateTime<Utc>,
}

impl std::fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredSession")
            .field("user", &self.user)
            .field("token", &"[REDACTED]")
            .field("saved_at", &self.saved_at)
            .finish()
    }
}

impl StoredSession {
    /// Build a session record from a signed-in user and their token.
    #[must_use]
    pub fn new(user: UserProfile, token: &SecretString) -> Self {
        Self {
            user,
            token: token.expose_secret().to_owned(),
            saved_at: Utc::now(),
        }
    }

    /// The bearer token, redacted in `Debug` output.
    #[must_use]
    pub fn token(&self) -> SecretString {
        SecretString::from(self.token.clone())
    }
}

/// Persist `session` under [`SESSION_KEY`].
///
/// # Errors
///
/// Returns an error if serialization or the store write fails.
pub fn save_session(store: &dyn SessionStore, session: &StoredSession) -> Result<(), SessionError> {
    let value = serde_json::to_string(session)?;
    store.set(SESSION_KEY, &value)
}

/// Load the session record, if one is stored.
///
/// # Errors
///
/// Returns an error if the store cannot be read or holds corrupt data.
pub fn load_session(store: &dyn SessionStore) -> Result<Option<StoredSession>, SessionError> {
    match store.get(SESSION_KEY)? {
        Some(value) => Ok(Some(serde_json::from_str(&value)?)),
        None => Ok(None),
    }
}

/// Forget the stored session (sign-out).
///
/// # Errors
///
/// Returns an error if the store write fails.
pub fn clear_session(store: &dyn SessionStore) -> Result<(), SessionError> {
    store.remove(SESSION_KEY)
}

// =============================================================================
// File-backed store
// =============================================================================

/// Key-value storage backed by a single JSON file.
///
/// The whole map is rewritten on every `set`/`remove` via a temp file and
/// rename, so a crash mid-write never leaves a half-written session.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file (and its parent directory) is created lazily on first
    /// write; a missing file reads as an empty store.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Result<HashMap<String, String>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(HashMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, serde_json::to_string_pretty(map)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut map = self.read_map()?;
        map.insert(key.to_owned(), value.to_owned());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// In-memory key-value storage for tests.
#[derive(Default)]
pub struct MemorySessionStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self
            .map
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.map
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.map
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
