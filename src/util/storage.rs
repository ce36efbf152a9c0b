//! Persistence of the session user in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store reads the slot once at startup and writes it on every committed
//! login/register/update. Writes are best-effort: a failure is logged and the
//! state commit that requested it still stands.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::User;

/// Errors from the raw `localStorage` helpers.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Single-slot user persistence.
pub trait UserStorage {
    /// Read the persisted user, if any.
    fn load(&self) -> Option<User>;
    /// Persist `user`, replacing any previous value.
    fn save(&self, user: &User);
    /// Drop the persisted user.
    fn remove(&self);
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// Load a JSON value from `localStorage` for `key`.
///
/// # Errors
///
/// Returns an error if storage is unreachable or the stored text is not JSON.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Result<Option<T>, StorageError> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{e:?}")))?;
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Ok(None)
    }
}

/// Save a JSON value to `localStorage` for `key`.
///
/// # Errors
///
/// Returns an error if serialization fails or storage rejects the write.
pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    #[cfg(feature = "hydrate")]
    {
        local_storage()?
            .set_item(key, &raw)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, raw);
        Ok(())
    }
}

/// Remove `key` from `localStorage`.
///
/// # Errors
///
/// Returns an error if storage is unreachable.
pub fn remove_key(key: &str) -> Result<(), StorageError> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Access(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Ok(())
    }
}

/// `localStorage` slot holding the serialized user.
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl UserStorage for BrowserStorage {
    fn load(&self) -> Option<User> {
        match load_json::<User>(&self.key) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("storage: ignoring persisted user under {:?}: {e}", self.key);
                None
            }
        }
    }

    fn save(&self, user: &User) {
        if let Err(e) = save_json(&self.key, user) {
            log::warn!("storage: failed to persist user under {:?}: {e}", self.key);
        }
    }

    fn remove(&self) {
        if let Err(e) = remove_key(&self.key) {
            log::warn!("storage: failed to remove user under {:?}: {e}", self.key);
        }
    }
}

/// In-process slot used during SSR and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<User>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new(user: Option<User>) -> Self {
        Self { slot: RefCell::new(user) }
    }

    /// Current slot contents.
    #[must_use]
    pub fn get(&self) -> Option<User> {
        self.slot.borrow().clone()
    }
}

impl UserStorage for MemoryStorage {
    fn load(&self) -> Option<User> {
        self.get()
    }

    fn save(&self, user: &User) {
        *self.slot.borrow_mut() = Some(user.clone());
    }

    fn remove(&self) {
        self.slot.borrow_mut().take();
    }
}
