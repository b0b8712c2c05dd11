//! Local persistence helpers for the session record and per-page settings.
//!
//! Browser builds go through `window.localStorage`. Native builds (server
//! rendering, tests) keep a per-thread map so behaviour stays observable
//! without touching the filesystem.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Local storage is unavailable")]
    Unavailable,
    #[error("Couldn't write `{0}` to local storage")]
    Write(String),
    #[error("Couldn't encode `{key}`: {message}")]
    Encode { key: String, message: String },
}

pub fn get_item(key: &str) -> Option<String> {
    backend::get(key)
}

pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
    backend::set(key, value)
}

pub fn remove_item(key: &str) -> Result<(), StorageError> {
    backend::remove(key)
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::StorageError;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }

    pub(super) fn get(key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    pub(super) fn set(key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    pub(super) fn remove(key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::StorageError;

    thread_local! {
        static ITEMS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub(super) fn get(key: &str) -> Option<String> {
        ITEMS.with(|items| items.borrow().get(key).cloned())
    }

    pub(super) fn set(key: &str, value: &str) -> Result<(), StorageError> {
        ITEMS.with(|items| {
            items.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub(super) fn remove(key: &str) -> Result<(), StorageError> {
        ITEMS.with(|items| {
            items.borrow_mut().remove(key);
        });
        Ok(())
    }
}
