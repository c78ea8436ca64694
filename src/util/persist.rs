//! Persistent key-value storage behind an injectable interface.
//!
//! DESIGN
//! ======
//! Session state must survive page reloads, so it is written through a
//! narrow `KeyValueStore` trait instead of reaching for `localStorage`
//! directly. Browser code injects `BrowserStore`; tests and server-side
//! rendering inject `MemoryStore`. Storage is treated as best-effort:
//! reads that fail yield `None` and writes that fail are swallowed, so
//! callers degrade instead of erroring.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// String key-value storage with best-effort semantics.
pub trait KeyValueStore {
    /// Read the value for `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`. Failures are silently dropped.
    fn set(&self, key: &str, value: &str);
    /// Remove `key` if present.
    fn remove(&self, key: &str);
}

/// Browser `localStorage` backend. Outside the `hydrate` build (no browser
/// environment) every operation is a no-op returning `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory backend for unit tests and server-side rendering, where no
/// durable storage exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
