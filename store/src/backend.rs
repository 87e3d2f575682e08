//! Key-value storage behind the persisted client state.
//!
//! Two scopes mirror the browser's storage split: [`Scope::Local`] survives
//! restarts, [`Scope::Session`] lives as long as the tab. The wasm backend
//! maps straight onto `localStorage`/`sessionStorage`; everything else (tests,
//! native builds) uses the in-memory backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Survives browser restarts (`localStorage`).
    Local,
    /// Cleared when the tab closes (`sessionStorage`).
    Session,
}

pub trait SessionStore {
    fn get(&self, scope: Scope, key: &str) -> Option<String>;
    fn put(&self, scope: Scope, key: &str, value: &str);
    fn remove(&self, scope: Scope, key: &str);
}

/// Handle to the active storage backend. Cheap to clone.
#[derive(Clone)]
pub struct Store {
    inner: Rc<dyn SessionStore>,
}

impl Store {
    /// The browser's storage on wasm; falls back to in-memory elsewhere so
    /// native test harnesses can drive the same code paths.
    pub fn browser() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self {
                inner: Rc::new(WebStore),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::in_memory()
        }
    }

    pub fn in_memory() -> Self {
        Self {
            inner: Rc::new(MemoryStore::default()),
        }
    }

    pub fn get_json<T: DeserializeOwned>(&self, scope: Scope, key: &str) -> Option<T> {
        let raw = self.inner.get(scope, key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(_) => {
                // Stale or hand-edited entry; drop it rather than fail forever.
                self.inner.remove(scope, key);
                None
            }
        }
    }

    pub fn put_json<T: Serialize>(&self, scope: Scope, key: &str, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.inner.put(scope, key, &raw);
        }
    }

    pub fn get(&self, scope: Scope, key: &str) -> Option<String> {
        self.inner.get(scope, key)
    }

    pub fn put(&self, scope: Scope, key: &str, value: &str) {
        self.inner.put(scope, key, value);
    }

    pub fn remove(&self, scope: Scope, key: &str) {
        self.inner.remove(scope, key);
    }
}

/// In-memory backend for tests and non-browser builds.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<(Scope, String), String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, scope: Scope, key: &str) -> Option<String> {
        self.entries.borrow().get(&(scope, key.to_string())).cloned()
    }

    fn put(&self, scope: Scope, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert((scope, key.to_string()), value.to_string());
    }

    fn remove(&self, scope: Scope, key: &str) {
        self.entries.borrow_mut().remove(&(scope, key.to_string()));
    }
}

#[cfg(target_arch = "wasm32")]
struct WebStore;

#[cfg(target_arch = "wasm32")]
impl WebStore {
    fn storage(scope: Scope) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match scope {
            Scope::Local => window.local_storage().ok().flatten(),
            Scope::Session => window.session_storage().ok().flatten(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for WebStore {
    fn get(&self, scope: Scope, key: &str) -> Option<String> {
        Self::storage(scope)?.get_item(key).ok().flatten()
    }

    fn put(&self, scope: Scope, key: &str, value: &str) {
        if let Some(storage) = Self::storage(scope) {
            // Quota errors are not actionable here.
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, scope: Scope, key: &str) {
        if let Some(storage) = Self::storage(scope) {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let store = Store::in_memory();
        store.put_json(Scope::Local, "k", &vec![1u32, 2, 3]);
        let back: Vec<u32> = store.get_json(Scope::Local, "k").unwrap();
        assert_eq!(back, vec![1, 2, 3]);
    }

    #[test]
    fn test_scopes_are_disjoint() {
        let store = Store::in_memory();
        store.put(Scope::Local, "k", "local");
        store.put(Scope::Session, "k", "session");
        assert_eq!(store.get(Scope::Local, "k").as_deref(), Some("local"));
        assert_eq!(store.get(Scope::Session, "k").as_deref(), Some("session"));
        store.remove(Scope::Local, "k");
        assert_eq!(store.get(Scope::Local, "k"), None);
        assert_eq!(store.get(Scope::Session, "k").as_deref(), Some("session"));
    }

    #[test]
    fn test_corrupt_entry_is_dropped() {
        let store = Store::in_memory();
        store.put(Scope::Local, "k", "not json {");
        let parsed: Option<Vec<u32>> = store.get_json(Scope::Local, "k");
        assert!(parsed.is_none());
        assert_eq!(store.get(Scope::Local, "k"), None);
    }
}
