//! Lightweight preference storage: JSON strings keyed by name.
//!
//! The site stores only small durable settings this way (currently the color
//! theme), so the contract stays a flat key-value surface rather than a
//! schema-versioned document store.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future used by [`PrefsStore`] methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Durable key-value storage for small JSON preference values.
pub trait PrefsStore {
    /// Loads the raw JSON string stored under `key`, if any.
    fn load_pref<'a>(&'a self, key: &'a str)
        -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Stores a raw JSON string under `key`.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;

    /// Deletes the value stored under `key`.
    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>>;
}

/// No-op store for targets without durable storage. Loads return nothing and
/// writes succeed silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

/// In-memory store shared by clones, for tests and host-side use.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Loads and deserializes a typed preference value.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    enum StoredTheme {
        Light,
        Dark,
    }

    #[test]
    fn memory_store_round_trips_and_deletes() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref("portfolio-theme", "\"dark\"")).expect("save");
        assert_eq!(
            block_on(store_obj.load_pref("portfolio-theme")).expect("load"),
            Some("\"dark\"".to_string())
        );
        block_on(store_obj.delete_pref("portfolio-theme")).expect("delete");
        assert_eq!(
            block_on(store_obj.load_pref("portfolio-theme")).expect("load"),
            None
        );
    }

    #[test]
    fn clones_share_the_same_backing_map() {
        let store = MemoryPrefsStore::default();
        let other = store.clone();

        block_on(store.save_pref("k", "1")).expect("save");
        assert_eq!(block_on(other.load_pref("k")).expect("load"), Some("1".to_string()));
    }

    #[test]
    fn typed_helpers_round_trip_through_json() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(save_pref_with(store_obj, "theme", &StoredTheme::Dark)).expect("save typed");
        let loaded: Option<StoredTheme> =
            block_on(load_pref_with(store_obj, "theme")).expect("load typed");
        assert_eq!(loaded, Some(StoredTheme::Dark));
    }

    #[test]
    fn noop_store_loads_nothing_and_accepts_writes() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref("k", "{}")).expect("save");
        assert_eq!(block_on(store_obj.load_pref("k")).expect("load"), None);
    }
}
