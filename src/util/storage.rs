//! `localStorage`-backed preference store.

use web_sys::{Storage, Window};

use crate::state::theme::{MemoryStore, PreferenceStore};

/// Stores one string value under a fixed `localStorage` key.
///
/// Falls back to memory when storage is unavailable (private mode, disabled
/// cookies), so toggling still works for the lifetime of the page.
pub struct LocalStore {
    key: String,
    storage: Option<Storage>,
    fallback: MemoryStore,
}

impl LocalStore {
    #[must_use]
    pub fn new(window: &Window, key: &str) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                log::warn!("localStorage unavailable; theme preference will not persist");
                None
            }
            Err(err) => {
                log::warn!("localStorage blocked ({err:?}); theme preference will not persist");
                None
            }
        };
        Self { key: key.to_owned(), storage, fallback: MemoryStore::default() }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self) -> Option<String> {
        match &self.storage {
            Some(storage) => storage.get_item(&self.key).unwrap_or_else(|err| {
                log::warn!("failed to read {}: {err:?}", self.key);
                None
            }),
            None => self.fallback.load(),
        }
    }

    fn save(&mut self, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(&self.key, value).is_ok() {
                return;
            }
            log::warn!("failed to persist {}={value}", self.key);
        }
        self.fallback.save(value);
    }
}

/// Whether the system asks for a light color scheme.
#[must_use]
pub fn prefers_color_scheme(window: &Window, query: &str) -> bool {
    match window.match_media(query) {
        Ok(list) => list.is_some_and(|mq| mq.matches()),
        Err(err) => {
            log::warn!("media query {query} rejected: {err:?}");
            false
        }
    }
}
