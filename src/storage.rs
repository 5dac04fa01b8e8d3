use unfold_core::error::Result;
use unfold_core::{MemoryStorage, PreferenceStorage, UnfoldError};
use web_sys as web;

/// `localStorage` when the browser grants it, otherwise an in-memory map so
/// preferences still work for the session.
pub enum BrowserStorage {
    Local(web::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match web::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => BrowserStorage::Local(storage),
            _ => {
                log::warn!("[prefs] localStorage unavailable; preferences last for this visit only");
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl PreferenceStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStorage::Local(s) => s.get_item(key).ok().flatten(),
            BrowserStorage::Memory(m) => m.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            BrowserStorage::Local(s) => s
                .set_item(key, value)
                .map_err(|e| UnfoldError::Storage(format!("{:?}", e))),
            BrowserStorage::Memory(m) => m.set(key, value),
        }
    }
}
