//! `localStorage`-backed preference store
use web_sys::Storage;
use yellow_core::PreferenceStore;

use crate::dom;
use crate::error::WebError;

/// Browsers may deny `localStorage` (private modes, disabled site data); the
/// store then reports every access as a storage error.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn open() -> Self {
        let storage = dom::local_storage()
            .map_err(|err| log::warn!("localStorage unavailable: {}", dom::js_error_message(&err)))
            .ok();
        Self { storage }
    }

    fn handle(&self) -> Result<&Storage, WebError> {
        self.storage
            .as_ref()
            .ok_or_else(|| WebError::Storage("localStorage unavailable".to_string()))
    }
}

impl PreferenceStore for LocalStore {
    type Error = WebError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.handle()?.get_item(key).map_err(|e| WebError::storage(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.handle()?
            .set_item(key, value)
            .map_err(|e| WebError::storage(&e))
    }
}
