//! `localStorage` backend for the settings stores.

use gloo::console;
use gloo::utils::window;
use moneymachine_config::{SettingsStorage, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// Browser key-value storage; every call resolves `window.localStorage` afresh.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

impl BrowserStorage {
    fn raw(self) -> StorageResult<web_sys::Storage> {
        match window().local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(unavailable("localStorage is disabled")),
            Err(err) => Err(unavailable(&describe(&err))),
        }
    }
}

impl SettingsStorage for BrowserStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.raw()?
            .get_item(key)
            .map_err(|err| backend("read", key, &err))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.raw()?
            .set_item(key, value)
            .map_err(|err| backend("write", key, &err))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.raw()?
            .remove_item(key)
            .map_err(|err| backend("remove", key, &err))
    }
}

fn unavailable(detail: &str) -> StorageError {
    console::error!("storage unavailable", detail);
    StorageError::Unavailable {
        backend: "localStorage",
        detail: detail.to_string(),
    }
}

fn backend(operation: &'static str, key: &str, err: &JsValue) -> StorageError {
    let detail = describe(err);
    console::error!("storage operation failed", operation, key, detail.as_str());
    StorageError::Backend { operation, detail }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
