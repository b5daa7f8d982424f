//! `localStorage` backed token store

use prescripto_core::{CoreError, CoreResult, TokenStore};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Stores raw tokens in `window.localStorage`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self, key: &str) -> CoreResult<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn save(&self, key: &str, token: &str) -> CoreResult<()> {
        local_storage()?.set_item(key, token).map_err(js_error)
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        local_storage()?.remove_item(key).map_err(js_error)
    }
}

/// Get localStorage
fn local_storage() -> CoreResult<Storage> {
    web_sys::window()
        .ok_or_else(|| CoreError::storage("no browser window"))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| CoreError::storage("localStorage is unavailable"))
}

fn js_error(err: JsValue) -> CoreError {
    CoreError::storage(format!("{err:?}"))
}
