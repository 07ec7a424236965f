//! Browser-local flags. The crate only ever writes them; reading them back is
//! left to whatever hosts the training module.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::BTreeMap;

use wasm_bindgen::JsValue;

pub trait FlagStore {
    fn write_flag(&self, key: &str, value: bool) -> Result<(), JsValue>;
}

/// `window.localStorage`; values are stored as JSON booleans.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageFlags;

impl FlagStore for LocalStorageFlags {
    fn write_flag(&self, key: &str, value: bool) -> Result<(), JsValue> {
        let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let store = win
            .local_storage()?
            .ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
        store.set_item(key, &encode_flag(value))
    }
}

/// In-memory store, used where no browser is around.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryFlags {
    values: RefCell<BTreeMap<String, String>>,
}

#[cfg(test)]
impl MemoryFlags {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl FlagStore for MemoryFlags {
    fn write_flag(&self, key: &str, value: bool) -> Result<(), JsValue> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), encode_flag(value));
        Ok(())
    }
}

fn encode_flag(value: bool) -> String {
    serde_json::Value::Bool(value).to_string()
}

/// Records that the hazard activity was finished.
pub fn mark_hazards_completed(store: &impl FlagStore) -> Result<(), JsValue> {
    store.write_flag(crate::model::COMPLETION_KEY, true)
}
