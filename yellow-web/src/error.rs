use wasm_bindgen::JsValue;

use crate::dom;

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("Invalid options: {0}")]
    Options(String),
}

impl WebError {
    pub(crate) fn storage(value: &JsValue) -> Self {
        Self::Storage(dom::js_error_message(value))
    }

    pub(crate) fn dom(value: &JsValue) -> Self {
        Self::Dom(dom::js_error_message(value))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        Self::from_str(&err.to_string())
    }
}
