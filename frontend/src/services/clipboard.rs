//! Clipboard access through `navigator.clipboard`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::types::{AppError, AppResult};

/// Copy `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Clipboard("no global window".into()))?;
    let navigator = window.navigator();

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .ok_or_else(|| AppError::Clipboard("clipboard API not available".into()))?;

    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| AppError::Clipboard(format!("{:?}", e)))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| AppError::Clipboard("writeText is not a function".into()))?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| AppError::Clipboard(format!("{:?}", e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| AppError::Clipboard("writeText did not return a promise".into()))?;

    JsFuture::from(promise).await.map_err(|e| {
        let error_msg = js_sys::Reflect::get(&e, &"message".into())
            .ok()
            .and_then(|v| v.as_string())
            .or_else(|| e.as_string())
            .unwrap_or_else(|| "permission denied".to_string());
        AppError::Clipboard(error_msg)
    })?;

    Ok(())
}
