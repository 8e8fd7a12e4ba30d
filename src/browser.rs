//! Browser Collaborators
//!
//! Thin wrappers around window APIs: location, history, clipboard, print
//! trigger, viewport media query. Nothing in here touches sheet state.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

pub fn current_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

/// Swap the visible URL without adding a history entry
pub fn replace_history_url(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

/// Put `text` on the system clipboard; may be denied by the browser
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let clipboard = window.navigator().clipboard();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| format!("{err:?}"))
}

pub fn trigger_print() {
    if let Some(window) = web_sys::window() {
        let _ = window.print();
    }
}

/// Narrow-viewport check, used to hide the print button on phones
pub fn is_narrow_viewport() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(max-width: 640px)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
