/// Bridge to the host browser runtime: chrome.* APIs and the clipboard.
///
/// The privileged surface is reached by walking `chrome.<path>` off the
/// global object, so a context where an API is missing (or a non-extension
/// page) degrades to a no-op instead of throwing. Every call here is
/// fire-and-forget: failures are not surfaced to the user.
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::messages::{RelayMessage, SearchRequest};

/// Walk `chrome.<segments...>` from the global object.
///
/// Returns the resolved member together with its parent object (the `this`
/// for method calls), or `None` when any link in the chain is missing.
fn chrome_path(segments: &[&str]) -> Option<(JsValue, JsValue)> {
    let mut parent = JsValue::UNDEFINED;
    let mut current = Reflect::get(&js_sys::global(), &"chrome".into()).ok()?;
    if current.is_undefined() || current.is_null() {
        return None;
    }

    for segment in segments {
        let next = Reflect::get(&current, &(*segment).into()).ok()?;
        if next.is_undefined() || next.is_null() {
            return None;
        }
        parent = current;
        current = next;
    }

    Some((parent, current))
}

/// Resolve a `chrome.*` method and the object to invoke it on.
pub(crate) fn chrome_method(segments: &[&str]) -> Option<(JsValue, Function)> {
    let (parent, member) = chrome_path(segments)?;
    let method = member.dyn_into::<Function>().ok()?;
    Some((parent, method))
}

/// Ask the background relay to run a native search for `query`.
pub fn send_search(query: &str) {
    let message = RelayMessage::Search {
        query: query.to_string(),
    };
    let Ok(payload) = serde_wasm_bindgen::to_value(&message) else {
        return;
    };

    if let Some((runtime, send_message)) = chrome_method(&["runtime", "sendMessage"]) {
        let _ = send_message.call1(&runtime, &payload);
    }
}

/// Open a native browser search for `text` in a new tab.
pub fn native_search(text: &str) {
    let Ok(payload) = serde_wasm_bindgen::to_value(&SearchRequest::new_tab(text.to_string()))
    else {
        return;
    };

    if let Some((search, query)) = chrome_method(&["search", "query"]) {
        let _ = query.call1(&search, &payload);
    }
}

/// Localized UI label for `key`, when the i18n API is reachable and the
/// locale defines the key.
pub fn localized(key: &str) -> Option<String> {
    let (i18n, get_message) = chrome_method(&["i18n", "getMessage"])?;
    let value = get_message.call1(&i18n, &key.into()).ok()?;
    value.as_string().filter(|label| !label.is_empty())
}

/// Write `text` to the system clipboard. The promise result is dropped.
pub fn write_clipboard(text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let promise = window.navigator().clipboard().write_text(text);
    spawn_local(async move {
        let _ = JsFuture::from(promise).await;
    });
}
