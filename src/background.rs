/// Search Relay running in the extension's background context

use wasm_bindgen::prelude::*;

use crate::browser;
use crate::messages::RelayMessage;

/// Register the relay on `chrome.runtime.onMessage`.
///
/// Only well-formed search messages with a non-empty query are acted on.
/// Everything else is dropped: no response, no logging. The callback
/// returns `false` since no caller ever waits for an acknowledgment.
pub fn install() -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(
        move |message: JsValue, _sender: JsValue, _send_response: js_sys::Function| -> JsValue {
            if let Ok(RelayMessage::Search { query }) = serde_wasm_bindgen::from_value(message) {
                if !query.is_empty() {
                    browser::native_search(&query);
                }
            }
            JsValue::FALSE
        },
    )
        as Box<dyn FnMut(JsValue, JsValue, js_sys::Function) -> JsValue>);

    let Some((on_message, add_listener)) =
        browser::chrome_method(&["runtime", "onMessage", "addListener"])
    else {
        return Err(JsValue::from_str("chrome.runtime.onMessage is unavailable"));
    };
    add_listener.call1(&on_message, callback.as_ref())?;

    // The listener lives for the worker's lifetime
    callback.forget();

    log::debug!("search relay installed");
    Ok(())
}
