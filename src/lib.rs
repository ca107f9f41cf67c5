/// Selection Search - Chrome Extension for searching and copying selected text
/// Built with Rust + WASM + Yew

mod background;
mod browser;
mod content;
pub mod geometry;
pub mod messages;
pub mod selection;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the selection overlay controller in a page
#[wasm_bindgen]
pub fn start_content() {
    if let Err(err) = content::install() {
        log::error!("failed to install selection overlay controller: {err:?}");
    }
}

// Start the search relay in the background context
#[wasm_bindgen]
pub fn start_background() {
    if let Err(err) = background::install() {
        log::error!("failed to install search relay: {err:?}");
    }
}
