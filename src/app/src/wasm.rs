//! WebAssembly bindings for the display config core
//!
//! The web shell pushes user input and device-state notifications through
//! `process_event`, renders `view`, and answers device effects through
//! `handle_response`. All payloads are bincode-serialized.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Route `log` output to the browser console when the module loads
#[wasm_bindgen(start)]
pub fn init_wasm() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).expect("Failed to initialize logger");
}

/// Process a serialized `Event`, returning the serialized effects it requested
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    CORE.update(event_bytes, &mut effects)
        .expect("Failed to process event");
    effects
}

/// Serialized `ViewModel` of the current state
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    CORE.view(&mut view).expect("Failed to get view model");
    view
}

/// Resolve effect `id` with a serialized output, e.g. a `DeviceOutput` once
/// the device handled a set-config request
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    )
    .expect("Failed to handle response");
    effects
}
