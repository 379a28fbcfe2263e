//! WebAssembly bindings used by the update page shell
//!
//! The shell calls `process_event` with `Event::Ui(UiEvent::Initialize)` when
//! the page mounts and `Event::Device(DeviceEvent::Restart)` when the restart
//! button is pressed. Returned effects are either `Render` (re-read `view()`
//! and redraw the banner and button) or `Http` (strip `https://relative`,
//! `fetch()` the path, hand the outcome back through `handle_response`). A
//! `fetch()` rejection must be resolved as an IO error so the core reports a
//! communication error instead of a failed restart.
//!
//! All payloads are bincode, as produced by the generated `shared_types`.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{
    bridge::{Bridge, EffectId},
    Core,
};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Installs the console logger when the module loads
#[wasm_bindgen(start)]
pub fn init_wasm() {
    // the page may load the module twice (hot reload), keep the first logger
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::debug!("logger already initialized: {e}");
    }
}

/// Feeds a serialized `Event` into the core, returns the serialized effects
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    CORE.update(event_bytes, &mut effects)
        .expect("shell sent an event the core cannot decode");
    effects
}

/// Serialized `ViewModel`: update frame, firmware info, status banner, restart button
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view_model = Vec::new();
    CORE.view(&mut view_model)
        .expect("view model serialization failed");
    view_model
}

/// Resolves the effect `id` (an HTTP request) with the shell's serialized outcome
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    CORE.resolve(EffectId(id), response_bytes, &mut effects)
        .expect("shell resolved an unknown or malformed effect");
    effects
}
