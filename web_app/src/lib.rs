use wasm_bindgen::prelude::*;

mod api;
mod bootstrap;
mod components;
mod conflict;
mod flash;
mod state;

#[wasm_bindgen(start)]
pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(e) = bootstrap::start() {
        log::error!("Program editor not started: {}", e);
    }
}
