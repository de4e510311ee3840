pub mod app;
pub mod dashboards;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

fn init_logging() {
    // routes the `log` facade to the browser console
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
    leptos::mount::mount_to_body(app::App);
}
