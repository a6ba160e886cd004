// lib.rs - Root module for the recovery_site library
//
// Built twice: as an rlib for the SSR server and as a cdylib for the
// browser, where `hydrate` takes over the server-rendered page.

pub mod web_app;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(App);
}
