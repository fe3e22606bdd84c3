#![allow(non_snake_case)]

pub mod catalog;
pub mod components;
pub mod pages;
pub mod services;

pub mod app;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting ECOTRADE frontend");

    // Remove loading spinner
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(loader) = document.get_element_by_id("app-loading") {
                loader.remove();
            }
        }
    }

    leptos::mount::mount_to_body(app::App);
}
