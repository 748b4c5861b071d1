//! Image Describe Web App (Leptos + WASM)

mod app;
mod api;
mod browser_file;
mod components;
mod config;

pub use api::groq::FetchTransport;
pub use app::App;
pub use browser_file::BrowserImage;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("error initializing logger");
    leptos::mount::mount_to_body(app::App);
}
