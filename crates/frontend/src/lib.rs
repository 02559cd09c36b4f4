pub mod app;
pub mod domain;
pub mod shared;

use leptos::prelude::*;
use shared::config::{load_config, read_page_override, AppConfig};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let page_override = read_page_override();
    let (config, config_error) = match load_config(page_override.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::warn!("{}; falling back to defaults", e);
    }
    log::debug!("API base URL: {}", config.api.base_url);

    leptos::mount::mount_to_body(move || view! { <app::App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
