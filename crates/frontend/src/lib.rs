pub mod app;
pub mod app_shell;
pub mod config;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    let settings = config::config();
    let level = settings.log_level().unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    if let Some(error) = config::load_error() {
        log::warn!("invalid embedded config, using defaults: {}", error);
    }
    if settings.log_level().is_none() {
        log::warn!(
            "unknown log level '{}', using debug",
            settings.logging.level
        );
    }
    log::info!("backend at {}", shared::api_utils::api_base());

    leptos::mount::mount_to_body(app::App);
}
