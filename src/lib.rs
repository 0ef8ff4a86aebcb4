/// Arwa Sidekick - browser sidebar with per-site checklists
/// Built with Rust + WASM + Yew

pub mod checklist;
pub mod config;
pub mod error;
pub mod hostname;
pub mod refresh;
pub mod render;
pub mod tab_data;
pub mod ui;

use config::SidebarConfig;
use error::SidebarError;
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
}

// Mount the checklist sidebar on #lists
#[wasm_bindgen]
pub fn start_sidebar() -> Result<(), JsValue> {
    Ok(mount(SidebarConfig::checklists())?)
}

// Mount the URL echo sidebar on #url-display
#[wasm_bindgen]
pub fn start_url_display() -> Result<(), JsValue> {
    Ok(mount(SidebarConfig::url_echo())?)
}

fn mount(config: SidebarConfig) -> Result<(), SidebarError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(SidebarError::NoDocument)?;

    let root = document
        .get_element_by_id(&config.container_id)
        .ok_or_else(|| SidebarError::MissingContainer(config.container_id.clone()))?;

    log::info!(
        "mounting sidebar on #{} with {} checklist(s) for {} hostname(s)",
        config.container_id,
        config.registry.checklists.len(),
        config.registry.rules.len()
    );
    for hostname in config.registry.hostnames() {
        log::debug!("checklists configured for {}", hostname);
    }

    yew::Renderer::<ui::sidebar::Sidebar>::with_root_and_props(
        root,
        ui::sidebar::SidebarProps { config },
    )
    .render();

    Ok(())
}
