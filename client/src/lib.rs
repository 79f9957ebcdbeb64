//! # dijitle-web
//!
//! Leptos + WASM frontend for the Dijitle website: the root application
//! shell and its light/dark theme toggle.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Browser entry point: install global styles and mount `App` into the
/// host page's mount point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast as _;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    util::global_styles::install();

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(app::MOUNT_POINT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log::error!("mount point #{} not found", app::MOUNT_POINT_ID);
        return;
    };

    log::info!("mounting {}", app::PRODUCT_NAME);
    leptos::mount::mount_to(root, app::App).forget();
}
