//! Browser behaviors for the marketing site, compiled to WASM.
//!
//! `core` holds the marquee engine and the page controllers with no browser
//! dependency, so it builds and tests natively. Everything that touches the
//! DOM is only compiled for `wasm32`.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod marquee;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::core::ScrollLock;
    use crate::{dom, events, marquee};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("marquee-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        dom::document_ready(&document).await;

        let lock: events::SharedLock = Rc::new(RefCell::new(ScrollLock::new()));
        events::wire_menu_toggle(&document, lock.clone());
        events::wire_submenus(&document);
        events::wire_dropdown(&document, lock);

        // The registry lives on inside the resize listener.
        _ = marquee::init_marquees(&window, &document);
        Ok(())
    }
}
