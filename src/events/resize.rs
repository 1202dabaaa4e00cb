use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::core::{Debouncer, MarqueeRegistry};
use crate::dom;
use crate::renderer::DomRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedRegistry = Rc<RefCell<MarqueeRegistry<DomRenderer>>>;

/// Relayout every marquee once the window width settles on a new value.
pub fn wire_marquee_resize(registry: SharedRegistry) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(width) = dom::viewport_width() {
        registry.borrow_mut().prime_width(width);
    }

    let debouncer = Rc::new(RefCell::new(Debouncer::default()));
    dom::add_listener(&window, "resize", move |_ev: web::Event| {
        let ticket = debouncer.borrow_mut().trigger();
        let debouncer = debouncer.clone();
        let registry = registry.clone();
        dom::set_timeout(RESIZE_DEBOUNCE_MS, move || {
            if !debouncer.borrow_mut().fire(ticket) {
                return;
            }
            if let Some(width) = dom::viewport_width() {
                registry.borrow_mut().on_viewport_width(width);
            }
        });
    });
}
