use crate::constants::ATTR_MARQUEE;
use crate::core::{MarqueeConfig, MarqueeInstance, MarqueeRegistry, PassOutcome};
use crate::dom;
use crate::events::{self, SharedRegistry};
use crate::renderer::DomRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Find every marquee container, build and animate it, and keep them all in
/// sync with the viewport width.
pub fn init_marquees(window: &web::Window, document: &web::Document) -> Option<SharedRegistry> {
    let containers = dom::query_all(document, &format!("[{ATTR_MARQUEE}]"));
    if containers.is_empty() {
        return None;
    }

    let renderer = Rc::new(DomRenderer::new(window.clone(), document.clone()));
    let mut registry = MarqueeRegistry::default();
    let mut animated = 0usize;
    for (i, container) in containers.into_iter().enumerate() {
        let config = MarqueeConfig::from_attributes(|name| container.get_attribute(name));
        let container: web::Element = container.into();
        let instance =
            MarqueeInstance::new(i as u64 + 1, renderer.clone(), container, config).shared();
        if registry.register(instance) == PassOutcome::Animated {
            animated += 1;
        }
    }
    log::info!(
        "[marquee] {} container(s), {} animated",
        registry.instances().len(),
        animated
    );

    let registry = Rc::new(RefCell::new(registry));
    events::wire_marquee_resize(registry.clone());
    Some(registry)
}
