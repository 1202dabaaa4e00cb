//! `Renderer` implementation over the live DOM. Nodes are plain elements so
//! SVG items take part like HTML ones.

use crate::core::duplicate::trailing_margin_property;
use crate::core::{parse_float_prefix, Axis, Handler, HostEvent, Renderer};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct DomRenderer {
    window: web::Window,
    document: web::Document,
}

pub struct DomSubscription {
    target: web::Element,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl DomRenderer {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }
}

/// Inline style of an HTML or SVG element. Other element kinds have none.
fn inline_style(node: &web::Element) -> Option<web::CssStyleDeclaration> {
    if let Some(html) = node.dyn_ref::<web::HtmlElement>() {
        return Some(html.style());
    }
    node.dyn_ref::<web::SvgElement>().map(|svg| svg.style())
}

impl Renderer for DomRenderer {
    type Node = web::Element;
    type Subscription = DomSubscription;

    fn children(&self, node: &web::Element) -> Vec<web::Element> {
        let list = node.children();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn is_connected(&self, node: &web::Element) -> bool {
        node.is_connected()
    }

    fn has_attribute(&self, node: &web::Element, name: &str) -> bool {
        node.has_attribute(name)
    }

    fn set_attribute(&self, node: &web::Element, name: &str, value: &str) {
        _ = node.set_attribute(name, value);
    }

    fn measure(&self, node: &web::Element, axis: Axis) -> f64 {
        if let Some(html) = node.dyn_ref::<web::HtmlElement>() {
            return match axis {
                Axis::Horizontal => html.offset_width() as f64,
                Axis::Vertical => html.offset_height() as f64,
            };
        }
        // SVG and friends have no offset box.
        let rect = node.get_bounding_client_rect();
        match axis {
            Axis::Horizontal => rect.width(),
            Axis::Vertical => rect.height(),
        }
    }

    fn trailing_margin(&self, node: &web::Element, axis: Axis) -> Option<f64> {
        let style = self.window.get_computed_style(node).ok().flatten()?;
        let raw = style
            .get_property_value(trailing_margin_property(axis))
            .ok()?;
        parse_float_prefix(&raw)
    }

    fn create_track(&self) -> Option<web::Element> {
        self.document.create_element("div").ok()
    }

    fn clone_deep(&self, node: &web::Element) -> Option<web::Element> {
        node.clone_node_with_deep(true)
            .ok()
            .and_then(|n| n.dyn_into::<web::Element>().ok())
    }

    fn append(&self, parent: &web::Element, child: &web::Element) {
        _ = parent.append_child(child);
    }

    fn clear_children(&self, node: &web::Element) {
        node.set_inner_html("");
    }

    fn replace_styles(&self, node: &web::Element, styles: &[(&str, String)]) {
        let css: String = styles
            .iter()
            .map(|(prop, value)| format!("{prop}: {value};"))
            .collect::<Vec<_>>()
            .join(" ");
        if let Some(style) = inline_style(node) {
            style.set_css_text(&css);
        }
    }

    fn set_style(&self, node: &web::Element, property: &str, value: &str) {
        if let Some(style) = inline_style(node) {
            _ = style.set_property(property, value);
        }
    }

    fn remove_style(&self, node: &web::Element, property: &str) {
        if let Some(style) = inline_style(node) {
            _ = style.remove_property(property);
        }
    }

    fn insert_rule(&self, name: &str, css: &str) {
        let Some(head) = self.document.head() else {
            return;
        };
        let Ok(style) = self.document.create_element("style") else {
            return;
        };
        _ = style.class_list().add_1(name);
        style.set_text_content(Some(css));
        _ = head.append_child(&style);
    }

    fn remove_rule(&self, name: &str) {
        if let Some(head) = self.document.head() {
            if let Ok(Some(style)) = head.query_selector(&format!(".{name}")) {
                style.remove();
            }
        }
    }

    fn is_rtl(&self) -> bool {
        js_sys::Reflect::get(&self.window, &JsValue::from_str("stateRtl"))
            .map(|v| v.is_truthy())
            .unwrap_or(false)
    }

    fn subscribe(&self, node: &web::Element, event: HostEvent, handler: Handler) -> DomSubscription {
        let closure = Closure::wrap(handler);
        let name = event.dom_name();
        _ = node.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        DomSubscription {
            target: node.clone(),
            event: name,
            closure,
        }
    }

    fn unsubscribe(&self, subscription: DomSubscription) {
        let DomSubscription {
            target,
            event,
            closure,
        } = subscription;
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        // A handler may unsubscribe itself; free its closure once it returned.
        dom::set_timeout(0, move || drop(closure));
    }
}
