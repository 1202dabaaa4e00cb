use super::menu::{unlock, SharedLock};
use crate::constants::{
    ATTR_MENU_OPEN, CLASS_ARROW_ROTATE, CLASS_DROPDOWN_SHOW, DROPDOWN_HEADER_SELECTOR,
    DROPDOWN_MOBILE_SELECTOR, DROPDOWN_SELECTOR,
};
use crate::core::{dropdown_placement, DropdownPlacement};
use crate::dom;
use web_sys as web;

#[derive(Clone)]
struct DropdownParts {
    menu: web::HtmlElement,
    selected: web::HtmlElement,
    arrow: web::HtmlElement,
}

impl DropdownParts {
    fn close(&self) {
        _ = self.menu.class_list().remove_1(CLASS_DROPDOWN_SHOW);
        _ = self.arrow.class_list().remove_1(CLASS_ARROW_ROTATE);
    }
}

/// City selector: open/close, value pick, and its move between the header
/// and the mobile drawer.
pub fn wire_dropdown(document: &web::Document, lock: SharedLock) {
    let Some(dropdown) = document.query_selector(DROPDOWN_SELECTOR).ok().flatten() else {
        return;
    };
    wire_toggle(document, &dropdown);

    move_dropdown(document, &dropdown, &lock);
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    dom::add_listener(&window, "resize", move |_ev: web::Event| {
        move_dropdown(&doc, &dropdown, &lock);
    });
}

fn wire_toggle(document: &web::Document, dropdown: &web::Element) {
    let (Some(toggle), Some(menu), Some(selected), Some(arrow)) = (
        dom::query_html(dropdown, ".dropdown-toggle"),
        dom::query_html(dropdown, ".dropdown-menu"),
        dom::query_html(dropdown, ".dropdown-toggle__text"),
        dom::query_html(dropdown, ".arrow"),
    ) else {
        log::debug!("[dropdown] incomplete markup, toggle not wired");
        return;
    };
    let parts = DropdownParts {
        menu,
        selected,
        arrow,
    };

    let p = parts.clone();
    dom::add_listener(&toggle, "click", move |_ev: web::MouseEvent| {
        _ = p.menu.class_list().toggle(CLASS_DROPDOWN_SHOW);
        _ = p.arrow.class_list().toggle(CLASS_ARROW_ROTATE);
    });

    let p = parts.clone();
    dom::add_listener(&parts.menu, "click", move |ev: web::MouseEvent| {
        let Some(target) = dom::event_target_element(&ev) else {
            return;
        };
        let picked = target
            .get_attribute("data-value")
            .filter(|v| !v.is_empty());
        if let Some(value) = picked {
            p.selected.set_text_content(target.text_content().as_deref());
            p.close();
            log::debug!("[dropdown] selected {value}");
        }
    });

    let p = parts;
    let root = dropdown.clone();
    dom::add_listener(document, "click", move |ev: web::MouseEvent| {
        let inside = dom::event_target_element(&ev)
            .map(|t| root.contains(Some(&*t)))
            .unwrap_or(false);
        if !inside {
            p.close();
        }
    });
}

fn move_dropdown(document: &web::Document, dropdown: &web::Element, lock: &SharedLock) {
    let (Some(header), Some(mobile)) = (
        document.query_selector(DROPDOWN_HEADER_SELECTOR).ok().flatten(),
        document.query_selector(DROPDOWN_MOBILE_SELECTOR).ok().flatten(),
    ) else {
        return;
    };
    let Some(width) = dom::viewport_width() else {
        return;
    };
    let parent = dropdown.parent_element();

    match dropdown_placement(width) {
        DropdownPlacement::MobileMenu => {
            if parent.as_ref() != Some(&mobile) {
                _ = mobile.insert_before(dropdown, mobile.first_child().as_ref());
            }
        }
        DropdownPlacement::Header => {
            if parent.as_ref() != Some(&header) {
                _ = header.append_child(dropdown);
            }
            unlock(lock, document);
            if let Some(root) = document.document_element() {
                _ = root.remove_attribute(ATTR_MENU_OPEN);
            }
        }
    }
}
