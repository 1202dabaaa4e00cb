use crate::constants::{
    ATTR_LOCK_PADDING, ATTR_MENU, ATTR_MENU_OPEN, ATTR_SCROLL_LOCK, CLASS_SUBMENU_OPEN,
    TOGGLE_DELAY_MS, UNLOCK_DELAY_MS,
};
use crate::core::{submenu_intercepts_click, LockTransition, ScrollLock};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

pub type SharedLock = Rc<RefCell<ScrollLock>>;

const MOBILE_ITEM_SELECTOR: &str = ".mobile-menu .menu__item";

fn apply_lock(document: &web::Document, transition: LockTransition) {
    match transition {
        LockTransition::Locked => {
            if let Some(root) = document.document_element() {
                _ = root.set_attribute(ATTR_SCROLL_LOCK, "");
            }
            log::debug!("[lock] locked");
        }
        LockTransition::UnlockScheduled { after } => {
            let doc = document.clone();
            dom::set_timeout(after.as_millis() as i32, move || {
                for el in dom::query_all(&doc, &format!("[{ATTR_LOCK_PADDING}]")) {
                    _ = el.style().remove_property("padding-right");
                }
                if let Some(body) = doc.body() {
                    _ = body.style().remove_property("padding-right");
                }
                if let Some(root) = doc.document_element() {
                    _ = root.remove_attribute(ATTR_SCROLL_LOCK);
                }
                log::debug!("[lock] unlocked");
            });
        }
        LockTransition::Ignored => {}
    }
}

pub fn unlock(lock: &SharedLock, document: &web::Document) {
    let transition = lock
        .borrow_mut()
        .unlock(Instant::now(), Duration::from_millis(UNLOCK_DELAY_MS));
    apply_lock(document, transition);
}

/// Burger button: toggles the drawer and the page scroll lock together.
pub fn wire_menu_toggle(document: &web::Document, lock: SharedLock) {
    if document.query_selector(&format!("[{ATTR_MENU}]")).ok().flatten().is_none() {
        return;
    }
    let doc = document.clone();
    dom::add_listener(document, "click", move |ev: web::MouseEvent| {
        let now = Instant::now();
        if !lock.borrow().is_ready(now) {
            return;
        }
        let Some(target) = dom::event_target_element(&ev) else {
            return;
        };
        if dom::closest(&target, &format!("[{ATTR_MENU}]")).is_none() {
            return;
        }
        let transition = lock
            .borrow_mut()
            .toggle(now, Duration::from_millis(TOGGLE_DELAY_MS));
        apply_lock(&doc, transition);
        if let Some(root) = doc.document_element() {
            _ = root.toggle_attribute(ATTR_MENU_OPEN);
        }
    });
}

/// Submenu items in the mobile drawer open on tap and close each other.
pub fn wire_submenus(document: &web::Document) {
    let touch = dom::is_touch_device();

    for trigger in dom::query_all(document, ".mobile-menu .menu__trigger") {
        let doc = document.clone();
        dom::add_listener(&trigger, "click", move |ev: web::MouseEvent| {
            let width = dom::viewport_width().unwrap_or(f64::INFINITY);
            if !submenu_intercepts_click(width, touch) {
                return;
            }
            let Some(target) = dom::event_target_element(&ev) else {
                return;
            };
            if dom::closest(&target, ".mobile-menu").is_none() {
                return;
            }
            ev.prevent_default();
            let item = dom::closest(&target, ".menu__item");
            for other in dom::query_all(&doc, MOBILE_ITEM_SELECTOR) {
                let other_el: &web::Element = other.as_ref();
                if item.as_ref() != Some(other_el) {
                    _ = other.class_list().remove_1(CLASS_SUBMENU_OPEN);
                }
            }
            if let Some(item) = item {
                _ = item.class_list().toggle(CLASS_SUBMENU_OPEN);
            }
        });
    }

    let doc = document.clone();
    dom::add_listener(document, "click", move |ev: web::MouseEvent| {
        let inside = dom::event_target_element(&ev)
            .and_then(|t| dom::closest(&t, MOBILE_ITEM_SELECTOR))
            .is_some();
        if !inside {
            for item in dom::query_all(&doc, MOBILE_ITEM_SELECTOR) {
                _ = item.class_list().remove_1(CLASS_SUBMENU_OPEN);
            }
        }
    });
}
