//! Host capabilities consumed by the marquee engine.
//!
//! The engine never touches the DOM directly; the browser glue implements
//! [`Renderer`] over `web-sys` and tests implement it with fixed sizes.

use super::config::Axis;
use smallvec::SmallVec;
use std::rc::Rc;

/// Events the engine subscribes to on a track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    PointerEnter,
    PointerLeave,
    AnimationIteration,
}

impl HostEvent {
    #[inline]
    pub fn dom_name(self) -> &'static str {
        match self {
            HostEvent::PointerEnter => "mouseenter",
            HostEvent::PointerLeave => "mouseleave",
            HostEvent::AnimationIteration => "animationiteration",
        }
    }
}

pub type Handler = Box<dyn FnMut()>;

pub trait Renderer {
    type Node: Clone + PartialEq + 'static;
    type Subscription: 'static;

    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;
    fn is_connected(&self, node: &Self::Node) -> bool;
    fn has_attribute(&self, node: &Self::Node, name: &str) -> bool;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    /// Outer extent of `node` along `axis`, in px.
    fn measure(&self, node: &Self::Node, axis: Axis) -> f64;
    /// Computed trailing margin along `axis` (right or bottom), if any.
    fn trailing_margin(&self, node: &Self::Node, axis: Axis) -> Option<f64>;

    fn create_track(&self) -> Option<Self::Node>;
    fn clone_deep(&self, node: &Self::Node) -> Option<Self::Node>;
    fn append(&self, parent: &Self::Node, child: &Self::Node);
    fn clear_children(&self, node: &Self::Node);

    /// Replace the whole inline style of `node`.
    fn replace_styles(&self, node: &Self::Node, styles: &[(&str, String)]);
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    fn remove_style(&self, node: &Self::Node, property: &str);

    /// Insert a named `@keyframes` rule into the document.
    fn insert_rule(&self, name: &str, css: &str);
    /// Remove the rule previously inserted under `name`; unknown names are ignored.
    fn remove_rule(&self, name: &str);

    /// Global right-to-left layout flag.
    fn is_rtl(&self) -> bool;

    fn subscribe(&self, node: &Self::Node, event: HostEvent, handler: Handler)
        -> Self::Subscription;
    fn unsubscribe(&self, subscription: Self::Subscription);
}

/// Listeners owned by one marquee build. Clearing (or dropping) the scope
/// unsubscribes everything it holds, so a rebuild never stacks listeners.
pub struct ListenerScope<R: Renderer> {
    renderer: Rc<R>,
    subscriptions: SmallVec<[(HostEvent, R::Subscription); 3]>,
}

impl<R: Renderer> ListenerScope<R> {
    pub fn new(renderer: Rc<R>) -> Self {
        Self {
            renderer,
            subscriptions: SmallVec::new(),
        }
    }

    pub fn add(&mut self, node: &R::Node, event: HostEvent, handler: Handler) {
        let sub = self.renderer.subscribe(node, event, handler);
        self.subscriptions.push((event, sub));
    }

    /// Unsubscribe every listener registered for `event`.
    pub fn remove(&mut self, event: HostEvent) {
        let mut i = 0;
        while i < self.subscriptions.len() {
            if self.subscriptions[i].0 == event {
                let (_, sub) = self.subscriptions.remove(i);
                self.renderer.unsubscribe(sub);
            } else {
                i += 1;
            }
        }
    }

    pub fn clear(&mut self) {
        for (_, sub) in self.subscriptions.drain(..) {
            self.renderer.unsubscribe(sub);
        }
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl<R: Renderer> Drop for ListenerScope<R> {
    fn drop(&mut self) {
        self.clear();
    }
}
