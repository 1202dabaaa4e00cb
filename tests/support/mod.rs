// In-memory renderer for host tests: fixed element sizes, recorded style
// rules and listeners, and manual event dispatch.

#![allow(dead_code)]

use marquee_web::core::{Axis, Handler, HostEvent, Renderer};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

pub type NodeId = usize;

#[derive(Clone, Default)]
struct FakeNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    width: f64,
    height: f64,
    authored_margin: Option<f64>,
    cloned_from: Option<NodeId>,
}

struct Listener {
    node: NodeId,
    event: HostEvent,
    handler: Rc<RefCell<Handler>>,
}

#[derive(Default)]
pub struct FakeRenderer {
    nodes: RefCell<Vec<FakeNode>>,
    detached: RefCell<Vec<NodeId>>,
    rules: RefCell<BTreeMap<String, String>>,
    inserted_rules: Cell<usize>,
    listeners: RefCell<BTreeMap<u64, Listener>>,
    next_subscription: Cell<u64>,
    rtl: Cell<bool>,
    refuse_clones: Cell<bool>,
}

impl FakeRenderer {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn element(&self, width: f64, height: f64) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            width,
            height,
            ..FakeNode::default()
        });
        nodes.len() - 1
    }

    /// Container of `container_width` × 100 holding items of the given widths.
    pub fn container_with_items(&self, container_width: f64, item_widths: &[f64]) -> NodeId {
        let container = self.element(container_width, 100.0);
        for &w in item_widths {
            let item = self.element(w, w);
            self.append(&container, &item);
        }
        container
    }

    pub fn set_size(&self, node: NodeId, width: f64, height: f64) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[node].width = width;
        nodes[node].height = height;
    }

    pub fn set_authored_margin(&self, node: NodeId, margin: Option<f64>) {
        self.nodes.borrow_mut()[node].authored_margin = margin;
    }

    pub fn detach(&self, node: NodeId) {
        self.detached.borrow_mut().push(node);
    }

    pub fn set_rtl(&self, rtl: bool) {
        self.rtl.set(rtl);
    }

    /// Make every later `clone_deep` fail, like a node the host cannot copy.
    pub fn refuse_clones(&self, refuse: bool) {
        self.refuse_clones.set(refuse);
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node].attrs.get(name).cloned()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node].styles.get(property).cloned()
    }

    pub fn cloned_from(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.borrow()[node].cloned_from
    }

    pub fn child_ids(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node].children.clone()
    }

    pub fn rule_names(&self) -> Vec<String> {
        self.rules.borrow().keys().cloned().collect()
    }

    pub fn rule(&self, name: &str) -> Option<String> {
        self.rules.borrow().get(name).cloned()
    }

    pub fn inserted_rule_count(&self) -> usize {
        self.inserted_rules.get()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn listeners_for(&self, node: NodeId, event: HostEvent) -> usize {
        self.listeners
            .borrow()
            .values()
            .filter(|l| l.node == node && l.event == event)
            .count()
    }

    /// Fire `event` on `node`, like the browser would between tasks.
    pub fn dispatch(&self, node: NodeId, event: HostEvent) {
        let handlers: Vec<Rc<RefCell<Handler>>> = self
            .listeners
            .borrow()
            .values()
            .filter(|l| l.node == node && l.event == event)
            .map(|l| l.handler.clone())
            .collect();
        for handler in handlers {
            let mut h = handler.borrow_mut();
            (&mut *h)();
        }
    }

    fn detach_from_parent(nodes: &mut [FakeNode], child: NodeId) {
        if let Some(parent) = nodes[child].parent.take() {
            nodes[parent].children.retain(|&c| c != child);
        }
    }

    fn clone_tree(nodes: &mut Vec<FakeNode>, source: NodeId) -> NodeId {
        let mut copy = nodes[source].clone();
        copy.parent = None;
        copy.children = Vec::new();
        copy.cloned_from = Some(source);
        nodes.push(copy);
        let id = nodes.len() - 1;
        for child in nodes[source].children.clone() {
            let c = Self::clone_tree(nodes, child);
            nodes[c].parent = Some(id);
            nodes[id].children.push(c);
        }
        id
    }
}

impl Renderer for FakeRenderer {
    type Node = NodeId;
    type Subscription = u64;

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.child_ids(*node)
    }

    fn is_connected(&self, node: &NodeId) -> bool {
        !self.detached.borrow().contains(node)
    }

    fn has_attribute(&self, node: &NodeId, name: &str) -> bool {
        self.nodes.borrow()[*node].attrs.contains_key(name)
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[*node]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn measure(&self, node: &NodeId, axis: Axis) -> f64 {
        let nodes = self.nodes.borrow();
        match axis {
            Axis::Horizontal => nodes[*node].width,
            Axis::Vertical => nodes[*node].height,
        }
    }

    fn trailing_margin(&self, node: &NodeId, axis: Axis) -> Option<f64> {
        let property = match axis {
            Axis::Horizontal => "margin-right",
            Axis::Vertical => "margin-bottom",
        };
        let nodes = self.nodes.borrow();
        // Inline style wins over the stylesheet, as in computed style.
        match nodes[*node].styles.get(property) {
            Some(inline) => inline.trim_end_matches("px").parse().ok(),
            None => nodes[*node].authored_margin,
        }
    }

    fn create_track(&self) -> Option<NodeId> {
        Some(self.element(0.0, 0.0))
    }

    fn clone_deep(&self, node: &NodeId) -> Option<NodeId> {
        if self.refuse_clones.get() {
            return None;
        }
        Some(Self::clone_tree(&mut self.nodes.borrow_mut(), *node))
    }

    fn append(&self, parent: &NodeId, child: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        Self::detach_from_parent(&mut nodes, *child);
        nodes[*child].parent = Some(*parent);
        nodes[*parent].children.push(*child);
    }

    fn clear_children(&self, node: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        for child in std::mem::take(&mut nodes[*node].children) {
            nodes[child].parent = None;
        }
    }

    fn replace_styles(&self, node: &NodeId, styles: &[(&str, String)]) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[*node].styles = styles
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.nodes.borrow_mut()[*node]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn remove_style(&self, node: &NodeId, property: &str) {
        self.nodes.borrow_mut()[*node].styles.remove(property);
    }

    fn insert_rule(&self, name: &str, css: &str) {
        self.inserted_rules.set(self.inserted_rules.get() + 1);
        self.rules
            .borrow_mut()
            .insert(name.to_string(), css.to_string());
    }

    fn remove_rule(&self, name: &str) {
        self.rules.borrow_mut().remove(name);
    }

    fn is_rtl(&self) -> bool {
        self.rtl.get()
    }

    fn subscribe(&self, node: &NodeId, event: HostEvent, handler: Handler) -> u64 {
        let id = self.next_subscription.get() + 1;
        self.next_subscription.set(id);
        self.listeners.borrow_mut().insert(
            id,
            Listener {
                node: *node,
                event,
                handler: Rc::new(RefCell::new(handler)),
            },
        );
        id
    }

    fn unsubscribe(&self, subscription: u64) {
        self.listeners.borrow_mut().remove(&subscription);
    }
}
