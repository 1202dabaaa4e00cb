use super::renderer::Renderer;
use crate::constants::{ATTR_MARQUEE_CLONE, ATTR_MARQUEE_INNER, ATTR_MARQUEE_ITEM};

/// Track element plus the authored items it was built from.
pub struct BuiltLayout<N> {
    pub track: N,
    pub originals: Vec<N>,
}

/// Wrap the container's children in a single track element and tag each of
/// them as a marquee item. Returns `None` for an empty container.
///
/// A container whose first child is already a track (for example when the
/// page is scanned twice) is adopted instead of being wrapped again. Clones
/// left by an earlier pass are not originals.
pub fn build_track<R: Renderer>(renderer: &R, container: &R::Node) -> Option<BuiltLayout<R::Node>> {
    let children = renderer.children(container);
    let first = children.first()?;

    if children.len() == 1 && renderer.has_attribute(first, ATTR_MARQUEE_INNER) {
        let track = first.clone();
        let originals: Vec<_> = renderer
            .children(&track)
            .into_iter()
            .filter(|n| !renderer.has_attribute(n, ATTR_MARQUEE_CLONE))
            .collect();
        if originals.is_empty() {
            return None;
        }
        return Some(BuiltLayout { track, originals });
    }

    let track = renderer.create_track()?;
    for item in &children {
        renderer.set_attribute(item, ATTR_MARQUEE_ITEM, "");
    }
    renderer.set_attribute(&track, ATTR_MARQUEE_INNER, "");
    renderer.clear_children(container);
    for item in &children {
        renderer.append(&track, item);
    }
    renderer.append(container, &track);

    Some(BuiltLayout {
        track,
        originals: children,
    })
}
