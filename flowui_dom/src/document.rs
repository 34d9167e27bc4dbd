// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core document implementation: structure, attributes, content, and queries.

use std::fmt;

use kurbo::{Point, Rect, Size};

use crate::event::ListenerRegistry;
use crate::layout::{FixedAdvance, TextMetrics, visible_text};
use crate::selector::SelectorList;
use crate::types::{BoxStyle, Content, ElementFlags, ElementId, StyleValue};

/// Results of a hit test.
#[derive(Clone, Debug)]
pub struct Hit {
    /// The matched element.
    pub element: ElementId,
    /// Path from root to element (inclusive).
    pub path: Vec<ElementId>,
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    generation: u32,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
    pub(crate) tag: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) content: Option<Content>,
    pub(crate) style: Vec<(String, StyleValue)>,
    pub(crate) box_style: BoxStyle,
    pub(crate) intrinsic_size: Option<Size>,
    pub(crate) bounds: Rect,
    pub(crate) z_index: Option<i32>,
    pub(crate) flags: ElementFlags,
}

impl Node {
    fn new(generation: u32, tag: String) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            tag,
            attributes: Vec::new(),
            content: None,
            style: Vec::new(),
            box_style: BoxStyle::default(),
            intrinsic_size: None,
            bounds: Rect::ZERO,
            z_index: None,
            flags: ElementFlags::default(),
        }
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|c| c.split_ascii_whitespace().any(|c| c == class))
    }
}

/// A retained element tree with a window viewport.
///
/// The document owns a root `html` element with `head` and `body` children.
/// Elements are created detached and become part of the document once appended
/// under a connected parent.
pub struct Document {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    epoch: u64,
    root: ElementId,
    head: ElementId,
    body: ElementId,
    viewport: Size,
    pub(crate) listeners: ListenerRegistry,
    pub(crate) text_metrics: Box<dyn TextMetrics>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Document")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .field("epoch", &self.epoch)
            .field("viewport", &self.viewport)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Document {
    /// Create a document whose window has the given inner size.
    pub fn new(viewport: Size) -> Self {
        let placeholder = ElementId::new(0, 0);
        let mut doc = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            epoch: 0,
            root: placeholder,
            head: placeholder,
            body: placeholder,
            viewport,
            listeners: ListenerRegistry::default(),
            text_metrics: Box::new(FixedAdvance::default()),
        };
        let root = doc.alloc("html");
        let head = doc.alloc("head");
        let body = doc.alloc("body");
        doc.link_parent(head, root);
        doc.link_parent(body, root);
        doc.root = root;
        doc.head = head;
        doc.body = body;
        doc.fit_to_viewport();
        doc
    }

    /// The `html` element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The `head` element.
    pub fn head(&self) -> ElementId {
        self.head
    }

    /// The `body` element.
    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Mutation counter; advances on every tree, attribute, content or style change.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Inner size of the window.
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Resize the window. The root and body are stretched to cover it.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
        self.fit_to_viewport();
    }

    /// Replace the text measurement provider.
    pub fn set_text_metrics(&mut self, metrics: impl TextMetrics + 'static) {
        self.text_metrics = Box::new(metrics);
    }

    // --- structure ---

    /// Create a detached element. Tag names are ASCII-lowercased.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.epoch += 1;
        self.alloc(&tag.to_ascii_lowercase())
    }

    /// Append `child` as the last child of `parent`, moving it if it already has a parent.
    ///
    /// Requests that would create a cycle, or that involve stale ids, are ignored.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if !self.is_alive(parent) || !self.is_alive(child) {
            return;
        }
        if self.is_inclusive_ancestor(child, parent) {
            tracing::warn!(?parent, ?child, "append_child would create a cycle; ignored");
            return;
        }
        if let Some(old) = self.node(child).parent {
            self.unlink_parent(child, old);
        }
        self.link_parent(child, parent);
        self.epoch += 1;
    }

    /// Detach an element (and its subtree) from its parent.
    ///
    /// The element stays alive and can be appended again.
    pub fn remove(&mut self, id: ElementId) {
        let Some(parent) = self.node_opt(id).and_then(|n| n.parent) else {
            return;
        };
        self.unlink_parent(id, parent);
        self.epoch += 1;
    }

    /// Free an element and its subtree. Their ids become stale and their listeners are dropped.
    ///
    /// The document's own `html`, `head` and `body` elements cannot be released.
    pub fn release(&mut self, id: ElementId) {
        if !self.is_alive(id) || id == self.root || id == self.head || id == self.body {
            return;
        }
        self.remove(id);
        self.free_subtree(id);
        self.epoch += 1;
    }

    /// Returns true if `id` refers to a live element.
    ///
    /// An `ElementId` is live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Returns true if the element's ancestor chain reaches the root.
    pub fn is_connected(&self, id: ElementId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        let mut cur = id;
        loop {
            if cur == self.root {
                return true;
            }
            match self.node(cur).parent {
                Some(p) => cur = p,
                None => return false,
            }
        }
    }

    /// Parent of an element.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node_opt(id)?.parent
    }

    /// Children of an element, in order. Empty for stale ids.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Tag name of an element.
    pub fn tag_name(&self, id: ElementId) -> Option<&str> {
        self.node_opt(id).map(|n| n.tag.as_str())
    }

    // --- attributes ---

    /// Set an attribute, replacing any existing value.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        let Some(node) = self.node_opt_mut(id) else {
            return;
        };
        match node.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => node.attributes.push((name.to_string(), value.to_string())),
        }
        self.epoch += 1;
    }

    /// Value of an attribute.
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.node_opt(id)?.attribute(name)
    }

    /// Returns true if the attribute is present (even with an empty value).
    pub fn has_attribute(&self, id: ElementId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Remove an attribute. Returns true if it was present.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> bool {
        let Some(node) = self.node_opt_mut(id) else {
            return false;
        };
        let before = node.attributes.len();
        node.attributes.retain(|(k, _)| k != name);
        let removed = node.attributes.len() != before;
        if removed {
            self.epoch += 1;
        }
        removed
    }

    /// Add a class to the `class` attribute if not already present.
    pub fn add_class(&mut self, id: ElementId, class: &str) {
        let Some(node) = self.node_opt(id) else {
            return;
        };
        if node.has_class(class) {
            return;
        }
        let value = match node.attribute("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {class}", existing.trim_end())
            }
            _ => class.to_string(),
        };
        self.set_attribute(id, "class", &value);
    }

    /// Returns true if the element carries `class`.
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.node_opt(id).is_some_and(|n| n.has_class(class))
    }

    /// Classes of an element, in attribute order.
    pub fn classes(&self, id: ElementId) -> Vec<&str> {
        self.attribute(id, "class")
            .map(|c| c.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    /// First connected element, in document order, whose `id` attribute equals `element_id`.
    pub fn get_element_by_id(&self, element_id: &str) -> Option<ElementId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&id| self.node(id).attribute("id") == Some(element_id))
    }

    // --- content ---

    /// Replace children-free text content (for example a stylesheet body).
    pub fn set_text_content(&mut self, id: ElementId, text: &str) {
        if let Some(node) = self.node_opt_mut(id) {
            node.content = Some(Content::Text(text.to_string()));
            self.epoch += 1;
        }
    }

    /// Insert markup verbatim as the element's content.
    ///
    /// The markup is not escaped or sanitized; callers are responsible for
    /// supplying trusted content.
    pub fn set_inner_markup(&mut self, id: ElementId, markup: &str) {
        if let Some(node) = self.node_opt_mut(id) {
            node.content = Some(Content::Markup(markup.to_string()));
            self.epoch += 1;
        }
    }

    /// Markup content as inserted, if the element holds markup.
    pub fn inner_markup(&self, id: ElementId) -> Option<&str> {
        match self.node_opt(id)?.content.as_ref()? {
            Content::Markup(m) => Some(m),
            Content::Text(_) => None,
        }
    }

    /// Visible text of the element and its descendants, in document order.
    ///
    /// Markup has its tags stripped and basic entities decoded.
    pub fn text_content(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: ElementId, out: &mut String) {
        let Some(node) = self.node_opt(id) else {
            return;
        };
        match &node.content {
            Some(Content::Text(t)) => out.push_str(t),
            Some(Content::Markup(m)) => out.push_str(&visible_text(m)),
            None => {}
        }
        for &child in &node.children {
            self.collect_text(child, out);
        }
    }

    // --- style ---

    /// Set an inline style property, replacing any existing value.
    pub fn set_style_property(&mut self, id: ElementId, name: &str, value: StyleValue) {
        let Some(node) = self.node_opt_mut(id) else {
            return;
        };
        match node.style.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => node.style.push((name.to_string(), value)),
        }
        self.epoch += 1;
    }

    /// Value of an inline style property.
    pub fn style_property(&self, id: ElementId, name: &str) -> Option<&StyleValue> {
        self.node_opt(id)?
            .style
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Inline style rendered as CSS declarations, e.g. `--top: 480px; --left: 580px;`.
    pub fn style_text(&self, id: ElementId) -> String {
        let Some(node) = self.node_opt(id) else {
            return String::new();
        };
        let decls: Vec<String> = node
            .style
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect();
        decls.join(" ")
    }

    // --- geometry ---

    /// Set the layout metrics used for measurement.
    pub fn set_box_style(&mut self, id: ElementId, style: BoxStyle) {
        if let Some(node) = self.node_opt_mut(id) {
            node.box_style = style;
        }
    }

    /// Layout metrics of an element.
    pub fn box_style(&self, id: ElementId) -> Option<BoxStyle> {
        self.node_opt(id).map(|n| n.box_style)
    }

    /// Override the measured size of an element (e.g. replaced content sized by the host).
    pub fn set_intrinsic_size(&mut self, id: ElementId, size: Option<Size>) {
        if let Some(node) = self.node_opt_mut(id) {
            node.intrinsic_size = size;
        }
    }

    /// Set world-space bounds used for hit testing.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) {
        if let Some(node) = self.node_opt_mut(id) {
            node.bounds = bounds;
        }
    }

    /// World-space bounds of an element.
    pub fn bounds(&self, id: ElementId) -> Option<Rect> {
        self.node_opt(id).map(|n| n.bounds)
    }

    /// Set the stacking z-index. Descendants without their own z-index inherit it.
    pub fn set_z_index(&mut self, id: ElementId, z: Option<i32>) {
        if let Some(node) = self.node_opt_mut(id) {
            node.z_index = z;
        }
    }

    /// Update element flags.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) {
        if let Some(node) = self.node_opt_mut(id) {
            node.flags = flags;
        }
    }

    // --- queries ---

    /// All connected elements matching `selectors`, in document order.
    pub fn query_selector_all(&self, selectors: &str) -> crate::Result<Vec<ElementId>> {
        let list = SelectorList::parse(selectors)?;
        Ok(self
            .descendants(self.root)
            .into_iter()
            .filter(|&id| list.matches(self, id))
            .collect())
    }

    /// First connected element matching `selectors`, in document order.
    pub fn query_selector(&self, selectors: &str) -> crate::Result<Option<ElementId>> {
        let list = SelectorList::parse(selectors)?;
        Ok(self
            .descendants(self.root)
            .into_iter()
            .find(|&id| list.matches(self, id)))
    }

    /// Returns true if the element matches `selectors`.
    pub fn matches(&self, id: ElementId, selectors: &str) -> crate::Result<bool> {
        let list = SelectorList::parse(selectors)?;
        Ok(self.is_alive(id) && list.matches(self, id))
    }

    /// Hit test a world-space point. Returns the topmost connected element.
    ///
    /// Elements are ranked by stacking z-index (inherited from the nearest
    /// ancestor that sets one, default 0); equal z is won by the element that
    /// comes later in document order.
    pub fn hit_test_point(&self, pt: Point) -> Option<Hit> {
        let mut best: Option<(ElementId, i32)> = None;
        let mut stack = vec![(self.root, 0_i32)];
        while let Some((id, inherited_z)) = stack.pop() {
            let node = self.node(id);
            let z = node.z_index.unwrap_or(inherited_z);
            let hittable = node
                .flags
                .contains(ElementFlags::VISIBLE | ElementFlags::PICKABLE);
            if hittable && node.bounds.contains(pt) {
                match best {
                    Some((_, z_best)) if z < z_best => {}
                    _ => best = Some((id, z)),
                }
            }
            for &child in node.children.iter().rev() {
                stack.push((child, z));
            }
        }
        best.map(|(element, _)| Hit {
            element,
            path: self.path_to_root(element),
        })
    }

    /// Path from the root of `id`'s tree to `id` (inclusive).
    pub fn path_to_root(&self, mut id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        if !self.is_alive(id) {
            return out;
        }
        loop {
            out.push(id);
            match self.node(id).parent {
                Some(p) => id = p,
                None => break,
            }
        }
        out.reverse();
        out
    }

    // --- internals ---

    /// Pre-order traversal of `id` and its descendants.
    pub(crate) fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        if !self.is_alive(id) {
            return out;
        }
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            out.push(cur);
            stack.extend(self.node(cur).children.iter().rev().copied());
        }
        out
    }

    fn alloc(&mut self, tag: &str) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, tag.to_string()));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, tag.to_string())));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        ElementId::new(idx, generation)
    }

    fn free_subtree(&mut self, id: ElementId) {
        for child in self.descendants(id) {
            self.listeners.drop_element(child);
            self.nodes[child.idx()] = None;
            self.free_list.push(child.idx());
        }
    }

    fn fit_to_viewport(&mut self) {
        let rect = Rect::from_origin_size(Point::ORIGIN, self.viewport);
        let (root, body) = (self.root, self.body);
        self.node_mut(root).bounds = rect;
        self.node_mut(body).bounds = rect;
    }

    fn is_inclusive_ancestor(&self, ancestor: ElementId, mut id: ElementId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.node(id).parent {
                Some(p) => id = p,
                None => return false,
            }
        }
    }

    /// Access a node; panics if `id` is stale.
    pub(crate) fn node(&self, id: ElementId) -> &Node {
        self.node_opt(id).expect("dangling ElementId")
    }

    /// Access a node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: ElementId) -> &mut Node {
        self.node_opt_mut(id).expect("dangling ElementId")
    }

    pub(crate) fn node_opt(&self, id: ElementId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn node_opt_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: ElementId, parent: ElementId) {
        let parent_node = self.node_mut(parent);
        parent_node.children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: ElementId, parent: ElementId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::new(Size::new(800.0, 600.0))
    }

    #[test]
    fn new_document_has_head_and_body() {
        let doc = doc();
        assert_eq!(doc.tag_name(doc.root()), Some("html"));
        assert_eq!(doc.children(doc.root()), &[doc.head(), doc.body()]);
        assert!(doc.is_connected(doc.body()), "body is connected");
        assert_eq!(
            doc.bounds(doc.body()),
            Some(Rect::new(0.0, 0.0, 800.0, 600.0))
        );
    }

    #[test]
    fn created_elements_start_detached() {
        let mut doc = doc();
        let div = doc.create_element("DIV");
        assert_eq!(doc.tag_name(div), Some("div"));
        assert!(!doc.is_connected(div), "new elements are detached");
        doc.append_child(doc.body(), div);
        assert!(doc.is_connected(div), "appended under body");
        assert_eq!(doc.parent(div), Some(doc.body()));
    }

    #[test]
    fn append_moves_existing_child() {
        let mut doc = doc();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let row = doc.create_element("span");
        doc.append_child(a, row);
        doc.append_child(b, row);
        assert!(doc.children(a).is_empty(), "row moved out of a");
        assert_eq!(doc.children(b), &[row]);
        assert_eq!(doc.parent(row), Some(b));
    }

    #[test]
    fn append_rejects_cycles() {
        let mut doc = doc();
        let outer = doc.create_element("div");
        let inner = doc.create_element("div");
        doc.append_child(outer, inner);
        doc.append_child(inner, outer);
        assert_eq!(doc.parent(outer), None, "cycle must be rejected");
        doc.append_child(outer, outer);
        assert!(doc.children(outer).contains(&inner), "tree unchanged");
    }

    #[test]
    fn remove_detaches_but_keeps_alive() {
        let mut doc = doc();
        let div = doc.create_element("div");
        doc.append_child(doc.body(), div);
        doc.remove(div);
        assert!(doc.is_alive(div), "remove keeps the element alive");
        assert!(!doc.is_connected(div), "remove detaches");
        assert!(doc.children(doc.body()).is_empty());
    }

    #[test]
    fn release_frees_subtree_and_reuses_slots() {
        let mut doc = doc();
        let parent = doc.create_element("div");
        let child = doc.create_element("span");
        doc.append_child(parent, child);
        doc.append_child(doc.body(), parent);
        doc.release(parent);
        assert!(!doc.is_alive(parent), "released element is stale");
        assert!(!doc.is_alive(child), "released subtree is stale");
        assert!(doc.children(doc.body()).is_empty());

        let reused = doc.create_element("p");
        assert!(doc.is_alive(reused));
        assert!(!doc.is_alive(child));
        if reused.slot() == child.slot() || reused.slot() == parent.slot() {
            assert!(
                reused.generation() > 1,
                "generation must increase on reuse"
            );
        }
    }

    #[test]
    fn document_elements_cannot_be_released() {
        let mut doc = doc();
        let body = doc.body();
        doc.release(body);
        assert!(doc.is_alive(body), "body survives release");
    }

    #[test]
    fn stale_ids_are_ignored() {
        let mut doc = doc();
        let div = doc.create_element("div");
        doc.release(div);
        let epoch = doc.epoch();
        doc.set_attribute(div, "id", "x");
        doc.append_child(doc.body(), div);
        doc.remove(div);
        assert_eq!(doc.epoch(), epoch, "no mutation through stale ids");
        assert_eq!(doc.attribute(div, "id"), None);
        assert!(doc.children(div).is_empty());
    }

    #[test]
    fn attributes_and_classes() {
        let mut doc = doc();
        let div = doc.create_element("div");
        doc.set_attribute(div, "data-divider", "");
        assert!(doc.has_attribute(div, "data-divider"), "empty value counts");
        doc.add_class(div, "contextMenu-item");
        doc.add_class(div, "active");
        doc.add_class(div, "active");
        assert_eq!(doc.classes(div), ["contextMenu-item", "active"]);
        assert_eq!(doc.attribute(div, "class"), Some("contextMenu-item active"));
        assert!(doc.remove_attribute(div, "data-divider"));
        assert!(!doc.remove_attribute(div, "data-divider"));
    }

    #[test]
    fn get_element_by_id_requires_connection() {
        let mut doc = doc();
        let style = doc.create_element("style");
        doc.set_attribute(style, "id", "sheet");
        assert_eq!(doc.get_element_by_id("sheet"), None);
        doc.append_child(doc.head(), style);
        assert_eq!(doc.get_element_by_id("sheet"), Some(style));
    }

    #[test]
    fn markup_content_and_text() {
        let mut doc = doc();
        let button = doc.create_element("button");
        doc.set_inner_markup(button, "<b>Copy</b> &amp; paste");
        assert_eq!(doc.inner_markup(button), Some("<b>Copy</b> &amp; paste"));
        assert_eq!(doc.text_content(button), "Copy & paste");
    }

    #[test]
    fn style_properties_render_in_order() {
        let mut doc = doc();
        let div = doc.create_element("div");
        doc.set_style_property(div, "--top", StyleValue::Px(10.0));
        doc.set_style_property(div, "--left", StyleValue::Px(20.0));
        doc.set_style_property(div, "--top", StyleValue::Px(30.0));
        assert_eq!(doc.style_text(div), "--top: 30px; --left: 20px;");
        assert_eq!(
            doc.style_property(div, "--left"),
            Some(&StyleValue::Px(20.0))
        );
    }

    #[test]
    fn hit_test_prefers_z_then_document_order() {
        let mut doc = doc();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        doc.append_child(doc.body(), a);
        doc.append_child(doc.body(), b);
        doc.set_bounds(a, Rect::new(0.0, 0.0, 100.0, 100.0));
        doc.set_bounds(b, Rect::new(50.0, 50.0, 150.0, 150.0));

        let hit = doc.hit_test_point(Point::new(60.0, 60.0)).unwrap();
        assert_eq!(hit.element, b, "later element wins on equal z");
        assert_eq!(hit.path, [doc.root(), doc.body(), b]);

        doc.set_z_index(a, Some(5));
        let hit = doc.hit_test_point(Point::new(60.0, 60.0)).unwrap();
        assert_eq!(hit.element, a, "higher z wins");

        let hit = doc.hit_test_point(Point::new(400.0, 400.0)).unwrap();
        assert_eq!(hit.element, doc.body(), "empty page hits body");
    }

    #[test]
    fn hit_test_skips_detached_and_unpickable() {
        let mut doc = doc();
        let loose = doc.create_element("div");
        doc.set_bounds(loose, Rect::new(0.0, 0.0, 100.0, 100.0));
        let overlay = doc.create_element("div");
        doc.append_child(doc.body(), overlay);
        doc.set_bounds(overlay, Rect::new(0.0, 0.0, 100.0, 100.0));
        doc.set_flags(overlay, ElementFlags::VISIBLE);
        let hit = doc.hit_test_point(Point::new(10.0, 10.0)).unwrap();
        assert_eq!(hit.element, doc.body());
    }

    #[test]
    fn children_inherit_stacking_z() {
        let mut doc = doc();
        let menu = doc.create_element("div");
        let item = doc.create_element("button");
        doc.append_child(menu, item);
        doc.append_child(doc.body(), menu);
        let page = doc.create_element("div");
        doc.append_child(doc.body(), page);
        doc.set_z_index(menu, Some(99));
        doc.set_bounds(menu, Rect::new(0.0, 0.0, 100.0, 100.0));
        doc.set_bounds(item, Rect::new(0.0, 0.0, 100.0, 20.0));
        doc.set_bounds(page, Rect::new(0.0, 0.0, 800.0, 600.0));
        let hit = doc.hit_test_point(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(hit.element, item, "menu contents stack above later page content");
    }

    #[test]
    fn epoch_tracks_mutations() {
        let mut doc = doc();
        let start = doc.epoch();
        let div = doc.create_element("div");
        doc.append_child(doc.body(), div);
        doc.set_attribute(div, "class", "x");
        assert_eq!(doc.epoch(), start + 3);
        let _ = doc.query_selector_all("div").unwrap();
        let _ = doc.hit_test_point(Point::new(1.0, 1.0));
        assert_eq!(doc.epoch(), start + 3, "queries do not mutate");
    }
}
