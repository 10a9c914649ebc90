// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core document implementation: structure, updates, queries.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use kurbo::Rect;

use crate::types::{Element, NodeId, TextMetrics};

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A rendered element tree.
///
/// Holds elements in generational slots. Each element owns an ordered list of
/// content items: text runs and child elements, interleaved in document order.
pub struct Document {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Document")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
enum Content {
    Text(String),
    Child(NodeId),
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    content: Vec<Content>,
    element: Element,
}

impl Node {
    fn new(generation: u32, element: Element) -> Self {
        Self {
            generation,
            parent: None,
            content: Vec::new(),
            element,
        }
    }
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a new element as the last child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` leaves the new element unattached.
    pub fn insert(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, element));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, element)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        id
    }

    /// Insert an element holding a single text run.
    pub fn insert_with_text(
        &mut self,
        parent: Option<NodeId>,
        element: Element,
        text: &str,
    ) -> NodeId {
        let id = self.insert(parent, element);
        self.append_text(id, text);
        id
    }

    /// Append a text run after the existing content of `id`.
    pub fn append_text(&mut self, id: NodeId, text: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.content.push(Content::Text(String::from(text)));
        }
    }

    /// Remove an element (and its subtree) from the document.
    ///
    /// Identifiers into the removed subtree become stale.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.parent(id) {
            self.unlink_parent(id, parent);
        }
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            pending.extend(self.children(next));
            self.nodes[next.idx()] = None;
            self.free_list.push(next.idx());
        }
    }

    /// Update the bounding box (document coordinates).
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.bounds = bounds;
        }
    }

    /// Update computed typographic metrics.
    pub fn set_metrics(&mut self, id: NodeId, metrics: TextMetrics) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.metrics = metrics;
        }
    }

    /// Returns true if `id` refers to a live element.
    ///
    /// A `NodeId` is live if its slot exists, is occupied, and the generation
    /// matches the current generation stored in that slot.
    /// See [`NodeId`] docs for the generational semantics.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Returns the element data if `id` is live.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node_opt(id).map(|n| &n.element)
    }

    /// Returns the parent of a live element.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id)?.parent
    }

    /// Iterate the element children of `id` in document order.
    ///
    /// Empty when `id` is stale.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node_opt(id)
            .into_iter()
            .flat_map(|n| n.content.iter())
            .filter_map(|c| match c {
                Content::Child(child) => Some(*child),
                Content::Text(_) => None,
            })
    }

    /// Concatenated text of `id` and all its descendants, in document order.
    pub fn text_content(&self, id: NodeId) -> Option<String> {
        let node = self.node_opt(id)?;
        let mut out = String::new();
        self.collect_text(node, &mut out);
        Some(out)
    }

    /// Returns true if the text content of `id` contains a non-whitespace character.
    ///
    /// Equivalent to checking that the trimmed [`text_content`](Self::text_content)
    /// is non-empty, without building the string.
    pub fn has_visible_text(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some_and(|n| self.any_visible_text(n))
    }

    /// Returns true if `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut cur = self.parent(id);
        while let Some(p) = cur {
            if p == ancestor {
                return true;
            }
            cur = self.parent(p);
        }
        false
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Returns true if the document holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(Option::is_none)
    }

    // --- internals ---

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    // Pre-order walk over the text runs below `node`, stopping early when
    // `visit` returns false. Depth is bounded by the heap, not the call stack.
    fn walk_text<'a>(&'a self, node: &'a Node, mut visit: impl FnMut(&'a str) -> bool) {
        let mut stack = vec![node.content.iter()];
        while let Some(level) = stack.last_mut() {
            let Some(c) = level.next() else {
                stack.pop();
                continue;
            };
            match c {
                Content::Text(t) => {
                    if !visit(t) {
                        return;
                    }
                }
                Content::Child(child) => {
                    if let Some(n) = self.node_opt(*child) {
                        stack.push(n.content.iter());
                    }
                }
            }
        }
    }

    fn collect_text(&self, node: &Node, out: &mut String) {
        self.walk_text(node, |t| {
            out.push_str(t);
            true
        });
    }

    fn any_visible_text(&self, node: &Node) -> bool {
        let mut found = false;
        self.walk_text(node, |t| {
            found = !t.trim().is_empty();
            !found
        });
        found
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        let Some(parent_node) = self.node_opt_mut(parent) else {
            log::debug!("stale parent {parent:?}; element left unattached");
            return;
        };
        parent_node.content.push(Content::Child(id));
        if let Some(n) = self.node_opt_mut(id) {
            n.parent = Some(parent);
        }
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_opt_mut(parent) {
            p.content
                .retain(|c| !matches!(c, Content::Child(child) if *child == id));
        }
        if let Some(n) = self.node_opt_mut(id) {
            n.parent = None;
        }
    }
}
