// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only access to a rendered tree.

use alloc::string::String;
use kurbo::Rect;

use crate::document::Document;
use crate::types::{NodeId, TextMetrics};

/// Read-only view of a host's rendered element tree.
///
/// Every query returns `None` (or an empty result) for a node that is no
/// longer attached to the tree. Callers treat that as "not eligible" rather
/// than as a fault.
///
/// Implement this for your host's DOM or layout tree to run selection and
/// hover tracking against it directly. [`Document`] implements it.
pub trait RenderedTree {
    /// Node handle type.
    type Node: Copy + Eq + core::fmt::Debug;

    /// Tag name of `node`, as authored.
    fn tag_name(&self, node: Self::Node) -> Option<&str>;

    /// Element children of `node` in document order.
    fn children(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> + '_;

    /// Concatenated text of `node` and its descendants.
    fn text_content(&self, node: Self::Node) -> Option<String>;

    /// Returns true if the trimmed text content of `node` is non-empty.
    fn has_visible_text(&self, node: Self::Node) -> bool {
        self.text_content(node).is_some_and(|t| !t.trim().is_empty())
    }

    /// Bounding box in document coordinates, read at call time.
    fn bounds(&self, node: Self::Node) -> Option<Rect>;

    /// Computed typographic metrics, read at call time.
    fn metrics(&self, node: Self::Node) -> Option<TextMetrics>;
}

impl RenderedTree for Document {
    type Node = NodeId;

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|e| e.tag.as_str())
    }

    fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        Self::children(self, node)
    }

    fn text_content(&self, node: NodeId) -> Option<String> {
        Self::text_content(self, node)
    }

    fn has_visible_text(&self, node: NodeId) -> bool {
        Self::has_visible_text(self, node)
    }

    fn bounds(&self, node: NodeId) -> Option<Rect> {
        self.element(node).map(|e| e.bounds)
    }

    fn metrics(&self, node: NodeId) -> Option<TextMetrics> {
        self.element(node).map(|e| e.metrics)
    }
}
