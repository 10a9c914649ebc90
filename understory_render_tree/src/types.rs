// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the rendered tree: node identifiers, elements, and typographic metrics.

use alloc::string::String;
use kurbo::Rect;

/// Identifier for an element in a [`Document`](crate::Document).
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any `NodeId` that pointed to it is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Stale identifiers never alias a different live element. Every read through
/// [`Document`](crate::Document) or [`RenderedTree`](crate::RenderedTree) on a
/// stale identifier reports the element as absent, which is how a detached
/// element shows up to callers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Rendered line height of an element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LineHeight {
    /// No explicit line height (`line-height: normal` or unset).
    Normal,
    /// Line height resolved to CSS pixels.
    Px(f64),
}

/// Computed typographic metrics for an element, in CSS pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextMetrics {
    /// Rendered font size.
    pub font_size: f64,
    /// Rendered line height.
    pub line_height: LineHeight,
}

impl TextMetrics {
    /// Create metrics from a font size and an explicit line height.
    pub const fn new(font_size: f64, line_height: LineHeight) -> Self {
        Self {
            font_size,
            line_height,
        }
    }

    /// Create metrics from two computed pixel values as reported by a layout engine.
    ///
    /// Some engines report an unset line height as a pixel value equal to the
    /// font size. This constructor maps that coincidence to [`LineHeight::Normal`].
    /// Hosts that can distinguish the two cases should use [`TextMetrics::new`].
    pub fn from_computed(font_size_px: f64, line_height_px: f64) -> Self {
        let line_height = if line_height_px == font_size_px {
            LineHeight::Normal
        } else {
            LineHeight::Px(line_height_px)
        };
        Self::new(font_size_px, line_height)
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::new(16.0, LineHeight::Normal)
    }
}

/// Element data stored for each node.
#[derive(Clone, Debug)]
pub struct Element {
    /// Tag name as authored. Comparisons against it are case-insensitive.
    pub tag: String,
    /// Bounding box in document coordinates (scroll offset already applied).
    pub bounds: Rect,
    /// Computed typographic metrics.
    pub metrics: TextMetrics,
}

impl Element {
    /// Create an element with the given tag, zero bounds, and default metrics.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: String::from(tag),
            ..Default::default()
        }
    }

    /// Replace the bounding box.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Replace the typographic metrics.
    pub fn with_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: String::from("DIV"),
            bounds: Rect::ZERO,
            metrics: TextMetrics::default(),
        }
    }
}
