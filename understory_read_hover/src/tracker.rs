// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracker: resolve the readable unit under the pointer.
//!
//! ## Usage
//!
//! 1) Select units once with [`understory_readable::Selector`].
//! 2) Build a [`HoverTracker`] from them.
//! 3) On every pointer move, call [`HoverTracker::pointer_moved`] with the
//!    viewport position; it publishes the new [`Hovered`] state (or `None`)
//!    and the enter/leave transitions since the previous move.
//!
//! ## Resolution
//!
//! Units are scanned in document order and the first whose bounding box
//! contains the pointer wins, even when later units overlap it. Boxes and
//! metrics are read from the tree on every move, so layout or scroll changes
//! between moves are picked up. A unit that has been detached from the tree,
//! or whose metrics are rejected by [`HoverConfig::on_missing_metric`], is
//! passed over.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_read_hover::tracker::HoverTracker;
//! use understory_read_hover::types::{HoverConfig, HoverEvent};
//! use understory_readable::select_units;
//! use understory_render_tree::{Document, Element};
//!
//! let mut doc = Document::new();
//! let body = doc.insert(None, Element::new("body"));
//! let p = doc.insert_with_text(
//!     Some(body),
//!     Element::new("p").with_bounds(Rect::new(0.0, 0.0, 300.0, 40.0)),
//!     "Read me",
//! );
//!
//! let mut tracker = HoverTracker::new(select_units(&doc, body), HoverConfig::default());
//! let update = tracker.pointer_moved(&doc, Point::new(10.0, 10.0));
//! assert_eq!(update.hovered.map(|h| h.unit), Some(p));
//! assert_eq!(update.events, vec![HoverEvent::Enter(p)]);
//!
//! let update = tracker.pointer_moved(&doc, Point::new(10.0, 90.0));
//! assert_eq!(update.hovered, None);
//! assert_eq!(update.events, vec![HoverEvent::Leave(p)]);
//! ```

use alloc::vec::Vec;
use kurbo::{Point, Vec2};
use understory_readable::ReadableUnits;
use understory_render_tree::{RenderedTree, first_line_height, point_in_rect};

use crate::types::{HoverConfig, HoverEvent, HoverPhase, HoverUpdate, Hovered};

/// A hover state machine over a fixed set of readable units.
///
/// Two states: [`HoverPhase::Idle`] (initial) and [`HoverPhase::Hovering`].
/// Transitions happen only in [`pointer_moved`](Self::pointer_moved); there
/// are no timers.
#[derive(Clone, Debug)]
pub struct HoverTracker<N> {
    units: ReadableUnits<N>,
    config: HoverConfig,
    scroll: Vec2,
    current: Option<Hovered<N>>,
}

impl<N: Copy + Eq + core::fmt::Debug> HoverTracker<N> {
    /// Create an idle tracker over `units`.
    pub fn new(units: ReadableUnits<N>, config: HoverConfig) -> Self {
        Self {
            units,
            config,
            scroll: Vec2::ZERO,
            current: None,
        }
    }

    /// The units this tracker resolves against, in document order.
    pub fn units(&self) -> &ReadableUnits<N> {
        &self.units
    }

    /// The policies in effect.
    pub fn config(&self) -> HoverConfig {
        self.config
    }

    /// Set the viewport's scroll offset within the document.
    ///
    /// Pointer positions are viewport-relative; unit boxes are in document
    /// space. The offset is added to each pointer position before testing.
    pub fn set_scroll(&mut self, offset: Vec2) {
        self.scroll = offset;
    }

    /// Current scroll offset.
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    /// The most recently published hover state.
    pub fn current(&self) -> Option<Hovered<N>> {
        self.current
    }

    /// The current state of the machine.
    pub fn phase(&self) -> HoverPhase<N> {
        match self.current {
            Some(h) => HoverPhase::Hovering(h.unit),
            None => HoverPhase::Idle,
        }
    }

    /// Resolve the unit at a document-space point without changing state.
    pub fn resolve<T>(&self, tree: &T, pt: Point) -> Option<Hovered<N>>
    where
        T: RenderedTree<Node = N>,
    {
        for unit in self.units.iter() {
            let Some(bounds) = tree.bounds(unit) else {
                log::trace!("unit {unit:?} is detached; skipping");
                continue;
            };
            if !point_in_rect(pt, bounds) {
                continue;
            }
            let Some(metrics) = tree.metrics(unit) else {
                continue;
            };
            match first_line_height(metrics, self.config.on_missing_metric) {
                Ok(first_line_height) => {
                    return Some(Hovered {
                        unit,
                        top: bounds.y0,
                        left: bounds.x0,
                        first_line_height,
                    });
                }
                Err(err) => log::warn!("unit {unit:?} cannot be placed: {err}"),
            }
        }
        None
    }

    /// Handle a pointer move at a viewport-space position.
    ///
    /// Publishes the new state and returns it with the transitions from the
    /// previous state. Positions outside every unit always yield `None`.
    pub fn pointer_moved<T>(&mut self, tree: &T, viewport_pt: Point) -> HoverUpdate<N>
    where
        T: RenderedTree<Node = N>,
    {
        let hovered = self.resolve(tree, viewport_pt + self.scroll);
        let events = self.publish(hovered);
        HoverUpdate { hovered, events }
    }

    /// Return to [`HoverPhase::Idle`], yielding a leave event if a unit was hovered.
    pub fn clear(&mut self) -> Vec<HoverEvent<N>> {
        self.publish(None)
    }

    /// Swap in a fresh set of units and return to idle.
    ///
    /// Use after re-running selection on a changed tree.
    pub fn replace_units(&mut self, units: ReadableUnits<N>) -> Vec<HoverEvent<N>> {
        let events = self.clear();
        self.units = units;
        events
    }

    fn publish(&mut self, next: Option<Hovered<N>>) -> Vec<HoverEvent<N>> {
        let old = self.current.map(|h| h.unit);
        let new = next.map(|h| h.unit);
        self.current = next;
        let mut out = Vec::new();
        if old != new {
            if let Some(u) = old {
                out.push(HoverEvent::Leave(u));
            }
            if let Some(u) = new {
                out.push(HoverEvent::Enter(u));
            }
        }
        out
    }
}
