// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for hover tracking: published state, transitions, and policies.
//!
//! ## Overview
//!
//! These types are produced by the [`tracker`](crate::tracker) and consumed by
//! a presentation layer that places a control next to the hovered unit.

use alloc::vec::Vec;
use kurbo::Point;
use understory_render_tree::MissingMetric;

/// The unit under the pointer and where to place its control.
///
/// Coordinates are in document space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hovered<N> {
    /// The hovered readable unit.
    pub unit: N,
    /// Top edge of the unit's bounding box.
    pub top: f64,
    /// Left edge of the unit's bounding box.
    pub left: f64,
    /// Height of the unit's first rendered line.
    pub first_line_height: f64,
}

impl<N> Hovered<N> {
    /// Point at which to center a control on the first line, at the left edge.
    pub fn control_anchor(&self) -> Point {
        Point::new(self.left, self.top + self.first_line_height / 2.0)
    }
}

/// Tracker state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum HoverPhase<N> {
    /// No unit is under the pointer.
    #[default]
    Idle,
    /// The given unit is under the pointer.
    Hovering(N),
}

/// A hover transition event.
///
/// Emitted by [`HoverTracker::pointer_moved`](crate::tracker::HoverTracker::pointer_moved)
/// when the hovered unit changes. A change from one unit to another yields
/// `Leave(old)` followed by `Enter(new)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<N> {
    /// Pointer enters the given unit.
    Enter(N),
    /// Pointer leaves the given unit.
    Leave(N),
}

/// Result of a pointer move.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverUpdate<N> {
    /// The freshly published hover state.
    pub hovered: Option<Hovered<N>>,
    /// Transitions from the previous state; empty when the unit did not change.
    pub events: Vec<HoverEvent<N>>,
}

/// Hover resolution policies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct HoverConfig {
    /// Policy for unusable typographic metrics on a hovered unit.
    ///
    /// With [`MissingMetric::Error`], a unit whose first-line height cannot be
    /// derived is passed over, as if the pointer missed it.
    pub on_missing_metric: MissingMetric,
}
