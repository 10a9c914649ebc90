// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover session: a mounted hover player bound to one pointer listener.
//!
//! ## Lifetime
//!
//! [`HoverSession::mount`] selects readable units once and registers a single
//! pointer-move listener on the host's broadest dispatch scope (the window,
//! not a sub-element), so moves over elements that stop propagation are still
//! observed. The listener is released when the session is dropped, on every
//! exit path including early returns and unwinding.
//!
//! ## Activation
//!
//! [`HoverSession::activate`] hands the hovered unit and its text to a
//! [`SpeechSink`]. The session neither awaits nor observes the result.

use alloc::vec::Vec;
use kurbo::{Point, Vec2};
use understory_readable::{ReadableUnits, Selector, SelectorConfig};
use understory_render_tree::RenderedTree;

use crate::tracker::HoverTracker;
use crate::types::{HoverConfig, HoverEvent, HoverPhase, HoverUpdate, Hovered};

/// The host's top-level pointer-move dispatch scope.
///
/// Implement over the window (or its equivalent). The host forwards every
/// move delivered to the registered listener to
/// [`HoverSession::pointer_moved`].
pub trait PointerEvents {
    /// Registration token returned by [`add_pointer_listener`](Self::add_pointer_listener).
    type Handle;

    /// Register the pointer-move listener.
    fn add_pointer_listener(&self) -> Self::Handle;

    /// Unregister a listener previously returned by [`add_pointer_listener`](Self::add_pointer_listener).
    fn remove_pointer_listener(&self, handle: Self::Handle);
}

/// Receives text to read aloud.
///
/// Implemented for any `FnMut(N, &str)`.
pub trait SpeechSink<N> {
    /// Start reading `text`, the content of `unit`. Must not block on playback.
    fn speak(&mut self, unit: N, text: &str);
}

impl<N, F: FnMut(N, &str)> SpeechSink<N> for F {
    fn speak(&mut self, unit: N, text: &str) {
        self(unit, text);
    }
}

/// Session policies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SessionConfig {
    /// Readable-unit selection policies.
    pub selector: SelectorConfig,
    /// Hover resolution policies.
    pub hover: HoverConfig,
}

/// A mounted hover player.
///
/// Owns the unit snapshot, the hover state, and the pointer listener
/// registration on `E`.
pub struct HoverSession<'e, E: PointerEvents, N> {
    events: &'e E,
    listener: Option<E::Handle>,
    selector: Selector,
    tracker: HoverTracker<N>,
}

impl<E: PointerEvents, N: core::fmt::Debug> core::fmt::Debug for HoverSession<'_, E, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HoverSession")
            .field("listening", &self.listener.is_some())
            .field("selector", &self.selector)
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}

impl<'e, E: PointerEvents, N: Copy + Eq + core::fmt::Debug> HoverSession<'e, E, N> {
    /// Select units below `root` and start listening for pointer moves.
    pub fn mount<T>(tree: &T, root: N, events: &'e E, config: SessionConfig) -> Self
    where
        T: RenderedTree<Node = N>,
    {
        let selector = Selector::new(config.selector);
        let units = selector.select(tree, root);
        let listener = Some(events.add_pointer_listener());
        log::debug!("hover session mounted with {} units", units.len());
        Self {
            events,
            listener,
            selector,
            tracker: HoverTracker::new(units, config.hover),
        }
    }

    /// Handle a pointer move at a viewport-space position.
    pub fn pointer_moved<T>(&mut self, tree: &T, viewport_pt: Point) -> HoverUpdate<N>
    where
        T: RenderedTree<Node = N>,
    {
        self.tracker.pointer_moved(tree, viewport_pt)
    }

    /// Set the viewport's scroll offset within the document.
    pub fn set_scroll(&mut self, offset: Vec2) {
        self.tracker.set_scroll(offset);
    }

    /// The most recently published hover state.
    pub fn current(&self) -> Option<Hovered<N>> {
        self.tracker.current()
    }

    /// The current hover phase.
    pub fn phase(&self) -> HoverPhase<N> {
        self.tracker.phase()
    }

    /// The unit snapshot.
    pub fn units(&self) -> &ReadableUnits<N> {
        self.tracker.units()
    }

    /// Re-run selection below `root` and return to idle.
    ///
    /// The session never re-scans on its own.
    pub fn rescan<T>(&mut self, tree: &T, root: N) -> Vec<HoverEvent<N>>
    where
        T: RenderedTree<Node = N>,
    {
        let units = self.selector.select(tree, root);
        self.tracker.replace_units(units)
    }

    /// Hand the hovered unit and its trimmed text to `sink`.
    ///
    /// Returns the unit handed off, or `None` when idle or when the unit is no
    /// longer in the tree.
    pub fn activate<T, S>(&self, tree: &T, sink: &mut S) -> Option<N>
    where
        T: RenderedTree<Node = N>,
        S: SpeechSink<N>,
    {
        let unit = self.tracker.current()?.unit;
        let Some(text) = tree.text_content(unit) else {
            log::trace!("activated unit {unit:?} is detached");
            return None;
        };
        sink.speak(unit, text.trim());
        Some(unit)
    }
}

impl<E: PointerEvents, N> Drop for HoverSession<'_, E, N> {
    fn drop(&mut self) {
        if let Some(handle) = self.listener.take() {
            self.events.remove_pointer_listener(handle);
        }
    }
}
