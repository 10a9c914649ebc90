// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_read_hover --heading-base-level=0

//! Understory Read Hover: track the readable unit under the pointer.
//!
//! ## Overview
//!
//! A hover player shows a "read aloud" control next to the paragraph under
//! the pointer. This crate supplies the state behind it:
//!
//! - [`tracker::HoverTracker`]: given the readable units of a page (from
//!   [`understory_readable`]) and a pointer position, publishes the hovered
//!   unit with its placement ([`types::Hovered`]) or `None`, plus
//!   enter/leave transitions.
//! - [`session::HoverSession`]: ties a tracker to one pointer listener on the
//!   host's window for the lifetime of a mounted player, and hands the
//!   hovered unit's text to a [`session::SpeechSink`] on activation.
//!
//! It does not render anything and does not synthesize speech.
//!
//! ## Workflow
//!
//! 1) Mount: [`HoverSession::mount`](session::HoverSession::mount) selects
//!    units below the body once and registers the listener.
//! 2) Move: forward each pointer move to
//!    [`HoverSession::pointer_moved`](session::HoverSession::pointer_moved).
//!    The first unit in document order whose box contains the pointer wins.
//!    Render the control at [`Hovered::control_anchor`](types::Hovered::control_anchor),
//!    or hide it on `None`.
//! 3) Activate: on a click on the control, call
//!    [`HoverSession::activate`](session::HoverSession::activate).
//! 4) Unmount: drop the session; the listener is released.
//!
//! ```
//! use core::cell::Cell;
//! use kurbo::{Point, Rect};
//! use understory_read_hover::session::{HoverSession, PointerEvents, SessionConfig};
//! use understory_render_tree::{Document, Element, NodeId};
//!
//! struct Window(Cell<u32>);
//! impl PointerEvents for Window {
//!     type Handle = ();
//!     fn add_pointer_listener(&self) { self.0.set(self.0.get() + 1); }
//!     fn remove_pointer_listener(&self, _: ()) { self.0.set(self.0.get() - 1); }
//! }
//!
//! let mut doc = Document::new();
//! let body = doc.insert(None, Element::new("body"));
//! let p = doc.insert_with_text(
//!     Some(body),
//!     Element::new("p").with_bounds(Rect::new(40.0, 200.0, 640.0, 260.0)),
//!     "It was a bright cold day in April.",
//! );
//!
//! let window = Window(Cell::new(0));
//! let mut session = HoverSession::mount(&doc, body, &window, SessionConfig::default());
//! let update = session.pointer_moved(&doc, Point::new(100.0, 210.0));
//! let hovered = update.hovered.unwrap();
//! assert_eq!((hovered.top, hovered.left), (200.0, 40.0));
//!
//! let mut spoken = String::new();
//! let unit = session.activate(&doc, &mut |_: NodeId, text: &str| spoken.push_str(text));
//! assert_eq!(unit, Some(p));
//! assert_eq!(spoken, "It was a bright cold day in April.");
//!
//! drop(session);
//! assert_eq!(window.0.get(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod session;
pub mod tracker;
pub mod types;
