// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A mounted hover player driven by synthetic pointer moves.
//!
//! Mounts a session over a laid-out page, moves the pointer across it
//! (including after a scroll), prints the published hover state and
//! transitions, then activates the hovered unit.
//!
//! Run:
//! - `cargo run -p understory_demos --example read_hover_session`

use std::cell::Cell;

use kurbo::{Point, Rect, Vec2};
use understory_read_hover::session::{HoverSession, PointerEvents, SessionConfig};
use understory_read_hover::types::HoverEvent;
use understory_render_tree::{Document, Element, LineHeight, NodeId, TextMetrics};

#[derive(Default)]
struct Window {
    listeners: Cell<u32>,
}

impl PointerEvents for Window {
    type Handle = ();

    fn add_pointer_listener(&self) {
        self.listeners.set(self.listeners.get() + 1);
    }

    fn remove_pointer_listener(&self, _: ()) {
        self.listeners.set(self.listeners.get() - 1);
    }
}

fn main() {
    let mut doc = Document::new();
    let body = doc.insert(None, Element::new("body"));
    let first = doc.insert_with_text(
        Some(body),
        Element::new("p")
            .with_bounds(Rect::new(40.0, 100.0, 640.0, 196.0))
            .with_metrics(TextMetrics::new(16.0, LineHeight::Px(24.0))),
        "  The first paragraph spans four lines.  ",
    );
    let second = doc.insert_with_text(
        Some(body),
        Element::new("p")
            .with_bounds(Rect::new(40.0, 700.0, 640.0, 780.0))
            .with_metrics(TextMetrics::new(20.0, LineHeight::Normal)),
        "The second paragraph is further down.",
    );

    let window = Window::default();
    let mut session = HoverSession::mount(&doc, body, &window, SessionConfig::default());
    assert_eq!(window.listeners.get(), 1);
    println!("== Mounted with {} units ==", session.units().len());

    let update = session.pointer_moved(&doc, Point::new(50.0, 120.0));
    let hovered = update.hovered.expect("pointer is over the first paragraph");
    println!(
        "  hovered {:?} anchor={:?} events={:?}",
        hovered.unit,
        hovered.control_anchor(),
        update.events
    );
    assert_eq!(hovered.unit, first);
    assert_eq!(hovered.first_line_height, 24.0);
    assert_eq!(update.events, vec![HoverEvent::Enter(first)]);

    // Same viewport point, scrolled down: now over the second paragraph.
    session.set_scroll(Vec2::new(0.0, 600.0));
    let update = session.pointer_moved(&doc, Point::new(50.0, 120.0));
    println!("== After scroll ==\n  {:?}", update);
    assert_eq!(update.hovered.map(|h| h.unit), Some(second));
    assert_eq!(update.hovered.map(|h| h.first_line_height), Some(20.0));
    assert_eq!(
        update.events,
        vec![HoverEvent::Leave(first), HoverEvent::Enter(second)]
    );

    let mut spoken = Vec::new();
    let unit = session.activate(&doc, &mut |unit: NodeId, text: &str| {
        spoken.push((unit, text.to_owned()));
    });
    println!("== Activated ==\n  {:?}", spoken);
    assert_eq!(unit, Some(second));
    assert_eq!(spoken[0].1, "The second paragraph is further down.");

    let update = session.pointer_moved(&doc, Point::new(5.0, 5.0));
    assert_eq!(update.hovered, None);
    assert_eq!(update.events, vec![HoverEvent::Leave(second)]);

    drop(session);
    assert_eq!(window.listeners.get(), 0);
    println!("== Unmounted; listener released ==");
}
