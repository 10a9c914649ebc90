// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared page generators for the benchmarks.

use kurbo::Rect;
use understory_render_tree::{Document, Element, NodeId};

/// Deterministic xorshift generator.
#[derive(Clone, Debug)]
pub struct Rng(u64);

impl Rng {
    /// Seeded generator.
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// An article-like page: `sections` sections, each with a heading, a
/// paragraph run, and a list. Paragraphs are 60px tall, stacked top to bottom.
///
/// Returns the document and its body.
pub fn article_page(sections: usize, paragraphs: usize) -> (Document, NodeId) {
    let mut doc = Document::new();
    let body = doc.insert(None, Element::new("body"));
    let main = doc.insert(Some(body), Element::new("main"));
    let mut y = 0.0;
    for s in 0..sections {
        let section = doc.insert(Some(main), Element::new("section"));
        let _h = doc.insert_with_text(Some(section), Element::new("h2"), "Section heading");
        for p in 0..paragraphs {
            let bounds = Rect::new(40.0, y, 760.0, y + 60.0);
            let para = doc.insert_with_text(
                Some(section),
                Element::new("p").with_bounds(bounds),
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ",
            );
            if (s + p) % 3 == 0 {
                let _em = doc.insert_with_text(Some(para), Element::new("em"), "emphasis");
            }
            y += 70.0;
        }
        let list = doc.insert(
            Some(section),
            Element::new("ul").with_bounds(Rect::new(40.0, y, 760.0, y + 90.0)),
        );
        for _ in 0..3 {
            let _li = doc.insert_with_text(Some(list), Element::new("li"), "List item");
        }
        y += 100.0;
    }
    (doc, body)
}
