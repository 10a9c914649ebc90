// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Readable-unit selection on a small article.
//!
//! Builds a page, selects its top-level readable units with each candidacy
//! rule, and prints the tags and text of what was chosen.
//!
//! Run:
//! - `cargo run -p understory_demos --example readable_units`

use understory_readable::{Candidacy, ReadableUnits, Selector, SelectorConfig};
use understory_render_tree::{Document, Element, NodeId};

fn describe(doc: &Document, units: &ReadableUnits<NodeId>) {
    for &unit in units {
        let tag = doc.element(unit).map(|e| e.tag.as_str()).unwrap_or("?");
        let text = doc.text_content(unit).unwrap_or_default();
        println!("  <{}> {:?}", tag.to_ascii_lowercase(), text.trim());
    }
}

fn main() {
    // <body>
    //   <article>
    //     <h1>Reading mode</h1>
    //     <div>Chapter one<span>*</span></div>
    //     <p>Intro paragraph.</p>
    //     <ul><li><a>First link</a></li><li><a>Second link</a></li></ul>
    //     <blockquote>A quote.</blockquote>
    //   </article>
    // </body>
    let mut doc = Document::new();
    let body = doc.insert(None, Element::new("body"));
    let article = doc.insert(Some(body), Element::new("article"));
    let _title = doc.insert_with_text(Some(article), Element::new("h1"), "Reading mode");
    let chapter = doc.insert_with_text(Some(article), Element::new("div"), "Chapter one");
    let _mark = doc.insert_with_text(Some(chapter), Element::new("span"), "*");
    let intro = doc.insert_with_text(Some(article), Element::new("p"), "Intro paragraph.");
    let list = doc.insert(Some(article), Element::new("ul"));
    let mut items = Vec::new();
    for text in ["First link", "Second link"] {
        let li = doc.insert(Some(list), Element::new("li"));
        let _a = doc.insert_with_text(Some(li), Element::new("a"), text);
        items.push(li);
    }
    let quote = doc.insert_with_text(Some(article), Element::new("blockquote"), "A quote.");

    let proxy = Selector::default().select(&doc, body);
    println!("== Structural proxy ==");
    describe(&doc, &proxy);
    assert_eq!(proxy.as_slice(), &[intro, list, quote]);

    let nested = Selector::new(SelectorConfig {
        candidacy: Candidacy::Nested,
        ..Default::default()
    })
    .select(&doc, body);
    println!("== Nested ==");
    describe(&doc, &nested);
    assert_eq!(nested.as_slice(), &[intro, items[0], items[1], quote]);

    let keep_decorated = Selector::new(SelectorConfig {
        skip_decorated: false,
        ..Default::default()
    })
    .select(&doc, body);
    println!("== Decorated elements kept ==");
    describe(&doc, &keep_decorated);
    assert_eq!(keep_decorated.as_slice(), &[chapter, intro, list, quote]);
}
