// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_readable --heading-base-level=0

//! Understory Readable: pick the top-level readable units of a rendered page.
//!
//! ## Overview
//!
//! A readable unit is an element whose text can be read aloud as one block:
//! a paragraph, a list item, a quote. This crate reduces a rendered tree to
//! the ordered set of such units below a root, conventionally the body.
//! It runs against any [`RenderedTree`](understory_render_tree::RenderedTree),
//! never mutates it, and performs no layout.
//!
//! ## Guarantees
//!
//! For every tree, the resulting [`ReadableUnits`]:
//! - contain no element whose tag is in [`DENYLIST`] (headings, `button`,
//!   `label`, `span`, `img`, `pre`, `script`);
//! - contain only elements with non-empty trimmed text;
//! - never contain both an element and one of its descendants;
//! - are in document order.
//!
//! ## Policies
//!
//! [`SelectorConfig`] controls two judgement calls:
//! - [`Candidacy`]: whether a child "holds its own unit" is decided by a
//!   structural proxy (more than one element child, the default) or by
//!   actually selecting inside it.
//! - [`SelectorConfig::skip_decorated`]: whether an element whose element
//!   children are all denylisted is skipped even when it has direct text
//!   (default on).
//!
//! ## Example
//!
//! ```
//! use understory_readable::{Candidacy, Selector, SelectorConfig};
//! use understory_render_tree::{Document, Element};
//!
//! let mut doc = Document::new();
//! let body = doc.insert(None, Element::new("body"));
//! let _title = doc.insert_with_text(Some(body), Element::new("h1"), "Title");
//! let intro = doc.insert_with_text(Some(body), Element::new("p"), "Intro.");
//! let list = doc.insert(Some(body), Element::new("ul"));
//! let _a = doc.insert_with_text(Some(list), Element::new("li"), "First");
//! let _b = doc.insert_with_text(Some(list), Element::new("li"), "Second");
//!
//! let selector = Selector::new(SelectorConfig {
//!     candidacy: Candidacy::StructuralProxy,
//!     ..Default::default()
//! });
//! let units = selector.select(&doc, body);
//! assert_eq!(units.as_slice(), &[intro, list]);
//! ```
//!
//! The selection is a snapshot. Run it again after the page changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod denylist;
mod select;
mod units;

pub use denylist::{DENYLIST, Tags, is_denylisted};
pub use select::{Candidacy, Selector, SelectorConfig, select_units};
pub use units::ReadableUnits;
