// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_render_tree --heading-base-level=0

//! Understory Render Tree: a Kurbo-native view of a rendered element tree.
//!
//! This crate is the read side that text-oriented UI features (readable-unit
//! selection, hover players, reading aids) run against.
//!
//! - [`RenderedTree`]: the read-only seam. Implement it over your host's DOM or
//!   layout tree to expose tag names, text content, element children, bounding
//!   boxes, and typographic metrics.
//! - [`Document`]: an owned implementation with generational [`NodeId`]s.
//!   Removing an element makes every identifier into its subtree stale, which
//!   is how "detached" nodes surface to callers.
//! - Geometry: [`point_in_rect`] (closed on all edges) and
//!   [`first_line_height`] with an explicit [`MissingMetric`] policy.
//!
//! ## Not a layout engine
//!
//! Bounds and metrics are inputs. Upstream code computes them with whatever
//! layout system it uses and writes them here in document coordinates
//! (scroll offset already applied).
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_render_tree::{
//!     Document, Element, LineHeight, MissingMetric, RenderedTree, TextMetrics,
//!     first_line_height, point_in_rect,
//! };
//!
//! let mut doc = Document::new();
//! let body = doc.insert(None, Element::new("body"));
//! let p = doc.insert_with_text(
//!     Some(body),
//!     Element::new("p")
//!         .with_bounds(Rect::new(0.0, 100.0, 400.0, 160.0))
//!         .with_metrics(TextMetrics::new(16.0, LineHeight::Px(24.0))),
//!     "Hello world",
//! );
//!
//! let bounds = doc.bounds(p).unwrap();
//! assert!(point_in_rect(Point::new(0.0, 120.0), bounds));
//!
//! let metrics = doc.metrics(p).unwrap();
//! assert_eq!(first_line_height(metrics, MissingMetric::UseFontSize), Ok(24.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod access;
mod document;
mod geometry;
mod types;

pub use access::RenderedTree;
pub use document::Document;
pub use geometry::{MetricError, MissingMetric, first_line_height, point_in_rect};
pub use types::{Element, LineHeight, NodeId, TextMetrics};
