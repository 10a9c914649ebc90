// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector implementation.
//!
//! ## Overview
//!
//! Walks a rendered tree one sibling level at a time and reduces it to the
//! top-level readable units below a root. For each child, in document order:
//!
//! 1. Skip it if its tag is denylisted or its trimmed text is empty.
//! 2. Skip it if it has element children and all of them are denylisted
//!    (see [`SelectorConfig::skip_decorated`]).
//! 3. If any direct child is a candidate unit (see [`Candidacy`]), scan its
//!    children in its place.
//! 4. Otherwise emit it and do not descend.
//!
//! A selected unit's subtree is never scanned, so no unit contains another.

use alloc::vec;
use alloc::vec::Vec;

use understory_render_tree::RenderedTree;

use crate::denylist::is_denylisted;
use crate::units::ReadableUnits;

/// How a direct child is judged to hold its own top-level unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Candidacy {
    /// A readable child with more than one element child is a candidate.
    ///
    /// A structural stand-in for "contains a nested unit". One pass, linear
    /// in the number of visited nodes.
    #[default]
    StructuralProxy,
    /// A readable child is a candidate when selecting over its own children
    /// yields at least one unit.
    ///
    /// Visits each subtree below a readable node, so large pages cost more
    /// than with [`Candidacy::StructuralProxy`].
    Nested,
}

/// Selection policies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectorConfig {
    /// Candidate rule for substituting a node by its children.
    pub candidacy: Candidacy,
    /// Skip a node whose element children are all denylisted, even when it
    /// carries direct text of its own.
    pub skip_decorated: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            candidacy: Candidacy::StructuralProxy,
            skip_decorated: true,
        }
    }
}

/// Readable-unit selector.
///
/// ## Usage
///
/// Construct with [`Selector::new`] (or [`Selector::default`]) and call
/// [`Selector::select`] with the root of the subtree to scan, conventionally
/// the document body. The root itself is never a unit.
#[derive(Copy, Clone, Debug, Default)]
pub struct Selector {
    config: SelectorConfig,
}

impl Selector {
    /// Create a selector with the given policies.
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// The policies in effect.
    pub fn config(&self) -> SelectorConfig {
        self.config
    }

    /// Select the top-level readable units below `root`.
    ///
    /// A detached `root` yields no units. Traversal keeps its own stack, so
    /// tree depth is not limited by the call stack.
    pub fn select<T: RenderedTree>(&self, tree: &T, root: T::Node) -> ReadableUnits<T::Node> {
        let mut out = Vec::new();
        match self.config.candidacy {
            Candidacy::StructuralProxy => self.collect(tree, root, &mut out),
            Candidacy::Nested => self.collect_nested(tree, root, &mut out),
        }
        log::debug!(
            "selected {} readable units below {root:?} ({:?})",
            out.len(),
            self.config.candidacy
        );
        ReadableUnits::from_vec(out)
    }

    fn collect<T: RenderedTree>(&self, tree: &T, root: T::Node, out: &mut Vec<T::Node>) {
        let mut levels = vec![tree.children(root)];
        while let Some(level) = levels.last_mut() {
            let Some(child) = level.next() else {
                levels.pop();
                continue;
            };
            if !self.eligible(tree, child) {
                continue;
            }
            if tree.children(child).any(|c| is_proxy_candidate(tree, c)) {
                levels.push(tree.children(child));
            } else {
                out.push(child);
            }
        }
    }

    // Post-order pass. Each readable node first appends the scan of its own
    // children, then on exit either keeps that scan (it has a candidate
    // child), replaces it with itself, or drops it (decorated). A node is a
    // candidate for its parent when its own children's scan was non-empty.
    fn collect_nested<T: RenderedTree>(&self, tree: &T, root: T::Node, out: &mut Vec<T::Node>) {
        let mut frames = vec![NestedFrame {
            node: root,
            children: tree.children(root),
            start: out.len(),
            candidate_child: false,
        }];
        while let Some(frame) = frames.last_mut() {
            if let Some(child) = frame.children.next() {
                if readable(tree, child) {
                    frames.push(NestedFrame {
                        node: child,
                        children: tree.children(child),
                        start: out.len(),
                        candidate_child: false,
                    });
                }
                continue;
            }
            let Some(done) = frames.pop() else {
                break;
            };
            // The root is scanned, never emitted.
            let Some(parent) = frames.last_mut() else {
                break;
            };
            parent.candidate_child |= out.len() > done.start;
            if self.config.skip_decorated && all_children_denylisted(tree, done.node) {
                out.truncate(done.start);
            } else if !done.candidate_child {
                out.truncate(done.start);
                out.push(done.node);
            }
        }
    }

    fn eligible<T: RenderedTree>(&self, tree: &T, node: T::Node) -> bool {
        readable(tree, node) && !(self.config.skip_decorated && all_children_denylisted(tree, node))
    }
}

struct NestedFrame<N, I> {
    node: N,
    children: I,
    start: usize,
    candidate_child: bool,
}

/// Select units below `root` with the default [`SelectorConfig`].
///
/// ```
/// use understory_readable::select_units;
/// use understory_render_tree::{Document, Element};
///
/// // <body><div><blockquote>Some text here</blockquote></div></body>
/// let mut doc = Document::new();
/// let body = doc.insert(None, Element::new("body"));
/// let div = doc.insert(Some(body), Element::new("div"));
/// let _quote = doc.insert_with_text(Some(div), Element::new("blockquote"), "Some text here");
///
/// let units = select_units(&doc, body);
/// assert_eq!(units.as_slice(), &[div]);
/// ```
pub fn select_units<T: RenderedTree>(tree: &T, root: T::Node) -> ReadableUnits<T::Node> {
    Selector::default().select(tree, root)
}

fn readable<T: RenderedTree>(tree: &T, node: T::Node) -> bool {
    let Some(tag) = tree.tag_name(node) else {
        log::trace!("skipping detached node {node:?}");
        return false;
    };
    !is_denylisted(tag) && tree.has_visible_text(node)
}

fn is_proxy_candidate<T: RenderedTree>(tree: &T, node: T::Node) -> bool {
    readable(tree, node) && tree.children(node).nth(1).is_some()
}

fn all_children_denylisted<T: RenderedTree>(tree: &T, node: T::Node) -> bool {
    let mut any = false;
    for child in tree.children(node) {
        any = true;
        if !tree.tag_name(child).is_some_and(is_denylisted) {
            return false;
        }
    }
    any
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use understory_render_tree::{Document, Element, NodeId};

    fn el(doc: &mut Document, parent: NodeId, tag: &str) -> NodeId {
        doc.insert(Some(parent), Element::new(tag))
    }

    fn text(doc: &mut Document, parent: NodeId, tag: &str, text: &str) -> NodeId {
        doc.insert_with_text(Some(parent), Element::new(tag), text)
    }

    fn nested() -> Selector {
        Selector::new(SelectorConfig {
            candidacy: Candidacy::Nested,
            ..Default::default()
        })
    }

    // <div><blockquote>Some text here</blockquote></div>
    #[test]
    fn single_child_wrapper_is_the_unit() {
        let mut doc = Document::new();
        let body = doc.insert(None, Element::new("body"));
        let div = el(&mut doc, body, "div");
        let _quote = text(&mut doc, div, "blockquote", "Some text here");
        assert_eq!(select_units(&doc, body).as_slice(), &[div]);
        assert_eq!(nested().select(&doc, body).as_slice(), &[div]);
    }

    // <div id="root"></div>
    // <div id="content-1"><article><header><h1>Title</h1><span><address>John Doe</address></span></header><section></section></article></div>
    #[test]
    fn content_wrapper_with_decorated_header_is_excluded() {
        let mut doc = Document::new();
        let body = doc.insert(None, Element::new("body"));
        let root = el(&mut doc, body, "div");
        let content = el(&mut doc, body, "div");
        let article = el(&mut doc, content, "article");
        let header = el(&mut doc, article, "header");
        let _title = text(&mut doc, header, "h1", "An Interesting HTML Document");
        let span = el(&mut doc, header, "span");
        let address = text(&mut doc, span, "address", "John Doe");
        let section = el(&mut doc, article, "section");

        let units = select_units(&doc, body);
        for excluded in [root, content, article, header, section, address] {
            assert!(
                !units.contains(excluded),
                "{excluded:?} should not be selected"
            );
        }
        assert!(units.is_empty());
    }

    #[test]
    fn complex_child_substitutes_parent() {
        // <div><article><p>a</p><p>b</p></article></div>
        let mut doc = Document::new();
        let body = doc.insert(None, Element::new("body"));
        let div = el(&mut doc, body, "div");
        let article = el(&mut doc, div, "article");
        let _a = text(&mut doc, article, "p", "a");
        let _b = text(&mut doc, article, "p", "b");
        // `div` is replaced by a scan of its children; `article` has no
        // complex child of its own, so it becomes the unit.
        assert_eq!(select_units(&doc, body).as_slice(), &[article]);
    }

    #[test]
    fn substitution_preserves_document_order() {
        // <main><section><p>1</p><p>2</p></section><p>3</p></main><p>4</p>
        let mut doc = Document::new();
        let body = doc.insert(None, Element::new("body"));
        let main = el(&mut doc, body, "main");
        let section = el(&mut doc, main, "section");
        let _p1 = text(&mut doc, section, "p", "1");
        let _p2 = text(&mut doc, section, "p", "2");
        let p3 = text(&mut doc, main, "p", "3");
        let p4 = text(&mut doc, body, "p", "4");
        assert_eq!(select_units(&doc, body).as_slice(), &[section, p3, p4]);
    }

    #[test]
    fn leaf_with_text_is_emitted() {
        let mut doc = Document::new();
        let body = doc.insert(None, Element::new("body"));
        let p = text(&mut doc, body, "P", "Plain paragraph");
        let blank = text(&mut doc, body, "p", "   ");
        let units = select_units(&doc, body);
        assert_eq!(units.as_slice(), &[p]);
        assert!(!units.contains(blank));
    }

    #[test]
    fn denylisted_tags_are_never_units() {
        let mut doc = Document::new();
        let body = doc.insert(None, Element::new("body"));
        let _h = text(&mut doc, body, "h2", "Heading");
        let _pre = text(&mut doc, body, "PRE", "code");
        let _script = text(&mut doc, body, "script", "let x = 1;");
        let p = text(&mut doc, body, "p", "Body text");
        assert_eq!(select_units(&doc, body).as_slice(), &[p]);
    }

    #[test]
    fn decorated_text_is_skipped_by_default() {
        // <p>Direct text <span>and a span</span></p>
        let mut doc = Document::new();
        let body = doc.insert(None, Element::new("body"));
        let p = text(&mut doc, body, "p", "Direct text ");
        let _span = text(&mut doc, p, "span", "and a span");
        assert!(select_units(&doc, body).is_empty());

        let keep = Selector::new(SelectorConfig {
            skip_decorated: false,
            ..Default::default()
        });
        assert_eq!(keep.select(&doc, body).as_slice(), &[p]);
    }

    #[test]
    fn mixed_children_are_not_decorated() {
        // <p>Text <span>x</span><em>y</em></p>
        let mut doc = Document::new();
        let body = doc.insert(None, Element::new("body"));
        let p = text(&mut doc, body, "p", "Text ");
        let _span = text(&mut doc, p, "span", "x");
        let _em = text(&mut doc, p, "em", "y");
        assert_eq!(select_units(&doc, body).as_slice(), &[p]);
    }

    #[test]
    fn nested_candidacy_looks_through_single_wrappers() {
        // <section><div><p>a</p></div><div><p>b</p></div></section>
        let mut doc = Document::new();
        let body = doc.insert(None, Element::new("body"));
        let section = el(&mut doc, body, "section");
        let d1 = el(&mut doc, section, "div");
        let _a = text(&mut doc, d1, "p", "a");
        let d2 = el(&mut doc, section, "div");
        let _b = text(&mut doc, d2, "p", "b");

        // Each div has a single child, so the proxy keeps the section whole.
        assert_eq!(select_units(&doc, body).as_slice(), &[section]);
        // Each div holds a readable unit, so nested candidacy splits it.
        assert_eq!(nested().select(&doc, body).as_slice(), &[d1, d2]);
    }

    #[test]
    fn nested_candidacy_does_not_split_leaf_wrappers() {
        // <div><p>a</p><p>b</p></div>
        let mut doc = Document::new();
        let body = doc.insert(None, Element::new("body"));
        let div = el(&mut doc, body, "div");
        let _a = text(&mut doc, div, "p", "a");
        let _b = text(&mut doc, div, "p", "b");
        assert_eq!(nested().select(&doc, body).as_slice(), &[div]);
        assert_eq!(select_units(&doc, body).as_slice(), &[div]);
    }

    #[test]
    fn detached_root_yields_nothing() {
        let mut doc = Document::new();
        let body = doc.insert(None, Element::new("body"));
        let _p = text(&mut doc, body, "p", "text");
        doc.remove(body);
        assert!(select_units(&doc, body).is_empty());
        assert!(nested().select(&doc, body).is_empty());
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let mut doc = Document::new();
        let body = doc.insert(None, Element::new("body"));
        assert_eq!(select_units(&doc, body), ReadableUnits::from_vec(vec![]));
    }

    #[test]
    fn deep_chains_do_not_exhaust_the_stack() {
        // <div>x<em>x</em><div>x<em>x</em>...</div></div>, 20k levels deep.
        const DEPTH: usize = 20_000;
        let mut doc = Document::new();
        let body = doc.insert(None, Element::new("body"));
        let mut divs = Vec::with_capacity(DEPTH);
        let mut parent = body;
        for _ in 0..DEPTH {
            let div = text(&mut doc, parent, "div", "x");
            let _em = text(&mut doc, div, "em", "x");
            divs.push(div);
            parent = div;
        }

        // Each div but the last two has a two-child div below it.
        let units = select_units(&doc, body);
        assert_eq!(units.len(), DEPTH - 1);
        assert_eq!(units.as_slice().last(), Some(&divs[DEPTH - 2]));

        // The innermost div holds a unit (its em), so it is a candidate too.
        let units = nested().select(&doc, body);
        assert_eq!(units.len(), DEPTH);
        assert_eq!(units.as_slice().last(), Some(&divs[DEPTH - 1]));
    }

    // --- randomized invariants ---

    #[derive(Clone)]
    struct Rng(u64);

    impl Rng {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Keeping the high 32 bits of the product."
        )]
        fn next_u32(&mut self) -> u32 {
            // xorshift64*
            let mut x = self.0;
            x ^= x >> 12;
            x ^= x << 25;
            x ^= x >> 27;
            self.0 = x;
            (x.wrapping_mul(0x2545_f491_4f6c_dd1d) >> 32) as u32
        }

        fn below(&mut self, n: u32) -> u32 {
            self.next_u32() % n
        }
    }

    const TAGS: [&str; 10] = [
        "div",
        "p",
        "section",
        "article",
        "span",
        "h1",
        "button",
        "li",
        "img",
        "blockquote",
    ];
    const TEXTS: [&str; 4] = ["", "  ", "word", " several words "];

    #[allow(clippy::cast_possible_truncation, reason = "Table sizes are tiny.")]
    fn grow(doc: &mut Document, rng: &mut Rng, parent: NodeId, depth: u32) {
        let kids = if depth == 0 { 0 } else { rng.below(4) };
        for _ in 0..kids {
            let tag = TAGS[rng.below(TAGS.len() as u32) as usize];
            let text = TEXTS[rng.below(TEXTS.len() as u32) as usize];
            let child = doc.insert_with_text(Some(parent), Element::new(tag), text);
            grow(doc, rng, child, depth - 1);
        }
    }

    fn check_invariants(doc: &Document, units: &ReadableUnits<NodeId>) {
        for u in units.iter() {
            let tag = doc.element(u).map(|e| e.tag.as_str()).unwrap_or_default();
            assert!(!is_denylisted(tag), "denylisted unit {tag}");
            let text = doc.text_content(u).unwrap_or_default();
            assert!(!text.trim().is_empty(), "unit without text");
            for v in units.iter() {
                assert!(!doc.is_ancestor(u, v), "unit {u:?} contains unit {v:?}");
            }
        }
    }

    #[test]
    fn random_trees_hold_invariants() {
        let mut rng = Rng(0x9e37_79b9_7f4a_7c15);
        for _ in 0..200 {
            let mut doc = Document::new();
            let body = doc.insert(None, Element::new("body"));
            grow(&mut doc, &mut rng, body, 5);
            check_invariants(&doc, &select_units(&doc, body));
            check_invariants(&doc, &nested().select(&doc, body));
            let keep = Selector::new(SelectorConfig {
                skip_decorated: false,
                ..Default::default()
            });
            check_invariants(&doc, &keep.select(&doc, body));
        }
    }

    // Nested candidacy read literally: a readable child is a candidate when
    // selecting over its own children yields at least one unit.
    fn select_by_definition(
        doc: &Document,
        parent: NodeId,
        skip_decorated: bool,
        out: &mut Vec<NodeId>,
    ) {
        for child in doc.children(parent) {
            if !readable(doc, child) || (skip_decorated && all_children_denylisted(doc, child)) {
                continue;
            }
            let candidate = doc.children(child).any(|c| {
                let mut inner = Vec::new();
                if readable(doc, c) {
                    select_by_definition(doc, c, skip_decorated, &mut inner);
                }
                !inner.is_empty()
            });
            if candidate {
                select_by_definition(doc, child, skip_decorated, out);
            } else {
                out.push(child);
            }
        }
    }

    #[test]
    fn nested_candidacy_matches_its_definition() {
        let mut rng = Rng(0xd1b5_4a32_d192_ed03);
        for round in 0..400 {
            let mut doc = Document::new();
            let body = doc.insert(None, Element::new("body"));
            grow(&mut doc, &mut rng, body, 6);
            for skip_decorated in [true, false] {
                let selector = Selector::new(SelectorConfig {
                    candidacy: Candidacy::Nested,
                    skip_decorated,
                });
                let mut expected = Vec::new();
                select_by_definition(&doc, body, skip_decorated, &mut expected);
                assert_eq!(
                    selector.select(&doc, body).as_slice(),
                    expected.as_slice(),
                    "round {round}, skip_decorated {skip_decorated}"
                );
            }
        }
    }
}
