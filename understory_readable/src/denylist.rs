// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tag names that are never readable units.

use bitflags::bitflags;

bitflags! {
    /// A set of well-known tag names.
    ///
    /// Flag names are the upper-case tag names; [`Tags::from_tag_name`] maps
    /// an authored tag (in any case) to its flag.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Tags: u16 {
        /// `<h1>`.
        const H1     = 1 << 0;
        /// `<h2>`.
        const H2     = 1 << 1;
        /// `<h3>`.
        const H3     = 1 << 2;
        /// `<h4>`.
        const H4     = 1 << 3;
        /// `<h5>`.
        const H5     = 1 << 4;
        /// `<h6>`.
        const H6     = 1 << 5;
        /// `<button>`.
        const BUTTON = 1 << 6;
        /// `<label>`.
        const LABEL  = 1 << 7;
        /// `<span>`.
        const SPAN   = 1 << 8;
        /// `<img>`.
        const IMG    = 1 << 9;
        /// `<pre>`.
        const PRE    = 1 << 10;
        /// `<script>`.
        const SCRIPT = 1 << 11;
    }
}

impl Tags {
    /// All heading levels.
    pub const HEADINGS: Self = Self::H1
        .union(Self::H2)
        .union(Self::H3)
        .union(Self::H4)
        .union(Self::H5)
        .union(Self::H6);

    /// Map an authored tag name to its flag, ignoring ASCII case.
    ///
    /// Returns `None` for tags outside this set.
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        Self::all()
            .iter_names()
            .find(|(name, _)| name.eq_ignore_ascii_case(tag))
            .map(|(_, flag)| flag)
    }
}

/// Tags excluded from readable-unit selection.
pub const DENYLIST: Tags = Tags::all();

/// Returns true if `tag` is in [`DENYLIST`], ignoring ASCII case.
///
/// ```
/// use understory_readable::is_denylisted;
///
/// assert!(is_denylisted("span"));
/// assert!(is_denylisted("H3"));
/// assert!(!is_denylisted("p"));
/// ```
pub fn is_denylisted(tag: &str) -> bool {
    Tags::from_tag_name(tag).is_some_and(|t| DENYLIST.contains(t))
}
