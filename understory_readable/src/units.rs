// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered, read-only result of a selection pass.

use alloc::vec::Vec;

/// Readable units in document (pre-order discovery) order.
///
/// Produced by [`Selector::select`](crate::Selector::select). It is a frozen
/// snapshot: later changes to the tree are not reflected until a new
/// selection pass runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadableUnits<N> {
    units: Vec<N>,
}

impl<N> Default for ReadableUnits<N> {
    fn default() -> Self {
        Self { units: Vec::new() }
    }
}

impl<N: Copy + Eq> ReadableUnits<N> {
    pub(crate) fn from_vec(units: Vec<N>) -> Self {
        Self { units }
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns true if no unit was selected.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterate units in document order.
    pub fn iter(&self) -> impl Iterator<Item = N> + '_ {
        self.units.iter().copied()
    }

    /// Units as a slice, in document order.
    pub fn as_slice(&self) -> &[N] {
        &self.units
    }

    /// Returns true if `node` was selected.
    pub fn contains(&self, node: N) -> bool {
        self.units.contains(&node)
    }

    /// Document-order position of `node`, if selected.
    pub fn position(&self, node: N) -> Option<usize> {
        self.units.iter().position(|u| *u == node)
    }
}

impl<'a, N> IntoIterator for &'a ReadableUnits<N> {
    type Item = &'a N;
    type IntoIter = core::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}
