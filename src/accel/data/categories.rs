// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Category discovery and indexing.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Ordered index of the categories observed in a rating matrix.
///
/// Categories are numbered by first appearance in row-major order, so every
/// pass over the categories within one computation sums in the same order.
#[derive(Debug, Clone)]
pub struct CategoryIndex<C> {
    categories: Vec<C>,
    positions: FxHashMap<C, usize>,
}

impl<C: Eq + Hash + Clone> CategoryIndex<C> {
    /// Collect the categories from a set of rating rows; absences are skipped.
    pub fn from_rows(rows: &[Vec<Option<C>>]) -> Self {
        let mut categories = Vec::new();
        let mut positions = FxHashMap::default();
        for v in rows.iter().flatten().flatten() {
            if !positions.contains_key(v) {
                positions.insert(v.clone(), categories.len());
                categories.push(v.clone());
            }
        }
        CategoryIndex {
            categories,
            positions,
        }
    }

    /// Look up the position of a category.
    pub fn position(&self, cat: &C) -> Option<usize> {
        self.positions.get(cat).copied()
    }
}

impl<C> CategoryIndex<C> {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&C> {
        self.categories.get(pos)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.categories.iter()
    }

    pub fn as_slice(&self) -> &[C] {
        &self.categories
    }
}
