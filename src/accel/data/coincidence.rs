// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Support for counting per-item category coincidences.

use std::hash::Hash;

use log::*;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use super::{CategoryIndex, RatingMatrix};

/// Item-by-category count table.
///
/// Entry `(i, k)` is the number of annotators who assigned category `k` to
/// item `i`. The table is dense: every category has a (possibly zero) count
/// for every item.
#[derive(Debug, Clone, PartialEq)]
pub struct CoincidenceTable {
    counts: Array2<u32>,
    raters: Vec<u32>,
}

/// Build the coincidence table and category index for a rating matrix.
pub fn build_coincidence_table<C>(matrix: &RatingMatrix<C>) -> (CoincidenceTable, CategoryIndex<C>)
where
    C: Eq + Hash + Clone,
{
    debug!("pass 1: discovering categories");
    let categories = CategoryIndex::from_rows(matrix.rows());

    debug!(
        "pass 2: counting {} categories over {} items",
        categories.len(),
        matrix.n_items()
    );
    let mut counts: Array2<u32> = Array2::zeros((matrix.n_items(), categories.len()));
    for (i, row) in matrix.rows().iter().enumerate() {
        for v in row.iter().flatten() {
            // every rated value was seen by the discovery pass
            if let Some(k) = categories.position(v) {
                counts[[i, k]] += 1;
            }
        }
    }

    let raters = counts.sum_axis(Axis(1)).to_vec();
    (CoincidenceTable { counts, raters }, categories)
}

impl CoincidenceTable {
    pub fn n_items(&self) -> usize {
        self.counts.nrows()
    }

    pub fn n_categories(&self) -> usize {
        self.counts.ncols()
    }

    /// The full count table.
    pub fn counts(&self) -> ArrayView2<'_, u32> {
        self.counts.view()
    }

    /// Category counts for a single item.
    pub fn item_counts(&self, item: usize) -> ArrayView1<'_, u32> {
        self.counts.row(item)
    }

    pub fn count(&self, item: usize, category: usize) -> u32 {
        self.counts[[item, category]]
    }

    /// Number of ratings on each item.
    pub fn raters_per_item(&self) -> &[u32] {
        &self.raters
    }

    pub fn raters(&self, item: usize) -> u32 {
        self.raters[item]
    }

    /// Indices of items whose rater count is not exactly one.
    pub fn coincident_items(&self) -> Vec<usize> {
        self.raters
            .iter()
            .enumerate()
            .filter(|(_, r)| **r != 1)
            .map(|(i, _)| i)
            .collect()
    }

    /// Per-category totals over a subset of items.
    pub fn category_totals(&self, items: &[usize]) -> Vec<u32> {
        let mut totals = vec![0; self.n_categories()];
        for &i in items {
            for (k, n) in self.counts.row(i).iter().enumerate() {
                totals[k] += n;
            }
        }
        totals
    }

    /// An item's counts paired with their categories.
    pub fn item_counter<'a, C>(
        &self,
        item: usize,
        categories: &'a CategoryIndex<C>,
    ) -> Vec<(&'a C, u32)> {
        categories
            .iter()
            .zip(self.counts.row(item).iter().copied())
            .collect()
    }
}
