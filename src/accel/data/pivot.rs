// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Pivoting long-format annotation records into a rating matrix.

use std::fmt::Debug;
use std::hash::Hash;

use log::*;
use rustc_hash::FxHashMap;

use super::RatingMatrix;
use crate::errors::{AgreementError, Result};

/// A single annotation record.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating<I, A, C> {
    pub item: I,
    pub annotator: A,
    /// The value given, or `None` if the annotator saw the item but gave no
    /// usable answer.
    pub value: Option<C>,
}

impl<I, A, C> Rating<I, A, C> {
    pub fn new(item: I, annotator: A, value: Option<C>) -> Self {
        Rating {
            item,
            annotator,
            value,
        }
    }
}

/// A rating matrix along with the item and annotator IDs of its rows and slots.
#[derive(Debug, Clone)]
pub struct PivotedRatings<I, A, C> {
    pub items: Vec<I>,
    pub annotators: Vec<A>,
    pub matrix: RatingMatrix<C>,
}

/// Convert long-format records into an item-by-annotator matrix.
///
/// Rows are sorted by item ID; annotator slots are numbered by first
/// appearance. An annotator may contribute at most one record per item.
pub fn ratings_to_matrix<I, A, C>(records: Vec<Rating<I, A, C>>) -> Result<PivotedRatings<I, A, C>>
where
    I: Ord + Clone + Debug,
    A: Eq + Hash + Clone + Debug,
{
    debug!("pass 1: indexing annotators over {} records", records.len());
    let mut annotators = Vec::new();
    let mut a_index = FxHashMap::default();
    for r in &records {
        if !a_index.contains_key(&r.annotator) {
            a_index.insert(r.annotator.clone(), annotators.len());
            annotators.push(r.annotator.clone());
        }
    }
    let n_annotators = annotators.len();

    debug!("pass 2: grouping records by item");
    let mut records = records;
    records.sort_by(|a, b| a.item.cmp(&b.item));

    let mut items = Vec::new();
    let mut rows = Vec::new();
    let mut group: Vec<Rating<I, A, C>> = Vec::new();
    for rec in records {
        if group.first().is_some_and(|g| g.item != rec.item) {
            let (item, row) = pivot_item(std::mem::take(&mut group), &a_index, n_annotators)?;
            items.push(item);
            rows.push(row);
        }
        group.push(rec);
    }
    if !group.is_empty() {
        let (item, row) = pivot_item(group, &a_index, n_annotators)?;
        items.push(item);
        rows.push(row);
    }

    debug!(
        "pivoted {} items over {} annotators",
        items.len(),
        n_annotators
    );
    let matrix = RatingMatrix::new(rows)?;
    Ok(PivotedRatings {
        items,
        annotators,
        matrix,
    })
}

/// Spread one item's records over the annotator slots.
fn pivot_item<I, A, C>(
    group: Vec<Rating<I, A, C>>,
    a_index: &FxHashMap<A, usize>,
    n_annotators: usize,
) -> Result<(I, Vec<Option<C>>)>
where
    I: Clone + Debug,
    A: Eq + Hash + Debug,
{
    let mut row: Vec<Option<C>> = (0..n_annotators).map(|_| None).collect();
    let mut taken = vec![false; n_annotators];
    let mut item = None;
    for rec in group {
        let slot = a_index[&rec.annotator];
        // an empty record still claims its slot
        if taken[slot] {
            return Err(AgreementError::DuplicateRating {
                item: format!("{:?}", rec.item),
                annotator: format!("{:?}", rec.annotator),
            });
        }
        taken[slot] = true;
        row[slot] = rec.value;
        if item.is_none() {
            item = Some(rec.item);
        }
    }
    match item {
        Some(item) => Ok((item, row)),
        None => Err(AgreementError::EmptyMatrix),
    }
}
