// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

use log::*;

use crate::errors::{AgreementError, Result};

/// Item-by-annotator rating matrix.
///
/// Each row is one item; slot `j` of every row belongs to the same annotator.
/// `None` marks an annotator who did not rate the item. Construction checks
/// that the matrix is non-empty, rectangular, and that every item has at
/// least one rating.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingMatrix<C> {
    rows: Vec<Vec<Option<C>>>,
    n_annotators: usize,
}

impl<C> RatingMatrix<C> {
    pub fn new(rows: Vec<Vec<Option<C>>>) -> Result<Self> {
        let first = rows.first().ok_or(AgreementError::EmptyMatrix)?;
        let n_annotators = first.len();
        if n_annotators == 0 {
            return Err(AgreementError::NoAnnotators);
        }

        for (item, row) in rows.iter().enumerate() {
            if row.len() != n_annotators {
                return Err(AgreementError::RaggedRow {
                    item,
                    expected: n_annotators,
                    found: row.len(),
                });
            }
            if row.iter().all(Option::is_none) {
                return Err(AgreementError::UnratedItem { item });
            }
        }

        debug!("validated {}x{} rating matrix", rows.len(), n_annotators);
        Ok(RatingMatrix { rows, n_annotators })
    }

    /// Number of items (rows).
    pub fn n_items(&self) -> usize {
        self.rows.len()
    }

    /// Number of annotator slots per item.
    pub fn n_annotators(&self) -> usize {
        self.n_annotators
    }

    pub fn rows(&self) -> &[Vec<Option<C>>] {
        &self.rows
    }

    pub fn row(&self, item: usize) -> &[Option<C>] {
        &self.rows[item]
    }

    /// Total number of non-absent ratings.
    pub fn n_ratings(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.iter().filter(|v| v.is_some()).count())
            .sum()
    }

    pub fn into_rows(self) -> Vec<Vec<Option<C>>> {
        self.rows
    }
}

impl<C> TryFrom<Vec<Vec<Option<C>>>> for RatingMatrix<C> {
    type Error = AgreementError;

    fn try_from(rows: Vec<Vec<Option<C>>>) -> Result<Self> {
        RatingMatrix::new(rows)
    }
}
