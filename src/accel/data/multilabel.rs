// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Binarising multilabel annotations.

use super::RatingMatrix;
use crate::errors::Result;

/// Build the accept/reject matrix for one label of a multilabel task.
///
/// `rows` holds, per item and annotator slot, the labels that annotator
/// accepted, or `None` if they did not annotate the item. The result is
/// `Some(true)` where the label was accepted, `Some(false)` where the
/// annotator saw the item but did not pick it.
pub fn binarize_label<L: PartialEq>(
    rows: &[Vec<Option<Vec<L>>>],
    label: &L,
) -> Result<RatingMatrix<bool>> {
    let binary = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|accepted| accepted.as_ref().map(|ls| ls.contains(label)))
                .collect()
        })
        .collect();
    RatingMatrix::new(binary)
}
