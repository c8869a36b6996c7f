// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Expected (chance) agreement.

use super::Coincidence;
use crate::data::CoincidenceTable;
use crate::weighting::WeightMatrix;

/// Krippendorff's expected agreement over the coincident items.
///
/// Each ordered category pair `(k, l)` contributes `w(k, l) * pi_k * pi_k`.
pub(super) fn krippendorff_expected(
    table: &CoincidenceTable,
    coincidence: &Coincidence,
    weights: &WeightMatrix,
) -> f64 {
    let n_c = coincidence.n_c() as f64;
    let pi: Vec<f64> = table
        .category_totals(&coincidence.items)
        .into_iter()
        .map(|n| n as f64 / n_c / coincidence.rbar)
        .collect();

    let q = pi.len();
    let mut pe = 0.0;
    for k in 0..q {
        for l in 0..q {
            pe += weights.get(k, l) * pi[k] * pi[k];
        }
    }
    pe
}

/// Gwet's expected agreement over all items.
pub(super) fn gwet_expected(table: &CoincidenceTable, weights: &WeightMatrix) -> f64 {
    let n_a = table.n_items() as f64;
    let q = table.n_categories();

    let mut pe_sum = 0.0;
    for k in 0..q {
        let mut cat_sum = 0.0;
        for i in 0..table.n_items() {
            cat_sum += table.count(i, k) as f64 / table.raters(i) as f64;
        }
        let pi_k = cat_sum / n_a;
        pe_sum += pi_k * (1.0 - pi_k);
    }

    let qf = q as f64;
    weights.total() / (qf * (qf - 1.0)) * pe_sum
}
