// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Observed (paired) agreement.

use log::*;

use super::Coincidence;
use crate::data::CoincidenceTable;
use crate::weighting::WeightMatrix;

/// Observed agreement under both estimators.
#[derive(Debug, Clone, Copy)]
pub(super) struct PairedAgreement {
    /// Krippendorff's bias-corrected `pa`.
    pub kripp_pa: f64,
    /// Gwet's `pa`, also reported as percent agreement.
    pub ac_pa: f64,
}

/// Sum the per-item, per-category agreement terms over the coincident items.
pub(super) fn paired_agreement(
    table: &CoincidenceTable,
    coincidence: &Coincidence,
    weights: &WeightMatrix,
) -> PairedAgreement {
    let rbar = coincidence.rbar;
    let n_c = coincidence.n_c() as f64;

    let mut kripp_pa_sum = 0.0;
    let mut ac_pa_sum = 0.0;
    for &i in &coincidence.items {
        let ri = table.raters(i) as f64;
        let mut kripp_pa_i = 0.0;
        let mut ac_pa_i = 0.0;
        for (k, r_ik) in table.item_counts(i).iter().enumerate() {
            let r_ik = *r_ik as f64;
            let rbar_ik: f64 = weights.row(k).iter().map(|w| w * r_ik).sum();
            let agree = r_ik * (rbar_ik - 1.0);
            kripp_pa_i += agree / (rbar * (ri - 1.0));
            ac_pa_i += agree / (ri * (ri - 1.0));
        }
        trace!("item {}: kripp {:.4}, ac {:.4}", i, kripp_pa_i, ac_pa_i);
        kripp_pa_sum += kripp_pa_i;
        ac_pa_sum += ac_pa_i;
    }

    let kripp_pa_prime = kripp_pa_sum / n_c;
    let epsilon = 1.0 / (rbar * n_c);
    let kripp_pa = (1.0 - epsilon) * kripp_pa_prime + epsilon;

    PairedAgreement {
        kripp_pa,
        ac_pa: ac_pa_sum / n_c,
    }
}
