// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Chance-corrected agreement estimators.
//!
//! Percent agreement, Krippendorff's alpha and Gwet's AC2 are computed from
//! the same coincidence table in three passes:
//!
//! 1. setup: raters per item, and the coincident items (those not rated by
//!    exactly one annotator);
//! 2. paired agreement over the coincident items, where the Krippendorff and
//!    Gwet terms differ only in their normalisation;
//! 3. expected agreement, from coincident-item category proportions for
//!    Krippendorff and from all-item proportions for Gwet.
//!
//! Variable names follow K. L. Gwet, "On Krippendorff's Alpha Coefficient"
//! (2015), with `kripp_` / `ac_` prefixes where the two diverge.
use std::hash::Hash;

use log::*;
use serde::Serialize;

mod expected;
mod paired;

use crate::data::{build_coincidence_table, CategoryIndex, CoincidenceTable, RatingMatrix};
use crate::errors::{AgreementError, Result};
use crate::weighting::{IdentityWeighting, PairwiseWeighting, WeightMatrix};

/// Agreement statistics for one rating matrix.
///
/// Values are full precision; rounding is left to whoever displays them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgreementStats<C> {
    /// Mean pairwise agreement over coincident items (Gwet's `pa`).
    pub percent_agreement: f64,
    pub kripp_alpha: f64,
    pub ac2: f64,
    pub n_categories: usize,
    pub n_annotators: usize,
    pub n_examples: usize,
    /// Items with more than one rating.
    pub n_coincident_examples: usize,
    /// Mean ratings per item, over all items.
    pub avg_raters_per_example: f64,
    pub n_single_annotation: usize,
    /// Ratings per category over the coincident items, in category order.
    pub coincident_annotations_per_category: Vec<(C, u32)>,
}

impl<C: PartialEq> AgreementStats<C> {
    /// Coincident rating count for a category, if it was observed.
    pub fn coincident_annotations(&self, category: &C) -> Option<u32> {
        self.coincident_annotations_per_category
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, n)| *n)
    }
}

/// Items taking part in pairwise agreement, with their mean rater count.
pub(crate) struct Coincidence {
    pub items: Vec<usize>,
    pub rbar: f64,
}

impl Coincidence {
    fn new(table: &CoincidenceTable) -> Result<Coincidence> {
        let items = table.coincident_items();
        if items.is_empty() {
            return Err(AgreementError::NoCoincidentItems);
        }
        let total: u32 = items.iter().map(|i| table.raters(*i)).sum();
        let rbar = total as f64 / items.len() as f64;
        if rbar <= 1.0 {
            return Err(AgreementError::NoCoincidentItems);
        }
        Ok(Coincidence { items, rbar })
    }

    pub fn n_c(&self) -> usize {
        self.items.len()
    }
}

/// Compute agreement statistics with a custom category weighting.
pub fn calculate_agreement<C, W>(matrix: &RatingMatrix<C>, weighting: &W) -> Result<AgreementStats<C>>
where
    C: Eq + Hash + Clone,
    W: PairwiseWeighting<C> + ?Sized,
{
    let (table, categories) = build_coincidence_table(matrix);
    estimate_agreement(matrix, &table, &categories, weighting)
}

/// Compute agreement statistics with strict-equality weighting.
pub fn calculate_agreement_default<C>(matrix: &RatingMatrix<C>) -> Result<AgreementStats<C>>
where
    C: Eq + Hash + Clone,
{
    calculate_agreement(matrix, &IdentityWeighting)
}

/// Compute agreement statistics from a prebuilt coincidence table.
///
/// `table` and `categories` must come from [build_coincidence_table] on
/// `matrix`; mismatched shapes are rejected with
/// [AgreementError::TableMismatch].
pub fn estimate_agreement<C, W>(
    matrix: &RatingMatrix<C>,
    table: &CoincidenceTable,
    categories: &CategoryIndex<C>,
    weighting: &W,
) -> Result<AgreementStats<C>>
where
    C: Eq + Hash + Clone,
    W: PairwiseWeighting<C> + ?Sized,
{
    check_table_shape(matrix, table, categories)?;
    let q = categories.len();
    debug!(
        "estimating agreement for {} items, {} annotators, {} categories",
        table.n_items(),
        matrix.n_annotators(),
        q
    );
    if q < 2 {
        return Err(AgreementError::SingleCategory(q));
    }
    let weights = WeightMatrix::resolve(categories, weighting)?;

    let coincidence = Coincidence::new(table)?;
    let n_a = table.n_items();
    let n_c = coincidence.n_c();
    debug!(
        "{} of {} items are coincident, mean {:.3} raters",
        n_c, n_a, coincidence.rbar
    );

    let pa = paired::paired_agreement(table, &coincidence, &weights);
    let kripp_pe = expected::krippendorff_expected(table, &coincidence, &weights);
    let ac_pe = expected::gwet_expected(table, &weights);
    debug!(
        "pa: kripp={:.4} ac={:.4}; pe: kripp={:.4} ac={:.4}",
        pa.kripp_pa, pa.ac_pa, kripp_pe, ac_pe
    );

    let kripp_alpha = chance_corrected("krippendorff's alpha", pa.kripp_pa, kripp_pe)?;
    let ac2 = chance_corrected("gwet's ac2", pa.ac_pa, ac_pe)?;

    let total_raters: u32 = table.raters_per_item().iter().sum();
    let totals = table.category_totals(&coincidence.items);
    let per_category = categories.iter().cloned().zip(totals).collect();

    Ok(AgreementStats {
        percent_agreement: pa.ac_pa,
        kripp_alpha,
        ac2,
        n_categories: q,
        n_annotators: matrix.n_annotators(),
        n_examples: n_a,
        n_coincident_examples: n_c,
        avg_raters_per_example: total_raters as f64 / n_a as f64,
        n_single_annotation: n_a - n_c,
        coincident_annotations_per_category: per_category,
    })
}

fn check_table_shape<C>(
    matrix: &RatingMatrix<C>,
    table: &CoincidenceTable,
    categories: &CategoryIndex<C>,
) -> Result<()> {
    if table.n_items() != matrix.n_items() {
        return Err(AgreementError::TableMismatch {
            what: "item count",
            expected: matrix.n_items(),
            found: table.n_items(),
        });
    }
    if table.n_categories() != categories.len() {
        return Err(AgreementError::TableMismatch {
            what: "category count",
            expected: categories.len(),
            found: table.n_categories(),
        });
    }
    Ok(())
}

/// Apply the chance correction `(pa - pe) / (1 - pe)`.
fn chance_corrected(statistic: &'static str, pa: f64, pe: f64) -> Result<f64> {
    let denom = 1.0 - pe;
    if denom == 0.0 {
        warn!("{}: expected agreement is 1, coefficient undefined", statistic);
        return Err(AgreementError::PerfectChanceAgreement { statistic });
    }
    Ok((pa - pe) / denom)
}
