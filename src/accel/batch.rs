// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Parallel agreement over many rating matrices.
//!
//! Each matrix is computed independently, so a degenerate label in a
//! multilabel task reports its own error without aborting the others.
use std::hash::Hash;

use log::*;
use rayon::prelude::*;

use crate::agreement::{calculate_agreement, AgreementStats};
use crate::data::{binarize_label, RatingMatrix};
use crate::errors::Result;
use crate::parallel::maybe_fuse;
use crate::weighting::{IdentityWeighting, PairwiseWeighting};

/// Compute agreement for a batch of named matrices in parallel.
///
/// Results are returned in input order.
pub fn calculate_agreement_batch<K, C, W>(
    matrices: Vec<(K, RatingMatrix<C>)>,
    weighting: &W,
) -> Vec<(K, Result<AgreementStats<C>>)>
where
    K: Send,
    C: Eq + Hash + Clone + Send + Sync,
    W: PairwiseWeighting<C> + Sync + ?Sized,
{
    debug!("computing agreement for {} matrices", matrices.len());
    maybe_fuse(matrices.into_par_iter().map(|(key, matrix)| {
        let stats = calculate_agreement(&matrix, weighting);
        if let Err(e) = &stats {
            debug!("agreement failed for one batch entry: {}", e);
        }
        (key, stats)
    }))
    .collect()
}

/// Compute per-label agreement for a multilabel task.
///
/// `rows` holds each annotator's accepted labels per item (`None` if they
/// did not annotate it); each label is scored as its own accept/reject task.
pub fn calculate_multilabel_agreement<L>(
    rows: &[Vec<Option<Vec<L>>>],
    labels: &[L],
) -> Vec<(L, Result<AgreementStats<bool>>)>
where
    L: PartialEq + Clone + Send + Sync,
{
    debug!(
        "computing multilabel agreement for {} labels over {} items",
        labels.len(),
        rows.len()
    );
    maybe_fuse(labels.par_iter().map(|label| {
        let stats = binarize_label(rows, label)
            .and_then(|matrix| calculate_agreement(&matrix, &IdentityWeighting));
        (label.clone(), stats)
    }))
    .collect()
}
