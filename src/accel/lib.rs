// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Inter-annotator agreement statistics.
//!
//! Computes percent agreement, Krippendorff's alpha and Gwet's AC2 from an
//! item-by-annotator rating matrix with missing ratings. The computation is
//! pure and synchronous; independent matrices can be scored in parallel with
//! [calculate_agreement_batch].
//!
//! ```
//! use iaa_accel::{calculate_agreement_default, RatingMatrix};
//!
//! let matrix = RatingMatrix::new(vec![
//!     vec![Some("pos"), Some("pos"), None],
//!     vec![Some("neg"), Some("pos"), Some("neg")],
//!     vec![Some("neg"), Some("neg"), Some("neg")],
//! ])?;
//! let stats = calculate_agreement_default(&matrix)?;
//! assert!(stats.kripp_alpha <= 1.0);
//! # Ok::<(), iaa_accel::AgreementError>(())
//! ```

mod agreement;
mod batch;
mod data;
mod errors;
mod parallel;
mod weighting;

#[cfg(feature = "python")]
mod python;

pub use agreement::{
    calculate_agreement, calculate_agreement_default, estimate_agreement, AgreementStats,
};
pub use batch::{calculate_agreement_batch, calculate_multilabel_agreement};
pub use data::{
    binarize_label, build_coincidence_table, ratings_to_matrix, CategoryIndex, CoincidenceTable,
    PivotedRatings, Rating, RatingMatrix, Scalar,
};
pub use errors::{AgreementError, Result};
pub use parallel::{init_pool, thread_count};
pub use weighting::{IdentityWeighting, PairwiseWeighting, WeightTable};

/// Float category values with total ordering and hashing.
pub use ordered_float::OrderedFloat;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Entry point for the agreement accelerator module.
#[cfg(feature = "python")]
#[pymodule]
fn iaa_accel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();
    python::register(m)
}
