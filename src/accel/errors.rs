// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Error types for agreement computation.

use thiserror::Error;

/// Result type for agreement operations.
pub type Result<T> = std::result::Result<T, AgreementError>;

/// Errors raised while validating ratings or computing agreement.
///
/// Variants fall into two classes: malformed input, which is detected before
/// any arithmetic happens, and degenerate statistics, where the input is
/// well-formed but carries too little information for a coefficient to be
/// defined.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AgreementError {
    /// The rating matrix has no items.
    #[error("rating matrix has no items")]
    EmptyMatrix,

    /// The rating matrix has zero annotator slots.
    #[error("rating matrix has no annotator slots")]
    NoAnnotators,

    /// An item's row length differs from the first item's.
    #[error("item {item} has {found} annotator slots, expected {expected}")]
    RaggedRow {
        item: usize,
        expected: usize,
        found: usize,
    },

    /// An item where every annotator slot is absent.
    #[error("item {item} has no ratings")]
    UnratedItem { item: usize },

    /// A coincidence table or category index was built from a different matrix.
    #[error("coincidence table {what} is {found}, expected {expected}")]
    TableMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A weighting returned a value that is not a finite number in [0, 1].
    #[error("category weight {weight} is outside [0, 1]")]
    InvalidWeight { weight: f64 },

    /// No item carries more than one rating.
    #[error("insufficient data for agreement calculation: no item has more than one rating")]
    NoCoincidentItems,

    /// Fewer than two categories were observed.
    #[error("insufficient data for agreement calculation: {0} categories observed, need at least 2")]
    SingleCategory(usize),

    /// Expected agreement is exactly 1, so the chance correction divides by zero.
    #[error("insufficient data for agreement calculation: chance agreement for {statistic} is 1")]
    PerfectChanceAgreement { statistic: &'static str },

    /// Two records from the same annotator for the same item.
    #[error("annotator {annotator} rated item {item} more than once")]
    DuplicateRating { item: String, annotator: String },

    /// The rayon pool could not be configured.
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// A weight table could not be parsed.
    #[error("invalid weight table: {0}")]
    Json(#[from] serde_json::Error),
}

impl AgreementError {
    /// Whether this error reports malformed input data.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            AgreementError::EmptyMatrix
                | AgreementError::NoAnnotators
                | AgreementError::RaggedRow { .. }
                | AgreementError::UnratedItem { .. }
                | AgreementError::TableMismatch { .. }
                | AgreementError::InvalidWeight { .. }
                | AgreementError::DuplicateRating { .. }
                | AgreementError::Json(_)
        )
    }

    /// Whether this error means the data is too thin for a coefficient.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            AgreementError::NoCoincidentItems
                | AgreementError::SingleCategory(_)
                | AgreementError::PerfectChanceAgreement { .. }
        )
    }
}
