// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Rating data structures and reshaping.
mod categories;
mod coincidence;
mod matrix;
mod multilabel;
mod pivot;
mod scalar;

pub use categories::CategoryIndex;
pub use coincidence::{build_coincidence_table, CoincidenceTable};
pub use matrix::RatingMatrix;
pub use multilabel::binarize_label;
pub use pivot::{ratings_to_matrix, PivotedRatings, Rating};
pub use scalar::Scalar;
