// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Dynamically-typed category values.

use ordered_float::OrderedFloat;
use serde::Serialize;

/// A category value of mixed scalar type.
///
/// Values that compare equal as numbers are one category: booleans become
/// `0`/`1` and integral floats become integers, so `true`, `1` and `1.0`
/// all normalise to `Int(1)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(OrderedFloat<f64>),
    Str(String),
}

impl Scalar {
    pub fn from_f64(value: f64) -> Scalar {
        // -2^63 and 2^63 are exact in f64; the upper bound is exclusive
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Scalar::Int(value as i64)
        } else {
            Scalar::Float(OrderedFloat(value))
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Scalar {
        Scalar::Int(value as i64)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Scalar {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Scalar {
        Scalar::from_f64(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Scalar {
        Scalar::Str(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Scalar {
        Scalar::Str(value)
    }
}
