// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Pairwise category weightings.
//!
//! Every "do these two categories agree?" judgment in the estimators goes
//! through a [PairwiseWeighting], so graded (partial-credit) schemes can be
//! swapped in without touching the statistics.
use std::hash::Hash;

use log::*;
use ndarray::{Array2, ArrayView1};
use rustc_hash::FxHashMap;
use serde::{de::DeserializeOwned, Deserialize};

use crate::data::CategoryIndex;
use crate::errors::{AgreementError, Result};

/// Trait for weighting the agreement between two categories.
///
/// Weights must lie in [0, 1], with 1.0 meaning full agreement.
pub trait PairwiseWeighting<C: ?Sized> {
    fn weight(&self, a: &C, b: &C) -> f64;
}

/// Strict equality weighting: 1.0 if the categories are equal, else 0.0.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityWeighting;

impl<C: PartialEq + ?Sized> PairwiseWeighting<C> for IdentityWeighting {
    fn weight(&self, a: &C, b: &C) -> f64 {
        if a == b {
            1.0
        } else {
            0.0
        }
    }
}

impl<C: ?Sized, F> PairwiseWeighting<C> for F
where
    F: Fn(&C, &C) -> f64,
{
    fn weight(&self, a: &C, b: &C) -> f64 {
        self(a, b)
    }
}

/// Lookup-table weighting for partial credit between named categories.
///
/// Equal categories weigh 1.0 and unlisted pairs 0.0 unless an entry
/// overrides them.
#[derive(Debug, Clone)]
pub struct WeightTable<C: Eq + Hash> {
    weights: FxHashMap<C, FxHashMap<C, f64>>,
}

#[derive(Deserialize)]
struct WeightEntry<C> {
    a: C,
    b: C,
    weight: f64,
}

impl<C: Eq + Hash> Default for WeightTable<C> {
    fn default() -> Self {
        WeightTable {
            weights: FxHashMap::default(),
        }
    }
}

impl<C: Eq + Hash + Clone> WeightTable<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight for the ordered pair `(a, b)`.
    pub fn insert(&mut self, a: C, b: C, weight: f64) -> Result<()> {
        check_weight(weight)?;
        self.weights.entry(a).or_default().insert(b, weight);
        Ok(())
    }

    /// Builder-style setter for a symmetric pair.
    pub fn with_pair(mut self, a: C, b: C, weight: f64) -> Result<Self> {
        self.insert(a.clone(), b.clone(), weight)?;
        self.insert(b, a, weight)?;
        Ok(self)
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.weights.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: Eq + Hash + Clone + DeserializeOwned> WeightTable<C> {
    /// Parse a symmetric table from a JSON list of `{"a", "b", "weight"}` entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<WeightEntry<C>> = serde_json::from_str(json)?;
        debug!("loaded {} weight table entries", entries.len());
        let mut table = WeightTable::new();
        for e in entries {
            table = table.with_pair(e.a, e.b, e.weight)?;
        }
        Ok(table)
    }
}

impl<C: Eq + Hash> PairwiseWeighting<C> for WeightTable<C> {
    fn weight(&self, a: &C, b: &C) -> f64 {
        match self.weights.get(a).and_then(|m| m.get(b)) {
            Some(w) => *w,
            None if a == b => 1.0,
            None => 0.0,
        }
    }
}

fn check_weight(weight: f64) -> Result<()> {
    if weight.is_finite() && (0.0..=1.0).contains(&weight) {
        Ok(())
    } else {
        Err(AgreementError::InvalidWeight { weight })
    }
}

/// Dense category-by-category weights, resolved once per computation.
///
/// Rows and columns follow the category index order.
pub(crate) struct WeightMatrix {
    weights: Array2<f64>,
}

impl WeightMatrix {
    /// Evaluate a weighting over every ordered category pair.
    pub fn resolve<C, W>(categories: &CategoryIndex<C>, weighting: &W) -> Result<WeightMatrix>
    where
        C: Eq + Hash + Clone,
        W: PairwiseWeighting<C> + ?Sized,
    {
        let q = categories.len();
        let mut weights: Array2<f64> = Array2::zeros((q, q));
        for (k, ck) in categories.iter().enumerate() {
            for (l, cl) in categories.iter().enumerate() {
                let w = weighting.weight(ck, cl);
                check_weight(w)?;
                weights[[k, l]] = w;
            }
        }
        trace!("resolved {}x{} weight matrix", q, q);
        Ok(WeightMatrix { weights })
    }

    /// Weights of category `k` against every category.
    pub fn row(&self, k: usize) -> ArrayView1<'_, f64> {
        self.weights.row(k)
    }

    pub fn get(&self, k: usize, l: usize) -> f64 {
        self.weights[[k, l]]
    }

    /// Sum of weights over all ordered pairs.
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_equality() {
        assert_eq!(IdentityWeighting.weight("a", "a"), 1.0);
        assert_eq!(IdentityWeighting.weight("a", "b"), 0.0);
        assert_eq!(IdentityWeighting.weight(&3, &3), 1.0);
    }

    #[test]
    fn closures_are_weightings() {
        let half = |_a: &u8, _b: &u8| 0.5;
        assert_eq!(half.weight(&1, &2), 0.5);
    }

    #[test]
    fn table_defaults_to_identity() {
        let table = WeightTable::new()
            .with_pair("good", "great", 0.5)
            .expect("valid weight");
        assert_eq!(table.weight(&"good", &"great"), 0.5);
        assert_eq!(table.weight(&"great", &"good"), 0.5);
        assert_eq!(table.weight(&"good", &"good"), 1.0);
        assert_eq!(table.weight(&"good", &"bad"), 0.0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn table_rejects_out_of_range() {
        let err = WeightTable::new().with_pair("a", "b", 1.5).unwrap_err();
        assert!(matches!(err, AgreementError::InvalidWeight { .. }));
        let err = WeightTable::new().with_pair("a", "b", f64::NAN).unwrap_err();
        assert!(matches!(err, AgreementError::InvalidWeight { .. }));
    }

    #[test]
    fn table_from_json() {
        let table: WeightTable<String> =
            WeightTable::from_json(r#"[{"a": "good", "b": "great", "weight": 0.25}]"#)
                .expect("valid table");
        assert_eq!(table.weight(&"great".to_string(), &"good".to_string()), 0.25);

        let err = WeightTable::<String>::from_json("[{\"a\": 1}]").unwrap_err();
        assert!(matches!(err, AgreementError::Json(_)));
    }

    #[test]
    fn resolve_matrix() {
        let rows = vec![vec![Some("x"), Some("y")], vec![Some("z"), None]];
        let index = CategoryIndex::from_rows(&rows);
        let wm = WeightMatrix::resolve(&index, &IdentityWeighting).expect("valid weights");
        assert_eq!(wm.total(), 3.0);
        assert_eq!(wm.get(0, 0), 1.0);
        assert_eq!(wm.get(0, 1), 0.0);
        assert_eq!(wm.row(2).to_vec(), vec![0.0, 0.0, 1.0]);

        let bad = |_a: &&str, _b: &&str| -0.1;
        assert!(WeightMatrix::resolve(&index, &bad).is_err());
    }
}
