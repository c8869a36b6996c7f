// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Malformed and degenerate inputs surface as classified errors.

use iaa_accel::{
    build_coincidence_table, calculate_agreement, calculate_agreement_default,
    estimate_agreement, AgreementError, IdentityWeighting, RatingMatrix,
};

#[test]
fn malformed_inputs_fail_before_arithmetic() {
    let cases: Vec<Vec<Vec<Option<u8>>>> = vec![
        vec![],
        vec![vec![], vec![]],
        vec![vec![Some(1), Some(2)], vec![Some(1)]],
        vec![vec![Some(1), Some(2)], vec![None, None]],
    ];
    for rows in cases {
        let err = RatingMatrix::new(rows).unwrap_err();
        assert!(err.is_malformed(), "{err} should be malformed input");
        assert!(!err.is_degenerate());
    }
}

#[test]
fn degenerate_inputs_are_insufficient_data() {
    let cases = vec![
        // every item has a single rating
        vec![vec![Some(1), None], vec![None, Some(2)]],
        // only one category
        vec![vec![Some(1), Some(1)], vec![Some(1), Some(1)]],
        // second category only on a single-annotation item
        vec![vec![Some(1), Some(1)], vec![None, Some(2)]],
    ];
    for rows in cases {
        let m = RatingMatrix::new(rows).expect("well-formed matrix");
        let err = calculate_agreement_default(&m).unwrap_err();
        assert!(err.is_degenerate(), "{err} should be degenerate");
        assert!(err
            .to_string()
            .starts_with("insufficient data for agreement calculation"));
    }
}

#[test]
fn weights_outside_unit_interval() {
    let m = RatingMatrix::new(vec![vec![Some(1), Some(2)], vec![Some(2), Some(2)]])
        .expect("valid matrix");
    let nan = |_a: &i32, _b: &i32| f64::NAN;
    let err = calculate_agreement(&m, &nan).unwrap_err();
    assert!(matches!(err, AgreementError::InvalidWeight { .. }));
    assert!(err.is_malformed());
}

#[test]
fn no_nan_leaks_from_valid_input() {
    let m = RatingMatrix::new(vec![
        vec![Some(true), Some(false), None],
        vec![Some(true), Some(true), Some(true)],
        vec![None, Some(false), None],
    ])
    .expect("valid matrix");
    let stats = calculate_agreement_default(&m).expect("agreement");
    assert!(stats.percent_agreement.is_finite());
    assert!(stats.kripp_alpha.is_finite());
    assert!(stats.ac2.is_finite());
}

#[test]
fn constant_weighting_saturates_chance_agreement() {
    // every pair counts as full agreement, so krippendorff's pe reaches 1
    let m = RatingMatrix::new(vec![
        vec![Some(1), Some(2)],
        vec![Some(1), Some(1)],
        vec![Some(2), Some(2)],
    ])
    .expect("valid matrix");
    let ones = |_a: &i32, _b: &i32| 1.0;
    let err = calculate_agreement(&m, &ones).unwrap_err();
    assert!(matches!(
        err,
        AgreementError::PerfectChanceAgreement {
            statistic: "krippendorff's alpha"
        }
    ));
    assert!(err.is_degenerate());
}

#[test]
fn table_from_another_matrix_is_rejected() {
    let a = RatingMatrix::new(vec![vec![Some(1), Some(2)], vec![Some(1), Some(1)]])
        .expect("valid matrix");
    let b = RatingMatrix::new(vec![vec![Some(1), Some(2)], vec![Some(3), Some(3)]])
        .expect("valid matrix");
    let c = RatingMatrix::new(vec![
        vec![Some(1), Some(2)],
        vec![Some(1), Some(1)],
        vec![Some(2), Some(2)],
    ])
    .expect("valid matrix");
    let (_, cats_a) = build_coincidence_table(&a);
    let (table_b, _) = build_coincidence_table(&b);
    let (table_c, cats_c) = build_coincidence_table(&c);

    let err = estimate_agreement(&a, &table_b, &cats_a, &IdentityWeighting).unwrap_err();
    assert!(matches!(
        err,
        AgreementError::TableMismatch {
            what: "category count",
            expected: 2,
            found: 3
        }
    ));
    assert!(err.is_malformed());

    let err = estimate_agreement(&a, &table_c, &cats_c, &IdentityWeighting).unwrap_err();
    assert!(matches!(
        err,
        AgreementError::TableMismatch {
            what: "item count",
            expected: 2,
            found: 3
        }
    ));
}
