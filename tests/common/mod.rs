// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Shared rating fixtures.
#![allow(dead_code)]

use std::str::FromStr;

use iaa_accel::{OrderedFloat, RatingMatrix};

/// Parse a tab-separated reliability table; `.` marks a missing rating.
///
/// The first line is the header and the first column the unit label, both
/// of which are skipped.
pub fn parse_table<T: FromStr>(text: &str) -> Vec<Vec<Option<T>>> {
    text.trim()
        .lines()
        .skip(1)
        .map(|line| {
            line.split('\t')
                .skip(1)
                .map(|v| match v.trim() {
                    "." => None,
                    v => v.parse().ok(),
                })
                .collect()
        })
        .collect()
}

pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}

/// K. L. Gwet, "On Krippendorff's Alpha Coefficient", 2015, p. 16.
pub fn gwet_2015() -> RatingMatrix<u8> {
    let data = "
Unit	A	B	C	D
1	1	1	.	1
2	2	2	3	2
3	3	3	3	3
4	3	3	3	3
5	2	2	2	2
6	1	2	3	4
7	4	4	4	4
8	1	1	2	1
9	2	2	2	2
10	.	5	5	5
11	.	.	1	1
12	.	.	3	.
";
    RatingMatrix::new(parse_table(data)).expect("valid fixture")
}

/// Hayes, A. F., & Krippendorff, K. (2007). Answering the Call for a
/// Standard Reliability Measure for Coding Data.
pub fn hayes_krippendorff_2007() -> RatingMatrix<OrderedFloat<f64>> {
    let data = "
Unit	obs1	obs2	obs3	obs4	obs5
1	1	1	2	.	2
2	1	1	0	1	.
3	2	3	3	3	.
4	.	0	0	.	0
5	0	0	0	.	0
6	0	0	0	.	0
7	1	0	2	.	1
8	1	.	2	0	.
9	2	2	2	.	2
10	2	1	1	1	.
11	.	1	0	0	.
12	0	0	0	0	.
13	1	2	2	2	.
14	3	3	2	2	3
15	1	1	1	.	1
16	1	1	1	.	1
17	2	1	2	.	2
18	1	2	3	3	.
19	1	1	0	1	.
20	0	0	0	.	0
21	0	0	1	1	.
22	0	0	.	0	0
23	2	3	3	3	.
24	0	0	0	0	.
25	1	2	.	2	2
26	0	1	1	1	.
27	0	0	0	1	0
28	1	2	1	2	.
29	1	1	2	2	.
30	1	1	2	.	2
31	1	1	0	.	0
32	2	1	2	1	.
33	2	2	.	2	2
34	3	2	2	2	.
35	2	2	2	.	2
36	2	2	3	.	2
37	2	2	2	.	2
38	2	2	.	1	2
39	2	2	2	2	.
40	1	1	1	.	1
";
    let rows: Vec<Vec<Option<f64>>> = parse_table(data);
    let rows = rows
        .into_iter()
        .map(|r| r.into_iter().map(|v| v.map(OrderedFloat)).collect())
        .collect();
    RatingMatrix::new(rows).expect("valid fixture")
}
