// File: crates/ratings-core/tests/common/mod.rs
// Purpose: Shared dataset builders for the integration tests.

#![allow(dead_code)]

use ratings_core::Dataset;

pub const HEADERS: [&str; 6] =
    ["Season", "Year", "Episodes", "Avg. Viewers (mil)", "Most watched episode", "Viewers (mil)"];

/// Rows of (year, avg viewers) with filler display fields.
pub fn seasons(points: &[(&str, &str)]) -> Dataset {
    let records = points.iter().enumerate().map(|(i, (year, avg))| {
        vec![
            (i + 1).to_string(),
            year.to_string(),
            "13".to_string(),
            avg.to_string(),
            format!("\"Episode {}\"", i + 1),
            "1234567".to_string(),
        ]
    });
    Dataset::from_records(HEADERS, records).expect("well-formed records")
}
