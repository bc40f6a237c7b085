// File: crates/ratings-core/tests/bounds.rs
// Purpose: Range finder rounding, zero floor and failure modes.

mod common;

use proptest::prelude::*;
use ratings_core::config::Rounding;
use ratings_core::{compute_bounds, AxisBounds, ChartError, Column};

fn bounds_of(points: &[(&str, &str)]) -> Result<AxisBounds, ChartError> {
    let ds = common::seasons(points);
    compute_bounds(&ds, &Column::new("Year"), &Column::new("Avg. Viewers (mil)"), &Rounding::default())
}

#[test]
fn two_seasons_end_to_end() {
    let b = bounds_of(&[("2010", "3.5"), ("2012", "5.0")]).unwrap();
    assert_eq!(b, AxisBounds { x_min: 2010.0, x_max: 2012.0, y_min: 0.0, y_max: 5.05 });
}

#[test]
fn y_max_rounds_up_to_grid() {
    let b = bounds_of(&[("2010", "2.1"), ("2011", "3.42"), ("2012", "1.0")]).unwrap();
    assert_eq!(b.y_max, 3.45);
    assert_eq!(b.y_min, 0.0);
}

#[test]
fn x_rounds_half_up_to_tenths() {
    let b = bounds_of(&[("2010.05", "1"), ("2011.94", "1")]).unwrap();
    assert_eq!(b.x_min, 2010.1);
    assert_eq!(b.x_max, 2011.9);
}

#[test]
fn single_row_is_fine() {
    let b = bounds_of(&[("2015", "7.25")]).unwrap();
    assert_eq!(b.x_min, b.x_max);
    assert!(b.y_max >= 7.25);
}

#[test]
fn non_numeric_value_fails_fast() {
    let err = bounds_of(&[("2010", "3.5"), ("twenty", "4.0")]).unwrap_err();
    match err {
        ChartError::InvalidData { row, field, value } => {
            assert_eq!(row, 1);
            assert_eq!(field, "Year");
            assert_eq!(value, "twenty");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_dataset_is_rejected() {
    assert!(matches!(bounds_of(&[]), Err(ChartError::EmptyDataset)));
}

proptest! {
    #[test]
    fn bounds_are_ordered_and_cover_y(
        rows in prop::collection::vec((1950u32..2050, 0u32..5000), 1..24)
    ) {
        let text: Vec<(String, String)> = rows
            .iter()
            .map(|(y, v)| (y.to_string(), format!("{:.2}", *v as f64 / 100.0)))
            .collect();
        let refs: Vec<(&str, &str)> = text.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
        let b = bounds_of(&refs).unwrap();

        prop_assert!(b.x_min <= b.x_max);
        prop_assert!(0.0 <= b.y_max);
        prop_assert_eq!(b.y_min, 0.0);
        for (_, v) in &text {
            prop_assert!(b.y_max >= v.parse::<f64>().unwrap());
        }
    }
}
