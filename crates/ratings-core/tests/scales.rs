// File: crates/ratings-core/tests/scales.rs
// Purpose: Scale mapper endpoints, inversion, monotonicity and degenerate domains.

use proptest::prelude::*;
use ratings_core::types::PixelRange;
use ratings_core::{build_scales, AxisBounds, AxisId, ChartConfig, ChartError, LinearScale, ScaleTransform};

const EPS: f64 = 1e-9;

fn stock_bounds() -> AxisBounds {
    AxisBounds { x_min: 2010.0, x_max: 2012.0, y_min: 0.0, y_max: 5.05 }
}

#[test]
fn endpoints_hit_pixel_ranges() {
    let b = stock_bounds();
    let s = build_scales(&b, &ChartConfig::default()).unwrap();
    assert!((s.x.map(b.x_min) - 55.0).abs() < EPS);
    assert!((s.x.map(b.x_max + 1.0) - 850.0).abs() < EPS);
    assert!((s.y.map(b.y_max + 1.0) - 50.0).abs() < EPS);
    assert!((s.y.map(b.y_min - 0.05) - 450.0).abs() < EPS);
}

#[test]
fn extrapolates_without_clamping() {
    let s = LinearScale::new(AxisId::X, (0.0, 10.0), PixelRange::new(0.0, 100.0)).unwrap();
    assert!((s.map(20.0) - 200.0).abs() < EPS);
    assert!((s.map(-5.0) + 50.0).abs() < EPS);
    assert!((s.invert(250.0) - 25.0).abs() < EPS);
}

#[test]
fn degenerate_domain_is_an_error() {
    let err = LinearScale::new(AxisId::Y, (3.0, 3.0), PixelRange::new(50.0, 450.0)).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateDomain { axis: AxisId::Y, .. }));

    let err = LinearScale::new(AxisId::X, (f64::NAN, 1.0), PixelRange::new(0.0, 1.0)).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateDomain { axis: AxisId::X, .. }));
}

#[test]
fn zero_padding_with_one_year_degenerates() {
    let mut cfg = ChartConfig::default();
    cfg.padding.x_right = 0.0;
    let b = AxisBounds { x_min: 2015.0, x_max: 2015.0, y_min: 0.0, y_max: 2.0 };
    assert!(matches!(build_scales(&b, &cfg), Err(ChartError::DegenerateDomain { axis: AxisId::X, .. })));
}

#[test]
fn ticks_are_round_and_inside_domain() {
    let s = build_scales(&stock_bounds(), &ChartConfig::default()).unwrap();
    let xt = s.x.ticks(10);
    assert!(!xt.is_empty());
    assert!(xt.iter().all(|t| (2010.0..=2013.0).contains(t)));
    assert_eq!(s.x.tick_label(2010.0, 10), "2,010.0");

    // Inverted y domain yields descending ticks: 6, 5, ..., 0.
    let yt = s.y.ticks(10);
    assert_eq!(yt.first().copied(), Some(6.0));
    assert_eq!(yt.last().copied(), Some(0.0));
    assert_eq!(s.y.tick_label(3.0, 10), "3.0");
}

proptest! {
    #[test]
    fn scales_are_monotonic(a in -1.0e4f64..1.0e4, delta in 1.0e-3f64..1.0e3) {
        let s = build_scales(&stock_bounds(), &ChartConfig::default()).unwrap();
        let b = a + delta;
        prop_assert!(s.x.map(a) < s.x.map(b));
        prop_assert!(s.y.map(a) > s.y.map(b));
    }

    #[test]
    fn invert_undoes_map(v in -1.0e3f64..1.0e3) {
        let s = build_scales(&stock_bounds(), &ChartConfig::default()).unwrap();
        prop_assert!((s.x.invert(s.x.map(v)) - v).abs() < 1e-6);
        prop_assert!((s.y.invert(s.y.map(v)) - v).abs() < 1e-6);
    }
}
