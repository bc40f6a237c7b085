// File: crates/ratings-core/src/bounds.rs
// Summary: Range finder; one pass over the dataset yielding rounded axis bounds.

use tracing::debug;

use crate::config::Rounding;
use crate::data::{Dataset, NumericField};
use crate::error::{ChartError, Result};

/// Rounded data extremes for both axes.
/// Contract: `x_min <= x_max`, `y_min <= y_max`, `y_min == 0` for non-negative data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Scan `dataset` once for the min/max of `x` and the max of `y`.
///
/// x bounds snap half-up to `rounding.x_step`. The y floor is always zero.
/// The y cap snaps to the next `rounding.y_step` above the tallest value, so a
/// maximum already on the grid still gets one step of headroom.
pub fn compute_bounds(
    dataset: &Dataset,
    x: &dyn NumericField,
    y: &dyn NumericField,
    rounding: &Rounding,
) -> Result<AxisBounds> {
    if dataset.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (i, row) in dataset.rows().iter().enumerate() {
        let xv = x.value(row, i)?;
        let yv = y.value(row, i)?;
        x_min = x_min.min(xv);
        x_max = x_max.max(xv);
        y_max = y_max.max(yv);
    }

    let bounds = AxisBounds {
        x_min: round_half_up(x_min, rounding.x_step),
        x_max: round_half_up(x_max, rounding.x_step),
        y_min: ceil_to_step(0.0, rounding.y_step),
        y_max: step_above(y_max, rounding.y_step).max(0.0),
    };
    debug!(?bounds, rows = dataset.len(), x = x.name(), y = y.name(), "computed axis bounds");
    Ok(bounds)
}

/// Round to the nearest multiple of `step`, ties toward +infinity.
pub fn round_half_up(v: f64, step: f64) -> f64 {
    let n = (snap(v / step) + 0.5).floor();
    fix_precision(n * step, step)
}

/// Smallest multiple of `step` that is `>= v`.
pub fn ceil_to_step(v: f64, step: f64) -> f64 {
    let n = snap(v / step).ceil();
    fix_precision(n * step, step)
}

/// Smallest multiple of `step` that is strictly `> v`.
pub fn step_above(v: f64, step: f64) -> f64 {
    let n = snap(v / step).floor() + 1.0;
    fix_precision(n * step, step)
}

// Removes binary noise such as 3.4 / 0.05 = 67.99999999999999 before floor/ceil,
// snapping to the nearest half so ties are still recognised as ties.
fn snap(q: f64) -> f64 {
    let r = (q * 2.0).round() / 2.0;
    if (q - r).abs() < 1e-9 { r } else { q }
}

// Trims the product back to the step's decimal precision (0.05 -> 2 places).
fn fix_precision(v: f64, step: f64) -> f64 {
    let decimals = decimals_of(step);
    let p = 10f64.powi(decimals);
    let out = (v * p).round() / p;
    if out == 0.0 { 0.0 } else { out }
}

fn decimals_of(step: f64) -> i32 {
    let mut d = 0;
    let mut s = step;
    while d < 10 && (s - s.round()).abs() > 1e-9 {
        s *= 10.0;
        d += 1;
    }
    d
}
