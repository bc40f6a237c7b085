// File: crates/ratings-core/src/scale.rs
// Summary: Linear domain-to-pixel scales and the scale mapper that builds them from bounds.

use tracing::debug;

use crate::bounds::AxisBounds;
use crate::config::ChartConfig;
use crate::error::{AxisId, ChartError, Result};
use crate::format::format_fixed;
use crate::grid;
use crate::types::PixelRange;

/// Data value (e.g. a year or a viewer count).
pub type Value = f64;
/// Surface coordinate in pixels.
pub type Pixel = f64;

/// General scale transform operations shared by both chart axes.
pub trait ScaleTransform {
    fn to_px(&self, v: Value) -> Pixel;
    fn from_px(&self, px: Pixel) -> Value;
    /// Domain endpoints in construction order.
    fn domain(&self) -> (Value, Value);
    /// Pixel endpoints in construction order.
    fn range(&self) -> (Pixel, Pixel);
    /// Round values to draw ticks at.
    fn ticks(&self, count: usize) -> Vec<Value>;
    /// Label text for a tick produced by `ticks(count)`.
    fn tick_label(&self, v: Value, count: usize) -> String;
}

/// Unclamped linear interpolation from `[d0, d1]` onto `[r0, r1]`.
/// Values outside the domain extrapolate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: Value,
    d1: Value,
    r0: Pixel,
    r1: Pixel,
}

impl LinearScale {
    /// Fails with `DegenerateDomain` when `d0 == d1` or either endpoint is not finite.
    pub fn new(axis: AxisId, domain: (Value, Value), range: PixelRange) -> Result<Self> {
        let (d0, d1) = domain;
        if !d0.is_finite() || !d1.is_finite() || d0 == d1 {
            return Err(ChartError::DegenerateDomain { axis, lo: d0, hi: d1 });
        }
        Ok(Self { d0, d1, r0: range.start, r1: range.end })
    }

    #[inline]
    pub fn map(&self, v: Value) -> Pixel {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    #[inline]
    pub fn invert(&self, px: Pixel) -> Value {
        if self.r1 == self.r0 { return self.d0; }
        self.d0 + (px - self.r0) / (self.r1 - self.r0) * (self.d1 - self.d0)
    }
}

impl ScaleTransform for LinearScale {
    fn to_px(&self, v: Value) -> Pixel { self.map(v) }
    fn from_px(&self, px: Pixel) -> Value { self.invert(px) }
    fn domain(&self) -> (Value, Value) { (self.d0, self.d1) }
    fn range(&self) -> (Pixel, Pixel) { (self.r0, self.r1) }

    fn ticks(&self, count: usize) -> Vec<Value> {
        grid::ticks(self.d0, self.d1, count)
    }

    fn tick_label(&self, v: Value, count: usize) -> String {
        let precision = grid::precision_for_step(grid::tick_step(self.d0, self.d1, count));
        format_fixed(v, precision)
    }
}

/// The pair of scales every stage of the renderer shares.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
}

/// Build both scales from bounds.
///
/// x: `[x_min, x_max + pad]` → `x_range`.
/// y: `[y_max + pad_top, y_min - pad_bottom]` → `y_range`; larger values map to smaller pixel y.
pub fn build_scales(bounds: &AxisBounds, cfg: &ChartConfig) -> Result<Scales> {
    let x = LinearScale::new(
        AxisId::X,
        (bounds.x_min, bounds.x_max + cfg.padding.x_right),
        cfg.x_range,
    )?;
    let y = LinearScale::new(
        AxisId::Y,
        (bounds.y_max + cfg.padding.y_top, bounds.y_min - cfg.padding.y_bottom),
        cfg.y_range,
    )?;
    debug!(x_domain = ?x.domain(), y_domain = ?y.domain(), "built scales");
    Ok(Scales { x, y })
}
