// File: crates/ratings-core/src/config.rs
// Summary: Chart configuration (fields, pixel ranges, paddings, styling) with TOML loading.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::data::Column;
use crate::error::{ChartError, Result};
use crate::types::{PixelRange, BAR_WIDTH, BASELINE_Y, FIELD_AVG_VIEWERS, FIELD_YEAR, HEIGHT, WIDTH};

/// Upper bound on `axes.tick_count`; tick generation allocates per tick.
pub const MAX_TICK_COUNT: usize = 100;

/// Everything the pipeline used to hardcode. Every field has a default, so a
/// TOML file only needs to name what it changes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Column plotted along x (a year-like number).
    pub x_field: String,
    /// Column plotted along y (the average value).
    pub y_field: String,
    pub x_range: PixelRange,
    pub y_range: PixelRange,
    pub padding: Padding,
    pub rounding: Rounding,
    pub bar: BarLayout,
    pub axes: AxisLayout,
    pub average: AverageLine,
    pub tooltip: TooltipTiming,
    pub labels: AxisLabels,
    /// Theme preset name, see [`crate::theme::find`].
    pub theme: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            x_field: FIELD_YEAR.to_string(),
            y_field: FIELD_AVG_VIEWERS.to_string(),
            x_range: PixelRange::new(55.0, 850.0),
            y_range: PixelRange::new(50.0, BASELINE_Y),
            padding: Padding::default(),
            rounding: Rounding::default(),
            bar: BarLayout::default(),
            axes: AxisLayout::default(),
            average: AverageLine::default(),
            tooltip: TooltipTiming::default(),
            labels: AxisLabels::default(),
            theme: "classic".to_string(),
        }
    }
}

/// Domain padding added around the data bounds.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Padding {
    /// Added to x max so the rightmost bar is not clipped.
    pub x_right: f64,
    /// Added above y max.
    pub y_top: f64,
    /// Subtracted below y min.
    pub y_bottom: f64,
}

impl Default for Padding {
    fn default() -> Self { Self { x_right: 1.0, y_top: 1.0, y_bottom: 0.05 } }
}

/// Grid steps the bounds snap to.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rounding {
    pub x_step: f64,
    pub y_step: f64,
}

impl Default for Rounding {
    fn default() -> Self { Self { x_step: 0.1, y_step: 0.05 } }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarLayout {
    pub width: f64,
    /// Pixel-y where bars end. Keep equal to `y_range.end`.
    pub baseline: f64,
    pub label_font_px: f64,
}

impl Default for BarLayout {
    fn default() -> Self { Self { width: BAR_WIDTH, baseline: BASELINE_Y, label_font_px: 13.0 } }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxisLayout {
    /// Pixel-y of the bottom axis line.
    pub x_axis_y: f64,
    /// Pixel-x of the left axis line.
    pub y_axis_x: f64,
    pub tick_count: usize,
    pub tick_size: f64,
    pub tick_font_px: f64,
}

impl Default for AxisLayout {
    fn default() -> Self {
        Self { x_axis_y: BASELINE_Y, y_axis_x: 50.0, tick_count: 10, tick_size: 6.0, tick_font_px: 10.0 }
    }
}

/// How the mean line finds its pixel-y.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AveragePlacement {
    /// `y = mean * multiplier`. Only lines up with the bars for the stock
    /// ranges and a dataset topping out near 20.
    Empirical {
        #[serde(default = "default_multiplier")]
        multiplier: f64,
    },
    /// `y = y_scale(mean)`.
    Scale,
}

fn default_multiplier() -> f64 { 19.0 }

impl Default for AveragePlacement {
    fn default() -> Self { AveragePlacement::Empirical { multiplier: default_multiplier() } }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AverageLine {
    pub placement: AveragePlacement,
    pub x_start: f64,
    pub x_end: f64,
    pub stroke_width: f64,
    pub dash: [f64; 2],
    /// Pixel-x of the mean label; it sits 2px above the line.
    pub label_x: f64,
    pub label_font_px: f64,
}

impl Default for AverageLine {
    fn default() -> Self {
        Self {
            placement: AveragePlacement::default(),
            x_start: 50.0,
            x_end: 850.0,
            stroke_width: 2.0,
            dash: [4.0, 3.0],
            label_x: 55.0,
            label_font_px: 13.333,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TooltipTiming {
    pub fade_in_ms: f64,
    pub fade_out_ms: f64,
    /// Opacity reached after the fade-in.
    pub opacity: f64,
    /// Vertical offset from the pointer to the panel's top edge.
    pub offset_y: f64,
}

impl Default for TooltipTiming {
    fn default() -> Self { Self { fade_in_ms: 200.0, fade_out_ms: 500.0, opacity: 0.9, offset_y: -28.0 } }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
    pub font_px: f64,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self { x: "Year".to_string(), y: "Avg. Viewers (in millions)".to_string(), font_px: 14.667 }
    }
}

impl ChartConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(text).map_err(|e| ChartError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
    }

    fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        let mut fields = vec![
            ("x_range.start", self.x_range.start),
            ("x_range.end", self.x_range.end),
            ("y_range.start", self.y_range.start),
            ("y_range.end", self.y_range.end),
            ("padding.x_right", self.padding.x_right),
            ("padding.y_top", self.padding.y_top),
            ("padding.y_bottom", self.padding.y_bottom),
            ("rounding.x_step", self.rounding.x_step),
            ("rounding.y_step", self.rounding.y_step),
            ("bar.width", self.bar.width),
            ("bar.baseline", self.bar.baseline),
            ("bar.label_font_px", self.bar.label_font_px),
            ("axes.x_axis_y", self.axes.x_axis_y),
            ("axes.y_axis_x", self.axes.y_axis_x),
            ("axes.tick_size", self.axes.tick_size),
            ("axes.tick_font_px", self.axes.tick_font_px),
            ("average.x_start", self.average.x_start),
            ("average.x_end", self.average.x_end),
            ("average.stroke_width", self.average.stroke_width),
            ("average.dash", self.average.dash[0]),
            ("average.dash", self.average.dash[1]),
            ("average.label_x", self.average.label_x),
            ("average.label_font_px", self.average.label_font_px),
            ("tooltip.fade_in_ms", self.tooltip.fade_in_ms),
            ("tooltip.fade_out_ms", self.tooltip.fade_out_ms),
            ("tooltip.opacity", self.tooltip.opacity),
            ("tooltip.offset_y", self.tooltip.offset_y),
            ("labels.font_px", self.labels.font_px),
        ];
        if let AveragePlacement::Empirical { multiplier } = self.average.placement {
            fields.push(("average.placement.multiplier", multiplier));
        }
        fields
    }

    pub fn x_column(&self) -> Column { Column::new(self.x_field.clone()) }
    pub fn y_column(&self) -> Column { Column::new(self.y_field.clone()) }

    /// Reject values the pipeline cannot work with; warn about fragile but legal ones.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::Config("surface size must be non-zero".into()));
        }
        if let Some((name, value)) = self.numeric_fields().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ChartError::Config(format!("{name} must be finite, got {value}")));
        }
        if !(self.rounding.x_step > 0.0 && self.rounding.y_step > 0.0) {
            return Err(ChartError::Config("rounding steps must be positive".into()));
        }
        if !(self.bar.width > 0.0) {
            return Err(ChartError::Config("bar width must be positive".into()));
        }
        if self.tooltip.fade_in_ms < 0.0 || self.tooltip.fade_out_ms < 0.0 {
            return Err(ChartError::Config("tooltip fade durations must be non-negative".into()));
        }
        if !(0.0..=1.0).contains(&self.tooltip.opacity) {
            return Err(ChartError::Config(format!(
                "tooltip.opacity must be within [0, 1], got {}",
                self.tooltip.opacity
            )));
        }
        let fonts = [
            ("bar.label_font_px", self.bar.label_font_px),
            ("axes.tick_font_px", self.axes.tick_font_px),
            ("average.label_font_px", self.average.label_font_px),
            ("labels.font_px", self.labels.font_px),
        ];
        if let Some((name, _)) = fonts.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ChartError::Config(format!("{name} must be positive")));
        }
        if self.average.stroke_width < 0.0 || self.axes.tick_size < 0.0 {
            return Err(ChartError::Config("stroke widths and tick sizes must be non-negative".into()));
        }
        if self.average.dash.iter().any(|d| *d < 0.0) {
            return Err(ChartError::Config("average.dash entries must be non-negative".into()));
        }
        if !(1..=MAX_TICK_COUNT).contains(&self.axes.tick_count) {
            return Err(ChartError::Config(format!(
                "axes.tick_count must be within 1..={MAX_TICK_COUNT}, got {}",
                self.axes.tick_count
            )));
        }
        if (self.bar.baseline - self.y_range.end).abs() > f64::EPSILON {
            warn!(
                baseline = self.bar.baseline,
                y_range_end = self.y_range.end,
                "bar baseline differs from the y pixel range end; bars will not meet the axis"
            );
        }
        if let AveragePlacement::Empirical { multiplier } = self.average.placement {
            if self.y_range != PixelRange::new(50.0, BASELINE_Y) {
                warn!(multiplier, "empirical average placement with a custom y range; consider mode = \"scale\"");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = ChartConfig::from_toml_str(
            r#"
            theme = "dark"
            [average.placement]
            mode = "scale"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.theme, "dark");
        assert_eq!(cfg.average.placement, AveragePlacement::Scale);
        assert_eq!(cfg.x_range, PixelRange::new(55.0, 850.0));
        assert_eq!(cfg.bar.width, 25.0);
    }

    #[test]
    fn rejects_zero_step() {
        let err = ChartConfig::from_toml_str("[rounding]\ny_step = 0.0\n").unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }

    #[test]
    fn rejects_non_finite_fades() {
        for text in ["[tooltip]\nfade_in_ms = nan\n", "[tooltip]\nfade_out_ms = inf\n"] {
            let err = ChartConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, ChartError::Config(ref m) if m.contains("finite")), "{text}: {err}");
        }
    }

    #[test]
    fn rejects_non_finite_multiplier() {
        let err = ChartConfig::from_toml_str("[average.placement]\nmode = \"empirical\"\nmultiplier = -inf\n")
            .unwrap_err();
        assert!(matches!(err, ChartError::Config(ref m) if m.contains("multiplier")));
    }

    #[test]
    fn rejects_non_finite_stroke_width() {
        assert!(ChartConfig::from_toml_str("[average]\nstroke_width = nan\n").is_err());
        assert!(ChartConfig::from_toml_str("[average]\nstroke_width = -1.0\n").is_err());
    }

    #[test]
    fn tooltip_opacity_must_be_a_fraction() {
        assert!(ChartConfig::from_toml_str("[tooltip]\nopacity = 1.5\n").is_err());
        assert!(ChartConfig::from_toml_str("[tooltip]\nopacity = -0.1\n").is_err());
        assert!(ChartConfig::from_toml_str("[tooltip]\nopacity = 1.0\n").is_ok());
    }

    #[test]
    fn font_sizes_must_be_positive() {
        for text in [
            "[bar]\nlabel_font_px = 0.0\n",
            "[axes]\ntick_font_px = -3.0\n",
            "[average]\nlabel_font_px = 0.0\n",
            "[labels]\nfont_px = 0.0\n",
        ] {
            assert!(ChartConfig::from_toml_str(text).is_err(), "{text}");
        }
    }

    #[test]
    fn tick_count_is_bounded() {
        assert!(ChartConfig::from_toml_str("[axes]\ntick_count = 0\n").is_err());
        assert!(ChartConfig::from_toml_str("[axes]\ntick_count = 1000000\n").is_err());
        let cfg = ChartConfig::from_toml_str("[axes]\ntick_count = 100\n").unwrap();
        assert_eq!(cfg.axes.tick_count, MAX_TICK_COUNT);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(ChartConfig::from_toml_str("colour = \"red\"\n").is_err());
    }
}
