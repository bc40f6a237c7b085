// File: crates/ratings-core/src/chart.rs
// Summary: BarChart context (dataset, bounds, scales) and the scene-building renderer.

use tracing::debug;

use crate::axis::{Axis, Orientation};
use crate::bounds::{compute_bounds, AxisBounds};
use crate::config::{AveragePlacement, ChartConfig};
use crate::data::{mean, Dataset, NumericField};
use crate::error::Result;
use crate::format::format_one_decimal;
use crate::scale::{build_scales, Scales};
use crate::scene::{Line, Primitive, Rect, Scene, Stroke, Text, TextAnchor};
use crate::theme::{self, Theme};
use crate::tooltip::{Tooltip, TooltipContent};
use crate::types::Point;

/// Screen placement of one row.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    /// Row index in the dataset.
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    /// `baseline - y`.
    pub height: f64,
    pub value: f64,
    /// Raw y field text, shown above the bar.
    pub label: String,
}

impl Bar {
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let (top, bottom) = if self.height >= 0.0 { (self.y, self.y + self.height) } else { (self.y + self.height, self.y) };
        px >= self.x && px <= self.x + self.width && py >= top && py <= bottom
    }
}

/// The dashed mean reference line.
#[derive(Clone, Debug, PartialEq)]
pub struct AverageMarker {
    pub mean: f64,
    /// Pixel-y of the line.
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
    /// Mean rounded to one decimal.
    pub label: String,
}

/// Application context: built once from a dataset and config, immutable afterwards,
/// and passed to every stage that needs the data or the scales.
#[derive(Clone, Debug)]
pub struct BarChart {
    dataset: Dataset,
    config: ChartConfig,
    theme: Theme,
    bounds: AxisBounds,
    scales: Scales,
    bars: Vec<Bar>,
    average: AverageMarker,
    tooltips: Vec<TooltipContent>,
}

impl BarChart {
    /// Run range finder, scale mapper and layout. Any non-numeric x/y value
    /// aborts the whole chart.
    pub fn new(dataset: Dataset, config: ChartConfig) -> Result<Self> {
        config.validate()?;
        let x_field = config.x_column();
        let y_field = config.y_column();

        let bounds = compute_bounds(&dataset, &x_field, &y_field, &config.rounding)?;
        let scales = build_scales(&bounds, &config)?;

        let mut bars = Vec::with_capacity(dataset.len());
        for (i, row) in dataset.rows().iter().enumerate() {
            let xv = x_field.value(row, i)?;
            let yv = y_field.value(row, i)?;
            let y = scales.y.map(yv);
            bars.push(Bar {
                row: i,
                x: scales.x.map(xv),
                y,
                width: config.bar.width,
                height: config.bar.baseline - y,
                value: yv,
                label: row.get(&config.y_field).unwrap_or("").to_string(),
            });
        }

        let mean_value = mean(&dataset, &y_field)?;
        let line_y = match config.average.placement {
            AveragePlacement::Empirical { multiplier } => mean_value * multiplier,
            AveragePlacement::Scale => scales.y.map(mean_value),
        };
        let average = AverageMarker {
            mean: mean_value,
            y: line_y,
            x_start: config.average.x_start,
            x_end: config.average.x_end,
            label: format_one_decimal(mean_value),
        };
        debug!(bars = bars.len(), mean = mean_value, line_y, "laid out bar chart");

        let tooltips = dataset.rows().iter().map(TooltipContent::from_row).collect();
        let theme = theme::find(&config.theme);
        Ok(Self { dataset, config, theme, bounds, scales, bars, average, tooltips })
    }

    /// Load `path` and build the chart with the given config.
    pub fn from_path(path: impl AsRef<std::path::Path>, config: ChartConfig) -> Result<Self> {
        Self::new(Dataset::from_path(path)?, config)
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn bounds(&self) -> &AxisBounds { &self.bounds }
    pub fn scales(&self) -> &Scales { &self.scales }
    pub fn bars(&self) -> &[Bar] { &self.bars }
    pub fn average(&self) -> &AverageMarker { &self.average }

    pub fn tooltip_content(&self, bar: usize) -> Option<&TooltipContent> { self.tooltips.get(bar) }

    /// A tooltip wired to this chart's fade timings.
    pub fn tooltip(&self) -> Tooltip { Tooltip::new(self.config.tooltip) }

    /// Topmost bar under `(x, y)`. Later bars draw over earlier ones.
    pub fn bar_at(&self, x: f64, y: f64) -> Option<usize> {
        self.bars.iter().rev().find(|b| b.contains(x, y)).map(|b| b.row)
    }

    pub fn x_axis(&self) -> Axis {
        let a = &self.config.axes;
        Axis::from_scale(&self.scales.x, Orientation::Bottom, a.x_axis_y, a.tick_count, a.tick_size, a.tick_font_px)
    }

    pub fn y_axis(&self) -> Axis {
        let a = &self.config.axes;
        Axis::from_scale(&self.scales.y, Orientation::Left, a.y_axis_x, a.tick_count, a.tick_size, a.tick_font_px)
    }

    /// Axes, bars, value labels, axis titles and the mean line, in paint order.
    pub fn render(&self) -> Scene {
        let t = &self.theme;
        let cfg = &self.config;
        let mut scene = Scene::new(cfg.width, cfg.height, t.background);

        scene.items.extend(self.x_axis().primitives(t));
        scene.items.extend(self.y_axis().primitives(t));

        for b in &self.bars {
            scene.push(Primitive::Rect(Rect {
                x: b.x,
                y: b.y,
                width: b.width,
                height: b.height,
                fill: t.bar_fill,
                stroke: Some(Stroke::solid(t.bar_stroke, 1.0)),
                opacity: t.bar_opacity,
                bar: Some(b.row),
            }));
        }
        for b in &self.bars {
            scene.push(Primitive::Text(
                Text::new(Point::new(b.x, b.y), &b.label, cfg.bar.label_font_px, t.value_label)
                    .anchored(TextAnchor::Middle)
                    .offset_em(0.9, -0.5),
            ));
        }

        let lbl = &cfg.labels;
        scene.push(Primitive::Text(Text::new(Point::new(400.0, 500.0), &lbl.x, lbl.font_px, t.axis_label)));
        scene.push(Primitive::Text(
            Text::new(Point::new(15.0, 320.0), &lbl.y, lbl.font_px, t.axis_label).rotated(-90.0),
        ));

        let avg = &self.average;
        scene.push(Primitive::Line(Line {
            from: Point::new(avg.x_start, avg.y),
            to: Point::new(avg.x_end, avg.y),
            stroke: Stroke { color: t.average_line, width: cfg.average.stroke_width, dash: Some(cfg.average.dash) },
        }));
        scene.push(Primitive::Text(Text::new(
            Point::new(cfg.average.label_x, avg.y - 2.0),
            &avg.label,
            cfg.average.label_font_px,
            t.average_label,
        )));

        scene.tooltips = self.tooltips.clone();
        scene
    }

    /// `render()` with the tooltip panel drawn on top at its current opacity.
    pub fn render_with_tooltip(&self, tooltip: &Tooltip) -> Scene {
        let mut scene = self.render();
        scene.items.extend(tooltip.primitives(&self.theme));
        scene
    }
}
