// File: crates/ratings-core/src/axis.rs
// Summary: Axis model; ticks derived from a scale and laid out like d3's axisBottom/axisLeft.

use crate::scale::ScaleTransform;
use crate::scene::{Line, Primitive, Stroke, Text, TextAnchor};
use crate::theme::Theme;
use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Horizontal axis, ticks hanging below the line.
    Bottom,
    /// Vertical axis, ticks to the left of the line.
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Pixel position along the axis.
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orientation: Orientation,
    /// Pixel offset of the axis line (y for Bottom, x for Left).
    pub anchor: f64,
    /// Pixel extent of the domain line, from the scale's range.
    pub extent: (f64, f64),
    pub ticks: Vec<Tick>,
    pub tick_size: f64,
    pub font_px: f64,
}

impl Axis {
    pub fn from_scale<S: ScaleTransform>(
        scale: &S,
        orientation: Orientation,
        anchor: f64,
        tick_count: usize,
        tick_size: f64,
        font_px: f64,
    ) -> Self {
        let ticks = scale
            .ticks(tick_count)
            .into_iter()
            .map(|v| Tick { value: v, position: scale.to_px(v), label: scale.tick_label(v, tick_count) })
            .collect();
        Self { orientation, anchor, extent: scale.range(), ticks, tick_size, font_px }
    }

    /// Domain line with outer ticks, then one mark and label per tick.
    pub fn primitives(&self, theme: &Theme) -> Vec<Primitive> {
        let stroke = Stroke::solid(theme.axis_line, 1.0);
        let (r0, r1) = self.extent;
        let k = self.tick_size;
        let mut out = Vec::with_capacity(3 + self.ticks.len() * 2);

        match self.orientation {
            Orientation::Bottom => {
                let y = self.anchor;
                out.push(line(Point::new(r0, y), Point::new(r1, y), stroke));
                out.push(line(Point::new(r0, y), Point::new(r0, y + k), stroke));
                out.push(line(Point::new(r1, y), Point::new(r1, y + k), stroke));
                for t in &self.ticks {
                    out.push(line(Point::new(t.position, y), Point::new(t.position, y + k), stroke));
                    out.push(Primitive::Text(
                        Text::new(Point::new(t.position, y + k + 3.0), &t.label, self.font_px, theme.tick_label)
                            .anchored(TextAnchor::Middle)
                            .offset_em(0.0, 0.71),
                    ));
                }
            }
            Orientation::Left => {
                let x = self.anchor;
                out.push(line(Point::new(x, r0), Point::new(x, r1), stroke));
                out.push(line(Point::new(x - k, r0), Point::new(x, r0), stroke));
                out.push(line(Point::new(x - k, r1), Point::new(x, r1), stroke));
                for t in &self.ticks {
                    out.push(line(Point::new(x - k, t.position), Point::new(x, t.position), stroke));
                    out.push(Primitive::Text(
                        Text::new(Point::new(x - k - 3.0, t.position), &t.label, self.font_px, theme.tick_label)
                            .anchored(TextAnchor::End)
                            .offset_em(0.0, 0.32),
                    ));
                }
            }
        }
        out
    }
}

fn line(from: Point, to: Point, stroke: Stroke) -> Primitive {
    Primitive::Line(Line { from, to, stroke })
}
