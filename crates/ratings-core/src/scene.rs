// File: crates/ratings-core/src/scene.rs
// Summary: Backend-neutral drawing primitives produced by the renderer.

use crate::theme::{Rgba, Theme};
use crate::tooltip::TooltipContent;
use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
    /// On/off dash lengths; `None` draws a solid stroke.
    pub dash: Option<[f64; 2]>,
}

impl Stroke {
    pub const fn solid(color: Rgba, width: f64) -> Self { Self { color, width, dash: None } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgba,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
    /// Index of the bar this rect draws, for hover hit-testing and tooltips.
    pub bar: Option<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

/// A single-line label. `pos` is the baseline anchor; `dx_em`/`dy_em` shift it
/// in units of `font_px`. With a rotation the text turns around `pos`.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub pos: Point,
    pub dx_em: f64,
    pub dy_em: f64,
    pub anchor: TextAnchor,
    pub font_px: f64,
    pub bold: bool,
    pub color: Rgba,
    /// Degrees, clockwise positive (SVG convention).
    pub rotate_deg: f64,
    pub content: String,
}

impl Text {
    pub fn new(pos: Point, content: impl Into<String>, font_px: f64, color: Rgba) -> Self {
        Self {
            pos,
            dx_em: 0.0,
            dy_em: 0.0,
            anchor: TextAnchor::Start,
            font_px,
            bold: false,
            color,
            rotate_deg: 0.0,
            content: content.into(),
        }
    }

    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn offset_em(mut self, dx_em: f64, dy_em: f64) -> Self {
        self.dx_em = dx_em;
        self.dy_em = dy_em;
        self
    }

    pub fn rotated(mut self, deg: f64) -> Self {
        self.rotate_deg = deg;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Baseline anchor after applying the em offsets (before rotation).
    pub fn origin(&self) -> Point {
        Point::new(self.pos.x + self.dx_em * self.font_px, self.pos.y + self.dy_em * self.font_px)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect(Rect),
    Line(Line),
    Text(Text),
}

/// Everything a backend needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
    pub items: Vec<Primitive>,
    /// Tooltip payload per bar index, for backends that can attach hover text.
    pub tooltips: Vec<TooltipContent>,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        Self { width, height, background, items: Vec::new(), tooltips: Vec::new() }
    }

    pub fn push(&mut self, p: Primitive) { self.items.push(p); }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.items.iter().filter_map(|p| match p { Primitive::Rect(r) => Some(r), _ => None })
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.items.iter().filter_map(|p| match p { Primitive::Line(l) => Some(l), _ => None })
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.items.iter().filter_map(|p| match p { Primitive::Text(t) => Some(t), _ => None })
    }

    /// A visible failure state: the message centred on an otherwise empty surface.
    pub fn error_panel(width: u32, height: u32, theme: &Theme, message: &str) -> Self {
        let mut scene = Scene::new(width, height, theme.background);
        let cx = width as f64 / 2.0;
        let cy = height as f64 / 2.0;
        scene.push(Primitive::Text(
            Text::new(Point::new(cx, cy - 12.0), "Chart unavailable", 20.0, theme.error_text)
                .anchored(TextAnchor::Middle)
                .bold(),
        ));
        for (i, line) in message.lines().enumerate() {
            scene.push(Primitive::Text(
                Text::new(Point::new(cx, cy + 16.0 + 18.0 * i as f64), line, 13.0, theme.error_text)
                    .anchored(TextAnchor::Middle),
            ));
        }
        scene
    }
}
