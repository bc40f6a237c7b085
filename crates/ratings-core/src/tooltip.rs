// File: crates/ratings-core/src/tooltip.rs
// Summary: Hover tooltip: per-bar content, pointer events with explicit payloads, fade state.

use crate::chart::BarChart;
use crate::config::TooltipTiming;
use crate::data::Row;
use crate::format::group_thousands;
use crate::scene::{Primitive, Rect, Stroke, Text};
use crate::theme::{Rgba, Theme};
use crate::types::{
    Point, FIELD_AVG_VIEWERS, FIELD_EPISODES, FIELD_SEASON, FIELD_TOP_EPISODE, FIELD_TOP_VIEWERS, FIELD_YEAR,
};

/// What the panel shows for one bar.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub entries: Vec<(String, String)>,
}

impl TooltipContent {
    /// Season heading plus the five detail fields, values comma-grouped.
    /// Missing fields show as empty strings.
    pub fn from_row(row: &Row) -> Self {
        let field = |name: &str| group_thousands(row.get(name).unwrap_or(""));
        let entries = [
            ("Year", FIELD_YEAR),
            ("Episodes", FIELD_EPISODES),
            ("Avg. Viewers (mil)", FIELD_AVG_VIEWERS),
            ("Most watched episode", FIELD_TOP_EPISODE),
            ("Viewers (mil)", FIELD_TOP_VIEWERS),
        ]
        .into_iter()
        .map(|(label, name)| (label.to_string(), field(name)))
        .collect();
        Self { title: format!("Season: {}", row.get(FIELD_SEASON).unwrap_or("")), entries }
    }

    /// Plain-text rendering, one line per entry.
    pub fn to_plain_text(&self) -> String {
        let mut s = self.title.clone();
        for (k, v) in &self.entries {
            s.push('\n');
            s.push_str(k);
            s.push_str(": ");
            s.push_str(v);
        }
        s
    }
}

/// Pointer event with its coordinates carried in the payload (surface pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter { bar: usize, x: f64, y: f64 },
    Leave { bar: usize },
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Fade {
    from: f64,
    to: f64,
    duration_ms: f64,
    elapsed_ms: f64,
}

impl Fade {
    fn value(&self) -> f64 {
        if self.duration_ms <= 0.0 { return self.to; }
        let t = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * cubic_in_out(t)
    }

    fn done(&self) -> bool { self.elapsed_ms >= self.duration_ms }
}

/// d3's default transition easing.
pub fn cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 { t * t * t / 2.0 } else { let u = t - 2.0; (u * u * u + 2.0) / 2.0 }
}

/// The single tooltip panel shared by every bar.
///
/// Only the current opacity (and the fade driving it) is state; content and
/// position are overwritten by each enter event and kept through the fade-out.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    timing: TooltipTiming,
    opacity: f64,
    fade: Option<Fade>,
    content: Option<TooltipContent>,
    position: Point,
    hovered: Option<usize>,
}

impl Tooltip {
    pub fn new(timing: TooltipTiming) -> Self {
        Self { timing, opacity: 0.0, fade: None, content: None, position: Point::default(), hovered: None }
    }

    pub fn handle(&mut self, event: &PointerEvent, chart: &BarChart) {
        match *event {
            PointerEvent::Enter { bar, x, y } => {
                self.content = chart.tooltip_content(bar).cloned();
                self.position = Point::new(x, y + self.timing.offset_y);
                self.hovered = Some(bar);
                self.start_fade(self.timing.opacity, self.timing.fade_in_ms);
            }
            PointerEvent::Leave { bar } => {
                if self.hovered == Some(bar) { self.hovered = None; }
                self.start_fade(0.0, self.timing.fade_out_ms);
            }
        }
    }

    // A new transition interrupts the running one from wherever it got to.
    fn start_fade(&mut self, to: f64, duration_ms: f64) {
        let from = self.opacity();
        let fade = Fade { from, to, duration_ms, elapsed_ms: 0.0 };
        if fade.done() {
            self.opacity = to;
            self.fade = None;
        } else {
            self.fade = Some(fade);
        }
    }

    /// Step the running fade forward by `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: f64) {
        if let Some(f) = self.fade.as_mut() {
            f.elapsed_ms += dt_ms.max(0.0);
            self.opacity = f.value();
            if f.done() { self.fade = None; }
        }
    }

    pub fn opacity(&self) -> f64 { self.fade.map_or(self.opacity, |f| f.value()) }
    pub fn is_fading(&self) -> bool { self.fade.is_some() }
    pub fn is_visible(&self) -> bool { self.opacity() > 0.0 && self.content.is_some() }
    pub fn content(&self) -> Option<&TooltipContent> { self.content.as_ref() }
    pub fn position(&self) -> Point { self.position }
    pub fn hovered(&self) -> Option<usize> { self.hovered }

    /// Panel primitives at the current opacity; empty while hidden.
    pub fn primitives(&self, theme: &Theme) -> Vec<Primitive> {
        let Some(content) = self.content.as_ref().filter(|_| self.opacity() > 0.0) else {
            return Vec::new();
        };
        let alpha = self.opacity();
        let title_px = 18.0;
        let body_px = 12.0;
        let line_h = body_px * 1.4;
        let width = 220.0;
        let height = 12.0 + title_px * 1.3 + line_h * content.entries.len() as f64;
        let Point { x, y } = self.position;

        let mut out = vec![Primitive::Rect(Rect {
            x,
            y,
            width,
            height,
            fill: theme.tooltip_background,
            stroke: Some(Stroke::solid(theme.bar_stroke, 0.5)),
            opacity: alpha,
            bar: None,
        })];
        let text_color = fade_color(theme.tooltip_text, alpha);
        out.push(Primitive::Text(
            Text::new(Point::new(x + 6.0, y + 6.0 + title_px), &content.title, title_px, text_color).bold(),
        ));
        let mut ly = y + 6.0 + title_px * 1.3 + body_px;
        for (k, v) in &content.entries {
            out.push(Primitive::Text(Text::new(Point::new(x + 6.0, ly), format!("{k}: {v}"), body_px, text_color)));
            ly += line_h;
        }
        out
    }
}

fn fade_color(c: Rgba, alpha: f64) -> Rgba {
    Rgba::rgba(c.r, c.g, c.b, (c.a as f64 * alpha.clamp(0.0, 1.0)).round() as u8)
}

/// Turns raw pointer positions into enter/leave events by hit-testing bars,
/// the way a host event dispatcher would.
#[derive(Clone, Debug, Default)]
pub struct HoverTracker {
    current: Option<usize>,
}

impl HoverTracker {
    pub fn new() -> Self { Self::default() }

    pub fn current(&self) -> Option<usize> { self.current }

    pub fn pointer_moved(&mut self, chart: &BarChart, x: f64, y: f64) -> Vec<PointerEvent> {
        let hit = chart.bar_at(x, y);
        if hit == self.current {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(bar) = self.current {
            events.push(PointerEvent::Leave { bar });
        }
        if let Some(bar) = hit {
            events.push(PointerEvent::Enter { bar, x, y });
        }
        self.current = hit;
        events
    }

    /// Pointer left the surface entirely.
    pub fn pointer_left(&mut self) -> Option<PointerEvent> {
        self.current.take().map(|bar| PointerEvent::Leave { bar })
    }
}
