// File: crates/ratings-core/src/theme.rs
// Summary: Named colour presets for bars, axes, the average line and tooltips.

/// Straight (non-premultiplied) 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// CSS/SVG colour text (`#rrggbb`, or `rgba(...)` when translucent).
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f64 / 255.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub bar_fill: Rgba,
    pub bar_stroke: Rgba,
    /// Whole-bar opacity applied on top of the fill colour.
    pub bar_opacity: f64,
    pub axis_line: Rgba,
    pub tick_label: Rgba,
    pub value_label: Rgba,
    pub axis_label: Rgba,
    pub average_line: Rgba,
    pub average_label: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_text: Rgba,
    pub error_text: Rgba,
}

impl Theme {
    /// The original look: teal bars on white, grey dashed mean.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Rgba::rgb(255, 255, 255),
            bar_fill: Rgba::rgb(0x4c, 0xce, 0xc8),
            bar_stroke: Rgba::rgb(47, 79, 79),
            bar_opacity: 0.9,
            axis_line: Rgba::rgb(0, 0, 0),
            tick_label: Rgba::rgb(0, 0, 0),
            value_label: Rgba::rgb(0, 0, 0),
            axis_label: Rgba::rgb(0, 0, 0),
            average_line: Rgba::rgb(128, 128, 128),
            average_label: Rgba::rgb(0, 0, 0),
            tooltip_background: Rgba::rgb(0xb0, 0xc4, 0xde),
            tooltip_text: Rgba::rgb(0, 0, 0),
            error_text: Rgba::rgb(200, 40, 40),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            bar_fill: Rgba::rgb(0x4c, 0xce, 0xc8),
            bar_stroke: Rgba::rgb(150, 220, 215),
            bar_opacity: 0.9,
            axis_line: Rgba::rgb(180, 180, 190),
            tick_label: Rgba::rgb(150, 150, 160),
            value_label: Rgba::rgb(235, 235, 245),
            axis_label: Rgba::rgb(235, 235, 245),
            average_line: Rgba::rgb(160, 160, 170),
            average_label: Rgba::rgb(235, 235, 245),
            tooltip_background: Rgba::rgb(40, 40, 45),
            tooltip_text: Rgba::rgb(235, 235, 245),
            error_text: Rgba::rgb(255, 110, 110),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_else(Theme::classic)
}
