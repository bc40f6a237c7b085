// File: crates/ratings-core/src/types.rs
// Summary: Shared types and constants (surface size, pixel ranges, field names).

/// Default surface width in pixels.
pub const WIDTH: u32 = 1000;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 520;

/// Pixel-y where every bar terminates. Must equal the end of the y pixel range.
pub const BASELINE_Y: f64 = 450.0;
/// Fixed bar width, in pixels.
pub const BAR_WIDTH: f64 = 25.0;

pub const FIELD_SEASON: &str = "Season";
pub const FIELD_YEAR: &str = "Year";
pub const FIELD_EPISODES: &str = "Episodes";
pub const FIELD_AVG_VIEWERS: &str = "Avg. Viewers (mil)";
pub const FIELD_TOP_EPISODE: &str = "Most watched episode";
pub const FIELD_TOP_VIEWERS: &str = "Viewers (mil)";

/// Columns the loader insists on, in the order the tooltip lists them.
pub const REQUIRED_FIELDS: [&str; 6] = [
    FIELD_SEASON,
    FIELD_YEAR,
    FIELD_EPISODES,
    FIELD_AVG_VIEWERS,
    FIELD_TOP_EPISODE,
    FIELD_TOP_VIEWERS,
];

/// A pair of pixel coordinates a scale maps its domain onto.
/// `start` may be greater than `end`; no ordering is implied.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
    /// Signed extent (end - start).
    pub fn span(&self) -> f64 { self.end - self.start }
}

/// A 2D point in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
