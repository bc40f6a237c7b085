// File: crates/ratings-core/src/lib.rs
// Summary: Core library entry point; exports the load → bounds → scales → scene pipeline.

pub mod axis;
pub mod bounds;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod grid;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{Axis, Orientation, Tick};
pub use bounds::{compute_bounds, AxisBounds};
pub use chart::{AverageMarker, Bar, BarChart};
pub use config::{AveragePlacement, ChartConfig};
pub use data::{Column, Dataset, NumericField, Row};
pub use error::{AxisId, ChartError, Result};
pub use format::{format_number, group_thousands};
pub use scale::{build_scales, LinearScale, ScaleTransform, Scales};
pub use scene::{Primitive, Scene};
pub use theme::{Rgba, Theme};
pub use tooltip::{HoverTracker, PointerEvent, Tooltip, TooltipContent};
