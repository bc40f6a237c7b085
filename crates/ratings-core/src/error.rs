// File: crates/ratings-core/src/error.rs
// Summary: Error type shared by loading, bounds, scale and config code paths.

use std::path::PathBuf;

use thiserror::Error;

/// Which chart axis a scale or bound belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisId {
    X,
    Y,
}

impl std::fmt::Display for AxisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisId::X => f.write_str("x"),
            AxisId::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed delimited data: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column '{0}' is missing from the header row")]
    MissingColumn(String),

    #[error("record {row} has {found} values for {expected} headers")]
    RaggedRecord { row: usize, expected: usize, found: usize },

    #[error("dataset has no rows")]
    EmptyDataset,

    /// A field that must be numeric did not parse. `row` is zero-based and
    /// excludes the header.
    #[error("row {row}: field '{field}' is not numeric ({value:?})")]
    InvalidData { row: usize, field: String, value: String },

    /// Both domain endpoints coincide (or are not finite), so the linear
    /// mapping would divide by zero.
    #[error("{axis} scale has a degenerate domain [{lo}, {hi}]")]
    DegenerateDomain { axis: AxisId, lo: f64, hi: f64 },

    #[error("invalid chart config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
