// error.rs - Error types for configuration and persistence

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the save/load path. None of these stop the simulation.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("{path} is not a valid snapshot: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("snapshot grid is {found:?} cells, live grid is {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

/// Rejected start-up configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell counts must be non-zero (got {x}x{y})")]
    ZeroCells { x: usize, y: usize },
    #[error("window {width}x{height} px is too small for {x}x{y} cells")]
    CellsExceedWindow {
        width: u32,
        height: u32,
        x: usize,
        y: usize,
    },
    #[error("tick interval must be non-zero")]
    ZeroTick,
    #[error("density {0} is outside 0.0..=1.0")]
    InvalidDensity(f64),
}
