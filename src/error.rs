//! Error types for island map generation

use std::fmt;

/// Errors that can occur during map generation or queries
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// Configuration or landmass parameters failed validation
    InvalidInput(String),
    /// A landmass seed point does not locate any cell
    InvalidSeed {
        /// Seed x coordinate
        x: f32,
        /// Seed y coordinate
        y: f32,
    },
    /// Partitioning produced no cells or a malformed cell
    DegeneratePartition(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            MapError::InvalidSeed { x, y } => {
                write!(f, "invalid seed: no cell at ({}, {})", x, y)
            }
            MapError::DegeneratePartition(msg) => write!(f, "degenerate partition: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}

/// Result type alias for map operations
pub type Result<T> = std::result::Result<T, MapError>;
