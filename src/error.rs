//! Error types for cave generation.

use thiserror::Error;

/// Rejected parameters, detected before any generation work starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size {size} leaves no 3x3 interior to smooth (minimum {min})")]
    GridTooSmall { size: usize, min: usize },

    #[error("fill percent {value} outside [{min}, {max}]")]
    FillPercentOutOfRange { value: u32, min: u32, max: u32 },

    #[error("{name} = {value} exceeds the {cells} cells of the grid")]
    ThresholdTooLarge {
        name: &'static str,
        value: usize,
        cells: usize,
    },

    #[error("passage radius {0} is negative")]
    NegativeRadius(i32),

    #[error("passage radius {value} outside [{min}, {max}]")]
    PassageRadiusOutOfRange { value: i32, min: i32, max: i32 },

    #[error("parent edge pattern has {actual} cells, grid side is {expected}")]
    EdgePatternLength { expected: usize, actual: usize },

    #[error("area {identity} is a child but names no parent side")]
    MissingParentSide { identity: u32 },

    #[error("terminal area needs size > {min} for its transition gap, got {size}")]
    AreaTooSmallForTransition { size: usize, min: usize },

    #[error("terminal area {identity} has no side with a neighbor other than its parent")]
    MissingTransitionSide { identity: u32 },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures surfaced by the generation pipeline.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("region cleanup left no rooms (min_room_size {min_room_size} on a {size}x{size} grid)")]
    NoRooms { size: usize, min_room_size: usize },

    #[error("coordinate ({x}, {y}) outside the {size}x{size} grid")]
    OutOfBounds { x: i32, y: i32, size: usize },

    #[error("{unreached} rooms could not be connected to the main room")]
    Disconnected { unreached: usize },
}

pub type Result<T> = std::result::Result<T, GenerationError>;
