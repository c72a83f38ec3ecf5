//! Cave generation library
//!
//! Builds fully connected cave areas from seeded noise and cellular-automaton
//! smoothing, with boundary patterns that let adjacent areas line up.

pub mod area;
pub mod ascii;
pub mod cell;
pub mod config;
pub mod error;
pub mod generation;
pub mod map_export;
pub mod mesh;
pub mod seeds;
pub mod tilemap;

pub use area::{Area, AreaDescriptor, EdgePattern, Lineage, Side};
pub use cell::{Cell, CaveGrid, Position};
pub use config::CaveConfig;
pub use error::{ConfigError, GenerationError};
pub use generation::{CaveGenerator, CaveMap};
pub use seeds::CaveSeed;
