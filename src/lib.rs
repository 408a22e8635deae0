//! Sparse-set Conway's Game of Life engine (B3/S23) with a text renderer.

pub mod bounds;
pub mod engine;
pub mod error;
pub mod generation;
pub mod patterns;
pub mod render;
pub mod rules;
pub mod runner;

pub use bounds::{corners, BoundingBox};
pub use engine::{calculate_next, iterate, History};
pub use error::UsageError;
pub use generation::{seed, Coord, Generation};
pub use patterns::{pattern, pattern_names, START_PATTERNS};
pub use render::{print_cell, print_cells, RenderConfig, ALIVE_GLYPH, DEAD_GLYPH};
pub use rules::{is_alive, living_neighbors, neighbors_of, will_be_alive};
pub use runner::{resolve, run, usage, USAGE};
