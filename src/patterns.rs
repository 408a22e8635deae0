//! Named starting patterns.

use lazy_static::lazy_static;

use crate::generation::{seed, Generation};

const RPENTOMINO: [(i64, i64); 5] = [(3, 2), (2, 3), (3, 3), (3, 4), (4, 4)];

// A still block in the lower left and a glider heading away from it.
const GLIDER: [(i64, i64); 9] = [
    (-2, -2),
    (-1, -2),
    (-2, -1),
    (-1, -1),
    (1, 1),
    (2, 1),
    (3, 1),
    (3, 2),
    (2, 3),
];

const SQUARE: [(i64, i64); 4] = [(1, 1), (2, 1), (1, 2), (2, 2)];

lazy_static! {
    /// The pattern catalog, in listing order.
    pub static ref START_PATTERNS: Vec<(&'static str, Generation)> = vec![
        ("rpentomino", seed(RPENTOMINO)),
        ("glider", seed(GLIDER)),
        ("square", seed(SQUARE)),
    ];
}

/// Looks up a starting pattern by exact name.
pub fn pattern(name: &str) -> Option<&'static Generation> {
    START_PATTERNS
        .iter()
        .find(|(pattern_name, _)| *pattern_name == name)
        .map(|(_, generation)| generation)
}

pub fn pattern_names() -> impl Iterator<Item = &'static str> {
    START_PATTERNS.iter().map(|(name, _)| *name)
}
