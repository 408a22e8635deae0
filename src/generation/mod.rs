//! Alive-cell sets.
//!
//! A `Generation` keeps its cells in the order they were produced, which is
//! what makes stepping and rendering deterministic, alongside a hashed index
//! for constant-time membership tests.

mod coord;
mod coord_set;

use std::fmt;

pub use coord::Coord;
use coord_set::CoordSet;

/// The set of cells alive at one simulation step.
///
/// Cells are unique. Equality is set equality and ignores order.
#[derive(Clone, Default)]
pub struct Generation {
    cells: Vec<Coord>,
    index: CoordSet,
}

impl Generation {
    /// The empty generation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a generation from cells in order. Repeated coordinates after
    /// the first occurrence are dropped.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Coord>,
    {
        let cells = cells.into_iter();
        let (lower, _) = cells.size_hint();
        let mut generation = Self {
            cells: Vec::with_capacity(lower),
            index: CoordSet::with_capacity(lower),
        };
        for cell in cells {
            let cell = cell.into();
            if generation.index.insert(cell) {
                generation.cells.push(cell);
            }
        }
        debug_assert_eq!(generation.index.len(), generation.cells.len());
        generation
    }

    #[inline]
    pub fn contains(&self, cell: Coord) -> bool {
        self.index.contains(cell)
    }

    /// Cells in insertion order.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.cells.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns a copy of this generation with every cell shifted by `(dx, dy)`.
    /// Cells shifted off the lattice are dropped.
    pub fn translated(&self, dx: i64, dy: i64) -> Self {
        Self::from_cells(
            self.cells
                .iter()
                .filter_map(|cell| cell.checked_offset(dx, dy)),
        )
    }
}

/// Packages an ordered sequence of coordinates as a generation.
pub fn seed<I>(cells: I) -> Generation
where
    I: IntoIterator,
    I::Item: Into<Coord>,
{
    Generation::from_cells(cells)
}

impl PartialEq for Generation {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.cells.iter().all(|&cell| other.contains(cell))
    }
}

impl Eq for Generation {}

impl fmt::Debug for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.cells.iter().map(|&c| <(i64, i64)>::from(c)))
            .finish()
    }
}

impl FromIterator<Coord> for Generation {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

impl<'a> IntoIterator for &'a Generation {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
