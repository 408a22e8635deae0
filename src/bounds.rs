//! Bounding boxes of generations.

use crate::generation::{Coord, Generation};

/// Minimal axis-aligned rectangle containing every alive cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub top_right: Coord,
    pub bottom_left: Coord,
}

impl BoundingBox {
    #[inline]
    pub fn left(&self) -> i64 {
        self.bottom_left.x
    }

    #[inline]
    pub fn right(&self) -> i64 {
        self.top_right.x
    }

    #[inline]
    pub fn top(&self) -> i64 {
        self.top_right.y
    }

    #[inline]
    pub fn bottom(&self) -> i64 {
        self.bottom_left.y
    }

    /// Number of columns, inclusive of both edges. A box spanning the whole
    /// lattice is `2^64` wide, hence `u128`.
    pub fn width(&self) -> u128 {
        u128::from(self.right().abs_diff(self.left())) + 1
    }

    /// Number of rows, inclusive of both edges.
    pub fn height(&self) -> u128 {
        u128::from(self.top().abs_diff(self.bottom())) + 1
    }

    pub fn contains(&self, cell: Coord) -> bool {
        (self.left()..=self.right()).contains(&cell.x)
            && (self.bottom()..=self.top()).contains(&cell.y)
    }

    /// Pads the box by `by` cells on every side, stopping at the lattice
    /// edge.
    pub fn expand(&self, by: i64) -> Self {
        Self {
            top_right: self.top_right.saturating_offset(by, by),
            bottom_left: self.bottom_left.saturating_offset(-by, -by),
        }
    }
}

/// Bounding box of `generation`. The empty generation collapses to the
/// origin.
pub fn corners(generation: &Generation) -> BoundingBox {
    let Some((&first, rest)) = generation.cells().split_first() else {
        return BoundingBox {
            top_right: Coord::ORIGIN,
            bottom_left: Coord::ORIGIN,
        };
    };

    let (mut left, mut right, mut bottom, mut top) = (first.x, first.x, first.y, first.y);
    for cell in rest {
        left = left.min(cell.x);
        right = right.max(cell.x);
        bottom = bottom.min(cell.y);
        top = top.max(cell.y);
    }

    BoundingBox {
        top_right: Coord::new(right, top),
        bottom_left: Coord::new(left, bottom),
    }
}
