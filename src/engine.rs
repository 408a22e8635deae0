//! Generation stepping.
//!
//! The stepper scans the bounding box of the current generation padded by one
//! cell, which covers every cell that can be born (each has an alive
//! neighbor) as well as every alive cell.

use log::{debug, trace};

use crate::bounds::corners;
use crate::generation::{Coord, Generation};
use crate::rules::will_be_alive;

/// Every generation of a run, seed first.
pub type History = Vec<Generation>;

/// Computes the generation following `current`.
///
/// Output cells are ordered by scan position: `x` ascending, then `y`
/// ascending.
pub fn calculate_next(current: &Generation) -> Generation {
    let scan = corners(current).expand(1);
    let mut next = Vec::new();
    for x in scan.left()..=scan.right() {
        for y in scan.bottom()..=scan.top() {
            let cell = Coord::new(x, y);
            if will_be_alive(cell, current) {
                next.push(cell);
            }
        }
    }
    trace!(
        "stepped {} cells over a {}x{} scan into {} cells",
        current.len(),
        scan.width(),
        scan.height(),
        next.len()
    );
    Generation::from_cells(next)
}

/// Steps `seed` forward `iterations` times and returns every generation,
/// including the seed. Runs the full count even after the pattern dies out
/// or stabilizes.
pub fn iterate(seed: Generation, iterations: u64) -> History {
    let capacity = usize::try_from(iterations).map_or(0, |n| n.saturating_add(1));
    let mut history = Vec::with_capacity(capacity);
    history.push(seed);
    for generation in 1..=iterations {
        let next = match history.last() {
            Some(previous) => calculate_next(previous),
            None => break,
        };
        debug!("generation {generation}: population {}", next.len());
        history.push(next);
    }
    history
}
