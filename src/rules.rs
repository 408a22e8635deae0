//! Neighbourhood and liveness rule for B3/S23.

use crate::generation::{Coord, Generation};

/// Cells around `cell` in column order, skipping any that lie past the edge
/// of the `i64` lattice.
fn neighbor_cells(cell: Coord) -> impl Iterator<Item = Coord> {
    (-1i64..=1)
        .flat_map(|dx| (-1i64..=1).map(move |dy| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .filter_map(move |(dx, dy)| cell.checked_offset(dx, dy))
}

/// The cells surrounding `cell`, column by column: `x` ascending on the
/// outside, `y` ascending on the inside, center skipped.
///
/// Always eight cells, except on the edge of the `i64` lattice, where the
/// missing neighbors do not exist and count as dead.
pub fn neighbors_of(cell: Coord) -> Vec<Coord> {
    neighbor_cells(cell).collect()
}

#[inline]
pub fn is_alive(cell: Coord, generation: &Generation) -> bool {
    generation.contains(cell)
}

/// Alive neighbors of `cell`, in `neighbors_of` order.
pub fn living_neighbors(cell: Coord, generation: &Generation) -> Vec<Coord> {
    neighbor_cells(cell)
        .filter(|&neighbor| is_alive(neighbor, generation))
        .collect()
}

/// Birth on exactly three neighbors, survival on two or three.
pub fn will_be_alive(cell: Coord, generation: &Generation) -> bool {
    let neighbors = neighbor_cells(cell)
        .filter(|&neighbor| is_alive(neighbor, generation))
        .count();
    neighbors == 3 || (neighbors == 2 && is_alive(cell, generation))
}

#[cfg(test)]
mod tests {
    use super::{is_alive, living_neighbors, neighbors_of, will_be_alive};
    use crate::generation::{Coord, Generation};

    /// Decodes a 9-bit mask into a 3x3 neighbourhood centered on the origin.
    /// Bit 4 is the center cell.
    fn neighbourhood(mask: u16) -> Generation {
        let mut cells = Vec::new();
        for bit in 0..9 {
            if mask & (1 << bit) != 0 {
                cells.push(Coord::new(bit % 3 - 1, bit / 3 - 1));
            }
        }
        Generation::from_cells(cells)
    }

    fn expected_output(mask: u16) -> bool {
        let alive = mask & (1 << 4) != 0;
        let neighbors = (mask & !(1 << 4)).count_ones();
        if alive {
            neighbors == 2 || neighbors == 3
        } else {
            neighbors == 3
        }
    }

    #[test]
    fn rule_matches_reference_for_every_neighbourhood() {
        for mask in 0u16..512 {
            let generation = neighbourhood(mask);
            assert_eq!(
                will_be_alive(Coord::ORIGIN, &generation),
                expected_output(mask),
                "neighbourhood {mask:09b}"
            );
        }
    }

    #[test]
    fn neighbor_order_is_column_major() {
        let expected: [(i64, i64); 8] =
            [(4, 6), (4, 7), (4, 8), (5, 6), (5, 8), (6, 6), (6, 7), (6, 8)];
        let expected = expected.map(Coord::from);
        assert_eq!(neighbors_of(Coord::new(5, 7)), expected);
    }

    #[test]
    fn lattice_corner_has_three_neighbors() {
        let corner = Coord::new(i64::MAX, i64::MIN);
        assert_eq!(
            neighbors_of(corner),
            vec![
                Coord::new(i64::MAX - 1, i64::MIN),
                Coord::new(i64::MAX - 1, i64::MIN + 1),
                Coord::new(i64::MAX, i64::MIN + 1),
            ]
        );
        let generation = Generation::from_cells([corner]);
        assert!(!will_be_alive(corner, &generation));
    }

    #[test]
    fn living_neighbors_keeps_enumeration_order() {
        let generation = Generation::from_cells([(1i64, 1i64), (-1, -1), (0, 0), (0, 1)]);
        assert_eq!(
            living_neighbors(Coord::ORIGIN, &generation),
            vec![Coord::new(-1, -1), Coord::new(0, 1), Coord::new(1, 1)]
        );
        assert!(is_alive(Coord::ORIGIN, &generation));
        assert!(!is_alive(Coord::new(1, 0), &generation));
    }
}
