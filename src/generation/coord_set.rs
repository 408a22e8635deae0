//! Membership index for the cells of one generation.
//!
//! This is an open-addressed linear-probing hash set keyed on `Coord`.
//! Generations are built once and never lose cells, so slots are only ever
//! filled and no tombstones are needed.

use super::Coord;

const LOAD_NUM: usize = 3;
const LOAD_DEN: usize = 4;
const MIN_SLOTS: usize = 16;

#[derive(Clone, Copy)]
struct Slot {
    coord: Coord,
    occupied: bool,
}

impl Slot {
    const EMPTY: Self = Self {
        coord: Coord::ORIGIN,
        occupied: false,
    };
}

#[inline(always)]
fn coord_hash(coord: Coord) -> u64 {
    const MX: u64 = 0x517c_c1b7_2722_0a95;
    const MY: u64 = 0x6c62_272e_07bb_0142;
    let hx = (coord.x as u64).wrapping_mul(MX);
    let hy = (coord.y as u64).wrapping_mul(MY);
    hx ^ hy.rotate_right(32)
}

#[inline]
fn slots_for(keys: usize) -> usize {
    keys.saturating_mul(LOAD_DEN)
        .div_ceil(LOAD_NUM)
        .next_power_of_two()
        .max(MIN_SLOTS)
}

#[derive(Clone)]
pub(crate) struct CoordSet {
    slots: Vec<Slot>,
    mask: usize,
    len: usize,
}

impl Default for CoordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordSet {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(cap: usize) -> Self {
        let slots = slots_for(cap);
        Self {
            slots: vec![Slot::EMPTY; slots],
            mask: slots - 1,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn needs_grow(&self) -> bool {
        (self.len + 1) * LOAD_DEN > self.slots.len() * LOAD_NUM
    }

    fn resize(&mut self, new_slots: usize) {
        debug_assert!(new_slots.is_power_of_two());
        let old_slots = std::mem::replace(&mut self.slots, vec![Slot::EMPTY; new_slots]);
        self.mask = new_slots - 1;
        self.len = 0;

        for slot in old_slots {
            if slot.occupied {
                self.insert(slot.coord);
            }
        }
    }

    /// Probes for `coord`. `Ok` holds the slot containing it, `Err` the first
    /// empty slot where it would go.
    #[inline]
    fn probe(&self, coord: Coord) -> Result<usize, usize> {
        let mut pos = coord_hash(coord) as usize & self.mask;
        loop {
            let slot = &self.slots[pos];
            if !slot.occupied {
                return Err(pos);
            }
            if slot.coord == coord {
                return Ok(pos);
            }
            pos = (pos + 1) & self.mask;
        }
    }

    /// Insert a coordinate.
    /// Returns `true` if newly inserted, `false` if it already existed.
    pub fn insert(&mut self, coord: Coord) -> bool {
        if self.needs_grow() {
            self.resize(self.slots.len() * 2);
        }

        match self.probe(coord) {
            Ok(_) => false,
            Err(pos) => {
                self.slots[pos] = Slot {
                    coord,
                    occupied: true,
                };
                self.len += 1;
                true
            }
        }
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.probe(coord).is_ok()
    }
}
