//! Text rendering of generations.
//!
//! Rows run from the largest `y` down to the smallest, so "up" on screen is
//! numerically larger `y`. Columns run from the smallest `x` to the largest.

use crate::bounds::{corners, BoundingBox};
use crate::generation::{Coord, Generation};
use crate::rules::is_alive;

/// Glyph for an alive cell (U+25A3).
pub const ALIVE_GLYPH: char = '\u{25A3}';
/// Glyph for a dead cell (U+25A2).
pub const DEAD_GLYPH: char = '\u{25A2}';

/// Glyph choices for rendering.
///
/// The default reproduces `print_cells` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub alive_glyph: char,
    pub dead_glyph: char,
    /// Placed between cells of a row, never after the last one.
    pub separator: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alive_glyph: ALIVE_GLYPH,
            dead_glyph: DEAD_GLYPH,
            separator: ' ',
        }
    }
}

impl RenderConfig {
    pub fn alive_glyph(mut self, glyph: char) -> Self {
        self.alive_glyph = glyph;
        self
    }

    pub fn dead_glyph(mut self, glyph: char) -> Self {
        self.dead_glyph = glyph;
        self
    }

    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    #[inline]
    pub fn cell_glyph(&self, cell: Coord, generation: &Generation) -> char {
        if is_alive(cell, generation) {
            self.alive_glyph
        } else {
            self.dead_glyph
        }
    }

    /// Byte length of the grid for `bounds` when every cell uses the wider
    /// glyph. `None` if it does not fit in `usize`.
    fn rendered_len(&self, bounds: &BoundingBox) -> Option<usize> {
        let width = usize::try_from(bounds.width()).ok()?;
        let height = usize::try_from(bounds.height()).ok()?;
        let glyph_len = self.alive_glyph.len_utf8().max(self.dead_glyph.len_utf8());
        let separators = (width - 1).checked_mul(self.separator.len_utf8())?;
        width
            .checked_mul(glyph_len)?
            .checked_add(separators)?
            .checked_add(1)?
            .checked_mul(height)
    }

    /// Renders the bounding box of `generation` as a newline-terminated grid.
    pub fn render(&self, generation: &Generation) -> String {
        let bounds = corners(generation);
        let mut out = String::with_capacity(self.rendered_len(&bounds).unwrap_or(0));
        for y in (bounds.bottom()..=bounds.top()).rev() {
            for x in bounds.left()..=bounds.right() {
                if x != bounds.left() {
                    out.push(self.separator);
                }
                out.push(self.cell_glyph(Coord::new(x, y), generation));
            }
            out.push('\n');
        }
        out
    }
}

pub fn print_cell(cell: Coord, generation: &Generation) -> char {
    RenderConfig::default().cell_glyph(cell, generation)
}

pub fn print_cells(generation: &Generation) -> String {
    RenderConfig::default().render(generation)
}

#[cfg(test)]
mod tests {
    use super::{print_cell, print_cells, RenderConfig, ALIVE_GLYPH, DEAD_GLYPH};
    use crate::bounds::{corners, BoundingBox};
    use crate::generation::{Coord, Generation};

    #[test]
    fn empty_generation_is_one_dead_cell() {
        assert_eq!(print_cells(&Generation::new()), "\u{25A2}\n");
    }

    #[test]
    fn cell_glyphs() {
        let generation = Generation::from_cells([(2i64, 3i64)]);
        assert_eq!(print_cell(Coord::new(2, 3), &generation), ALIVE_GLYPH);
        assert_eq!(print_cell(Coord::new(3, 2), &generation), DEAD_GLYPH);
    }

    #[test]
    fn custom_glyphs_keep_layout() {
        let generation = Generation::from_cells([(0i64, 0i64), (1, 1)]);
        let config = RenderConfig::default()
            .alive_glyph('#')
            .dead_glyph('.')
            .separator('|');
        assert_eq!(config.render(&generation), ".|#\n#|.\n");
    }

    #[test]
    fn size_hint_matches_output() {
        let generation = Generation::from_cells([(-40i64, 3i64), (37, -60), (0, 0)]);
        let config = RenderConfig::default();
        let rendered = config.render(&generation);
        assert_eq!(config.rendered_len(&corners(&generation)), Some(rendered.len()));

        let ascii = RenderConfig::default().alive_glyph('#').dead_glyph('.');
        let rendered = ascii.render(&generation);
        assert_eq!(ascii.rendered_len(&corners(&generation)), Some(rendered.len()));
    }

    #[test]
    fn size_hint_overflow_is_none() {
        let bounds = BoundingBox {
            top_right: Coord::new(i64::MAX, i64::MAX),
            bottom_left: Coord::new(i64::MIN, i64::MIN),
        };
        assert_eq!(RenderConfig::default().rendered_len(&bounds), None);
    }

    #[test]
    fn lattice_edge_renders() {
        let block = Generation::from_cells([
            (i64::MAX - 1, i64::MAX - 1),
            (i64::MAX, i64::MAX - 1),
            (i64::MAX - 1, i64::MAX),
            (i64::MAX, i64::MAX),
        ]);
        assert_eq!(print_cells(&block), "\u{25A3} \u{25A3}\n\u{25A3} \u{25A3}\n");
    }
}
