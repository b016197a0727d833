//! The [`Tile`] type — a single map cell identified by its display glyph —
//! and the fixed pixel-placement convention for graphical front-ends.

use std::fmt;

use crate::position::Position;

/// Pixel width of one tile in a graphical presentation layer.
pub const TILE_WIDTH: i32 = 16;
/// Pixel height of one tile in a graphical presentation layer.
pub const TILE_HEIGHT: i32 = 16;

/// A map tile kind.
///
/// More kinds will arrive with later milestones (a character, a training
/// dummy); the map itself only needs empty floor and solid wall.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Empty,
    Wall,
}

impl Tile {
    /// The display glyph for this tile.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Wall => '█',
        }
    }

    /// The tile for a display glyph, if any. Inverse of [`glyph`](Self::glyph);
    /// also accepts the conventional ASCII spellings `'.'` and `'#'`.
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            ' ' | '.' => Some(Self::Empty),
            '█' | '#' => Some(Self::Wall),
            _ => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Top-left pixel corner of a tile: `(column * TILE_WIDTH, row * TILE_HEIGHT)`.
///
/// Graphical presentation layers rely on this mapping; the core does no
/// other pixel work.
#[inline]
pub const fn pixel_origin(p: Position) -> (i32, i32) {
    (p.column * TILE_WIDTH, p.row * TILE_HEIGHT)
}
