//! The [`Grid`] type — a rectangular, row-major arrangement of [`Tile`]s.
//!
//! A `Grid` is an immutable value: generators and the compositor always
//! build new grids, nothing edits one in place. Cloning copies the tiles.

use std::fmt;

use crate::position::Position;
use crate::tile::Tile;

/// A rectangular, row-major grid of [`Tile`]s. Origin at top-left, row
/// grows downward, column grows rightward.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a grid of the given dimensions, every cell set to `tile`.
    ///
    /// Negative dimensions clamp to zero; zero dimensions yield a
    /// well-defined degenerate grid.
    pub fn filled(width: i32, height: i32, tile: Tile) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            tiles: vec![tile; (w * h) as usize],
            width: w,
            height: h,
        }
    }

    /// Create a grid by evaluating `f` at every position, row-major.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Position) -> Tile) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let mut tiles = Vec::with_capacity((w * h) as usize);
        for row in 0..h {
            for column in 0..w {
                tiles.push(f(Position::new(row, column)));
            }
        }
        Self {
            tiles,
            width: w,
            height: h,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` is inside the grid's bounds.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.inside(self)
    }

    /// The tile at `p`, or `None` if `p` is out of bounds.
    pub fn at(&self, p: Position) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.tiles[(p.row * self.width + p.column) as usize])
    }

    /// The tiles of row `row`, or `None` if out of range.
    pub fn row(&self, row: i32) -> Option<&[Tile]> {
        if row < 0 || row >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = row as usize * w;
        Some(&self.tiles[start..start + w])
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        let w = self.width as usize;
        (0..self.height as usize).map(move |r| &self.tiles[r * w..(r + 1) * w])
    }

    /// Row-major iterator over `(Position, Tile)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            cur: Position::ZERO,
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Position, Tile);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}

impl fmt::Display for Grid {
    /// One line of glyphs per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Row-major iterator over the cells of a [`Grid`].
#[derive(Clone, Debug)]
pub struct GridIter<'a> {
    grid: &'a Grid,
    cur: Position,
}

impl Iterator for GridIter<'_> {
    type Item = (Position, Tile);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.grid.width == 0 || self.cur.row >= self.grid.height {
            return None;
        }
        let p = self.cur;
        self.cur.column += 1;
        if self.cur.column >= self.grid.width {
            self.cur.column = 0;
            self.cur.row += 1;
        }
        let tile = self.grid.tiles[(p.row * self.grid.width + p.column) as usize];
        Some((p, tile))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.grid.width == 0 || self.cur.row >= self.grid.height {
            return (0, Some(0));
        }
        let w = self.grid.width as usize;
        let remaining_in_row = (self.grid.width - self.cur.column) as usize;
        let remaining_rows = (self.grid.height - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for GridIter<'_> {}
