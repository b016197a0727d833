//! Prefabricated room shapes built from text.
//!
//! A [`Prefab`] parses an ASCII art string into an overlay grid for the
//! compositor. Lines are separated by `'\n'` and must all have the same
//! width; a mapping function decides which tile each glyph stands for.

use std::fmt;

use roomgrid_core::{Grid, Position, Tile};

/// The default glyph mapping: `'#'`/`'█'` is a wall, `'.'`/`' '` is
/// empty floor, anything else is rejected.
pub fn glyph_tile(ch: char) -> Option<Tile> {
    Tile::from_glyph(ch)
}

/// A prefabricated room or map section built from text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefab {
    grid: Grid,
}

impl Prefab {
    /// Parse the given string into a prefab.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but
    /// not from individual lines. Every line must have the same width;
    /// every glyph must be accepted by `map`.
    pub fn parse(s: &str, map: impl Fn(char) -> Option<Tile>) -> Result<Self, PrefabError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self {
                grid: Grid::filled(0, 0, Tile::Empty),
            });
        }

        let mut rows: Vec<Vec<Tile>> = Vec::new();
        let mut width: i32 = -1;
        for (row, line) in s.split('\n').enumerate() {
            let mut tiles = Vec::new();
            for (column, ch) in line.chars().enumerate() {
                match map(ch) {
                    Some(tile) => tiles.push(tile),
                    None => {
                        return Err(PrefabError::UnknownGlyph {
                            ch,
                            pos: Position::new(row as i32, column as i32),
                        });
                    }
                }
            }
            if width >= 0 && tiles.len() as i32 != width {
                return Err(PrefabError::InconsistentSize(s.to_string()));
            }
            width = tiles.len() as i32;
            rows.push(tiles);
        }

        let height = rows.len() as i32;
        let grid = Grid::from_fn(width, height, |p| {
            rows[p.row as usize][p.column as usize]
        });
        Ok(Self { grid })
    }

    /// The parsed overlay grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the prefab, yielding its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Width in cells.
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    /// Height in cells.
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// A copy reflected horizontally (columns mirrored).
    pub fn reflected(&self) -> Self {
        let w = self.grid.width();
        let grid = Grid::from_fn(w, self.grid.height(), |p| {
            self.grid
                .at(Position::new(p.row, w - 1 - p.column))
                .unwrap_or(Tile::Empty)
        });
        Self { grid }
    }

    /// A copy rotated 90° clockwise.
    pub fn rotated(&self) -> Self {
        let h = self.grid.height();
        // New cell (r, c) comes from old cell (h - 1 - c, r).
        let grid = Grid::from_fn(h, self.grid.width(), |p| {
            self.grid
                .at(Position::new(h - 1 - p.column, p.row))
                .unwrap_or(Tile::Empty)
        });
        Self { grid }
    }
}

/// Errors that can occur when parsing a prefab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefabError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A glyph the mapping function does not accept.
    UnknownGlyph { ch: char, pos: Position },
}

impl fmt::Display for PrefabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "prefab: inconsistent line widths:\n{s}"),
            Self::UnknownGlyph { ch, pos } => {
                write!(f, "prefab: unknown glyph {ch:?} at {pos}")
            }
        }
    }
}

impl std::error::Error for PrefabError {}
