//! Geometry primitives: [`Position`].

use std::fmt;
use std::ops::{Add, Sub};

use crate::grid::Grid;

/// A 2D integer coordinate. Row grows down, column grows right
/// (screen coordinates). Also used as a relative offset vector, so both
/// components may be negative.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, column: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Component-wise sum. Also available as `a + b`.
    #[inline]
    pub const fn plus(self, other: Self) -> Self {
        Self {
            row: self.row + other.row,
            column: self.column + other.column,
        }
    }

    /// Component-wise difference. Also available as `a - b`.
    #[inline]
    pub const fn minus(self, other: Self) -> Self {
        Self {
            row: self.row - other.row,
            column: self.column - other.column,
        }
    }

    /// Return a position shifted by (drow, dcolumn).
    #[inline]
    pub const fn shift(self, drow: i32, dcolumn: i32) -> Self {
        Self {
            row: self.row + drow,
            column: self.column + dcolumn,
        }
    }

    /// Whether the position falls inside the grid's bounds.
    ///
    /// True iff `0 <= row < grid.height()` and `0 <= column < grid.width()`.
    /// Negative or out-of-range coordinates return false; never panics.
    #[inline]
    pub fn inside(self, grid: &Grid) -> bool {
        self.row >= 0
            && self.column >= 0
            && self.row < grid.height()
            && self.column < grid.width()
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.plus(rhs)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.minus(rhs)
    }
}
