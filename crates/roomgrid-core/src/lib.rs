//! **roomgrid-core** — core types for a tile-map composition toolkit.
//!
//! This crate provides the foundational values used across the *roomgrid*
//! workspace: integer positions, display tiles, the immutable row-major
//! grid, and the pixel-placement convention for graphical front-ends.

pub mod grid;
pub mod position;
pub mod tile;

pub use grid::Grid;
pub use position::Position;
pub use tile::{Tile, TILE_HEIGHT, TILE_WIDTH, pixel_origin};
