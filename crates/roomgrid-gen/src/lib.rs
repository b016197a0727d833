//! **roomgrid-gen** — map generation and composition.
//!
//! Builds the pieces of a tile map (floors, walled rooms, text prefabs)
//! and merges them with the [`place_at`] compositor. Everything here is a
//! pure function over the immutable [`roomgrid_core::Grid`]: composing a
//! map never mutates its inputs.

pub mod compose;
pub mod generate;
pub mod plan;
pub mod prefab;

pub use compose::place_at;
pub use generate::{floor, room};
pub use plan::FloorPlan;
pub use prefab::{Prefab, PrefabError, glyph_tile};
