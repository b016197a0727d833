//! [`FloorPlan`] — a declarative description of a composed map.
//!
//! The plan replaces ad-hoc mutable bootstrap state with an explicit,
//! pure build step: describe the base floor and the stamps once, then
//! call [`build`](FloorPlan::build) from the composition root.

use roomgrid_core::{Grid, Position};

use crate::compose::place_at;
use crate::generate::{floor, room};

/// A base floor plus an ordered list of overlays to stamp onto it.
///
/// Stamps are applied in insertion order, so on any overlap the
/// last-added stamp wins.
#[derive(Clone, Debug, Default)]
pub struct FloorPlan {
    width: i32,
    height: i32,
    stamps: Vec<(Position, Grid)>,
}

impl FloorPlan {
    /// A plan for a bare `width`×`height` floor.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            stamps: Vec::new(),
        }
    }

    /// Add a walled room of the given size at `at` (builder).
    pub fn room(self, width: i32, height: i32, at: Position) -> Self {
        self.overlay(room(width, height), at)
    }

    /// Add an arbitrary overlay grid at `at` (builder).
    pub fn overlay(mut self, grid: Grid, at: Position) -> Self {
        self.stamps.push((at, grid));
        self
    }

    /// Compose the plan into a finished grid.
    ///
    /// Pure: building twice yields equal grids, and the plan can keep
    /// being extended afterwards.
    pub fn build(&self) -> Grid {
        self.stamps
            .iter()
            .fold(floor(self.width, self.height), |base, (at, overlay)| {
                place_at(&base, overlay, *at)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomgrid_core::Tile;

    #[test]
    fn empty_plan_is_bare_floor() {
        assert_eq!(FloorPlan::new(6, 4).build(), floor(6, 4));
    }

    #[test]
    fn single_room_matches_direct_composition() {
        let plan = FloorPlan::new(30, 30).room(13, 10, Position::new(1, 1));
        let direct = place_at(&floor(30, 30), &room(13, 10), Position::new(1, 1));
        assert_eq!(plan.build(), direct);
    }

    #[test]
    fn build_is_pure_and_repeatable() {
        let plan = FloorPlan::new(10, 10).room(4, 4, Position::new(2, 2));
        assert_eq!(plan.build(), plan.build());
    }

    #[test]
    fn later_stamp_wins_on_overlap() {
        let g = FloorPlan::new(8, 8)
            .room(4, 4, Position::new(0, 0))
            .room(4, 4, Position::new(2, 2))
            .build();
        // Interior of the second room overwrites the first room's corner.
        assert_eq!(g.at(Position::new(3, 3)), Some(Tile::Empty));
        assert_eq!(g.at(Position::new(2, 2)), Some(Tile::Wall));
    }
}
