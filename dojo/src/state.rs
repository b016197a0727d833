//! Initial game state, built once by the composition root.

use roomgrid_core::{Grid, Position};
use roomgrid_gen::FloorPlan;

/// Width of the floor, in tiles.
pub const FLOOR_WIDTH: i32 = 30;
/// Height of the floor, in tiles.
pub const FLOOR_HEIGHT: i32 = 30;

/// Build the starting map: a bare floor with one walled room near the
/// top-left corner.
pub fn initial_floor() -> Grid {
    FloorPlan::new(FLOOR_WIDTH, FLOOR_HEIGHT)
        .room(13, 10, Position::new(1, 1))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomgrid_core::Tile;

    #[test]
    fn initial_floor_shape() {
        let g = initial_floor();
        assert_eq!(g.width(), FLOOR_WIDTH);
        assert_eq!(g.height(), FLOOR_HEIGHT);
        // Room corners: (1,1) and (10,13).
        assert_eq!(g.at(Position::new(1, 1)), Some(Tile::Wall));
        assert_eq!(g.at(Position::new(10, 13)), Some(Tile::Wall));
        // Room interior and the floor outside stay empty.
        assert_eq!(g.at(Position::new(5, 5)), Some(Tile::Empty));
        assert_eq!(g.at(Position::new(0, 0)), Some(Tile::Empty));
        assert_eq!(g.at(Position::new(20, 20)), Some(Tile::Empty));
    }

    #[test]
    fn building_twice_gives_equal_grids() {
        assert_eq!(initial_floor(), initial_floor());
    }
}
