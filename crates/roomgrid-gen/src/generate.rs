//! Floor and room generators.

use roomgrid_core::{Grid, Tile};

/// Build a floor: `height` rows of `width` [`Tile::Empty`] cells.
///
/// Total over non-negative dimensions; zero yields a degenerate grid.
pub fn floor(width: i32, height: i32) -> Grid {
    Grid::filled(width, height, Tile::Empty)
}

/// Build a room: a `height`×`width` grid whose border cells are
/// [`Tile::Wall`] and whose interior is [`Tile::Empty`].
///
/// A cell is a wall iff it lies on row 0, row `height - 1`, column 0, or
/// column `width - 1`. For width or height ≤ 2 every cell satisfies a
/// boundary condition and the room degenerates to all-wall; that is
/// intended behavior, not an error.
pub fn room(width: i32, height: i32) -> Grid {
    Grid::from_fn(width, height, |p| {
        let on_boundary =
            p.row == 0 || p.row == height - 1 || p.column == 0 || p.column == width - 1;
        if on_boundary { Tile::Wall } else { Tile::Empty }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomgrid_core::Position;

    #[test]
    fn floor_is_all_empty() {
        for (w, h) in [(0, 0), (1, 1), (4, 4), (7, 3)] {
            let g = floor(w, h);
            assert_eq!(g.height(), h);
            assert_eq!(g.rows().count(), h as usize);
            assert!(g.rows().all(|r| r.len() == w as usize));
            assert!(g.iter().all(|(_, t)| t == Tile::Empty));
        }
    }

    #[test]
    fn room_walls_exactly_on_boundary() {
        let (w, h) = (5, 4);
        let g = room(w, h);
        for (p, t) in g.iter() {
            let boundary = p.row == 0 || p.row == h - 1 || p.column == 0 || p.column == w - 1;
            let expected = if boundary { Tile::Wall } else { Tile::Empty };
            assert_eq!(t, expected, "at {p}");
        }
    }

    #[test]
    fn room_3x3_is_ring_around_one_empty_cell() {
        let g = room(3, 3);
        assert_eq!(g.iter().filter(|&(_, t)| t == Tile::Wall).count(), 8);
        assert_eq!(g.at(Position::new(1, 1)), Some(Tile::Empty));
    }

    #[test]
    fn thin_rooms_degenerate_to_all_wall() {
        for (w, h) in [(1, 1), (2, 2), (1, 5), (2, 7), (6, 2)] {
            let g = room(w, h);
            assert!(
                g.iter().all(|(_, t)| t == Tile::Wall),
                "{w}x{h} room should be all wall"
            );
        }
    }
}
