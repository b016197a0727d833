//! The compositor: stamp one grid onto another at an offset.

use roomgrid_core::{Grid, Position, Tile};

/// Overlay `overlay` onto `base` at `offset`, returning a new grid with
/// `base`'s dimensions.
///
/// For every cell at absolute position `p` in `base`, the output is
/// `overlay[p - offset]` when that relative position falls inside the
/// overlay, and the original base tile otherwise. Overlay tiles always
/// win where they map; there is no transparent overlay tile. An offset
/// that puts the overlay partially or fully outside `base` silently
/// clips, since iteration is driven by `base`'s shape. Neither input is
/// mutated.
///
/// Compose several rooms by threading the output of one call as the
/// `base` of the next; the last-applied overlay wins on any overlap.
pub fn place_at(base: &Grid, overlay: &Grid, offset: Position) -> Grid {
    Grid::from_fn(base.width(), base.height(), |p| {
        overlay
            .at(p.minus(offset))
            .or_else(|| base.at(p))
            .unwrap_or(Tile::Empty)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{floor, room};

    #[test]
    fn zero_sized_overlay_is_identity() {
        let base = floor(4, 4);
        let out = place_at(&base, &floor(0, 0), Position::new(1, 1));
        assert_eq!(out, base);
    }

    #[test]
    fn overlay_wins_wherever_it_maps() {
        let base = floor(5, 5);
        let overlay = Grid::filled(2, 2, Tile::Wall);
        let offset = Position::new(2, 1);
        let out = place_at(&base, &overlay, offset);
        for (p, t) in out.iter() {
            let rel = p.minus(offset);
            let expected = overlay.at(rel).unwrap_or(Tile::Empty);
            assert_eq!(t, expected, "at {p}");
        }
    }

    #[test]
    fn room_stamped_on_floor() {
        // 4x4 floor, 3x3 room at (1,1): a ring of wall around one empty
        // cell, everything else untouched floor.
        let out = place_at(&floor(4, 4), &room(3, 3), Position::new(1, 1));
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 4);
        for (p, t) in out.iter() {
            let in_room = (1..=3).contains(&p.row) && (1..=3).contains(&p.column);
            let expected = if in_room && p != Position::new(2, 2) {
                Tile::Wall
            } else {
                Tile::Empty
            };
            assert_eq!(t, expected, "at {p}");
        }
    }

    #[test]
    fn oversized_overlay_clips_to_base() {
        let base = floor(5, 5);
        let out = place_at(&base, &room(13, 10), Position::new(1, 1));
        assert_eq!(out.width(), 5);
        assert_eq!(out.height(), 5);
        // Top-left of the room lands at (1,1); rows/columns 1..5 map into
        // the room's interior or its top/left walls, never its far walls.
        assert_eq!(out.at(Position::new(0, 0)), Some(Tile::Empty));
        assert_eq!(out.at(Position::new(1, 1)), Some(Tile::Wall));
        assert_eq!(out.at(Position::new(2, 1)), Some(Tile::Wall));
        assert_eq!(out.at(Position::new(2, 2)), Some(Tile::Empty));
        assert_eq!(out.at(Position::new(4, 4)), Some(Tile::Empty));
    }

    #[test]
    fn fully_outside_overlay_clips_silently() {
        let base = floor(3, 3);
        for offset in [
            Position::new(10, 10),
            Position::new(-10, 0),
            Position::new(0, -10),
        ] {
            let out = place_at(&base, &room(2, 2), offset);
            assert_eq!(out, base);
        }
    }

    #[test]
    fn negative_offset_clips_top_left() {
        // Room hangs off the top-left; only its bottom-right quarter lands.
        let out = place_at(&floor(3, 3), &room(3, 3), Position::new(-1, -1));
        assert_eq!(out.at(Position::new(0, 0)), Some(Tile::Empty)); // room center
        assert_eq!(out.at(Position::new(1, 0)), Some(Tile::Wall));
        assert_eq!(out.at(Position::new(0, 1)), Some(Tile::Wall));
        assert_eq!(out.at(Position::new(1, 1)), Some(Tile::Wall));
        assert_eq!(out.at(Position::new(2, 2)), Some(Tile::Empty));
    }

    #[test]
    fn later_overlay_wins_on_overlap() {
        let base = floor(8, 8);
        let first = place_at(&base, &room(4, 4), Position::new(0, 0));
        let second = place_at(&first, &room(4, 4), Position::new(2, 2));
        // (2,2) is interior to the first room but the second room's
        // top-left wall corner.
        assert_eq!(second.at(Position::new(2, 2)), Some(Tile::Wall));
        // (3,3) is the first room's bottom-right wall corner but interior
        // to the second room.
        assert_eq!(second.at(Position::new(3, 3)), Some(Tile::Empty));
        // Outside the second room the first room survives.
        assert_eq!(second.at(Position::new(0, 0)), Some(Tile::Wall));
    }

    #[test]
    fn inputs_are_not_mutated() {
        let base = floor(4, 4);
        let overlay = room(3, 3);
        let base_before = base.clone();
        let overlay_before = overlay.clone();
        let _ = place_at(&base, &overlay, Position::new(1, 1));
        assert_eq!(base, base_before);
        assert_eq!(overlay, overlay_before);
    }
}
