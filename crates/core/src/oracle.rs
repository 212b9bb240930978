//! Legality oracle - pure predicates over a piece and the landscape
//!
//! None of these functions mutate anything. The game state asks them before
//! applying a move, a rotation or a placement.

use crate::landscape::{Landscape, Scene};
use crate::piece::Piece;
use crate::types::Position;

/// Bounds check against `[0, max_x] x [0, max_y]`
pub fn within_scene(scene: Scene, pos: Position) -> bool {
    scene.contains(pos)
}

/// Would a cell at `pos` overlap the landscape? (off-scene is never occupied)
pub fn overlaps_landscape(pos: Position, landscape: &Landscape) -> bool {
    landscape.is_occupied(pos)
}

/// A cell rests when the landscape holds the cell directly below it.
/// Off-scene cells never rest.
pub fn is_resting_cell(pos: Position, landscape: &Landscape) -> bool {
    if !landscape.scene().contains(pos) {
        return false;
    }
    landscape.is_occupied(pos.offset(0, 1))
}

fn can_shift(piece: &Piece, landscape: &Landscape, dx: i32) -> bool {
    let max_x = landscape.scene().max_x();
    piece.occupied_cells().iter().all(|&cell| {
        let shifted = cell.offset(dx, 0);
        shifted.x >= 0 && shifted.x <= max_x && !overlaps_landscape(shifted, landscape)
    })
}

/// Every cell can step one column left without leaving the scene or
/// overlapping the landscape. Cells above the ceiling only need a valid column.
pub fn can_move_left(piece: &Piece, landscape: &Landscape) -> bool {
    can_shift(piece, landscape, -1)
}

/// Mirror of [`can_move_left`]
pub fn can_move_right(piece: &Piece, landscape: &Landscape) -> bool {
    can_shift(piece, landscape, 1)
}

/// Rotation legality with the origin held fixed.
///
/// Only the right edge is checked: a rotated cell with `x > max_x` rejects,
/// cells above the ceiling or left of column 0 do not. Every rotated cell must
/// also be free of landscape.
pub fn can_rotate(piece: &Piece, landscape: &Landscape) -> bool {
    let max_x = landscape.scene().max_x();
    piece
        .rotated_cells()
        .iter()
        .all(|&cell| cell.x <= max_x && !overlaps_landscape(cell, landscape))
}

/// Any cell sits on the floor row
pub fn is_on_ground(piece: &Piece, scene: Scene) -> bool {
    piece
        .occupied_cells()
        .iter()
        .any(|cell| cell.y == scene.max_y())
}

/// Any cell has landscape directly below it
pub fn is_resting_on_landscape(piece: &Piece, landscape: &Landscape) -> bool {
    piece
        .occupied_cells()
        .iter()
        .any(|&cell| is_resting_cell(cell, landscape))
}

/// Loss condition: the ceiling row holds settled cells
pub fn touches_ceiling(landscape: &Landscape) -> bool {
    landscape.touches_ceiling()
}

/// Would the row under the piece origin be full if the piece were placed now?
///
/// Counts the settled cells of the origin row plus the piece contribution
/// (`length` for horizontal, 1 for vertical). The piece is not merged.
pub fn completes_row(piece: &Piece, landscape: &Landscape) -> bool {
    let row = piece.origin.y;
    landscape.row_len(row) + piece.contribution_to_row() == landscape.scene().width() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Orientation;

    fn empty() -> Landscape {
        Landscape::new(Scene::new(10, 10))
    }

    #[test]
    fn test_horizontal_moves_stop_at_walls() {
        let land = empty();
        let left = Piece::new(Position::new(0, 3), 2, Orientation::Horizontal);
        assert!(!can_move_left(&left, &land));
        assert!(can_move_right(&left, &land));

        let right = Piece::new(Position::new(8, 3), 2, Orientation::Horizontal);
        assert!(!can_move_right(&right, &land));
        assert!(can_move_left(&right, &land));
    }

    #[test]
    fn test_moves_blocked_by_landscape() {
        let land = Landscape::with_cells(Scene::new(10, 10), [Position::new(5, 3)]);
        let piece = Piece::new(Position::new(4, 4), 2, Orientation::Vertical);
        // Cells (4,4) and (4,3); (5,3) blocks the upper cell.
        assert!(!can_move_right(&piece, &land));
        assert!(can_move_left(&piece, &land));
    }

    #[test]
    fn test_vertical_piece_above_ceiling_can_shift() {
        let land = empty();
        let piece = Piece::new(Position::new(3, 0), 4, Orientation::Vertical);
        assert!(can_move_left(&piece, &land));
        assert!(can_move_right(&piece, &land));
    }

    #[test]
    fn test_ground_and_resting() {
        let scene = Scene::new(10, 10);
        let land = Landscape::with_cells(scene, [Position::new(6, 5)]);

        let grounded = Piece::new(Position::new(0, 9), 3, Orientation::Horizontal);
        assert!(is_on_ground(&grounded, scene));

        let resting = Piece::new(Position::new(5, 4), 2, Orientation::Horizontal);
        assert!(is_resting_on_landscape(&resting, &land));

        let falling = Piece::new(Position::new(0, 4), 2, Orientation::Horizontal);
        assert!(!is_on_ground(&falling, scene));
        assert!(!is_resting_on_landscape(&falling, &land));
    }

    #[test]
    fn test_off_scene_cell_never_rests() {
        let land = Landscape::with_cells(Scene::new(10, 10), [Position::new(0, 0)]);
        assert!(!is_resting_cell(Position::new(0, -1), &land));
    }

    #[test]
    fn test_completes_row_counts_prospective_cells() {
        let scene = Scene::new(10, 10);
        let land = Landscape::with_cells(scene, (0..7).map(|x| Position::new(x, 8)));

        let h3 = Piece::new(Position::new(7, 8), 3, Orientation::Horizontal);
        assert!(completes_row(&h3, &land));

        let v3 = Piece::new(Position::new(7, 8), 3, Orientation::Vertical);
        assert!(!completes_row(&v3, &land));
    }
}
