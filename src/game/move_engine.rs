use log::trace;

use crate::model::Board;

/// Rejected move attempt. The only domain error in this crate; callers
/// either check `is_movable` first or ignore the error, leaving the board
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    IllegalMove { tile_id: usize },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::IllegalMove { tile_id } => {
                write!(f, "tile {} is not adjacent to the empty cell", tile_id)
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// True iff the tile exists, is not the hole itself, and sits exactly one
/// orthogonal step from the hole. Always false on boards without a hole.
pub fn is_movable(board: &Board, tile_id: usize) -> bool {
    let Some(tile) = board.tile(tile_id) else {
        return false;
    };
    if tile.color.is_empty() {
        return false;
    }
    let Some(empty) = board.empty_tile() else {
        return false;
    };
    tile.is_adjacent_to(empty)
}

/// Slides a tile into the hole by swapping their grid coordinates. Ids and
/// colors are untouched and every other tile keeps its cell. Illegal
/// attempts return `MoveError::IllegalMove` and leave the board unchanged.
pub fn apply_move(board: &mut Board, tile_id: usize) -> Result<(), MoveError> {
    if !is_movable(board, tile_id) {
        return Err(MoveError::IllegalMove { tile_id });
    }
    // is_movable established the hole exists.
    let empty_id = match board.empty_tile() {
        Some(empty) => empty.id,
        None => return Err(MoveError::IllegalMove { tile_id }),
    };

    board.swap_coordinates(tile_id, empty_id);
    trace!(target: "move_engine", "Moved tile {} into the empty cell", tile_id);
    Ok(())
}

/// Ids of all currently movable tiles, in stored order. The presentation
/// layer uses this to enable interaction only where a move is legal.
pub fn movable_tiles(board: &Board) -> impl Iterator<Item = usize> + '_ {
    board
        .tiles()
        .iter()
        .filter(|tile| is_movable(board, tile.id))
        .map(|tile| tile.id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_context::test_context;

    use super::*;
    use crate::game::generator::generate_board;
    use crate::model::Color;
    use crate::tests::UsingLogger;

    // Hole at (2,2), red at (2,1).
    const SCENARIO: &str = "ygc\nbmr\nggt";

    #[test]
    fn test_is_movable_requires_adjacency() {
        let board = Board::parse(SCENARIO);
        let red = board.tile_at(2, 1).unwrap().id;
        let corner = board.tile_at(0, 0).unwrap().id;

        assert!(is_movable(&board, red));
        assert!(!is_movable(&board, corner));
    }

    #[test]
    fn test_hole_itself_is_never_movable() {
        let board = Board::parse(SCENARIO);
        let hole = board.empty_tile().unwrap().id;
        assert!(!is_movable(&board, hole));
    }

    #[test]
    fn test_unknown_tile_is_not_movable() {
        let board = Board::parse(SCENARIO);
        assert!(!is_movable(&board, 99));
    }

    #[test]
    fn test_no_moves_on_board_without_hole() {
        let board = Board::parse("rry\nygg\nccb");
        for tile in board.tiles() {
            assert!(!is_movable(&board, tile.id));
        }
    }

    #[test]
    fn test_movable_iff_manhattan_distance_one() {
        let board = Board::parse(SCENARIO);
        let empty = *board.empty_tile().unwrap();
        for tile in board.tiles() {
            let distance = tile.x.abs_diff(empty.x) + tile.y.abs_diff(empty.y);
            assert_eq!(
                is_movable(&board, tile.id),
                distance == 1 && !tile.color.is_empty(),
                "{:?}",
                tile
            );
        }
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_apply_move_swaps_tile_and_hole(_: &mut UsingLogger) {
        let mut board = Board::parse(SCENARIO);
        let red = board.tile_at(2, 1).unwrap().id;

        apply_move(&mut board, red).unwrap();

        let red_tile = board.tile(red).unwrap();
        assert_eq!((red_tile.x, red_tile.y), (2, 2));
        assert_eq!(red_tile.color, Color::Red);

        let empty = board.empty_tile().unwrap();
        assert_eq!((empty.x, empty.y), (2, 1));
    }

    #[test]
    fn test_apply_move_rejects_non_adjacent_tile() {
        let mut board = Board::parse(SCENARIO);
        let corner = board.tile_at(0, 0).unwrap().id;
        let before = board.clone();

        let result = apply_move(&mut board, corner);

        assert_eq!(result, Err(MoveError::IllegalMove { tile_id: corner }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_rejects_the_hole() {
        let mut board = Board::parse(SCENARIO);
        let hole = board.empty_tile().unwrap().id;
        assert!(apply_move(&mut board, hole).is_err());
    }

    #[test]
    fn test_move_is_an_involution() {
        let mut board = generate_board(Some(11));
        let before = board.clone();
        let tile_id = movable_tiles(&board).next().unwrap();

        apply_move(&mut board, tile_id).unwrap();
        assert_ne!(board, before);

        // The moved tile now borders the hole from the other side.
        apply_move(&mut board, tile_id).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_preserves_identity_and_occupancy() {
        let mut board = generate_board(Some(11));
        let identities: Vec<(usize, Color)> = board
            .tiles()
            .iter()
            .map(|tile| (tile.id, tile.color))
            .collect();
        let occupancy: HashSet<(usize, usize)> =
            board.tiles().iter().map(|tile| (tile.x, tile.y)).collect();

        let tile_id = movable_tiles(&board).next().unwrap();
        apply_move(&mut board, tile_id).unwrap();

        let identities_after: Vec<(usize, Color)> = board
            .tiles()
            .iter()
            .map(|tile| (tile.id, tile.color))
            .collect();
        let occupancy_after: HashSet<(usize, usize)> =
            board.tiles().iter().map(|tile| (tile.x, tile.y)).collect();

        assert_eq!(identities_after, identities);
        assert_eq!(occupancy_after, occupancy);
    }

    #[test]
    fn test_fresh_board_has_two_movable_tiles() {
        // The hole starts in a corner, so exactly two tiles border it.
        let board = generate_board(Some(5));
        let movable: Vec<usize> = movable_tiles(&board).collect();
        assert_eq!(movable.len(), 2);
        for id in movable {
            let tile = board.tile(id).unwrap();
            assert!(tile.is_adjacent_to(board.empty_tile().unwrap()));
        }
    }

    #[test]
    fn test_serialization_tracks_the_grid_after_moves() {
        let mut board = Board::parse("rt\nyg");
        let red = board.tile_at(0, 0).unwrap().id;

        apply_move(&mut board, red).unwrap();

        assert_eq!(board.to_grid_string(), "tr\nyg");
    }

    #[test]
    fn test_illegal_move_error_display() {
        let error = MoveError::IllegalMove { tile_id: 3 };
        assert_eq!(error.to_string(), "tile 3 is not adjacent to the empty cell");
    }
}
