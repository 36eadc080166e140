use log::trace;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::helpers::Shuffled;
use crate::model::{Board, Color, Tile};

/// Side length of the playable board.
pub const BOARD_SIZE: usize = 5;
/// Side length of the assignment (target) board.
pub const ASSIGNMENT_SIZE: usize = 3;

const TILES_PER_COLOR: usize = 4;
const ASSIGNMENT_TILES_PER_COLOR: usize = 2;

/// Generates a fresh 5x5 playable board: 24 colored tiles (4 of each color)
/// on randomized cells, plus the hole at the reserved corner `(4, 4)`. The
/// hole's starting corner is a deliberate invariant; only the colored tiles'
/// positions are randomized. Pass a seed to reproduce a board exactly.
pub fn generate_board(seed: Option<u64>) -> Board {
    let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
    let mut rng = StdRng::seed_from_u64(seed);

    let colors = color_pool(TILES_PER_COLOR);

    // Every cell except the reserved hole corner, row-major.
    let cell_count = BOARD_SIZE * BOARD_SIZE - 1;
    let coordinates: Vec<(usize, usize)> = (0..cell_count)
        .map(|i| (i % BOARD_SIZE, i / BOARD_SIZE))
        .collect();

    // Coordinates are shuffled, the color pool is not: the i-th pool token
    // lands on the i-th shuffled cell.
    let mut tiles: Vec<Tile> = coordinates
        .shuffled(&mut rng)
        .into_iter()
        .zip(colors)
        .enumerate()
        .map(|(id, ((x, y), color))| Tile::new(id, x, y, color))
        .collect();

    tiles.push(Tile::new(
        cell_count,
        BOARD_SIZE - 1,
        BOARD_SIZE - 1,
        Color::Empty,
    ));

    let board = Board::new(tiles, BOARD_SIZE, BOARD_SIZE, seed);
    trace!(target: "generator", "Generated board (seed {}):\n{}", seed, board);
    board
}

/// Generates a fresh 3x3 assignment board: 9 colored tiles, no hole. The
/// pool holds two tokens per color (12 in total) but the grid only has nine
/// cells, so the trailing three tokens are never consumed; the resulting
/// color multiset is the first nine tokens of the fixed pool order.
pub fn generate_assignment(seed: Option<u64>) -> Board {
    let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
    let mut rng = StdRng::seed_from_u64(seed);

    let colors = color_pool(ASSIGNMENT_TILES_PER_COLOR);

    let cell_count = ASSIGNMENT_SIZE * ASSIGNMENT_SIZE;
    let coordinates: Vec<(usize, usize)> = (0..cell_count)
        .map(|i| (i % ASSIGNMENT_SIZE, i / ASSIGNMENT_SIZE))
        .collect();

    let tiles: Vec<Tile> = coordinates
        .shuffled(&mut rng)
        .into_iter()
        .zip(colors)
        .enumerate()
        .map(|(id, ((x, y), color))| Tile::new(id, x, y, color))
        .collect();

    let board = Board::new(tiles, ASSIGNMENT_SIZE, ASSIGNMENT_SIZE, seed);
    trace!(target: "generator", "Generated assignment (seed {}):\n{}", seed, board);
    board
}

/// Each playable color repeated `repeats` times, in enumeration order.
fn color_pool(repeats: usize) -> Vec<Color> {
    Color::PLAYABLE
        .iter()
        .flat_map(|&color| std::iter::repeat(color).take(repeats))
        .collect()
}
