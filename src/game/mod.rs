pub mod generator;
pub mod move_engine;
pub mod settings;

pub use generator::{generate_assignment, generate_board, ASSIGNMENT_SIZE, BOARD_SIZE};
pub use move_engine::{apply_move, is_movable, movable_tiles, MoveError};
