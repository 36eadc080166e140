mod board;
mod color;
mod tile;

pub use board::Board;
pub use color::Color;
pub use tile::Tile;
