use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[cfg(test)]
use super::Color;
use super::Tile;

/// The complete, coordinate-complete collection of tiles for one puzzle
/// instance. Produced by the generators in `crate::game::generator` and
/// thereafter only mutated through the move engine; no tile is created or
/// destroyed after generation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
    seed: u64,
}

impl Board {
    pub(crate) fn new(tiles: Vec<Tile>, width: usize, height: usize, seed: u64) -> Self {
        let board = Self {
            tiles,
            width,
            height,
            seed,
        };
        debug_assert!(board.is_coordinate_complete());
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The RNG seed this board was generated from. Boards built from the
    /// same seed are identical.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// All tiles in stored (generation) order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: usize) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    pub fn tile_at(&self, x: usize, y: usize) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.x == x && tile.y == y)
    }

    /// The hole, if this board has one. Assignment boards do not.
    pub fn empty_tile(&self) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.color.is_empty())
    }

    /// Swaps the grid coordinates of two tiles. Identities and colors are
    /// untouched. Unknown ids leave the board unchanged.
    pub(crate) fn swap_coordinates(&mut self, a: usize, b: usize) {
        let index_a = self.tiles.iter().position(|tile| tile.id == a);
        let index_b = self.tiles.iter().position(|tile| tile.id == b);
        if let (Some(index_a), Some(index_b)) = (index_a, index_b) {
            let (ax, ay) = (self.tiles[index_a].x, self.tiles[index_a].y);
            let (bx, by) = (self.tiles[index_b].x, self.tiles[index_b].y);
            self.tiles[index_a].x = bx;
            self.tiles[index_a].y = by;
            self.tiles[index_b].x = ax;
            self.tiles[index_b].y = ay;
        }
    }

    /// Canonical grid-of-letters encoding: one line per row, top to bottom,
    /// each cell as its color letter, columns in increasing `x`. Tiles are
    /// re-sorted by coordinate first, so the output reflects the true grid
    /// even after moves have reordered occupancy relative to storage order.
    pub fn to_grid_string(&self) -> String {
        let mut cells: Vec<&Tile> = self.tiles.iter().collect();
        cells.sort_by_key(|tile| (tile.y, tile.x));
        cells
            .chunks(self.width)
            .map(|row| row.iter().map(|tile| tile.color.letter()).collect::<String>())
            .join("\n")
    }

    /// Every in-bounds cell holds exactly one tile.
    fn is_coordinate_complete(&self) -> bool {
        if self.tiles.len() != self.width * self.height {
            return false;
        }
        let mut seen = vec![false; self.width * self.height];
        for tile in &self.tiles {
            if tile.x >= self.width || tile.y >= self.height {
                return false;
            }
            let cell = tile.y * self.width + tile.x;
            if seen[cell] {
                return false;
            }
            seen[cell] = true;
        }
        true
    }

    #[cfg(test)]
    /// Builds a board from a grid-of-letters string, assigning ids in
    /// row-major order. Counterpart of `to_grid_string`, for test fixtures.
    pub fn parse(input: &str) -> Self {
        let lines: Vec<&str> = input.lines().collect();
        let height = lines.len();
        let width = lines[0].len();

        let mut tiles = Vec::new();
        for (y, line) in lines.iter().enumerate() {
            for (x, letter) in line.chars().enumerate() {
                let color = Color::from_letter(letter).unwrap();
                tiles.push(Tile::new(tiles.len(), x, y, color));
            }
        }

        Self::new(tiles, width, height, 0)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_grid_string())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Board {}x{} (seed {}):\n{}",
            self.width,
            self.height,
            self.seed,
            self.to_grid_string()
        )
    }
}
