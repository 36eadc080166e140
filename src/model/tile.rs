use serde::{Deserialize, Serialize};

use super::Color;

/// A single puzzle piece. `id` is assigned at generation time and never
/// changes; grid coordinates change on every move, identity does not.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: usize,
    pub x: usize,
    pub y: usize,
    pub color: Color,
}

impl Tile {
    pub fn new(id: usize, x: usize, y: usize, color: Color) -> Self {
        Self { id, x, y, color }
    }

    /// True iff `other` is exactly one orthogonal step away. Diagonal
    /// neighbors and the tile's own cell never qualify.
    pub fn is_adjacent_to(&self, other: &Tile) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }

    #[cfg(test)]
    /// Parse a tile from its `Display` form, e.g. "r3@(2,1)".
    pub fn parse(s: &str) -> Self {
        let color = Color::from_letter(s.chars().next().unwrap()).unwrap();
        let (id, coordinates) = s[1..].split_once("@(").unwrap();
        let (x, y) = coordinates.strip_suffix(')').unwrap().split_once(',').unwrap();
        Self {
            id: id.parse().unwrap(),
            x: x.parse().unwrap(),
            y: y.parse().unwrap(),
            color,
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}@({},{})", self.color.letter(), self.id, self.x, self.y)
    }
}

impl std::fmt::Debug for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
