use serde::{Deserialize, Serialize};

/// The closed set of tile colors. `Empty` marks the hole in the puzzle; it
/// has position and identity like any other tile but can never initiate a
/// move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
    Empty,
}

impl Color {
    /// The six playable colors, in the order the generators consume them.
    pub const PLAYABLE: [Color; 6] = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Cyan,
        Color::Blue,
        Color::Magenta,
    ];

    /// Single-letter code used by the grid serialization.
    pub fn letter(&self) -> char {
        match self {
            Color::Red => 'r',
            Color::Yellow => 'y',
            Color::Green => 'g',
            Color::Cyan => 'c',
            Color::Blue => 'b',
            Color::Magenta => 'm',
            Color::Empty => 't',
        }
    }

    pub fn from_letter(letter: char) -> Option<Color> {
        match letter {
            'r' => Some(Color::Red),
            'y' => Some(Color::Yellow),
            'g' => Some(Color::Green),
            'c' => Some(Color::Cyan),
            'b' => Some(Color::Blue),
            'm' => Some(Color::Magenta),
            't' => Some(Color::Empty),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Color::Empty
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
