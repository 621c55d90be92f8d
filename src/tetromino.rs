//! Tetromino type labels
//!
//! Only the four shapes the reserve game deals out: I, O, T and L.

use crossterm::style::Color;
use std::fmt;

/// The tetromino types a piece can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I, // Cyan - long bar
    O, // Yellow - square
    T, // Purple - T-shape
    L, // Orange - L-shape
}

impl TetrominoType {
    /// Get the color for this tetromino
    pub fn color(&self) -> Color {
        match self {
            TetrominoType::I => Color::Cyan,
            TetrominoType::O => Color::Yellow,
            TetrominoType::T => Color::Magenta,
            TetrominoType::L => Color::Rgb { r: 255, g: 165, b: 0 }, // Orange
        }
    }

    /// Single-letter label shown in the queue and stack
    pub fn symbol(&self) -> char {
        match self {
            TetrominoType::I => 'I',
            TetrominoType::O => 'O',
            TetrominoType::T => 'T',
            TetrominoType::L => 'L',
        }
    }

    /// Get all tetromino types for random selection
    pub fn all() -> [TetrominoType; 4] {
        [
            TetrominoType::I,
            TetrominoType::O,
            TetrominoType::T,
            TetrominoType::L,
        ]
    }
}

impl fmt::Display for TetrominoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_types_are_distinct() {
        let symbols: HashSet<_> = TetrominoType::all().iter().map(|t| t.symbol()).collect();
        assert_eq!(symbols.len(), 4);
    }

    #[test]
    fn test_display_uses_symbol() {
        assert_eq!(TetrominoType::L.to_string(), "L");
        assert_eq!(TetrominoType::I.to_string(), "I");
    }
}
