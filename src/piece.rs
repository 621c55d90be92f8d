//! A dealt piece: tetromino type plus creation id

use crate::tetromino::TetrominoType;
use std::fmt;

/// A piece sitting in the next queue or the reserve stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    /// The type of tetromino
    pub kind: TetrominoType,
    /// Creation order, unique for the whole session
    pub id: u32,
}

impl Piece {
    pub fn new(kind: TetrominoType, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}
