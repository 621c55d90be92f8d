//! Reserve stack
//!
//! Fixed-size LIFO. Slot `len - 1` is the top; offsets used by the swap
//! operations count down from there.

use crate::error::{PieceError, PieceResult};
use crate::piece::Piece;

/// Number of pieces that can be held in reserve
pub const STACK_CAPACITY: usize = 3;

/// Array-backed stack of reserved pieces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveStack {
    slots: [Option<Piece>; STACK_CAPACITY],
    len: usize,
}

impl Default for ReserveStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ReserveStack {
    pub fn new() -> Self {
        Self {
            slots: [None; STACK_CAPACITY],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        STACK_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == STACK_CAPACITY
    }

    /// Slot for an offset counted from the top
    fn slot(&self, offset: usize) -> Option<usize> {
        self.len.checked_sub(offset)?.checked_sub(1)
    }

    pub fn push(&mut self, piece: Piece) -> PieceResult<()> {
        if self.is_full() {
            return Err(PieceError::StackFull);
        }
        self.slots[self.len] = Some(piece);
        self.len += 1;
        tracing::debug!("Pushed {} ({} reserved)", piece, self.len);
        Ok(())
    }

    pub fn pop(&mut self) -> PieceResult<Piece> {
        let top = self.slot(0).ok_or(PieceError::StackEmpty)?;
        let piece = self.slots[top].take().ok_or(PieceError::StackEmpty)?;
        self.len -= 1;
        tracing::debug!("Popped {} ({} reserved)", piece, self.len);
        Ok(piece)
    }

    /// Peek at the most recently reserved piece
    pub fn top(&self) -> Option<Piece> {
        self.get(0)
    }

    pub fn get(&self, offset: usize) -> Option<Piece> {
        self.slot(offset).and_then(|slot| self.slots[slot])
    }

    fn get_mut(&mut self, offset: usize) -> Option<&mut Piece> {
        let slot = self.slot(offset)?;
        self.slots[slot].as_mut()
    }

    /// Overwrite the piece `offset` below the top, returning the one it displaced
    pub fn replace_at(&mut self, offset: usize, piece: Piece) -> PieceResult<Piece> {
        let len = self.len;
        let current = self
            .get_mut(offset)
            .ok_or(PieceError::IndexOutOfRange { index: offset, len })?;
        Ok(std::mem::replace(current, piece))
    }

    /// Pieces from top to bottom
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.slots[..self.len].iter().rev().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tetromino::TetrominoType;

    fn piece(id: u32) -> Piece {
        Piece::new(TetrominoType::O, id)
    }

    #[test]
    fn test_lifo_order() {
        let mut stack = ReserveStack::new();
        stack.push(piece(1)).unwrap();
        stack.push(piece(2)).unwrap();
        assert_eq!(stack.pop().unwrap().id, 2);
        stack.push(piece(3)).unwrap();
        assert_eq!(stack.pop().unwrap().id, 3);
        assert_eq!(stack.pop().unwrap().id, 1);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_bounds() {
        let mut stack = ReserveStack::new();
        assert_eq!(stack.pop(), Err(PieceError::StackEmpty));
        assert_eq!(stack.top(), None);
        for id in 0..3 {
            stack.push(piece(id)).unwrap();
        }
        assert!(stack.is_full());
        assert_eq!(stack.push(piece(9)), Err(PieceError::StackFull));
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.top().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_iter_top_to_bottom() {
        let mut stack = ReserveStack::new();
        for id in [10, 11, 12] {
            stack.push(piece(id)).unwrap();
        }
        assert_eq!(stack.iter().map(|p| p.id).collect::<Vec<_>>(), vec![12, 11, 10]);
        assert_eq!(stack.iter().count(), 3);
    }

    #[test]
    fn test_replace_at_counts_from_top() {
        let mut stack = ReserveStack::new();
        for id in [10, 11, 12] {
            stack.push(piece(id)).unwrap();
        }
        assert_eq!(stack.replace_at(2, piece(50)).unwrap().id, 10);
        assert_eq!(stack.iter().map(|p| p.id).collect::<Vec<_>>(), vec![12, 11, 50]);
        assert_eq!(
            stack.replace_at(3, piece(51)),
            Err(PieceError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_replace_on_empty_stack() {
        let mut stack = ReserveStack::new();
        assert_eq!(
            stack.replace_at(0, piece(1)),
            Err(PieceError::IndexOutOfRange { index: 0, len: 0 })
        );
    }
}
