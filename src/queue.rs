//! Next-piece queue
//!
//! A fixed-size circular FIFO. The slot array never grows; `front` walks
//! around it and the tail is always `(front + len) % QUEUE_CAPACITY`.

use crate::error::{PieceError, PieceResult};
use crate::piece::Piece;

/// Number of upcoming pieces the queue holds
pub const QUEUE_CAPACITY: usize = 5;

/// Circular queue of upcoming pieces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    /// Slot of the oldest piece
    front: usize,
    len: usize,
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceQueue {
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            front: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    /// Map a logical offset from the front to a slot
    fn slot(&self, index: usize) -> usize {
        (self.front + index) % QUEUE_CAPACITY
    }

    /// Add a piece at the back
    pub fn enqueue(&mut self, piece: Piece) -> PieceResult<()> {
        if self.is_full() {
            return Err(PieceError::QueueFull);
        }
        let tail = self.slot(self.len);
        self.slots[tail] = Some(piece);
        self.len += 1;
        tracing::debug!("Enqueued {} ({} queued)", piece, self.len);
        Ok(())
    }

    /// Remove the piece at the front
    pub fn dequeue(&mut self) -> PieceResult<Piece> {
        if self.is_empty() {
            return Err(PieceError::QueueEmpty);
        }
        let piece = self.slots[self.front].take().ok_or(PieceError::QueueEmpty)?;
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        tracing::debug!("Dequeued {} ({} queued)", piece, self.len);
        Ok(piece)
    }

    /// Peek at the next piece to play
    pub fn front(&self) -> Option<Piece> {
        self.get(0)
    }

    /// Piece at a logical offset from the front
    pub fn get(&self, index: usize) -> Option<Piece> {
        if index >= self.len {
            return None;
        }
        self.slots[self.slot(index)]
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut Piece> {
        if index >= self.len {
            return None;
        }
        let slot = self.slot(index);
        self.slots[slot].as_mut()
    }

    /// Overwrite the piece at a logical offset, returning the one it displaced
    pub fn replace_at(&mut self, index: usize, piece: Piece) -> PieceResult<Piece> {
        let len = self.len;
        let current = self
            .get_mut(index)
            .ok_or(PieceError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(current, piece))
    }

    /// Pieces from front to back
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tetromino::TetrominoType;

    fn piece(id: u32) -> Piece {
        Piece::new(TetrominoType::all()[id as usize % 4], id)
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = PieceQueue::new();
        for id in 0..5 {
            queue.enqueue(piece(id)).unwrap();
        }
        for id in 0..5 {
            assert_eq!(queue.dequeue().unwrap().id, id);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_full_queue_rejects() {
        let mut queue = PieceQueue::new();
        for id in 0..5 {
            queue.enqueue(piece(id)).unwrap();
        }
        assert!(queue.is_full());
        assert_eq!(queue.enqueue(piece(5)), Err(PieceError::QueueFull));
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.iter().map(|p| p.id).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_queue_rejects() {
        let mut queue = PieceQueue::new();
        assert_eq!(queue.dequeue(), Err(PieceError::QueueEmpty));
        assert_eq!(queue.front(), None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_wraps_around() {
        let mut queue = PieceQueue::new();
        let mut next = 0;
        for _ in 0..5 {
            queue.enqueue(piece(next)).unwrap();
            next += 1;
        }
        // Cycle through the backing array several times
        for expected in 0..17 {
            assert_eq!(queue.dequeue().unwrap().id, expected);
            queue.enqueue(piece(next)).unwrap();
            next += 1;
            assert_eq!(queue.len(), 5);
        }
        assert_eq!(queue.iter().map(|p| p.id).collect::<Vec<_>>(), vec![17, 18, 19, 20, 21]);
        assert_eq!(queue.front().map(|p| p.id), Some(17));
    }

    #[test]
    fn test_iter_is_restartable() {
        let mut queue = PieceQueue::new();
        queue.enqueue(piece(3)).unwrap();
        queue.enqueue(piece(4)).unwrap();
        let first: Vec<_> = queue.iter().collect();
        let second: Vec<_> = queue.iter().collect();
        assert_eq!(first, second);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_replace_at() {
        let mut queue = PieceQueue::new();
        for id in 0..3 {
            queue.enqueue(piece(id)).unwrap();
        }
        queue.dequeue().unwrap();
        let old = queue.replace_at(1, piece(99)).unwrap();
        assert_eq!(old.id, 2);
        assert_eq!(queue.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 99]);
        assert_eq!(
            queue.replace_at(2, piece(100)),
            Err(PieceError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_len_stays_in_bounds() {
        let mut queue = PieceQueue::new();
        for step in 0..40u32 {
            if step % 3 == 0 {
                let _ = queue.dequeue();
            } else {
                let _ = queue.enqueue(piece(step));
            }
            assert!(queue.len() <= queue.capacity());
        }
    }
}
