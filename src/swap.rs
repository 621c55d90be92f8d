//! In-place exchanges between the next queue and the reserve stack
//!
//! Neither container changes occupancy. Both operations check every slot
//! they need before touching either side.

use crate::error::{PieceError, PieceResult};
use crate::piece::Piece;
use crate::queue::PieceQueue;
use crate::stack::{ReserveStack, STACK_CAPACITY};

/// How many pieces `swap_many` exchanges
pub const SWAP_DEPTH: usize = 3;

/// Exchange the queue's front with the stack's top.
///
/// Returns the pieces now sitting at the queue front and stack top.
pub fn swap_front_top(queue: &mut PieceQueue, stack: &mut ReserveStack) -> PieceResult<(Piece, Piece)> {
    let front = queue.front().ok_or(PieceError::QueueEmpty)?;
    let top = stack.top().ok_or(PieceError::StackEmpty)?;
    queue.replace_at(0, top)?;
    stack.replace_at(0, front)?;
    tracing::debug!("Swapped queue front {} with stack top {}", front, top);
    Ok((top, front))
}

/// Exchange the first three queued pieces with the three reserved ones:
/// front with top, front+1 with middle, front+2 with bottom.
pub fn swap_many(queue: &mut PieceQueue, stack: &mut ReserveStack) -> PieceResult<()> {
    if queue.len() < SWAP_DEPTH || stack.len() < STACK_CAPACITY {
        return Err(PieceError::SwapUnavailable {
            queued: queue.len(),
            reserved: stack.len(),
        });
    }
    for i in 0..SWAP_DEPTH {
        let queued = queue.get(i).ok_or(PieceError::IndexOutOfRange {
            index: i,
            len: queue.len(),
        })?;
        let reserved = stack.get(i).ok_or(PieceError::IndexOutOfRange {
            index: i,
            len: stack.len(),
        })?;
        queue.replace_at(i, reserved)?;
        stack.replace_at(i, queued)?;
    }
    tracing::debug!("Swapped {} pieces between queue and stack", SWAP_DEPTH);
    Ok(())
}
