//! Error types for the piece containers and composite commands

use thiserror::Error;

/// Everything that can refuse a queue, stack or swap operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PieceError {
    #[error("the next queue is full")]
    QueueFull,

    #[error("the next queue is empty")]
    QueueEmpty,

    #[error("the reserve stack is full")]
    StackFull,

    #[error("the reserve stack is empty")]
    StackEmpty,

    #[error("position {index} is out of range for {len} pieces")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("swapping three needs at least 3 queued and 3 reserved pieces (queued {queued}, reserved {reserved})")]
    SwapUnavailable { queued: usize, reserved: usize },
}

pub type PieceResult<T> = Result<T, PieceError>;
