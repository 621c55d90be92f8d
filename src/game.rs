//! Core game state: the next queue, the reserve stack and the commands that
//! move pieces between them

use crate::bag::PieceFactory;
use crate::error::{PieceError, PieceResult};
use crate::piece::Piece;
use crate::queue::PieceQueue;
use crate::stack::ReserveStack;
use crate::swap;

/// Commands the player can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the piece at the front of the queue
    Play,
    /// Move the front piece onto the reserve stack
    Reserve,
    /// Play the top reserved piece
    Use,
    /// Exchange queue front and stack top
    SwapOne,
    /// Exchange the first three queued pieces with the whole stack
    SwapMany,
    /// Deal one new piece straight into the queue
    Insert,
    Exit,
}

/// What happened to the queue after a piece left the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refill {
    /// A fresh piece joined the back of the queue
    Added(Piece),
    /// A fresh piece was dealt but the queue had no room for it
    Dropped(Piece),
    /// No piece was dealt
    None,
}

/// Result of a successful command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Played { piece: Piece, refill: Refill },
    Reserved { piece: Piece, refill: Refill },
    Used { piece: Piece, refill: Refill },
    /// Pieces now at the queue front and the stack top
    SwappedOne { front: Piece, top: Piece },
    SwappedMany,
    Inserted(Piece),
    Exit,
}

/// Owns both containers and the piece factory
#[derive(Debug, Clone)]
pub struct Controller {
    queue: PieceQueue,
    stack: ReserveStack,
    factory: PieceFactory,
}

impl Controller {
    /// Controller with an empty queue and stack
    pub fn new(factory: PieceFactory) -> Self {
        Self {
            queue: PieceQueue::new(),
            stack: ReserveStack::new(),
            factory,
        }
    }

    /// Controller with the queue dealt full, ready for the first command
    pub fn start(factory: PieceFactory) -> Self {
        let mut controller = Self::new(factory);
        controller.fill_queue();
        controller
    }

    /// Deal pieces until the queue is full
    pub fn fill_queue(&mut self) {
        while !self.queue.is_full() {
            let piece = self.factory.spawn();
            if self.queue.enqueue(piece).is_err() {
                break;
            }
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    /// Id the next dealt piece will carry
    pub fn next_id(&self) -> u32 {
        self.factory.next_id()
    }

    /// Run one command. A rejected command leaves both containers untouched.
    pub fn execute(&mut self, command: Command) -> PieceResult<Outcome> {
        let result = match command {
            Command::Play => self.play(),
            Command::Reserve => self.reserve(),
            Command::Use => self.use_reserved(),
            Command::SwapOne => self.swap_one(),
            Command::SwapMany => self.swap_many(),
            Command::Insert => self.insert(),
            Command::Exit => Ok(Outcome::Exit),
        };
        match &result {
            Ok(outcome) => tracing::info!("{:?} -> {:?}", command, outcome),
            Err(e) => tracing::warn!("{:?} rejected: {}", command, e),
        }
        result
    }

    fn play(&mut self) -> PieceResult<Outcome> {
        let piece = self.queue.dequeue()?;
        let refill = self.refill_if_room();
        Ok(Outcome::Played { piece, refill })
    }

    fn reserve(&mut self) -> PieceResult<Outcome> {
        if self.queue.is_empty() {
            return Err(PieceError::QueueEmpty);
        }
        if self.stack.is_full() {
            return Err(PieceError::StackFull);
        }
        let piece = self.queue.dequeue()?;
        self.stack.push(piece)?;
        let refill = self.refill_if_room();
        Ok(Outcome::Reserved { piece, refill })
    }

    fn use_reserved(&mut self) -> PieceResult<Outcome> {
        if self.stack.is_empty() {
            return Err(PieceError::StackEmpty);
        }
        let piece = self.stack.pop()?;
        // Always deals, even into a full queue
        let fresh = self.factory.spawn();
        let refill = match self.queue.enqueue(fresh) {
            Ok(()) => Refill::Added(fresh),
            Err(e) => {
                tracing::warn!("Discarding {}: {}", fresh, e);
                Refill::Dropped(fresh)
            }
        };
        Ok(Outcome::Used { piece, refill })
    }

    fn swap_one(&mut self) -> PieceResult<Outcome> {
        let (front, top) = swap::swap_front_top(&mut self.queue, &mut self.stack)?;
        Ok(Outcome::SwappedOne { front, top })
    }

    fn swap_many(&mut self) -> PieceResult<Outcome> {
        swap::swap_many(&mut self.queue, &mut self.stack)?;
        Ok(Outcome::SwappedMany)
    }

    fn insert(&mut self) -> PieceResult<Outcome> {
        if self.queue.is_full() {
            return Err(PieceError::QueueFull);
        }
        let piece = self.factory.spawn();
        self.queue.enqueue(piece)?;
        Ok(Outcome::Inserted(piece))
    }

    /// Deal one piece into the queue if it has room
    fn refill_if_room(&mut self) -> Refill {
        if self.queue.is_full() {
            return Refill::None;
        }
        let piece = self.factory.spawn();
        match self.queue.enqueue(piece) {
            Ok(()) => Refill::Added(piece),
            Err(_) => Refill::Dropped(piece),
        }
    }
}
