//! Piece generation
//!
//! Every piece gets a uniformly random type and an id from a counter that
//! only ever moves forward. The RNG is seeded once and owned here, so a fixed
//! seed replays the same session.

use crate::piece::Piece;
use crate::tetromino::TetrominoType;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded piece factory
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: ChaCha8Rng,
    /// Id handed to the next spawned piece
    next_id: u32,
}

impl PieceFactory {
    /// Create a factory with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_id: 0,
        }
    }

    /// Stamp `id` on a piece of random type. Consumes one RNG draw.
    pub fn generate(&mut self, id: u32) -> Piece {
        let types = TetrominoType::all();
        let kind = types[self.rng.gen_range(0..types.len())];
        Piece::new(kind, id)
    }

    /// Generate a piece with the next unused id
    pub fn spawn(&mut self) -> Piece {
        let id = self.next_id;
        self.next_id += 1;
        let piece = self.generate(id);
        tracing::debug!("Spawned piece {}", piece);
        piece
    }

    /// Id the next spawned piece will carry
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}
