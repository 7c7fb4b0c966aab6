//! Incremental Zobrist hashing over a `pieces × positions` key table.
//!
//! The running hash is the XOR of the keys of every `(piece, position)` pair
//! currently on the board. Keys and hashes are 32 bits wide so a hash can be used
//! directly by 32-bit hash based containers, at the cost of a higher collision
//! rate than 64-bit Zobrist keys.

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub type Hash = u32;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZobristError {
    #[error("piece {piece} out of bounds for a table of {pieces} pieces")]
    PieceOutOfBounds { piece: usize, pieces: usize },

    #[error("position {position} out of bounds for a table of {positions} positions")]
    PositionOutOfBounds { position: usize, positions: usize },

    #[error("a table of {pieces} pieces x {positions} positions does not fit in memory")]
    TableTooLarge { pieces: usize, positions: usize },
}

/// Random keys, one per `(piece, position)` pair. Never mutated once built.
#[derive(Debug, PartialEq, Eq)]
pub struct ZobristKeys {
    pieces: usize,
    positions: usize,
    keys: Box<[Hash]>,
}

impl ZobristKeys {
    /// Builds a table from OS entropy.
    pub fn new(pieces: usize, positions: usize) -> Result<Self, ZobristError> {
        log::debug!("generating zobrist keys for {pieces} pieces x {positions} positions");
        Self::with(pieces, positions, &mut ChaCha8Rng::from_entropy())
    }

    /// Builds a reproducible table: the same seed always yields the same keys.
    pub fn seeded(pieces: usize, positions: usize, seed: u64) -> Result<Self, ZobristError> {
        log::debug!(
            "generating zobrist keys for {pieces} pieces x {positions} positions, seed={seed}"
        );
        Self::with(pieces, positions, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with<R>(pieces: usize, positions: usize, rng: &mut R) -> Result<Self, ZobristError>
    where
        R: Rng,
    {
        let len = pieces
            .checked_mul(positions)
            .filter(|len| *len <= isize::MAX as usize / std::mem::size_of::<Hash>())
            .ok_or(ZobristError::TableTooLarge { pieces, positions })?;

        let keys = (0..len).map(|_| rng.next_u32()).collect();
        Ok(Self {
            pieces,
            positions,
            keys,
        })
    }

    pub fn pieces(&self) -> usize {
        self.pieces
    }

    pub fn positions(&self) -> usize {
        self.positions
    }

    #[inline]
    pub fn key(&self, piece: usize, position: usize) -> Result<Hash, ZobristError> {
        if piece >= self.pieces {
            return Err(ZobristError::PieceOutOfBounds {
                piece,
                pieces: self.pieces,
            });
        }

        if position >= self.positions {
            return Err(ZobristError::PositionOutOfBounds {
                position,
                positions: self.positions,
            });
        }

        Ok(self.keys[piece * self.positions + position])
    }
}

/// A running Zobrist hash backed by a shared key table.
///
/// Cloning is cheap: the clone references the same keys and starts from the
/// current hash, which keeps hashes of branched game states comparable.
/// The hasher does not track occupancy, so toggling a pair adds the piece if the
/// caller considers it absent and removes it otherwise.
#[derive(Debug, Clone)]
pub struct ZobristHasher {
    keys: Arc<ZobristKeys>,
    hash: Hash,
}

impl ZobristHasher {
    pub fn new(pieces: usize, positions: usize) -> Result<Self, ZobristError> {
        Ok(Self::with_keys(Arc::new(ZobristKeys::new(pieces, positions)?)))
    }

    pub fn seeded(pieces: usize, positions: usize, seed: u64) -> Result<Self, ZobristError> {
        let keys = ZobristKeys::seeded(pieces, positions, seed)?;
        Ok(Self::with_keys(Arc::new(keys)))
    }

    pub fn with_keys(keys: Arc<ZobristKeys>) -> Self {
        Self { keys, hash: 0 }
    }

    /// Shares the key table of `other` and starts from its current hash.
    pub fn from_existing(other: &ZobristHasher) -> Self {
        Self {
            keys: Arc::clone(&other.keys),
            hash: other.hash,
        }
    }

    pub fn keys(&self) -> &Arc<ZobristKeys> {
        &self.keys
    }

    pub fn shares_keys_with(&self, other: &ZobristHasher) -> bool {
        Arc::ptr_eq(&self.keys, &other.keys)
    }

    pub fn reset(&mut self) {
        self.hash = 0;
    }

    /// XORs the key of `(piece, position)` into the running hash and returns the
    /// new hash. Toggling the same pair twice restores the previous hash.
    #[inline]
    pub fn toggle(&mut self, piece: usize, position: usize) -> Result<Hash, ZobristError> {
        self.hash ^= self.keys.key(piece, position)?;
        Ok(self.hash)
    }

    /// Same as `toggle`.
    #[inline]
    pub fn add(&mut self, piece: usize, position: usize) -> Result<Hash, ZobristError> {
        self.toggle(piece, position)
    }

    /// Same as `toggle`.
    #[inline]
    pub fn remove(&mut self, piece: usize, position: usize) -> Result<Hash, ZobristError> {
        self.toggle(piece, position)
    }

    pub fn set(&mut self, hash: Hash) {
        self.hash = hash;
    }

    #[inline]
    pub fn current_hash(&self) -> Hash {
        self.hash
    }
}

impl PartialEq for ZobristHasher {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.shares_keys_with(other)
    }
}

impl Eq for ZobristHasher {}

impl std::hash::Hash for ZobristHasher {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash);
    }
}
