//! Enumeration of bit positions inside a word.
//!
//! `unset_bit_positions` keeps the scanning loop of `set_bit_positions` and
//! stops as soon as the remaining word is zero. Unset bits above the highest set
//! bit are therefore never reported, and a zero word reports nothing. Callers
//! that need every unset bit of a board should use `unset_bit_positions_within`,
//! which scans a fixed width.

use crate::word::{BitIndex, Word};

/// Indices of the set bits of `word`, ascending.
pub fn set_bit_positions<W: Word>(word: W) -> Vec<BitIndex> {
    let mut positions = Vec::new();
    let mut word = word;
    let mut index = 0;
    while !word.is_zero() {
        if word.low_bit() {
            positions.push(index);
        }
        index += 1;
        word = word.shift_down();
    }
    positions
}

/// Indices of the unset bits of `word` that lie below its highest set bit,
/// ascending.
///
/// `unset_bit_positions(0b1000u32)` is `[0, 1, 2]` while
/// `unset_bit_positions(0u32)` is empty.
pub fn unset_bit_positions<W: Word>(word: W) -> Vec<BitIndex> {
    let mut positions = Vec::new();
    let mut word = word;
    let mut index = 0;
    while !word.is_zero() {
        if !word.low_bit() {
            positions.push(index);
        }
        index += 1;
        word = word.shift_down();
    }
    positions
}

/// Indices of every unset bit of `word` in `0..width`, ascending. `width` is
/// clamped to the width of `W`.
pub fn unset_bit_positions_within<W: Word>(word: W, width: u32) -> Vec<BitIndex> {
    word.zeros_within(width)
}

/// Lazily walks the set bits of `word` from the lowest up.
#[inline]
pub fn iter_set_bits<W: Word>(word: W) -> SetBits<W> {
    SetBits(word)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBits<W: Word>(W);

impl<W: Word> Iterator for SetBits<W> {
    type Item = BitIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let place = self.0.first_one()?;
        self.0 = self.0.clear_lowest();
        Some(place)
    }
}
