//! Population count of 32-bit and 64-bit words.
//!
//! Two algorithms are provided for each width and callers pick one based on the
//! bit density they expect:
//!
//! - `popcount64` / `popcount32` run a fixed sequence of shift, mask and add
//!   steps (SWAR), so their cost does not depend on the input.
//! - `popcount64_sparse` / `popcount32_sparse` clear the lowest set bit until the
//!   word is empty, so their cost grows with the number of set bits.

const M1_64: u64 = 0x5555_5555_5555_5555;
const M2_64: u64 = 0x3333_3333_3333_3333;
const M4_64: u64 = 0x0F0F_0F0F_0F0F_0F0F;
const H01_64: u64 = 0x0101_0101_0101_0101;

const M1_32: u32 = 0x5555_5555;
const M2_32: u32 = 0x3333_3333;
const M4_32: u32 = 0x0F0F_0F0F;
const H01_32: u32 = 0x0101_0101;

/// Counts the set bits of a 64-bit word in constant time.
#[inline]
pub const fn popcount64(word: u64) -> u64 {
    let mut i = word;
    i -= (i >> 1) & M1_64;
    i = (i & M2_64) + ((i >> 2) & M2_64);
    i = (i + (i >> 4)) & M4_64;
    // The top byte of the product holds the sum of all bytes.
    i.wrapping_mul(H01_64) >> 56
}

/// Counts the set bits of a 32-bit word in constant time.
#[inline]
pub const fn popcount32(word: u32) -> u32 {
    let mut i = word;
    i -= (i >> 1) & M1_32;
    i = (i & M2_32) + ((i >> 2) & M2_32);
    i = (i + (i >> 4)) & M4_32;
    i.wrapping_mul(H01_32) >> 24
}

/// Counts the set bits of a 64-bit word, one iteration per set bit.
#[inline]
pub const fn popcount64_sparse(word: u64) -> u64 {
    let mut i = word;
    let mut count = 0;
    while i != 0 {
        i &= i - 1;
        count += 1;
    }
    count
}

/// Counts the set bits of a 32-bit word, one iteration per set bit.
#[inline]
pub const fn popcount32_sparse(word: u32) -> u32 {
    let mut i = word;
    let mut count = 0;
    while i != 0 {
        i &= i - 1;
        count += 1;
    }
    count
}
