use std::fmt::Debug;

use bitvec::prelude::*;

/// Position of a bit inside a word, 0 being the least significant bit.
pub type BitIndex = u32;

/// A fixed-width unsigned integer used as a bitboard.
///
/// Only `u32` and `u64` implement it. Every shift is logical since the
/// implementing types are unsigned.
pub trait Word: Copy + Eq + Debug {
    const BITS: u32;
    const ZERO: Self;

    fn is_zero(self) -> bool;

    /// Whether bit 0 is set.
    fn low_bit(self) -> bool;

    /// Logical shift right by one.
    fn shift_down(self) -> Self;

    /// Clears the lowest set bit, leaving zero unchanged.
    fn clear_lowest(self) -> Self;

    fn first_one(self) -> Option<BitIndex>;

    /// Indices of the unset bits in `0..width`, ascending. `width` is clamped to
    /// `Self::BITS`.
    fn zeros_within(self, width: u32) -> Vec<BitIndex>;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {
        $(
            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }

                #[inline]
                fn low_bit(self) -> bool {
                    self & 1 != 0
                }

                #[inline]
                fn shift_down(self) -> Self {
                    self >> 1
                }

                #[inline]
                fn clear_lowest(self) -> Self {
                    self & self.wrapping_sub(1)
                }

                #[inline]
                fn first_one(self) -> Option<BitIndex> {
                    let z = self.trailing_zeros();
                    if z == Self::BITS {
                        None
                    } else {
                        Some(z)
                    }
                }

                fn zeros_within(self, width: u32) -> Vec<BitIndex> {
                    let width = width.min(Self::BITS) as usize;
                    self.view_bits::<Lsb0>()[..width]
                        .iter_zeros()
                        .map(|index| index as BitIndex)
                        .collect()
                }
            }
        )*
    };
}

impl_word!(u32, u64);
