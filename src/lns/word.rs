//! Fixed-width unsigned words for the log-domain kernels.
//!
//! Shifts never panic: shifting by `BITS` or more clears the word, and a
//! negative signed shift runs in the opposite direction.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, BitOr};

mod sealed {
    pub trait Sealed {}
}

/// Unsigned machine word usable as an operand or packed log value.
pub trait Word:
    Copy + Eq + Ord + Hash + Debug + BitAnd<Output = Self> + BitOr<Output = Self> + sealed::Sealed
{
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    fn from_u32(v: u32) -> Self;

    /// Number of significant bits; zero for zero.
    fn bit_length(self) -> u32;

    fn shl(self, n: u32) -> Self;

    fn shr(self, n: u32) -> Self;

    /// `(1 << n) - 1`, saturating to all ones.
    fn low_mask(n: u32) -> Self;

    /// `floor(self * k / 2^31)`, wrapping at the word width.
    fn mul_q31(self, k: u32) -> Self;

    fn saturating_u32(self) -> u32;

    /// Position of the highest set bit. Zero maps to zero.
    #[inline(always)]
    fn msb(self) -> u32 {
        self.bit_length().saturating_sub(1)
    }

    /// Left shift for `n >= 0`, right shift by `|n|` otherwise.
    #[inline(always)]
    fn shift(self, n: i64) -> Self {
        let amount = u32::try_from(n.unsigned_abs()).unwrap_or(u32::MAX);
        if n >= 0 {
            self.shl(amount)
        } else {
            self.shr(amount)
        }
    }
}

macro_rules! impl_word {
    (@common $t:ty) => {
        const BITS: u32 = <$t>::BITS;
        const ZERO: Self = 0;
        const ONE: Self = 1;
        const MAX: Self = <$t>::MAX;

        #[inline(always)]
        fn from_u32(v: u32) -> Self {
            v as $t
        }

        #[inline(always)]
        fn bit_length(self) -> u32 {
            <$t>::BITS - self.leading_zeros()
        }

        #[inline(always)]
        fn shl(self, n: u32) -> Self {
            self.checked_shl(n).unwrap_or(0)
        }

        #[inline(always)]
        fn shr(self, n: u32) -> Self {
            self.checked_shr(n).unwrap_or(0)
        }

        #[inline(always)]
        fn low_mask(n: u32) -> Self {
            if n >= <$t>::BITS {
                <$t>::MAX
            } else {
                (1 << n) - 1
            }
        }

        #[inline(always)]
        fn saturating_u32(self) -> u32 {
            u32::try_from(self).unwrap_or(u32::MAX)
        }
    };
    ($t:ty, wide = $w:ty) => {
        impl sealed::Sealed for $t {}

        impl Word for $t {
            impl_word!(@common $t);

            #[inline(always)]
            fn mul_q31(self, k: u32) -> Self {
                (((self as $w) * (k as $w)) >> 31) as $t
            }
        }
    };
    ($t:ty, split) => {
        impl sealed::Sealed for $t {}

        impl Word for $t {
            impl_word!(@common $t);

            // hi * 2^31 * k / 2^31 is exact; only the low 31 bits need the floor.
            #[inline(always)]
            fn mul_q31(self, k: u32) -> Self {
                let k = k as $t;
                let hi = self >> 31;
                let lo = self & 0x7fff_ffff;
                hi.wrapping_mul(k).wrapping_add((lo * k) >> 31)
            }
        }
    };
}

impl_word!(u32, wide = u64);
impl_word!(u64, wide = u128);
impl_word!(u128, split);
