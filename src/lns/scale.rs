//! Base-10 and natural logarithms rescaled from the packed base-2 value.
//!
//! Results keep the log-domain fixed-point scale: the low `mantissa_bits`
//! bits are the fraction.

use super::{LnsConfig, Word, encode_log};

/// 1 / log2(10) in Q1.31.
pub const INV_LOG2_10_Q1DOT31: u32 = 0x2688_26a1;
/// 1 / log2(e) in Q1.31.
pub const INV_LOG2_E_Q1DOT31: u32 = 0x58b9_0bfc;

#[inline]
pub fn approx_log10<W: Word>(x: W, cfg: LnsConfig) -> W {
    encode_log(x, cfg).mul_q31(INV_LOG2_10_Q1DOT31)
}

#[inline]
pub fn approx_ln<W: Word>(x: W, cfg: LnsConfig) -> W {
    encode_log(x, cfg).mul_q31(INV_LOG2_E_Q1DOT31)
}
