//! Arbitrary-precision kernels on [`rug::Integer`].
//!
//! Bit-for-bit the same arithmetic as the fixed-width kernels, without a
//! word to overflow: exponents wider than `ebits` simply grow the packed
//! value. Inputs `<= 1` (negative ones included) are returned unchanged.

use super::{INV_LOG2_10_Q1DOT31, INV_LOG2_E_Q1DOT31, LnsConfig};
use rug::Integer;

#[inline]
fn shift(v: Integer, n: i64) -> Integer {
    let amount = u32::try_from(n.unsigned_abs()).unwrap_or(u32::MAX);
    if n >= 0 { v << amount } else { v >> amount }
}

#[inline]
fn low_mask(n: u32) -> Integer {
    (Integer::from(1) << n) - 1u32
}

#[inline]
fn msb(x: &Integer) -> u32 {
    x.significant_bits().saturating_sub(1)
}

pub fn encode_log(x: &Integer, cfg: LnsConfig) -> Integer {
    if *x <= 1 {
        return x.clone();
    }
    let mantissa_bits = cfg.mantissa_bits();
    let mantissa_mask = low_mask(mantissa_bits);

    let msb = msb(x);
    let mantissa_shift = i64::from(mantissa_bits) - i64::from(msb);
    (Integer::from(msb) << mantissa_bits) | (shift(x.clone(), mantissa_shift) & mantissa_mask)
}

fn unpack(y: &Integer, cfg: LnsConfig) -> Integer {
    let mantissa_bits = cfg.mantissa_bits();
    let leading_1 = Integer::from(1) << mantissa_bits;
    let mantissa_mask = low_mask(mantissa_bits);

    let msb = Integer::from(y >> mantissa_bits).to_u32().unwrap_or(u32::MAX);
    let mantissa_shift = i64::from(mantissa_bits) - i64::from(msb);
    shift(leading_1 | (y.clone() & mantissa_mask), -mantissa_shift)
}

pub fn decode_log(y: &Integer, cfg: LnsConfig) -> Integer {
    if *y <= 1 {
        return y.clone();
    }
    unpack(y, cfg)
}

pub fn approx_sqrt_via_log(x: &Integer, cfg: LnsConfig) -> Integer {
    if *x <= 1 {
        return x.clone();
    }
    let z = encode_log(x, cfg) >> 1u32;
    unpack(&z, cfg)
}

pub fn approx_sqrt_direct(x: &Integer) -> Integer {
    if *x <= 1 {
        return x.clone();
    }
    let msb_x = msb(x);
    let msb_z = msb_x >> 1;
    let msb_z_bit = Integer::from(1) << msb_z;

    let mantissa_x = x.clone() & low_mask(msb_x);
    let mantissa_z_hi = if msb_x & 1 != 0 {
        msb_z_bit.clone()
    } else {
        Integer::new()
    };
    let mantissa_z_lo = mantissa_x >> (msb_x - msb_z);
    let mantissa_z = (mantissa_z_hi | mantissa_z_lo) >> 1u32;
    msb_z_bit | mantissa_z
}

pub fn approx_log10(x: &Integer, cfg: LnsConfig) -> Integer {
    (encode_log(x, cfg) * INV_LOG2_10_Q1DOT31) >> 31u32
}

pub fn approx_ln(x: &Integer, cfg: LnsConfig) -> Integer {
    (encode_log(x, cfg) * INV_LOG2_E_Q1DOT31) >> 31u32
}
