use super::decode::unpack;
use super::encode::check_operand;
use super::{LnsConfig, LnsError, Word, encode_log};

/// Approximate square root by halving the packed log value.
///
/// The shift runs across the exponent/mantissa boundary, so an odd exponent
/// lends its low bit to the top of the mantissa. Error against the true root
/// stays under 3/(2*sqrt(2)) - 1 (about 6.07%) plus integer truncation.
#[inline]
pub fn approx_sqrt_via_log<W: Word>(x: W, cfg: LnsConfig) -> W {
    if x <= W::ONE {
        return x;
    }
    let z = encode_log(x, cfg).shr(1);
    unpack(z, cfg)
}

/// [`approx_sqrt_via_log`] with the operand checked as for encoding.
pub fn try_approx_sqrt_via_log<W: Word>(x: W, cfg: LnsConfig) -> Result<W, LnsError> {
    check_operand(x, cfg)?;
    Ok(approx_sqrt_via_log(x, cfg))
}

/// Same approximation as [`approx_sqrt_via_log`] computed on `x` directly,
/// with the mantissa width taken from `x` itself instead of a configuration.
///
/// The result always fits in half of `W`.
#[inline]
pub fn approx_sqrt_direct<W: Word>(x: W) -> W {
    if x <= W::ONE {
        return x;
    }
    let msb_x = x.msb();
    let msb_z = msb_x >> 1;
    let msb_z_bit = W::ONE.shl(msb_z);
    let mantissa_mask = W::low_mask(msb_x);

    let mantissa_x = x & mantissa_mask;
    // odd exponent: the half bit lost by msb_x >> 1 seeds the mantissa
    let mantissa_z_hi = if msb_x & 1 != 0 { msb_z_bit } else { W::ZERO };
    let mantissa_z_lo = mantissa_x.shr(msb_x - msb_z);
    let mantissa_z = (mantissa_z_hi | mantissa_z_lo).shr(1);
    msb_z_bit | mantissa_z
}
