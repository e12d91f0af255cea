use super::{LnsConfig, LnsError, Word};

/// Packs `x` as `(msb << mantissa_bits) | mantissa`.
///
/// `x <= 1` is returned unchanged. When `msb > mantissa_bits` the mantissa
/// shift goes negative and the low `msb - mantissa_bits` bits of `x` are
/// truncated. Exponents wider than `ebits` are not masked off.
#[inline]
pub fn encode_log<W: Word>(x: W, cfg: LnsConfig) -> W {
    if x <= W::ONE {
        return x;
    }
    let mantissa_bits = cfg.mantissa_bits();
    let mantissa_mask = W::low_mask(mantissa_bits);

    let msb = x.msb();
    let mantissa_shift = i64::from(mantissa_bits) - i64::from(msb);
    W::from_u32(msb).shl(mantissa_bits) | (x.shift(mantissa_shift) & mantissa_mask)
}

/// [`encode_log`] with the configuration and exponent range checked first.
pub fn try_encode_log<W: Word>(x: W, cfg: LnsConfig) -> Result<W, LnsError> {
    check_operand(x, cfg)?;
    Ok(encode_log(x, cfg))
}

pub(crate) fn check_operand<W: Word>(x: W, cfg: LnsConfig) -> Result<(), LnsError> {
    if let Err(err) = cfg.validate_for::<W>() {
        log::trace!("rejecting {cfg:?}: {err}");
        return Err(err);
    }
    if x > W::ONE {
        let msb = x.msb();
        let max = cfg.max_exponent();
        if u64::from(msb) > max {
            log::trace!("operand {x:?} has msb {msb}, exponent field holds {max}");
            return Err(LnsError::ExponentOverflow { msb, max });
        }
    }
    Ok(())
}
