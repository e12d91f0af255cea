use super::{LnsConfig, LnsError, Word};

/// Inverse of [`encode_log`](super::encode_log): reinserts the implicit
/// leading 1 and moves the mantissa back to the exponent's bit position.
///
/// `y <= 1` is returned unchanged. Lossless for operands no wider than
/// `mantissa_bits + 1`; wider operands come back with their low bits zeroed.
#[inline]
pub fn decode_log<W: Word>(y: W, cfg: LnsConfig) -> W {
    if y <= W::ONE {
        return y;
    }
    unpack(y, cfg)
}

#[inline(always)]
pub(crate) fn unpack<W: Word>(y: W, cfg: LnsConfig) -> W {
    let mantissa_bits = cfg.mantissa_bits();
    let leading_1 = W::ONE.shl(mantissa_bits);
    let mantissa_mask = W::low_mask(mantissa_bits);

    let msb = y.shr(mantissa_bits).saturating_u32();
    let mantissa_shift = i64::from(mantissa_bits) - i64::from(msb);
    (leading_1 | (y & mantissa_mask)).shift(-mantissa_shift)
}

/// [`decode_log`] rejecting exponents the configuration could not have
/// produced and results that would not fit `W`.
pub fn try_decode_log<W: Word>(y: W, cfg: LnsConfig) -> Result<W, LnsError> {
    if let Err(err) = cfg.validate_for::<W>() {
        log::trace!("rejecting {cfg:?}: {err}");
        return Err(err);
    }
    if y <= W::ONE {
        return Ok(y);
    }
    let msb = y.shr(cfg.mantissa_bits()).saturating_u32();
    let max = cfg.max_exponent();
    if u64::from(msb) > max {
        log::trace!("packed value {y:?} has exponent {msb}, field holds {max}");
        return Err(LnsError::ExponentOverflow { msb, max });
    }
    if msb >= W::BITS {
        log::trace!("packed value {y:?} decodes past {} bits", W::BITS);
        return Err(LnsError::DecodeOverflow { msb, bits: W::BITS });
    }
    Ok(unpack(y, cfg))
}
