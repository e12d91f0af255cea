//! Packing geometry shared by the encode/decode kernels.
//!
//! A packed value is `wordsize` bits wide: the top `ebits` hold the
//! exponent (msb position of the operand), the remaining
//! `wordsize - ebits` hold the mantissa with its leading 1 dropped.

use super::{LnsError, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LnsConfig {
    /// Total width of the packed representation.
    pub wordsize: u32,
    /// Bits reserved for the exponent field.
    pub ebits: u32,
}

impl LnsConfig {
    /// 32-bit word with a 5-bit exponent and a 27-bit mantissa.
    pub const DEFAULT: Self = Self::new(32, 5);

    #[inline(always)]
    pub const fn new(wordsize: u32, ebits: u32) -> Self {
        Self { wordsize, ebits }
    }

    /// `wordsize - ebits`, saturating at zero.
    #[inline(always)]
    pub const fn mantissa_bits(self) -> u32 {
        self.wordsize.saturating_sub(self.ebits)
    }

    /// Largest msb position the exponent field can hold.
    #[inline(always)]
    pub const fn max_exponent(self) -> u64 {
        if self.ebits >= u64::BITS {
            u64::MAX
        } else {
            (1u64 << self.ebits) - 1
        }
    }

    /// Widest operand (in bits) that survives encode/decode unchanged.
    #[inline(always)]
    pub const fn lossless_bits(self) -> u32 {
        self.mantissa_bits().saturating_add(1)
    }

    #[inline(always)]
    pub const fn is_lossless(self, bit_length: u32) -> bool {
        bit_length <= self.lossless_bits()
    }

    pub fn validate(self) -> Result<(), LnsError> {
        if self.ebits == 0 || self.ebits >= self.wordsize {
            return Err(LnsError::InvalidConfig {
                wordsize: self.wordsize,
                ebits: self.ebits,
            });
        }
        Ok(())
    }

    /// [`validate`](Self::validate) plus a check that packed values fit `W`.
    pub fn validate_for<W: Word>(self) -> Result<(), LnsError> {
        self.validate()?;
        if self.wordsize > W::BITS {
            return Err(LnsError::WordTooNarrow {
                wordsize: self.wordsize,
                bits: W::BITS,
            });
        }
        Ok(())
    }
}

impl Default for LnsConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let cfg = LnsConfig::default();
        assert_eq!(cfg, LnsConfig::new(32, 5));
        assert_eq!(cfg.mantissa_bits(), 27);
        assert_eq!(cfg.max_exponent(), 31);
        assert_eq!(cfg.lossless_bits(), 28);
        assert!(cfg.is_lossless(28));
        assert!(!cfg.is_lossless(29));
    }

    #[test]
    fn test_degenerate_geometry_saturates() {
        let cfg = LnsConfig::new(8, 40);
        assert_eq!(cfg.mantissa_bits(), 0);
        assert_eq!(cfg.lossless_bits(), 1);
        assert_eq!(LnsConfig::new(128, 64).max_exponent(), u64::MAX);
        assert_eq!(LnsConfig::new(128, 63).max_exponent(), (1u64 << 63) - 1);
    }

    #[test]
    fn test_validate() {
        assert_eq!(LnsConfig::DEFAULT.validate(), Ok(()));
        assert_eq!(
            LnsConfig::new(32, 0).validate(),
            Err(LnsError::InvalidConfig {
                wordsize: 32,
                ebits: 0
            })
        );
        assert_eq!(
            LnsConfig::new(32, 32).validate(),
            Err(LnsError::InvalidConfig {
                wordsize: 32,
                ebits: 32
            })
        );
        assert_eq!(LnsConfig::new(64, 6).validate_for::<u64>(), Ok(()));
        assert_eq!(
            LnsConfig::new(64, 6).validate_for::<u32>(),
            Err(LnsError::WordTooNarrow {
                wordsize: 64,
                bits: 32
            })
        );
    }
}
