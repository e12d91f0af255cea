use thiserror::Error;

/// Precondition violations reported by the checked entry points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LnsError {
    #[error("invalid configuration: wordsize={wordsize} ebits={ebits}")]
    InvalidConfig { wordsize: u32, ebits: u32 },
    #[error("wordsize {wordsize} does not fit a {bits}-bit word")]
    WordTooNarrow { wordsize: u32, bits: u32 },
    #[error("msb {msb} overflows the exponent field (max {max})")]
    ExponentOverflow { msb: u32, max: u64 },
    #[error("decoded msb {msb} does not fit a {bits}-bit word")]
    DecodeOverflow { msb: u32, bits: u32 },
}
