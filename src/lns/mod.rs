//! Logarithmic number system kernels.
//!
//! An integer `x > 1` is packed as its msb position (exponent) followed by
//! the bits below its leading 1 (mantissa), giving a fixed-point
//! approximation of `log2(x)`. Everything here is pure bit manipulation over
//! [`Word`] types; `bigint` adds the same kernels on `rug::Integer`.
//!
//! Shift convention: a negative mantissa shift moves bits the other way,
//! so operands wider than the mantissa encode with their low bits truncated
//! instead of failing.

mod config;
mod decode;
mod encode;
mod error;
mod scale;
mod sqrt;
mod word;

#[cfg(feature = "bigint")]
pub mod big;

pub use config::LnsConfig;
pub use decode::{decode_log, try_decode_log};
pub use encode::{encode_log, try_encode_log};
pub use error::LnsError;
pub use scale::{INV_LOG2_10_Q1DOT31, INV_LOG2_E_Q1DOT31, approx_ln, approx_log10};
pub use sqrt::{approx_sqrt_direct, approx_sqrt_via_log, try_approx_sqrt_via_log};
pub use word::Word;
