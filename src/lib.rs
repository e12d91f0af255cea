#![no_std]

#[cfg(test)]
extern crate std;

pub mod lns;

pub use lns::{
    LnsConfig, LnsError, Word, approx_ln, approx_log10, approx_sqrt_direct, approx_sqrt_via_log,
    decode_log, encode_log, try_approx_sqrt_via_log, try_decode_log, try_encode_log,
};
