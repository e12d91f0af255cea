#![allow(dead_code)]

use criterion::{BenchmarkGroup, Criterion, black_box};
use std::time::Duration;

const RNG_A: u64 = 6364136223846793005;
const RNG_C: u64 = 1442695040888963407;

pub fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(RNG_A).wrapping_add(RNG_C);
    *state
}

/// Uniform draws from `min..max` (`max` exclusive, `min < max`).
pub fn gen_range(count: usize, min: u64, max: u64, seed: u64) -> Vec<u64> {
    let mut state = seed;
    let span = max - min;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(min + lcg_next(&mut state) % span);
    }
    values
}

/// Operands spread over every bit length up to `max_bits`.
pub fn gen_bit_lengths(count: usize, max_bits: u32, seed: u64) -> Vec<u64> {
    let mut state = seed;
    let mut values = Vec::with_capacity(count);
    for i in 0..count {
        let bits = (i as u32 % max_bits) + 1;
        let raw = lcg_next(&mut state);
        values.push(if bits == 64 { raw } else { raw & ((1u64 << bits) - 1) });
    }
    values
}

pub fn bench_inputs<F, G>(
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    inputs: &[u64],
    fast: F,
    reference: G,
) where
    F: Fn(u64) -> u64 + Copy,
    G: Fn(u64) -> u64 + Copy,
{
    group.bench_function("fastlns", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for &x in inputs {
                acc = acc.wrapping_add(fast(black_box(x)));
            }
            black_box(acc)
        })
    });
    group.bench_function("reference", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for &x in inputs {
                acc = acc.wrapping_add(reference(black_box(x)));
            }
            black_box(acc)
        })
    });
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(200)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(5))
}

/// Q5.27 log2 via the float unit, the baseline for `encode_log`.
pub fn float_log2_q27(x: u64) -> u64 {
    if x <= 1 {
        return x;
    }
    ((x as f64).log2() * (1u64 << 27) as f64) as u64
}

/// Inverse of [`float_log2_q27`].
pub fn float_exp2_q27(y: u64) -> u64 {
    if y <= 1 {
        return y;
    }
    (y as f64 / (1u64 << 27) as f64).exp2() as u64
}

pub fn exact_isqrt(x: u64) -> u64 {
    x.isqrt()
}
