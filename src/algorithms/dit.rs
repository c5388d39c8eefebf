//! Decimation-in-Time (DIT) FFT Implementation
//!
//! The DIT algorithm decomposes the DFT from small to large sub-problems. Input is processed in
//! bit-reversed order, and output is produced in natural order.
//!
//! ## Algorithm Overview
//!
//! 1. Apply bit-reversal to the input samples
//! 2. Start with butterflies of size 2
//! 3. Double the butterfly size every stage (Danielson-Lanczos lemma), up to `N`
//!
//! Everything happens inside the caller's buffer; the only state is the per-stage twiddle
//! generator.
use num_traits::{AsPrimitive, Float, FloatConst};

use crate::algorithms::bit_reverse::bit_reverse;
use crate::kernels::{fft_chunk_2, fft_chunk_4, fft_chunk_n};
use crate::options::{Options, TwiddleMode};
use crate::twiddles::{DirectTwiddles, Twiddles};

/// In-place forward DFT of `samples`, one `[re, im]` pair per complex sample.
///
/// `samples.len()` must be a non-zero power of two; callers validate it.
pub(crate) fn fft_dit<T>(samples: &mut [[T; 2]], opts: &Options)
where
    T: Float + FloatConst + 'static,
    usize: AsPrimitive<T>,
{
    debug_assert!(samples.len().is_power_of_two());
    let log_n = samples.len().ilog2() as usize;

    bit_reverse(samples, opts.bit_reverse);

    for stage in 0..log_n {
        execute_dit_stage(samples, stage, opts.twiddles);
    }
}

/// Execute a single DIT stage, dispatching to the appropriate kernel based on chunk size.
#[inline]
fn execute_dit_stage<T>(samples: &mut [[T; 2]], stage: usize, mode: TwiddleMode)
where
    T: Float + FloatConst + 'static,
    usize: AsPrimitive<T>,
{
    let dist = 1 << stage;
    let chunk_size = dist << 1;

    match (chunk_size, mode) {
        (2, _) => fft_chunk_2(samples),
        (4, _) => fft_chunk_4(samples),
        (_, TwiddleMode::Recurrence) => fft_chunk_n(samples, dist, Twiddles::new(dist)),
        (_, TwiddleMode::Direct) => fft_chunk_n(samples, dist, DirectTwiddles::new(dist)),
    }
}
