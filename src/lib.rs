//! In-place, iterative radix-2 Cooley-Tukey FFT.
//!
//! The transform operates on a caller-owned buffer of `2 * N` reals holding `N` complex samples
//! interleaved as `[re0, im0, re1, im1, ...]`, and overwrites it with
//!
//! `X[k] = sum_{n=0}^{N-1} x[n] * exp(-2 * pi * i * k * n / N)`
//!
//! in the same layout. `N` must be a power of two. Invalid input is rejected with an
//! [`FftError`] before the buffer is touched.
//!
//! ```
//! let mut data = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
//! ctfft::fft_64(&mut data, 4).unwrap();
//! assert_eq!(data, [1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
//! ```

use bytemuck::cast_slice_mut;
#[cfg(feature = "complex-nums")]
use num_complex::Complex;

use crate::algorithms::dit::fft_dit;
use crate::error::check_interleaved;
#[cfg(feature = "complex-nums")]
use crate::error::check_sample_count;

pub use crate::algorithms::bit_reverse::bit_reverse_permutation;
pub use crate::error::FftError;
pub use crate::options::{BitReverseAlgorithm, Options, TwiddleMode};

pub mod algorithms;
mod error;
mod kernels;
pub mod options;
mod twiddles;

macro_rules! impl_fft_for {
    ($func_name:ident, $func_name_opts:ident, $precision:ty) => {
        /// FFT of `n` complex samples interleaved in `data`, computed in place with the
        /// default [`Options`].
        ///
        /// # Errors
        ///
        /// Returns [`FftError`] if `n` is not a positive power of two or if
        /// `data.len() != 2 * n`. `data` is not modified in that case.
        pub fn $func_name(data: &mut [$precision], n: usize) -> Result<(), FftError> {
            $func_name_opts(data, n, &Options::default())
        }

        /// Same as the variant without options, but with caller-selected [`Options`].
        ///
        /// # Errors
        ///
        /// Returns [`FftError`] if `n` is not a positive power of two or if
        /// `data.len() != 2 * n`. `data` is not modified in that case.
        pub fn $func_name_opts(
            data: &mut [$precision],
            n: usize,
            opts: &Options,
        ) -> Result<(), FftError> {
            if let Err(err) = check_interleaved(data.len(), n) {
                tracing::debug!(n, len = data.len(), %err, "rejecting fft input");
                return Err(err);
            }
            tracing::trace!(
                n,
                twiddles = ?opts.twiddles,
                bit_reverse = ?opts.bit_reverse,
                "fft"
            );

            let samples: &mut [[$precision; 2]] = cast_slice_mut(data);
            fft_dit(samples, opts);
            Ok(())
        }
    };
}

impl_fft_for!(fft_64, fft_64_with_opts, f64);
impl_fft_for!(fft_32, fft_32_with_opts, f32);

#[cfg(feature = "complex-nums")]
macro_rules! impl_fft_complex_for {
    ($func_name:ident, $precision:ty) => {
        /// FFT of a slice of complex numbers, computed in place with the default [`Options`].
        ///
        /// The slice is reinterpreted as interleaved `[re, im]` pairs without copying.
        ///
        /// # Errors
        ///
        /// Returns [`FftError`] if `signal.len()` is not a positive power of two.
        pub fn $func_name(signal: &mut [Complex<$precision>]) -> Result<(), FftError> {
            let n = signal.len();
            if let Err(err) = check_sample_count(n) {
                tracing::debug!(n, %err, "rejecting fft input");
                return Err(err);
            }
            tracing::trace!(n, "fft");

            let samples: &mut [[$precision; 2]] = cast_slice_mut(signal);
            fft_dit(samples, &Options::default());
            Ok(())
        }
    };
}

#[cfg(feature = "complex-nums")]
impl_fft_complex_for!(fft_64_complex, f64);
#[cfg(feature = "complex-nums")]
impl_fft_complex_for!(fft_32_complex, f32);
