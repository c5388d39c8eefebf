//! Errors reported when a buffer does not describe a valid radix-2 transform.

use thiserror::Error;

/// Precondition violations detected before the buffer is touched.
///
/// A rejected call never mutates the caller's buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The sample count was zero.
    #[error("sample count must be at least 1")]
    ZeroLength,
    /// The sample count was not a power of two.
    #[error("sample count {n} is not a power of two")]
    NotPowerOfTwo { n: usize },
    /// The interleaved buffer does not hold exactly `2 * n` values.
    #[error("buffer length mismatch: expected {expected} values, got {actual}")]
    BufferLength { expected: usize, actual: usize },
}

/// Checks that `n` complex samples can be transformed by the radix-2 engine.
pub(crate) fn check_sample_count(n: usize) -> Result<(), FftError> {
    if n == 0 {
        return Err(FftError::ZeroLength);
    }
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo { n });
    }
    Ok(())
}

/// Checks an interleaved `[re0, im0, re1, im1, ...]` buffer against its sample count.
pub(crate) fn check_interleaved(len: usize, n: usize) -> Result<(), FftError> {
    check_sample_count(n)?;

    // `n` is a power of two that may still overflow when doubled
    let expected = n.checked_mul(2).ok_or(FftError::BufferLength {
        expected: usize::MAX,
        actual: len,
    })?;
    if len != expected {
        return Err(FftError::BufferLength {
            expected,
            actual: len,
        });
    }
    Ok(())
}
