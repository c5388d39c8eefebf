//! In-place bit-reversal permutations.
//!
//! The iterative Cooley-Tukey FFT combines neighbouring sub-transforms, which only works if the
//! input has first been reordered so that element `i` sits at index `rev(i)`, where `rev`
//! reverses the `log2(N)` low bits of `i`. The permutation is its own inverse.
//!
//! Both algorithms here are generic over the element type, so the FFT permutes whole
//! `[re, im]` samples with a single swap.
//!
//! # References
//!
//! [1] W. H. Press et al., "Numerical Recipes in C++", 2nd ed., section 12.2.
//! [2] <https://www.katjaas.nl/bitreversal/bitreversal.html>

use crate::error::{check_sample_count, FftError};
use crate::options::BitReverseAlgorithm;

/// Applies the bit-reversal permutation to `buf`, whose length must be a power of two.
///
/// This is the first stage of the FFT, exposed on its own so it can be applied to any
/// element type.
///
/// # Errors
///
/// Returns [`FftError::ZeroLength`] or [`FftError::NotPowerOfTwo`] if `buf.len()` is not a
/// positive power of two. `buf` is left untouched in that case.
pub fn bit_reverse_permutation<T>(
    buf: &mut [T],
    algorithm: BitReverseAlgorithm,
) -> Result<(), FftError> {
    check_sample_count(buf.len())?;
    bit_reverse(buf, algorithm);
    Ok(())
}

/// Dispatches to the selected algorithm. `buf.len()` must already be validated.
pub(crate) fn bit_reverse<T>(buf: &mut [T], algorithm: BitReverseAlgorithm) {
    match algorithm {
        BitReverseAlgorithm::Carry => bit_rev_carry(buf),
        BitReverseAlgorithm::Gray => bit_rev_gray(buf, buf.len().ilog2() as usize),
    }
}

/// Forward scan with a bit-reversed counter `j`.
///
/// Incrementing a reversed counter means adding the highest bit and carrying downwards:
/// while the current bit is already set, clear it and move to the next lower bit.
/// Each pair is swapped once, when it is first reached from the smaller index.
pub(crate) fn bit_rev_carry<T>(buf: &mut [T]) {
    let n = buf.len();
    let mut j = 0;

    for i in 0..n {
        if j > i {
            buf.swap(i, j);
        }

        let mut m = n >> 1;
        while m >= 1 && j >= m {
            j -= m;
            m >>= 1;
        }
        j += m;
    }
}

/// Gray code driven permutation over `N / 4` iterations.
///
/// Instead of counting `i` upward, the loop walks the even indices in Gray code order, so each
/// step flips exactly one bit of `forward` and the mirrored bit of `rev`. Every even pair also
/// fixes its bitwise complement and its odd neighbour, which is why a quarter of the iterations
/// suffice. Sizes below 4 need no swaps and fall through the loop.
///
/// ## References
/// [1] <https://www.katjaas.nl/bitreversal/bitreversal.html>
pub(crate) fn bit_rev_gray<T>(buf: &mut [T], log_n: usize) {
    let mut nodd: usize;
    let mut noddrev; // bitwise negated or odd values

    let big_n = 1 << log_n;
    let halfn = big_n >> 1;
    let quartn = big_n >> 2;
    let nmin1 = big_n - 1;

    let mut forward = halfn;
    let mut rev = 1;

    let mut i: usize = quartn;
    while i > 0 {
        // Gray code generator for even values
        let zeros = i.trailing_zeros();
        forward ^= 2 << zeros; // toggle one bit of forward
        rev ^= quartn >> zeros; // toggle the mirrored bit of rev

        // swap even and ~even conditionally
        if forward < rev {
            buf.swap(forward, rev);
            nodd = nmin1 ^ forward;
            noddrev = nmin1 ^ rev;
            buf.swap(nodd, noddrev);
        }

        // odd values are derived from the even ones and always swapped
        nodd = forward ^ 1;
        noddrev = rev ^ halfn;
        buf.swap(nodd, noddrev);
        i -= 1;
    }
}
