//! Butterfly kernels for the decimation-in-time passes.
//!
//! Every kernel works on complex samples stored as `[re, im]` pairs and combines the inputs
//! `a` and `b`, `dist` samples apart, as `(a + w * b, a - w * b)`.
use num_traits::Float;

/// `chunk_size == 2`, so every twiddle factor is `1`
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub(crate) fn fft_chunk_2<T: Float>(samples: &mut [[T; 2]]) {
    samples.chunks_exact_mut(2).for_each(|chunk| {
        let [z0_re, z0_im] = chunk[0];
        let [z1_re, z1_im] = chunk[1];

        chunk[0] = [z0_re + z1_re, z0_im + z1_im];
        chunk[1] = [z0_re - z1_re, z0_im - z1_im];
    });
}

/// `chunk_size == 4`, so hard code twiddle factors `1` and `-i`
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub(crate) fn fft_chunk_4<T: Float>(samples: &mut [[T; 2]]) {
    const DIST: usize = 2;
    const CHUNK_SIZE: usize = DIST << 1;

    samples.chunks_exact_mut(CHUNK_SIZE).for_each(|chunk| {
        let (s0, s1) = chunk.split_at_mut(DIST);

        // W_4^0 = 1
        let [a_re, a_im] = s0[0];
        let [b_re, b_im] = s1[0];
        s0[0] = [a_re + b_re, a_im + b_im];
        s1[0] = [a_re - b_re, a_im - b_im];

        // W_4^1 = -i: (re + i*im) * (-i) = im - i*re
        let [a_re, a_im] = s0[1];
        let [b_re, b_im] = s1[1];
        s0[1] = [a_re + b_im, a_im - b_re];
        s1[1] = [a_re - b_im, a_im + b_re];
    });
}

/// Butterflies the `k`-th pair of every chunk of `2 * dist` samples with the same twiddle
/// factor `w = w_re + i * w_im`.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub(crate) fn fft_chunk_n_group<T: Float>(
    samples: &mut [[T; 2]],
    dist: usize,
    k: usize,
    w_re: T,
    w_im: T,
) {
    let chunk_size = dist << 1;

    samples.chunks_exact_mut(chunk_size).for_each(|chunk| {
        let (s0, s1) = chunk.split_at_mut(dist);

        let [a_re, a_im] = s0[k];
        let [b_re, b_im] = s1[k];

        let t_re = w_re * b_re - w_im * b_im;
        let t_im = w_re * b_im + w_im * b_re;

        s1[k] = [a_re - t_re, a_im - t_im];
        s0[k] = [a_re + t_re, a_im + t_im];
    });
}

/// Runs one full stage: group `k` uses the `k`-th factor yielded by `twiddles`.
pub(crate) fn fft_chunk_n<T, I>(samples: &mut [[T; 2]], dist: usize, twiddles: I)
where
    T: Float,
    I: Iterator<Item = (T, T)>,
{
    twiddles
        .take(dist)
        .enumerate()
        .for_each(|(k, (w_re, w_im))| fft_chunk_n_group(samples, dist, k, w_re, w_im));
}
