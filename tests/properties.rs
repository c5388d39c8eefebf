//! Property tests for the transform and the bit-reversal stage.
//!
//! Reproduce a failure: `PROPTEST_SEED=<seed> cargo test --test properties`

use ctfft::{
    bit_reverse_permutation, fft_64, fft_64_with_opts, BitReverseAlgorithm, FftError, Options,
    TwiddleMode,
};
use proptest::prelude::*;
use utilities::assert_float_closeness;

/// Interleaved buffers of 2^0 ..= 2^9 complex samples with components in [-1, 1].
fn signal() -> impl Strategy<Value = (usize, Vec<f64>)> {
    (0u32..=9).prop_flat_map(|log_n| {
        let n = 1usize << log_n;
        (Just(n), prop::collection::vec(-1.0f64..1.0, 2 * n))
    })
}

/// Two signals of the same length.
fn signal_pair() -> impl Strategy<Value = (usize, Vec<f64>, Vec<f64>)> {
    (0u32..=9).prop_flat_map(|log_n| {
        let n = 1usize << log_n;
        (
            Just(n),
            prop::collection::vec(-1.0f64..1.0, 2 * n),
            prop::collection::vec(-1.0f64..1.0, 2 * n),
        )
    })
}

fn conjugate(data: &mut [f64]) {
    data.iter_mut().skip(1).step_by(2).for_each(|im| *im = -*im);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn round_trip_through_conjugate_inverse((n, input) in signal()) {
        let mut data = input.clone();
        fft_64(&mut data, n).unwrap();

        // inverse = conj(fft(conj(X))) / N
        conjugate(&mut data);
        fft_64(&mut data, n).unwrap();
        conjugate(&mut data);
        let scale = 1.0 / n as f64;
        data.iter_mut().for_each(|x| *x *= scale);

        for (a, e) in data.iter().zip(input.iter()) {
            assert_float_closeness(*a, *e, 1e-9);
        }
    }

    #[test]
    fn transform_is_linear(
        (n, x, y) in signal_pair(),
        a in -10.0f64..10.0,
        b in -10.0f64..10.0,
    ) {
        let mut combined: Vec<f64> = x.iter().zip(y.iter()).map(|(x, y)| a * x + b * y).collect();
        fft_64(&mut combined, n).unwrap();

        let (mut fx, mut fy) = (x.clone(), y.clone());
        fft_64(&mut fx, n).unwrap();
        fft_64(&mut fy, n).unwrap();

        for ((c, x), y) in combined.iter().zip(fx.iter()).zip(fy.iter()) {
            assert_float_closeness(*c, a * x + b * y, 1e-9);
        }
    }

    #[test]
    fn parseval_holds((n, input) in signal()) {
        let energy_in: f64 = input.iter().map(|x| x * x).sum();
        let mut data = input;
        fft_64(&mut data, n).unwrap();
        let energy_out: f64 = data.iter().map(|x| x * x).sum::<f64>() / n as f64;
        assert_float_closeness(energy_out, energy_in, 1e-9 * (1.0 + energy_in));
    }

    #[test]
    fn direct_twiddles_agree_with_recurrence((n, input) in signal()) {
        let mut recurrence = input.clone();
        fft_64(&mut recurrence, n).unwrap();

        let mut direct = input;
        let opts = Options::default().with_twiddles(TwiddleMode::Direct);
        fft_64_with_opts(&mut direct, n, &opts).unwrap();

        for (r, d) in recurrence.iter().zip(direct.iter()) {
            assert_float_closeness(*r, *d, 1e-9);
        }
    }

    #[test]
    fn bit_reversal_is_an_involution(log_n in 0u32..=14, gray in any::<bool>()) {
        let algorithm = if gray { BitReverseAlgorithm::Gray } else { BitReverseAlgorithm::Carry };
        let labels: Vec<usize> = (0..1usize << log_n).collect();

        let mut v = labels.clone();
        bit_reverse_permutation(&mut v, algorithm).unwrap();
        for (i, label) in v.iter().enumerate() {
            let rev = if log_n == 0 { 0 } else { i.reverse_bits() >> (usize::BITS - log_n) };
            prop_assert_eq!(*label, rev);
        }

        bit_reverse_permutation(&mut v, algorithm).unwrap();
        prop_assert_eq!(v, labels);
    }

    #[test]
    fn non_powers_of_two_are_rejected(n in 3usize..4096) {
        prop_assume!(!n.is_power_of_two());
        let mut data = vec![0.5; 2 * n];
        prop_assert_eq!(fft_64(&mut data, n), Err(FftError::NotPowerOfTwo { n }));
        prop_assert!(data.iter().all(|x| *x == 0.5));
    }
}
