pub extern crate rustfft;

// export rustfft as the reference implementation for tests and benches
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Fill an interleaved `[re0, im0, re1, im1, ...]` buffer with a random complex signal,
/// every component drawn uniformly from `[-1, 1)`.
pub fn gen_random_signal<T>(data: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for value in data.iter_mut() {
        *value = uniform_dist.sample(&mut rng);
    }
}
