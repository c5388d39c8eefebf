//! FFT Algorithm Implementations
//!
//! - **bit_reverse**: in-place bit-reversal permutations, the first stage of the transform.
//! - **DIT (Decimation-in-Time)**: iterative radix-2 Cooley-Tukey. Input is bit-reversed,
//!   output is in natural order.

pub mod bit_reverse;
pub(crate) mod dit;
