/// Options to trade accuracy and speed depending on the input size.
///
/// Calling FFT routines without specifying options uses [`Options::default`], which reproduces
/// the classic Numerical Recipes formulation: carry-rule bit reversal and twiddle factors
/// advanced by a trigonometric recurrence.
///
/// [`Options::guess_options`] picks settings that behave better on large inputs.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// How each butterfly stage produces its rotation factors.
    pub twiddles: TwiddleMode,
    /// Which permutation reorders the input before the butterfly stages.
    pub bit_reverse: BitReverseAlgorithm,
}

impl Options {
    /// Selects options suited to a transform of `input_size` complex samples.
    ///
    /// The recurrence accumulates phase error linearly in the number of groups per stage,
    /// so very large transforms evaluate each twiddle directly instead.
    pub fn guess_options(input_size: usize) -> Options {
        let mut options = Options::default();
        let n = input_size.checked_ilog2().unwrap_or(0);
        if n >= 20 {
            options.twiddles = TwiddleMode::Direct;
        }
        if n >= 10 {
            options.bit_reverse = BitReverseAlgorithm::Gray;
        }
        options
    }

    #[must_use]
    pub fn with_twiddles(mut self, twiddles: TwiddleMode) -> Self {
        self.twiddles = twiddles;
        self
    }

    #[must_use]
    pub fn with_bit_reverse(mut self, bit_reverse: BitReverseAlgorithm) -> Self {
        self.bit_reverse = bit_reverse;
        self
    }
}

/// How the rotation factors of each butterfly stage are produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TwiddleMode {
    #[default]
    /// Start at `1 + 0i` and advance by a multiply-add recurrence after every group.
    ///
    /// One `sin` pair per stage; drifts slowly for very large stages.
    Recurrence,
    /// Evaluate `sin_cos(k * theta)` for every group.
    Direct,
}

/// The algorithm to use for bit reversal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BitReverseAlgorithm {
    #[default]
    /// Forward scan keeping a bit-reversed counter with the "add highest bit, carry down" rule.
    Carry,
    /// Gray code walk over the even indices, `N / 4` iterations.
    ///
    /// Fewer index updates than [`BitReverseAlgorithm::Carry`] at larger sizes.
    Gray,
}
