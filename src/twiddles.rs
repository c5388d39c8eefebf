use num_traits::{AsPrimitive, Float, FloatConst};

/// Rotation factors `w_k = exp(-i * pi * k / dist)` for one butterfly stage,
/// generated by the trigonometric recurrence
///
/// `w_{k+1} = w_k + w_k * (wpr + i * wpi)`, with `wpr = -2 sin^2(theta / 2)` and `wpi = sin(theta)`.
///
/// Only one pair of `sin` evaluations is paid per stage.
pub(crate) struct Twiddles<T> {
    wpr: T,
    wpi: T,
    w_re: T,
    w_im: T,
}

impl<T> Twiddles<T>
where
    T: Float + FloatConst + 'static,
    usize: AsPrimitive<T>,
{
    /// `dist` is the distance between the two inputs of a butterfly,
    /// i.e. half the size of the sub-transforms combined by this stage.
    pub fn new(dist: usize) -> Self {
        let two = T::one() + T::one();
        let theta = -T::PI() / dist.as_();
        let wtemp = (theta / two).sin();
        Self {
            wpr: -two * wtemp * wtemp,
            wpi: theta.sin(),
            w_re: T::one(),
            w_im: T::zero(),
        }
    }
}

impl<T: Float> Iterator for Twiddles<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        let w_re = self.w_re;
        let w_im = self.w_im;

        self.w_re = w_re + (w_re * self.wpr - w_im * self.wpi);
        self.w_im = w_im + (w_im * self.wpr + w_re * self.wpi);

        Some((w_re, w_im))
    }
}

/// Same sequence as [`Twiddles`], but every factor is evaluated directly.
pub(crate) struct DirectTwiddles<T> {
    theta: T,
    k: usize,
}

impl<T> DirectTwiddles<T>
where
    T: Float + FloatConst + 'static,
    usize: AsPrimitive<T>,
{
    pub fn new(dist: usize) -> Self {
        Self {
            theta: -T::PI() / dist.as_(),
            k: 0,
        }
    }
}

impl<T> Iterator for DirectTwiddles<T>
where
    T: Float + 'static,
    usize: AsPrimitive<T>,
{
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        let (w_im, w_re) = (self.theta * self.k.as_()).sin_cos();
        self.k += 1;
        Some((w_re, w_im))
    }
}
