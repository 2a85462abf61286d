//! Park and Clarke transformations (along with their inverses).
//!
//! All transforms use the amplitude-invariant convention: a balanced set of
//! phase quantities with peak amplitude `A` maps to an alpha/beta vector of
//! magnitude `A`.

use crate::Scalar;

/// Two-axis frame rotating with the electrical angle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotatingReferenceFrame<T = f64> {
    /// Direct axis, aligned with the electrical angle.
    pub d: T,
    /// Quadrature axis, leading the direct axis by 90 degrees.
    pub q: T,
}

/// Two-axis stationary frame, also known as the alpha/beta frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoPhaseStationaryOrthogonalReferenceFrame<T = f64> {
    pub alpha: T,
    pub beta: T,
}

/// Instantaneous values of the three phases.
///
/// The phases nominally sum to zero but are not required to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThreePhaseStationaryReferenceFrame<T = f64> {
    pub a: T,
    pub b: T,
    pub c: T,
}

/// Two phases of a balanced system, the third being `-(a + b)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThreePhaseBalancedStationaryReferenceFrame<T = f64> {
    pub a: T,
    pub b: T,
}

impl<T: Scalar> RotatingReferenceFrame<T> {
    pub fn magnitude(&self) -> T {
        (self.d * self.d + self.q * self.q).sqrt()
    }
}

impl<T: Scalar> TwoPhaseStationaryOrthogonalReferenceFrame<T> {
    pub fn magnitude(&self) -> T {
        (self.alpha * self.alpha + self.beta * self.beta).sqrt()
    }
}

impl<T> From<[T; 2]> for RotatingReferenceFrame<T> {
    fn from([d, q]: [T; 2]) -> Self {
        Self { d, q }
    }
}

impl<T> From<RotatingReferenceFrame<T>> for [T; 2] {
    fn from(value: RotatingReferenceFrame<T>) -> Self {
        [value.d, value.q]
    }
}

impl<T> From<[T; 2]> for TwoPhaseStationaryOrthogonalReferenceFrame<T> {
    fn from([alpha, beta]: [T; 2]) -> Self {
        Self { alpha, beta }
    }
}

impl<T> From<TwoPhaseStationaryOrthogonalReferenceFrame<T>> for [T; 2] {
    fn from(value: TwoPhaseStationaryOrthogonalReferenceFrame<T>) -> Self {
        [value.alpha, value.beta]
    }
}

impl<T> From<[T; 3]> for ThreePhaseStationaryReferenceFrame<T> {
    fn from([a, b, c]: [T; 3]) -> Self {
        Self { a, b, c }
    }
}

impl<T> From<ThreePhaseStationaryReferenceFrame<T>> for [T; 3] {
    fn from(value: ThreePhaseStationaryReferenceFrame<T>) -> Self {
        [value.a, value.b, value.c]
    }
}

impl<T: Scalar> From<ThreePhaseBalancedStationaryReferenceFrame<T>>
    for ThreePhaseStationaryReferenceFrame<T>
{
    fn from(value: ThreePhaseBalancedStationaryReferenceFrame<T>) -> Self {
        Self {
            a: value.a,
            b: value.b,
            c: -(value.a + value.b),
        }
    }
}

/// Sine and cosine of an electrical angle.
///
/// A control loop running both [`park`] and [`inverse_park`] on one sample can
/// evaluate the trigonometry once and use the `_sin_cos` variants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SinCos<T = f64> {
    pub sin: T,
    pub cos: T,
}

impl<T: Scalar> SinCos<T> {
    /// Angle in radians.
    pub fn new(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { sin, cos }
    }
}

/// Clarke transform
pub fn clarke<T: Scalar>(
    inputs: ThreePhaseStationaryReferenceFrame<T>,
) -> TwoPhaseStationaryOrthogonalReferenceFrame<T> {
    TwoPhaseStationaryOrthogonalReferenceFrame {
        alpha: T::FRAC_2_3 * inputs.a - T::FRAC_1_3 * inputs.b - T::FRAC_1_3 * inputs.c,
        beta: T::FRAC_1_SQRT_3 * (inputs.b - inputs.c),
    }
}

/// Clarke transform of a balanced system measured on two phases.
///
/// Gives the same result as [`clarke`] whenever `a + b + c == 0`.
pub fn clarke_balanced<T: Scalar>(
    inputs: ThreePhaseBalancedStationaryReferenceFrame<T>,
) -> TwoPhaseStationaryOrthogonalReferenceFrame<T> {
    TwoPhaseStationaryOrthogonalReferenceFrame {
        alpha: inputs.a,
        beta: T::FRAC_1_SQRT_3 * (inputs.a + inputs.b + inputs.b),
    }
}

/// Inverse Clarke transform
///
/// The result is always balanced. For balanced inputs this undoes [`clarke`];
/// otherwise the zero-sequence component `(a + b + c) / 3` is lost.
///
/// This is the exact inverse of [`clarke`], with `a = alpha`. Formulations
/// that compute `a = 2/3 * alpha` (and scale `b` and `c` the same way)
/// reconstruct only two thirds of the input; results ported from such code
/// differ from this one by a factor of 3/2.
pub fn inverse_clarke<T: Scalar>(
    inputs: TwoPhaseStationaryOrthogonalReferenceFrame<T>,
) -> ThreePhaseStationaryReferenceFrame<T> {
    let half_alpha = T::FRAC_1_2 * inputs.alpha;
    let scaled_beta = T::FRAC_SQRT_3_2 * inputs.beta;
    ThreePhaseStationaryReferenceFrame {
        a: inputs.alpha,
        b: scaled_beta - half_alpha,
        c: -half_alpha - scaled_beta,
    }
}

/// Park transform, with the angle in radians.
pub fn park<T: Scalar>(
    inputs: TwoPhaseStationaryOrthogonalReferenceFrame<T>,
    angle: T,
) -> RotatingReferenceFrame<T> {
    park_sin_cos(SinCos::new(angle), inputs)
}

/// Inverse Park transform, with the angle in radians.
pub fn inverse_park<T: Scalar>(
    inputs: RotatingReferenceFrame<T>,
    angle: T,
) -> TwoPhaseStationaryOrthogonalReferenceFrame<T> {
    inverse_park_sin_cos(SinCos::new(angle), inputs)
}

/// Park transform with a precomputed sine and cosine.
pub fn park_sin_cos<T: Scalar>(
    angle: SinCos<T>,
    inputs: TwoPhaseStationaryOrthogonalReferenceFrame<T>,
) -> RotatingReferenceFrame<T> {
    RotatingReferenceFrame {
        d: angle.cos * inputs.alpha + angle.sin * inputs.beta,
        q: angle.cos * inputs.beta - angle.sin * inputs.alpha,
    }
}

/// Inverse Park transform with a precomputed sine and cosine.
pub fn inverse_park_sin_cos<T: Scalar>(
    angle: SinCos<T>,
    inputs: RotatingReferenceFrame<T>,
) -> TwoPhaseStationaryOrthogonalReferenceFrame<T> {
    TwoPhaseStationaryOrthogonalReferenceFrame {
        alpha: angle.cos * inputs.d - angle.sin * inputs.q,
        beta: angle.sin * inputs.d + angle.cos * inputs.q,
    }
}
