//! Numeric types the transforms can be evaluated in.
//!
//! Floating point evaluation goes through `libm` so the crate stays `no_std`.
//! The 16.16 fixed-point type evaluates its trigonometry with CORDIC, which is
//! what small FPU-less microcontrollers tend to run.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, Neg, Sub};

use fixed::types::I16F16;

/// A real number representation usable by the reference frame transforms.
pub trait Scalar:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + DivAssign
{
    const ZERO: Self;
    /// 1/2
    const FRAC_1_2: Self;
    /// 1/3
    const FRAC_1_3: Self;
    /// 2/3
    const FRAC_2_3: Self;
    /// 1/sqrt(3)
    const FRAC_1_SQRT_3: Self;
    /// sqrt(3)/2
    const FRAC_SQRT_3_2: Self;

    /// Sine and cosine of an angle in radians, returned as `(sin, cos)`.
    ///
    /// Any finite angle is accepted.
    fn sin_cos(self) -> (Self, Self);

    fn sqrt(self) -> Self;
}

impl Scalar for f64 {
    const ZERO: Self = 0.;
    const FRAC_1_2: Self = 0.5;
    const FRAC_1_3: Self = 1. / 3.;
    const FRAC_2_3: Self = 2. / 3.;
    const FRAC_1_SQRT_3: Self = 0.577_350_269_189_625_8;
    const FRAC_SQRT_3_2: Self = 0.866_025_403_784_438_6;

    fn sin_cos(self) -> (Self, Self) {
        (libm::sin(self), libm::cos(self))
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
}

impl Scalar for f32 {
    const ZERO: Self = 0.;
    const FRAC_1_2: Self = 0.5;
    const FRAC_1_3: Self = 1. / 3.;
    const FRAC_2_3: Self = 2. / 3.;
    const FRAC_1_SQRT_3: Self = 0.577_350_26;
    const FRAC_SQRT_3_2: Self = 0.866_025_4;

    fn sin_cos(self) -> (Self, Self) {
        (libm::sinf(self), libm::cosf(self))
    }

    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
}

// Raw bit patterns are the constants scaled by 2^16 and rounded to nearest.
impl Scalar for I16F16 {
    const ZERO: Self = I16F16::ZERO;
    const FRAC_1_2: Self = I16F16::from_bits(32_768);
    const FRAC_1_3: Self = I16F16::from_bits(21_845);
    const FRAC_2_3: Self = I16F16::from_bits(43_691);
    const FRAC_1_SQRT_3: Self = I16F16::from_bits(37_837);
    const FRAC_SQRT_3_2: Self = I16F16::from_bits(56_756);

    fn sin_cos(self) -> (Self, Self) {
        // CORDIC only converges close to [-pi, pi], so wrap into it first.
        let tau = I16F16::from_num(fixed::consts::TAU);
        let pi = I16F16::from_num(fixed::consts::PI);
        let wrapped = (self % tau + pi).rem_euclid(tau) - pi;
        cordic::sin_cos(wrapped)
    }

    fn sqrt(self) -> Self {
        cordic::sqrt(self)
    }
}
