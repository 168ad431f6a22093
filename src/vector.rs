use std::f64::consts::PI;

pub type Vector3 = nalgebra::Vector3<f64>;

/// Component-wise helpers on top of nalgebra's `Vector3<f64>`.
///
/// `length`, `dot`, `add` and `subtract` are nalgebra's `norm`, `dot`, `+` and `-`.
/// Nothing here guards against zero divisors, results follow IEEE 754.
pub trait LinMath {
    fn normal(&self) -> Self;
    fn negative(&self) -> Self;
    fn multiply(&self, other: &Self) -> Self;
    fn divide(&self, other: &Self) -> Self;
    fn multiply_scalar(&self, scalar: f64) -> Self;
    fn divide_scalar(&self, scalar: f64) -> Self;
    fn clamp_each(&self, min: f64, max: f64) -> Self;
    fn power(&self, exponent: f64) -> Self;
}

impl LinMath for Vector3 {
    /// Non-finite when the length is zero.
    fn normal(&self) -> Self {
        self.multiply_scalar(1.0 / self.norm())
    }

    fn negative(&self) -> Self {
        -self
    }

    fn multiply(&self, other: &Self) -> Self {
        self.component_mul(other)
    }

    fn divide(&self, other: &Self) -> Self {
        self.component_div(other)
    }

    fn multiply_scalar(&self, scalar: f64) -> Self {
        self * scalar
    }

    fn divide_scalar(&self, scalar: f64) -> Self {
        self / scalar
    }

    // f64::clamp panics on NaN bounds, min/max does not.
    fn clamp_each(&self, min: f64, max: f64) -> Self {
        self.map(|c| c.max(min).min(max))
    }

    fn power(&self, exponent: f64) -> Self {
        self.map(|c| c.powf(exponent))
    }
}

pub fn splat(scalar: f64) -> Vector3 {
    Vector3::repeat(scalar)
}

pub fn radians(degrees: f64) -> f64 {
    PI * degrees / 180.0
}
