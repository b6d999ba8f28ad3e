//! Named mathematical constants.
//!
//! Written with the full decimal expansions; the compiler rounds each one to
//! the nearest `f32`.

#![allow(clippy::excessive_precision, clippy::approx_constant)]

/// Euler's number, the base of the natural logarithm.
pub const E: f32 = 2.71828182845904523536;

/// log2(e)
pub const LOG2E: f32 = 1.44269504088896340736;

/// log10(e)
pub const LOG10E: f32 = 0.434294481903251827651;

/// ln(2)
pub const LN2: f32 = 0.693147180559945309417;

/// ln(10)
pub const LN10: f32 = 2.30258509299404568402;

/// The square root of 2.
pub const SQRT2: f32 = 1.41421356237309504880;

/// The ratio of a circle's circumference to its diameter.
pub const PI: f32 = 3.14159265358979323846;

/// π/2
pub const PI_2: f32 = 1.57079632679489661923;

/// π/4
pub const PI_4: f32 = 0.785398163397448309616;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_host_values() {
        assert_eq!(E, std::f32::consts::E);
        assert_eq!(LOG2E, std::f32::consts::LOG2_E);
        assert_eq!(LOG10E, std::f32::consts::LOG10_E);
        assert_eq!(LN2, std::f32::consts::LN_2);
        assert_eq!(LN10, std::f32::consts::LN_10);
        assert_eq!(SQRT2, std::f32::consts::SQRT_2);
        assert_eq!(PI, std::f32::consts::PI);
        assert_eq!(PI_2, std::f32::consts::FRAC_PI_2);
        assert_eq!(PI_4, std::f32::consts::FRAC_PI_4);
    }
}
