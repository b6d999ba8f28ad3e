//! Floating-point utility functions.

/// Magnitude from which every `f32` is already an integer (2^23).
const INTEGRAL_THRESHOLD: f32 = 8_388_608.0;

#[inline]
pub fn abs(x: f32) -> f32 {
    if x < 0.0 { -x } else { x }
}

/// Round toward zero.
///
/// Goes through `i32`; inputs with `|x| >= 2^23` (already integral) and NaN
/// are returned unchanged, so the conversion never leaves the `i32` range.
#[inline]
pub fn trunc(x: f32) -> f32 {
    if abs(x) < INTEGRAL_THRESHOLD {
        (x as i32) as f32
    } else {
        x
    }
}

/// Smallest integer not less than `x`.
#[inline]
pub fn ceil(x: f32) -> f32 {
    let n = trunc(x);
    if n >= x { n } else { n + 1.0 }
}

/// Largest integer not greater than `x`.
#[inline]
pub fn floor(x: f32) -> f32 {
    -ceil(-x)
}
