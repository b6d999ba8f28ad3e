//! Exponential and logarithmic functions.
//!
//! `exp` reduces `|x|` to `k·ln2 + r` with `|r| <= ln2/2`, evaluates `e^r` as a
//! 14-term Horner series and rescales by `2^k`. `log` splits its argument into
//! `2^e · m` with `m` in `[1, 2)`, evaluates a degree-4 polynomial for `ln(m)`
//! and adds `e·ln2`. `pow` composes the two.
//!
//! Accuracy: `exp` is within 5e-6 relative error on `[-EXP_MAX_ARG, EXP_MAX_ARG]`;
//! `log` is within 1e-4 absolute error for every positive finite argument.

use super::consts::{LN2, LOG2E, LOG10E};
use super::float::{abs, ceil};
use crate::config::{DEFAULT_POLICY, DomainPolicy};
use crate::error::{MathError, resolve};

/// Largest `|x|` accepted by [`exp`]. Keeps the reduction count `k <= 127`,
/// the largest power of two an `f32` can hold.
pub const EXP_MAX_ARG: f32 = 88.0;

const MANTISSA_BITS: u32 = 23;
const EXPONENT_MASK: u32 = 0xff;
const EXPONENT_BIAS: i32 = 127;
const SUBNORMAL_SCALE: f32 = 8_388_608.0;
const SERIES_TERMS: u16 = 14;

// ln(m) on [1, 2), highest degree first.
#[allow(clippy::excessive_precision)]
const LOG_POLY: [f32; 5] = [-0.056570851, 0.44717955, -1.4699568, 2.8212026, -1.7417939];

/// `2^k` for `k` in `-126..=127`, built by shifting the biased exponent into
/// the exponent field.
#[inline]
fn pow2(k: i32) -> f32 {
    debug_assert!((1 - EXPONENT_BIAS..=EXPONENT_BIAS).contains(&k));
    f32::from_bits(((k + EXPONENT_BIAS) as u32) << MANTISSA_BITS)
}

/// Unbiased binary exponent of a positive normal `x`, i.e. `floor(log2(x))`.
#[inline]
fn binary_exponent(x: f32) -> i32 {
    ((x.to_bits() >> MANTISSA_BITS) & EXPONENT_MASK) as i32 - EXPONENT_BIAS
}

/// `e^x`, or the reason it cannot be represented.
pub fn try_exp(x: f32) -> Result<f32, MathError> {
    if x.is_nan() {
        return Err(MathError::NotANumber { op: "exp" });
    }
    if x == 0.0 {
        return Ok(1.0);
    }

    let x0 = abs(x);
    if x0 > EXP_MAX_ARG {
        return Err(if x > 0.0 {
            MathError::Overflow {
                op: "exp",
                arg: x,
                limit: EXP_MAX_ARG,
            }
        } else {
            MathError::Underflow {
                op: "exp",
                arg: x,
                limit: -EXP_MAX_ARG,
            }
        });
    }

    let k = ceil(x0 / LN2 - 0.5) as i32;
    let p = pow2(k);
    let r = x0 - k as f32 * LN2;
    let tn = (1..=SERIES_TERMS)
        .rev()
        .fold(1.0_f32, |tn, i| tn * (r / f32::from(i)) + 1.0);

    let y = p * tn;
    Ok(if x < 0.0 { 1.0 / y } else { y })
}

/// Natural logarithm of `x`, or the reason it is undefined.
pub fn try_log(x: f32) -> Result<f32, MathError> {
    if x.is_nan() {
        return Err(MathError::NotANumber { op: "log" });
    }
    if x < 0.0 {
        return Err(MathError::Domain { op: "log", arg: x });
    }
    if x == 0.0 {
        return Err(MathError::Pole { op: "log" });
    }
    if x > f32::MAX {
        return Err(MathError::Overflow {
            op: "log",
            arg: x,
            limit: f32::MAX,
        });
    }

    // Subnormals are lifted into the normal range first.
    let (x, shift) = if x < f32::MIN_POSITIVE {
        (x * SUBNORMAL_SCALE, MANTISSA_BITS as i32)
    } else {
        (x, 0)
    };

    let e = binary_exponent(x);
    let m = x / pow2(e);
    let r = LOG_POLY[1..]
        .iter()
        .fold(LOG_POLY[0], |acc, &c| acc * m + c);
    Ok(r + (e - shift) as f32 * LN2)
}

/// Base-2 logarithm, `ln(x) · log2(e)`.
pub fn try_log2(x: f32) -> Result<f32, MathError> {
    try_log(x)
        .map(|l| l * LOG2E)
        .map_err(|err| err.with_op("log2"))
}

/// Base-10 logarithm, `ln(x) · log10(e)`.
pub fn try_log10(x: f32) -> Result<f32, MathError> {
    try_log(x)
        .map(|l| l * LOG10E)
        .map_err(|err| err.with_op("log10"))
}

/// Logarithm of `x` to `base`, computed as `ln(x) / ln(base)`.
pub fn try_log_base(x: f32, base: f32) -> Result<f32, MathError> {
    if base == 1.0 {
        return Err(MathError::Domain {
            op: "log_base",
            arg: base,
        });
    }
    let num = try_log(x).map_err(|err| err.with_op("log_base"))?;
    let den = try_log(base).map_err(|err| err.with_op("log_base"))?;
    Ok(num / den)
}

/// `x` raised to `y`, computed as `exp(y · ln(x))`.
///
/// `pow(x, 0)` is `1` for every `x`, `pow(0, y)` is `0` for `y > 0`, and
/// negative bases are outside the domain. Range errors carry the reduced
/// exponent `y·ln(x)` as their argument.
pub fn try_pow(x: f32, y: f32) -> Result<f32, MathError> {
    if x.is_nan() || y.is_nan() {
        return Err(MathError::NotANumber { op: "pow" });
    }
    if y == 0.0 {
        return Ok(1.0);
    }
    if x < 0.0 {
        return Err(MathError::Domain { op: "pow", arg: x });
    }
    if x == 0.0 {
        return if y > 0.0 {
            Ok(0.0)
        } else {
            Err(MathError::Pole { op: "pow" })
        };
    }
    let l = try_log(x).map_err(|err| err.with_op("pow"))?;
    try_exp(y * l).map_err(|err| err.with_op("pow"))
}

#[inline]
pub fn exp_with(x: f32, policy: DomainPolicy) -> f32 {
    resolve(try_exp(x), policy)
}

#[inline]
pub fn log_with(x: f32, policy: DomainPolicy) -> f32 {
    resolve(try_log(x), policy)
}

#[inline]
pub fn pow_with(x: f32, y: f32, policy: DomainPolicy) -> f32 {
    resolve(try_pow(x, y), policy)
}

#[inline]
pub fn exp(x: f32) -> f32 {
    exp_with(x, DEFAULT_POLICY)
}

/// Natural logarithm.
#[inline]
pub fn log(x: f32) -> f32 {
    log_with(x, DEFAULT_POLICY)
}

#[inline]
pub fn log2(x: f32) -> f32 {
    resolve(try_log2(x), DEFAULT_POLICY)
}

#[inline]
pub fn log10(x: f32) -> f32 {
    resolve(try_log10(x), DEFAULT_POLICY)
}

#[inline]
pub fn log_base(x: f32, base: f32) -> f32 {
    resolve(try_log_base(x, base), DEFAULT_POLICY)
}

#[inline]
pub fn pow(x: f32, y: f32) -> f32 {
    pow_with(x, y, DEFAULT_POLICY)
}
