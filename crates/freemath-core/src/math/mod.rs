//! Mathematical functions.
//!
//! Implements the scalar `f32` routines: floating-point utilities,
//! trigonometric, exponential/logarithmic, and the comparison helpers.

pub mod cmp;
pub mod consts;
pub mod exp;
pub mod float;
pub mod trig;

pub use cmp::{max, min};
pub use consts::{E, LN2, LN10, LOG2E, LOG10E, PI, PI_2, PI_4, SQRT2};
pub use exp::{
    EXP_MAX_ARG, exp, exp_with, log, log_base, log_with, log2, log10, pow, pow_with, try_exp,
    try_log, try_log_base, try_log2, try_log10, try_pow,
};
pub use float::{abs, ceil, floor, trunc};
pub use trig::{DefaultTrig, Software, TrigBackend, cos, cos_with, sin, sin_with};

#[cfg(all(feature = "x87-trig", any(target_arch = "x86", target_arch = "x86_64")))]
pub use trig::X87;
