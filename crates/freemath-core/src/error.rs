//! Domain errors reported by the checked math routines.

use thiserror::Error;

use crate::config::DomainPolicy;

/// Why a math routine could not produce a result for its argument.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// The result would exceed the largest representable magnitude.
    #[error("{op}({arg}) overflows: argument exceeds {limit}")]
    Overflow {
        op: &'static str,
        arg: f32,
        limit: f32,
    },
    /// The result would be smaller than the supported range can resolve.
    #[error("{op}({arg}) underflows: argument is below {limit}")]
    Underflow {
        op: &'static str,
        arg: f32,
        limit: f32,
    },
    /// The argument lies outside the mathematical domain of the function.
    #[error("{op}({arg}) is outside the function's domain")]
    Domain { op: &'static str, arg: f32 },
    /// The function has a pole at the argument (e.g. `log(0)`).
    #[error("{op} has a pole at its argument")]
    Pole { op: &'static str },
    /// A NaN argument was supplied.
    #[error("{op} received a NaN argument")]
    NotANumber { op: &'static str },
}

impl MathError {
    /// Name of the routine that reported the error.
    #[must_use]
    pub const fn op(&self) -> &'static str {
        match self {
            Self::Overflow { op, .. }
            | Self::Underflow { op, .. }
            | Self::Domain { op, .. }
            | Self::Pole { op }
            | Self::NotANumber { op } => *op,
        }
    }

    /// Stable lowercase name of the error variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Overflow { .. } => "overflow",
            Self::Underflow { .. } => "underflow",
            Self::Domain { .. } => "domain",
            Self::Pole { .. } => "pole",
            Self::NotANumber { .. } => "nan",
        }
    }

    /// The same error attributed to a composed routine.
    #[must_use]
    pub const fn with_op(self, op: &'static str) -> Self {
        match self {
            Self::Overflow { arg, limit, .. } => Self::Overflow { op, arg, limit },
            Self::Underflow { arg, limit, .. } => Self::Underflow { op, arg, limit },
            Self::Domain { arg, .. } => Self::Domain { op, arg },
            Self::Pole { .. } => Self::Pole { op },
            Self::NotANumber { .. } => Self::NotANumber { op },
        }
    }

    /// Finite value substituted for this error in hardened mode.
    #[must_use]
    pub const fn saturated(&self) -> f32 {
        match self {
            Self::Overflow { .. } => f32::MAX,
            Self::Pole { .. } => f32::MIN,
            Self::Underflow { .. } | Self::Domain { .. } | Self::NotANumber { .. } => 0.0,
        }
    }

    /// Value the plain (non-`try_`) routines return under `policy`.
    #[must_use]
    pub const fn resolve(&self, policy: DomainPolicy) -> f32 {
        if policy.heals_enabled() {
            self.saturated()
        } else {
            f32::NAN
        }
    }
}

/// Collapse a checked result into a plain value under `policy`.
#[inline]
pub(crate) fn resolve(result: Result<f32, MathError>, policy: DomainPolicy) -> f32 {
    match result {
        Ok(v) => v,
        Err(err) => err.resolve(policy),
    }
}
