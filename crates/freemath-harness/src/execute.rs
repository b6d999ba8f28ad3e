//! Fixture execution against `freemath-core`.
//!
//! Every function is evaluated twice: through its checked form, which reports
//! out-of-domain arguments as `MathError`, and through its policy form, which
//! is what a caller of the plain function observes under the active mode.

use freemath_core::{DomainPolicy, MathError, Software};

use crate::error::HarnessError;

/// Outcome of evaluating one call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Checked result.
    pub checked: Result<f32, MathError>,
    /// Value returned under the evaluated policy.
    pub resolved: f32,
}

impl Evaluation {
    fn total(value: f32) -> Self {
        Self {
            checked: Ok(value),
            resolved: value,
        }
    }

    fn checked(checked: Result<f32, MathError>, policy: DomainPolicy) -> Self {
        let resolved = match checked {
            Ok(v) => v,
            Err(err) => err.resolve(policy),
        };
        Self { checked, resolved }
    }

    /// Compact textual rendering used in reports and logs.
    #[must_use]
    pub fn render(&self) -> String {
        match self.checked {
            Ok(v) => format!("{v}"),
            Err(err) => format!("error:{} -> {}", err.kind(), self.resolved),
        }
    }
}

/// Functions understood by [`evaluate`], with their arity.
pub const FUNCTIONS: &[(&str, usize)] = &[
    ("abs", 1),
    ("ceil", 1),
    ("floor", 1),
    ("trunc", 1),
    ("sin", 1),
    ("cos", 1),
    ("sin_software", 1),
    ("cos_software", 1),
    ("exp", 1),
    ("log", 1),
    ("log2", 1),
    ("log10", 1),
    ("log_base", 2),
    ("pow", 2),
    ("min", 2),
    ("max", 2),
];

/// Number of arguments `function` takes.
pub fn arity(function: &str) -> Result<usize, HarnessError> {
    FUNCTIONS
        .iter()
        .find(|(name, _)| *name == function)
        .map(|&(_, n)| n)
        .ok_or_else(|| HarnessError::UnknownFunction(function.to_string()))
}

/// Evaluate `function(inputs...)` under `policy`.
pub fn evaluate(
    function: &str,
    inputs: &[f32],
    policy: DomainPolicy,
) -> Result<Evaluation, HarnessError> {
    let expected = arity(function)?;
    if inputs.len() != expected {
        return Err(HarnessError::Arity {
            function: function.to_string(),
            expected,
            got: inputs.len(),
        });
    }

    let x = inputs[0];
    let y = inputs.get(1).copied().unwrap_or_default();
    let eval = match function {
        "abs" => Evaluation::total(freemath_core::abs(x)),
        "ceil" => Evaluation::total(freemath_core::ceil(x)),
        "floor" => Evaluation::total(freemath_core::floor(x)),
        "trunc" => Evaluation::total(freemath_core::trunc(x)),
        "sin" => Evaluation::total(freemath_core::sin(x)),
        "cos" => Evaluation::total(freemath_core::cos(x)),
        "sin_software" => Evaluation::total(freemath_core::sin_with(x, &Software)),
        "cos_software" => Evaluation::total(freemath_core::cos_with(x, &Software)),
        "exp" => Evaluation::checked(freemath_core::try_exp(x), policy),
        "log" => Evaluation::checked(freemath_core::try_log(x), policy),
        "log2" => Evaluation::checked(freemath_core::try_log2(x), policy),
        "log10" => Evaluation::checked(freemath_core::try_log10(x), policy),
        "log_base" => Evaluation::checked(freemath_core::try_log_base(x, y), policy),
        "pow" => Evaluation::checked(freemath_core::try_pow(x, y), policy),
        "min" => Evaluation::total(freemath_core::min(x, y)),
        "max" => Evaluation::total(freemath_core::max(x, y)),
        other => return Err(HarnessError::UnknownFunction(other.to_string())),
    };
    Ok(eval)
}
