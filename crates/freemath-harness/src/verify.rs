//! Output comparison and verification.

use serde::{Deserialize, Serialize};

use crate::diff;
use crate::execute::Evaluation;
use crate::fixtures::FixtureCase;
use freemath_core::DomainPolicy;

/// Result of verifying a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Name of the test case.
    pub case_name: String,
    /// Function under test.
    pub function: String,
    /// Source of the expectation.
    pub reference: String,
    /// Whether the case passed.
    pub passed: bool,
    /// Expected output.
    pub expected: String,
    /// Actual output from our implementation.
    pub actual: String,
    /// Diff if the case failed.
    pub diff: Option<String>,
}

/// Value the plain routines must return for error `kind` under `policy`.
///
/// Keyed by the fixture's error string rather than a `MathError`, so fixtures
/// stay independent of the core's types.
#[must_use]
pub fn expected_substitute(kind: &str, policy: DomainPolicy) -> f32 {
    if !policy.heals_enabled() {
        return f32::NAN;
    }
    match kind {
        "overflow" => f32::MAX,
        "pole" => f32::MIN,
        _ => 0.0,
    }
}

/// Compare one evaluation with its fixture expectation.
#[must_use]
pub fn check_case(
    case: &FixtureCase,
    case_name: String,
    eval: &Evaluation,
    policy: DomainPolicy,
) -> VerificationResult {
    let actual = eval.render();
    let (passed, expected, diff) = match (&case.expected_error, eval.checked) {
        (Some(kind), _) => {
            let expected = format!("error:{kind} -> {}", expected_substitute(kind, policy));
            let passed = actual == expected;
            let diff = (!passed).then(|| diff::render_diff(&expected, &actual));
            (passed, expected, diff)
        }
        (None, Ok(value)) => {
            let want = case.expected.unwrap_or(f64::NAN);
            let passed = case.accepts(value);
            let diff = (!passed)
                .then(|| diff::render_numeric_diff(want, value, case.abs_tol, case.rel_tol));
            (passed, format!("{want}"), diff)
        }
        (None, Err(_)) => {
            let expected = format!("{}", case.expected.unwrap_or(f64::NAN));
            let diff = Some(diff::render_diff(&expected, &actual));
            (false, expected, diff)
        }
    };

    VerificationResult {
        case_name,
        function: case.function.clone(),
        reference: case.reference.clone(),
        passed,
        expected,
        actual,
        diff,
    }
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total cases run.
    pub total: usize,
    /// Cases passed.
    pub passed: usize,
    /// Cases failed.
    pub failed: usize,
    /// Individual results.
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            total,
            passed,
            failed,
            results,
        }
    }

    /// Returns true if all cases passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
