//! Test execution engine.

use std::time::Instant;

use freemath_core::DomainPolicy;

use crate::config::mode_matches;
use crate::diff;
use crate::execute::evaluate;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome, StreamKind};
use crate::verify::{VerificationResult, VerificationSummary, check_case};

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Domain policy the cases are evaluated under.
    pub mode: DomainPolicy,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>, mode: DomainPolicy) -> Self {
        Self {
            campaign: campaign.into(),
            mode,
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        self.matching(fixture_set)
            .map(|case| self.execute_case(case).0)
            .collect()
    }

    /// Run all fixtures in a set, writing one log entry per case plus a summary.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let mut results = Vec::new();
        for case in self.matching(fixture_set) {
            let (result, latency_ns) = self.execute_case(case);
            let (level, outcome) = if result.passed {
                (LogLevel::Info, Outcome::Pass)
            } else {
                (LogLevel::Error, Outcome::Fail)
            };
            let entry = LogEntry::new("", level, "case_result")
                .with_stream(StreamKind::Conformance)
                .with_mode(self.mode.as_str())
                .with_symbol(&case.function)
                .with_outcome(outcome)
                .with_latency_ns(latency_ns)
                .with_details(serde_json::json!({
                    "case": result.case_name,
                    "family": fixture_set.family,
                    "expected": result.expected,
                    "actual": result.actual,
                }));
            log.emit_entry(entry)?;
            results.push(result);
        }

        let summary = VerificationSummary::from_results(results);
        let outcome = if summary.all_passed() {
            Outcome::Pass
        } else {
            Outcome::Fail
        };
        log.emit_entry(
            LogEntry::new("", LogLevel::Info, "run_summary")
                .with_stream(StreamKind::Conformance)
                .with_mode(self.mode.as_str())
                .with_outcome(outcome)
                .with_details(serde_json::json!({
                    "campaign": self.campaign,
                    "family": fixture_set.family,
                    "total": summary.total,
                    "passed": summary.passed,
                    "failed": summary.failed,
                })),
        )?;
        log.flush()?;
        Ok(summary.results)
    }

    fn matching<'a>(&self, set: &'a FixtureSet) -> impl Iterator<Item = &'a FixtureCase> {
        let mode = self.mode;
        set.cases.iter().filter(move |case| mode_matches(mode, &case.mode))
    }

    fn execute_case(&self, case: &FixtureCase) -> (VerificationResult, u64) {
        // Cases with mode=both run under the runner's active mode.
        let case_name = if case.mode.eq_ignore_ascii_case("both") {
            format!("{} [{}]", case.name, self.mode.as_str())
        } else {
            case.name.clone()
        };

        let start = Instant::now();
        let evaluation = evaluate(&case.function, &case.inputs, self.mode);
        let latency_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

        let result = match evaluation {
            Ok(eval) => check_case(case, case_name, &eval, self.mode),
            Err(err) => {
                let expected = case
                    .expected_error
                    .as_ref()
                    .map_or_else(|| format!("{:?}", case.expected), |k| format!("error:{k}"));
                let actual = format!("unsupported:{err}");
                VerificationResult {
                    case_name,
                    function: case.function.clone(),
                    reference: case.reference.clone(),
                    passed: false,
                    diff: Some(diff::render_diff(&expected, &actual)),
                    expected,
                    actual,
                }
            }
        };
        (result, latency_ns)
    }
}
