//! Report generation for conformance results.

use serde::{Deserialize, Serialize};

use crate::verify::VerificationSummary;

/// A conformance report for one verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Domain policy tested (strict or hardened).
    pub mode: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Mode: {}\n", self.mode));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Function | Reference | Status |\n");
        out.push_str("|------|----------|-----------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                r.case_name, r.function, r.reference, status
            ));
        }

        let failures: Vec<_> = self.summary.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for r in failures {
                out.push_str(&format!("\n### {}\n\n```\n", r.case_name));
                out.push_str(r.diff.as_deref().unwrap_or(""));
                out.push_str("```\n");
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::VerificationResult;

    fn report(passed: bool) -> ConformanceReport {
        ConformanceReport {
            title: "freemath conformance".into(),
            mode: "strict".into(),
            timestamp: "2026-10-19T00:00:00Z".into(),
            summary: VerificationSummary::from_results(vec![VerificationResult {
                case_name: "ceil(3.2)".into(),
                function: "ceil".into(),
                reference: "host std f64".into(),
                passed,
                expected: "4".into(),
                actual: if passed { "4" } else { "3" }.into(),
                diff: (!passed).then(|| "-4\n+3\n".to_string()),
            }]),
        }
    }

    #[test]
    fn markdown_lists_cases() {
        let md = report(true).to_markdown();
        assert!(md.starts_with("# freemath conformance"));
        assert!(md.contains("| ceil(3.2) | ceil | host std f64 | PASS |"));
        assert!(!md.contains("## Failures"));
    }

    #[test]
    fn markdown_includes_failure_diffs() {
        let md = report(false).to_markdown();
        assert!(md.contains("| FAIL |"));
        assert!(md.contains("### ceil(3.2)"));
        assert!(md.contains("+3"));
    }

    #[test]
    fn json_round_trips_summary() {
        let json = report(true).to_json();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["summary"]["total"], 1);
        assert_eq!(parsed["mode"], "strict");
    }
}
