//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Function being tested (`exp`, `log`, `pow`, ...).
    pub function: String,
    /// Where the expectation comes from (host reference, documented scenario, ...).
    pub reference: String,
    /// Arguments, in call order.
    pub inputs: Vec<f32>,
    /// Expected value for in-domain calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<f64>,
    /// Expected error kind (`overflow`, `underflow`, `domain`, `pole`, `nan`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_error: Option<String>,
    /// Absolute tolerance on `expected`.
    #[serde(default)]
    pub abs_tol: f64,
    /// Relative tolerance on `expected`.
    #[serde(default)]
    pub rel_tol: f64,
    /// Domain policy the case applies to (`strict`, `hardened` or `both`).
    pub mode: String,
}

impl FixtureCase {
    /// An in-domain case expecting `expected` within the given tolerances.
    #[must_use]
    pub fn value(
        name: impl Into<String>,
        function: impl Into<String>,
        inputs: Vec<f32>,
        expected: f64,
        abs_tol: f64,
        rel_tol: f64,
    ) -> Self {
        Self {
            name: name.into(),
            function: function.into(),
            reference: "host std f64".to_string(),
            inputs,
            expected: Some(expected),
            expected_error: None,
            abs_tol,
            rel_tol,
            mode: "both".to_string(),
        }
    }

    /// An out-of-domain case expecting error `kind`.
    #[must_use]
    pub fn error(
        name: impl Into<String>,
        function: impl Into<String>,
        inputs: Vec<f32>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            function: function.into(),
            reference: "domain policy".to_string(),
            inputs,
            expected: None,
            expected_error: Some(kind.into()),
            abs_tol: 0.0,
            rel_tol: 0.0,
            mode: "both".to_string(),
        }
    }

    /// Set the reference note.
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    /// Whether `actual` is within tolerance of `expected`.
    #[must_use]
    pub fn accepts(&self, actual: f32) -> bool {
        let Some(expected) = self.expected else {
            return false;
        };
        let actual = f64::from(actual);
        if actual == expected {
            return true;
        }
        let delta = (actual - expected).abs();
        delta <= self.abs_tol || delta <= self.rel_tol * expected.abs()
    }
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        let set: Self = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Write fixture set to a file path.
    pub fn to_file(&self, path: &Path) -> Result<(), HarnessError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Every case must carry an expectation and a known mode.
    pub fn validate(&self) -> Result<(), HarnessError> {
        for case in &self.cases {
            if case.expected.is_none() && case.expected_error.is_none() {
                return Err(HarnessError::MissingExpectation(case.name.clone()));
            }
            if !["strict", "hardened", "both"]
                .iter()
                .any(|m| case.mode.eq_ignore_ascii_case(m))
            {
                return Err(HarnessError::UnknownMode(case.mode.clone()));
            }
        }
        Ok(())
    }
}
