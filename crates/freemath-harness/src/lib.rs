//! Conformance testing harness for freemath.
//!
//! This crate provides:
//! - Fixture capture: compute reference values with the host `std` math as JSON fixtures
//! - Fixture verify: replay fixtures against `freemath-core` under a domain policy
//! - Structured logging: JSONL records for every executed case
//! - Report generation: human-readable + machine-readable conformance reports

#![forbid(unsafe_code)]

pub mod capture;
pub mod config;
pub mod diff;
pub mod error;
pub mod execute;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
