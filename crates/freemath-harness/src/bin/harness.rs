//! CLI entrypoint for the freemath conformance harness.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use freemath_harness::capture::{FAMILIES, capture_all, capture_family};
use freemath_harness::config::{policy_from_env, select_modes};
use freemath_harness::structured_log::{LogEmitter, now_utc, validate_log_file};
use freemath_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary};

/// Conformance tooling for freemath.
#[derive(Debug, Parser)]
#[command(name = "freemath-harness")]
#[command(about = "Conformance testing harness for freemath")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Capture host `std` reference values as fixture files.
    Capture {
        /// Output directory for fixture JSON files.
        #[arg(long)]
        output: PathBuf,
        /// Function family to capture (`float`, `trig`, `exp`, `log`, `pow`, `cmp` or `all`).
        #[arg(long, default_value = "all")]
        family: String,
    },
    /// Verify freemath against captured fixtures.
    Verify {
        /// Fixture JSON file, or a directory of them.
        #[arg(long)]
        fixture: PathBuf,
        /// Domain policy to verify under (`FREEMATH_MODE`, else both, when omitted).
        #[arg(long)]
        mode: Option<String>,
        /// Output report path (markdown).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Output report path (JSON).
        #[arg(long)]
        json: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Validate a structured JSONL log.
    ValidateLog {
        /// Log path.
        #[arg(long)]
        log: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Capture { output, family } => {
            eprintln!("Capturing {family} fixtures to {}", output.display());
            std::fs::create_dir_all(&output)?;
            let sets = if family.eq_ignore_ascii_case("all") {
                capture_all()
            } else {
                vec![capture_family(&family)?]
            };
            for set in &sets {
                let path = output.join(format!("{}.{}.json", set.family, set.version));
                set.to_file(&path)?;
                eprintln!("Wrote {} cases to {}", set.cases.len(), path.display());
            }
        }
        Command::Verify {
            fixture,
            mode,
            report,
            json,
            log,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let fixture_sets = load_fixture_sets(&fixture)?;
            let modes = select_modes(mode.as_deref(), policy_from_env()?)?;

            let mut emitter = match &log {
                Some(path) => Some(LogEmitter::to_file(path, "fixture-verify", &run_id())?),
                None => None,
            };
            let mut results = Vec::new();
            for &policy in &modes {
                let runner = TestRunner::new("fixture-verify", policy);
                for set in &fixture_sets {
                    match emitter.as_mut() {
                        Some(em) => results.extend(runner.run_logged(set, em)?),
                        None => results.extend(runner.run(set)),
                    }
                }
            }

            let mode_label = modes
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join("+");
            let report_doc = ConformanceReport {
                title: String::from("freemath Conformance Report"),
                mode: mode_label,
                timestamp: now_utc(),
                summary: VerificationSummary::from_results(results),
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            if let Some(path) = report {
                eprintln!("Writing report to {}", path.display());
                std::fs::write(&path, report_doc.to_markdown())?;
            }
            if let Some(path) = json {
                std::fs::write(&path, report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                for r in report_doc.summary.results.iter().filter(|r| !r.passed) {
                    eprintln!("FAIL {}: expected {}, got {}", r.case_name, r.expected, r.actual);
                }
                return Err("Conformance verification failed".into());
            }
        }
        Command::ValidateLog { log } => {
            let (lines, errors) = validate_log_file(&log)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!("Validated {lines} line(s), {} error(s)", errors.len());
            if !errors.is_empty() {
                return Err(format!("{} is not a valid structured log", log.display()).into());
            }
        }
    }

    Ok(())
}

fn load_fixture_sets(path: &Path) -> Result<Vec<FixtureSet>, Box<dyn std::error::Error>> {
    if path.is_file() {
        return Ok(vec![FixtureSet::from_file(path)?]);
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(path)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut sets = Vec::new();
    for p in paths {
        match FixtureSet::from_file(&p) {
            Ok(set) => sets.push(set),
            Err(err) => eprintln!("Skipping {}: {}", p.display(), err),
        }
    }
    if sets.is_empty() {
        return Err(format!(
            "No fixture JSON files found in {} (families: {})",
            path.display(),
            FAMILIES.join(", ")
        )
        .into());
    }
    Ok(sets)
}

fn run_id() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("run-{secs}")
}
