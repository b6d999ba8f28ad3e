//! Host reference fixture capture.
//!
//! Runs test vectors through the host `std` `f64` implementations and records
//! the results, with each function's documented tolerance, as fixture sets for
//! later verification against `freemath-core`.

use crate::error::HarnessError;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::now_utc;

/// Fixture schema version written by [`capture_family`].
pub const FIXTURE_VERSION: &str = "v1";

/// Families understood by [`capture_family`].
pub const FAMILIES: &[&str] = &["float", "trig", "exp", "log", "pow", "cmp"];

const SIN_ABS_TOL: f64 = 1e-5;
const EXP_REL_TOL: f64 = 1e-5;
const LOG_ABS_TOL: f64 = 1e-4;
const POW_REL_TOL: f64 = 2e-3;

/// Capture the reference fixture set for `family`.
pub fn capture_family(family: &str) -> Result<FixtureSet, HarnessError> {
    let cases = match family {
        "float" => float_cases(),
        "trig" => trig_cases(),
        "exp" => exp_cases(),
        "log" => log_cases(),
        "pow" => pow_cases(),
        "cmp" => cmp_cases(),
        other => return Err(HarnessError::UnknownFamily(other.to_string())),
    };
    Ok(FixtureSet {
        version: FIXTURE_VERSION.to_string(),
        family: family.to_string(),
        captured_at: now_utc(),
        cases,
    })
}

/// Capture every family.
pub fn capture_all() -> Vec<FixtureSet> {
    FAMILIES
        .iter()
        .filter_map(|family| capture_family(family).ok())
        .collect()
}

fn exact(function: &str, x: f32, want: f64) -> FixtureCase {
    FixtureCase::value(format!("{function}({x})"), function, vec![x], want, 0.0, 0.0)
}

fn float_cases() -> Vec<FixtureCase> {
    let inputs = [
        -4.5_f32,
        -3.2,
        -1.0,
        -0.5,
        0.0,
        0.25,
        3.2,
        7.0,
        1.0e6,
        8_388_609.0,
    ];
    let mut cases = Vec::new();
    for &x in &inputs {
        let wide = f64::from(x);
        cases.push(exact("abs", x, wide.abs()));
        cases.push(exact("ceil", x, wide.ceil()));
        cases.push(exact("floor", x, wide.floor()));
        cases.push(exact("trunc", x, wide.trunc()));
    }
    cases
}

fn trig_cases() -> Vec<FixtureCase> {
    let mut cases = Vec::new();
    for i in -16..=16 {
        let x = i as f32 * 0.625;
        let wide = f64::from(x);
        for (function, want) in [
            ("sin", wide.sin()),
            ("cos", (wide + f64::from(freemath_core::PI_2)).sin()),
            ("sin_software", wide.sin()),
            ("cos_software", (wide + f64::from(freemath_core::PI_2)).sin()),
        ] {
            cases.push(FixtureCase::value(
                format!("{function}({x})"),
                function,
                vec![x],
                want,
                SIN_ABS_TOL,
                0.0,
            ));
        }
    }
    cases
}

fn exp_cases() -> Vec<FixtureCase> {
    let inputs = [-87.5_f32, -20.0, -1.0, -0.001, 0.0, 0.5, 1.0, 10.0, 42.0, 88.0];
    let mut cases: Vec<FixtureCase> = inputs
        .iter()
        .map(|&x| {
            FixtureCase::value(
                format!("exp({x})"),
                "exp",
                vec![x],
                f64::from(x).exp(),
                0.0,
                EXP_REL_TOL,
            )
        })
        .collect();
    cases.push(FixtureCase::error("exp_overflow", "exp", vec![100.0], "overflow"));
    cases.push(FixtureCase::error(
        "exp_underflow",
        "exp",
        vec![-100.0],
        "underflow",
    ));
    cases
}

fn log_cases() -> Vec<FixtureCase> {
    let inputs = [
        1.0e-30_f32,
        0.001,
        0.5,
        1.0,
        2.0,
        std::f32::consts::E,
        10.0,
        1000.0,
        1.0e30,
    ];
    let mut cases = Vec::new();
    for &x in &inputs {
        let wide = f64::from(x);
        cases.push(FixtureCase::value(
            format!("log({x})"),
            "log",
            vec![x],
            wide.ln(),
            LOG_ABS_TOL,
            0.0,
        ));
        cases.push(FixtureCase::value(
            format!("log2({x})"),
            "log2",
            vec![x],
            wide.log2(),
            LOG_ABS_TOL * std::f64::consts::LOG2_E,
            1e-6,
        ));
        cases.push(FixtureCase::value(
            format!("log10({x})"),
            "log10",
            vec![x],
            wide.log10(),
            LOG_ABS_TOL * std::f64::consts::LOG10_E,
            1e-6,
        ));
    }
    for (x, base) in [(8.0_f32, 2.0_f32), (100.0, 10.0), (0.25, 4.0)] {
        let want = f64::from(x).ln() / f64::from(base).ln();
        cases.push(FixtureCase::value(
            format!("log_base({x}, {base})"),
            "log_base",
            vec![x, base],
            want,
            1e-3,
            0.0,
        ));
    }
    cases.push(FixtureCase::error("log_zero", "log", vec![0.0], "pole"));
    cases.push(FixtureCase::error("log_negative", "log", vec![-1.0], "domain"));
    cases.push(FixtureCase::error(
        "log_base_one",
        "log_base",
        vec![8.0, 1.0],
        "domain",
    ));
    cases
}

fn pow_cases() -> Vec<FixtureCase> {
    let mut cases: Vec<FixtureCase> = [
        (2.0_f32, 3.0_f32),
        (9.0, 0.5),
        (10.0, -2.0),
        (0.5, 7.0),
        (1.5, 4.0),
        (3.0, 0.0),
        (0.0, 2.0),
    ]
    .iter()
    .map(|&(x, y)| {
        FixtureCase::value(
            format!("pow({x}, {y})"),
            "pow",
            vec![x, y],
            f64::from(x).powf(f64::from(y)),
            0.0,
            POW_REL_TOL,
        )
    })
    .collect();
    cases.push(FixtureCase::error(
        "pow_negative_base",
        "pow",
        vec![-2.0, 0.5],
        "domain",
    ));
    cases.push(FixtureCase::error(
        "pow_zero_negative",
        "pow",
        vec![0.0, -1.0],
        "pole",
    ));
    cases.push(FixtureCase::error(
        "pow_overflow",
        "pow",
        vec![10.0, 50.0],
        "overflow",
    ));
    cases
}

fn cmp_cases() -> Vec<FixtureCase> {
    let mut cases = Vec::new();
    for (a, b) in [(3.0_f32, 5.0_f32), (-2.0, -7.0), (1.5, 1.5)] {
        for (function, want) in [("min", a.min(b)), ("max", a.max(b))] {
            cases.push(FixtureCase::value(
                format!("{function}({a}, {b})"),
                function,
                vec![a, b],
                f64::from(want),
                0.0,
                0.0,
            ));
        }
    }
    cases
}
