//! Integration test: numeric contract of the public surface.
//!
//! Validates that:
//! 1. abs/ceil satisfy their ordering properties over a dense sweep.
//! 2. sin/cos agree at the anchor points and cos is the phase-shifted sin.
//! 3. exp/log/pow meet their accuracy envelopes and compose consistently.
//! 4. Plain functions depend on their arguments alone and apply the build policy.
//!
//! Run: cargo test -p freemath-core --test properties_test

use freemath_core::{
    DEFAULT_POLICY, DomainPolicy, EXP_MAX_ARG, LN2, MathError, PI, PI_2, Software, abs, ceil, cos,
    cos_with, exp, exp_with, log, log_with, log2, log10, log_base, max, min, pow, pow_with, sin,
    sin_with, try_exp, try_log, try_log_base, try_log2, try_log10, try_pow,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sweep(lo: f32, hi: f32, step: f32) -> Vec<f32> {
    let n = ((hi - lo) / step) as usize;
    (0..=n).map(|i| lo + i as f32 * step).collect()
}

// ---------------------------------------------------------------------------
// 1. Elementary ops
// ---------------------------------------------------------------------------

#[test]
fn abs_properties() {
    for x in sweep(-500.0, 500.0, 0.125) {
        assert!(abs(x) >= 0.0);
        assert_eq!(abs(-x), abs(x));
        if x >= 0.0 {
            assert_eq!(abs(x), x);
        }
    }
    assert_eq!(abs(-4.5), 4.5);
}

#[test]
fn ceil_properties() {
    for x in sweep(-10_000.0, 10_000.0, 0.731) {
        let c = ceil(x);
        assert_eq!(c, c as i32 as f32, "ceil({x}) = {c} is not integral");
        assert!(c >= x, "ceil({x}) = {c} < x");
        assert!(c - x < 1.0, "ceil({x}) = {c} too large");
    }
    assert_eq!(ceil(3.2), 4.0);
    assert_eq!(ceil(-3.2), -3.0);
}

// ---------------------------------------------------------------------------
// 2. Trigonometric primitive
// ---------------------------------------------------------------------------

#[test]
fn trig_anchor_points() {
    assert!(sin(0.0).abs() <= 1e-5);
    assert!((cos(0.0) - 1.0).abs() <= 1e-5);
    assert!((sin(PI / 6.0) - 0.5).abs() <= 1e-5);
    assert!((cos(PI) + 1.0).abs() <= 1e-5);
}

#[test]
fn cos_equals_shifted_sin_bit_for_bit() {
    for x in sweep(-50.0, 50.0, 0.0625) {
        assert_eq!(cos(x).to_bits(), sin(x + PI_2).to_bits());
        assert_eq!(
            cos_with(x, &Software).to_bits(),
            sin_with(x + PI_2, &Software).to_bits()
        );
    }
}

// ---------------------------------------------------------------------------
// 3. Exponential, logarithm, power
// ---------------------------------------------------------------------------

#[test]
fn exp_scenarios() {
    assert_eq!(exp(0.0), 1.0);
    assert!((exp(1.0) - 2.71828).abs() < 1e-3);
    assert!((exp(-1.0) - 0.367_879_4).abs() < 1e-5);
    assert!((exp(10.0) / 22_026.465 - 1.0).abs() < 1e-5);
}

#[test]
fn exp_negative_branch_is_full_reciprocal() {
    for x in sweep(0.01, EXP_MAX_ARG, 0.37) {
        assert_eq!(exp(-x), 1.0 / exp(x), "x={x}");
        let want = (-f64::from(x)).exp();
        assert!(((f64::from(exp(-x)) - want) / want).abs() < 1e-5, "exp(-{x})");
    }
}

#[test]
fn log_of_exact_powers_of_two() {
    for n in -40..=40 {
        let x = 2.0_f32.powi(n);
        assert!((log(x) - n as f32 * LN2).abs() < 1e-4, "log(2^{n})");
    }
}

#[test]
fn exp_and_log_are_near_inverses() {
    for x in sweep(-20.0, 20.0, 0.25) {
        assert!((log(exp(x)) - x).abs() < 2e-4, "log(exp({x}))");
    }
}

#[test]
fn pow_is_exp_of_scaled_log() {
    for (x, y) in [(2.0_f32, 3.0_f32), (3.0, 2.0), (1.5, -4.0), (100.0, 0.25)] {
        let expected = exp(y * log(x));
        assert_eq!(pow(x, y), expected, "pow({x}, {y})");
    }
    assert!((pow(2.0, 3.0) - 8.0).abs() < 1e-2);
    assert!((pow(3.0, 2.0) - 9.0).abs() < 1e-2);
}

// ---------------------------------------------------------------------------
// 4. Comparison helpers
// ---------------------------------------------------------------------------

#[test]
fn min_max_scenarios() {
    assert_eq!(min(3, 5), 3);
    assert_eq!(max(3, 5), 5);
    assert_eq!(min(-2, -7), -7);
    assert_eq!(min(1.5_f32, 0.5), 0.5);
    assert_eq!(max("apple", "pear"), "pear");

    let mut evaluated = Vec::new();
    let mut probe = |v: i64| {
        evaluated.push(v);
        v
    };
    assert_eq!(max(probe(10), probe(-10)), 10);
    assert_eq!(evaluated, vec![10, -10]);
}

// ---------------------------------------------------------------------------
// 5. Domain policy
// ---------------------------------------------------------------------------

#[test]
fn out_of_domain_results_are_referentially_transparent() {
    let first = (exp(100.0), log(0.0), pow(0.0, -1.0), log(-5.0));
    for _ in 0..3 {
        let again = (exp(100.0), log(0.0), pow(0.0, -1.0), log(-5.0));
        assert_eq!(first.0.to_bits(), again.0.to_bits());
        assert_eq!(first.1.to_bits(), again.1.to_bits());
        assert_eq!(first.2.to_bits(), again.2.to_bits());
        assert_eq!(first.3.to_bits(), again.3.to_bits());
    }

    // Explicit-policy calls never disturb the plain forms.
    assert!(exp_with(100.0, DomainPolicy::Strict).is_nan());
    assert_eq!(exp_with(100.0, DomainPolicy::Hardened), f32::MAX);
    assert_eq!(exp(100.0).to_bits(), first.0.to_bits());
}

#[test]
fn plain_functions_apply_build_policy() {
    let cases: [(f32, Result<f32, MathError>); 6] = [
        (exp(100.0), try_exp(100.0)),
        (exp(-100.0), try_exp(-100.0)),
        (log(0.0), try_log(0.0)),
        (log2(-4.0), try_log2(-4.0)),
        (log10(0.0), try_log10(0.0)),
        (log_base(8.0, 1.0), try_log_base(8.0, 1.0)),
    ];
    for (plain, checked) in cases {
        let err = checked.unwrap_err();
        assert_eq!(plain.to_bits(), err.resolve(DEFAULT_POLICY).to_bits(), "{err}");
    }
    let err = try_pow(-2.0, 0.5).unwrap_err();
    assert_eq!(
        pow(-2.0, 0.5).to_bits(),
        err.resolve(DEFAULT_POLICY).to_bits()
    );
}

#[test]
fn explicit_policy_forms() {
    assert!(matches!(try_exp(100.0), Err(MathError::Overflow { .. })));
    assert!(matches!(try_log(-5.0), Err(MathError::Domain { .. })));

    assert!(exp_with(100.0, DomainPolicy::Strict).is_nan());
    assert!(log_with(-5.0, DomainPolicy::Strict).is_nan());
    assert!(log_with(0.0, DomainPolicy::Strict).is_nan());
    assert!(pow_with(-2.0, 0.5, DomainPolicy::Strict).is_nan());

    assert_eq!(exp_with(100.0, DomainPolicy::Hardened), f32::MAX);
    assert_eq!(exp_with(-100.0, DomainPolicy::Hardened), 0.0);
    assert_eq!(log_with(0.0, DomainPolicy::Hardened), f32::MIN);
    assert_eq!(log_with(-5.0, DomainPolicy::Hardened), 0.0);
    assert_eq!(pow_with(0.0, -1.0, DomainPolicy::Hardened), f32::MIN);
}
