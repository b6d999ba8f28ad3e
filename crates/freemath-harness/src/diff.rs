//! Diff rendering for fixture comparison.

/// Render a text diff between expected and actual output.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    for (i, (e, a)) in expected.lines().zip(actual.lines()).enumerate() {
        if e != a {
            out.push_str(&format!("@@ line {} @@\n", i + 1));
            out.push_str(&format!("-{e}\n"));
            out.push_str(&format!("+{a}\n"));
        }
    }
    out
}

/// Render the distance between a reference value and a computed one.
#[must_use]
pub fn render_numeric_diff(expected: f64, actual: f32, abs_tol: f64, rel_tol: f64) -> String {
    let actual = f64::from(actual);
    let delta = (actual - expected).abs();
    let rel = if expected == 0.0 {
        f64::INFINITY
    } else {
        delta / expected.abs()
    };
    format!(
        "--- expected {expected:e}\n+++ actual   {actual:e}\n|delta| = {delta:e} (abs_tol {abs_tol:e}), rel = {rel:e} (rel_tol {rel_tol:e})\n"
    )
}
