//! Final state report.
//!
//! ```text
//! <N>
//! <radius as %.2e>
//! <x> <y> <vx> <vy> <mass> <label>    (one line per body, input order)
//! ```
//!
//! Reals use C-style exponent notation (`1.4960e+11`), 11 characters wide
//! with 4 digits after the point; labels are right-justified in 12.

use std::fmt::Write;

use crate::simulation::states::System;

/// `value` as C's `%.{precision}e`: signed exponent with at least two digits
pub fn format_exp(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let rust = format!("{:.*e}", precision, value);
    // `{:e}` always yields a mantissa and an exponent such as `1.4960e11`
    let (mantissa, exponent) = rust.split_once('e').unwrap_or((rust.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}

/// Render the report for `sys` and its display `radius`
pub fn format_report(sys: &System, radius: f64) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "{}", sys.bodies.len());
    let _ = writeln!(out, "{}", format_exp(radius, 2));
    for b in &sys.bodies {
        let (x, v) = (b.position(), b.velocity());
        let _ = writeln!(
            out,
            "{:>11} {:>11} {:>11} {:>11} {:>11} {:>12}",
            format_exp(x.x, 4),
            format_exp(x.y, 4),
            format_exp(v.x, 4),
            format_exp(v.y, 4),
            format_exp(b.mass(), 4),
            b.label(),
        );
    }
    out
}
