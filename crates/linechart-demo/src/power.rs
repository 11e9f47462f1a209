// File: crates/linechart-demo/src/power.rs
// Summary: Sample data: ten power curves y = x^n / 10^(n-1) over [-11, 11].

use linechart_core::{Dataset, Series};

pub const EXPONENTS: std::ops::RangeInclusive<i32> = 1..=10;
pub const X_START: f64 = -11.0;
pub const X_END: f64 = 11.0;
pub const X_STEP: f64 = 0.1;

/// `x^n` scaled down by `10^(n-1)` so every curve spans a comparable range.
#[inline]
pub fn power(x: f64, n: i32) -> f64 {
    x.powi(n) / 10f64.powi(n - 1)
}

/// One series per exponent. `x` accumulates in steps of 0.1, so sample
/// positions carry the usual binary rounding (e.g. -10.899999999999999).
pub fn power_curves() -> Dataset {
    EXPONENTS
        .map(|n| {
            let mut points = Vec::new();
            let mut x = X_START;
            while x <= X_END {
                points.push((x, power(x, n)));
                x += X_STEP;
            }
            Series::with_data(points)
        })
        .collect()
}
