/// Formats an acceleration or other quantity for terminal output, switching
/// to scientific notation outside of [1e-2, 1e4].
pub fn format_number(value: f64) -> String {
    if !(1e-2..=1e4).contains(&value.abs()) {
        // scientific notation with 4 significant digits
        format!("{:.4e}", value)
    } else {
        // up to 6 decimal places, removing trailing zeros
        format!("{:.6}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Asserts two values agree to a relative tolerance of 1e-9.
pub fn assert_equal(left: f64, right: f64) {
    assert_equal_reltol(left, right, 1e-9);
}

/// Asserts two values agree to the given relative tolerance.
/// Values that are both within machine epsilon of zero are considered equal.
pub fn assert_equal_reltol(left: f64, right: f64, reltol: f64) {
    let max = left.abs().max(right.abs());
    if max < f64::EPSILON {
        return;
    }
    let abs_diff = (left - right).abs();
    let rel_diff = abs_diff / max;

    assert!(
        rel_diff < reltol,
        "Assertion failed: left ({}) and right ({}) are not approximately equal. Relative difference: {}. Absolute difference: {}",
        left,
        right,
        rel_diff,
        abs_diff,
    );
}
