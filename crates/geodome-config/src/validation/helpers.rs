//! Shared range-validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` or not finite (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is finite and strictly greater than zero.
pub(crate) fn validate_positive(errors: &mut Vec<String>, name: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(format!("{name} = {value} must be positive"));
    }
}

/// Push an error unless `value` is finite and zero or greater.
pub(crate) fn validate_non_negative(errors: &mut Vec<String>, name: &str, value: f64) {
    if !value.is_finite() || value < 0.0 {
        errors.push(format!("{name} = {value} must not be negative"));
    }
}

/// Push an error if `value` is NaN or infinite.
pub(crate) fn validate_finite(errors: &mut Vec<String>, name: &str, value: f64) {
    if !value.is_finite() {
        errors.push(format!("{name} = {value} must be finite"));
    }
}

/// Push an error if `value` is a malformed color string.
pub(crate) fn validate_color_field(errors: &mut Vec<String>, name: &str, value: &str) {
    if !crate::colors::validate_color(value) {
        errors.push(format!("{name}: invalid color '{value}'"));
    }
}
