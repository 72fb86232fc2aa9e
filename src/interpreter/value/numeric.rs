use crate::{interpreter::value::core::Value, util::num::f64_to_i64_exact};

/// Rounds a magnitude to five decimal places.
///
/// Magnitudes too large for the scaling step pass through unchanged, as do
/// non-finite ones.
#[must_use]
pub fn round_magnitude(value: f64) -> f64 {
    let scaled = value * 100_000.0;
    if scaled.is_finite() {
        scaled.round() / 100_000.0
    } else {
        value
    }
}

/// Classifies a raw magnitude as the narrowest matching numeric [`Value`].
///
/// The magnitude is rounded to five decimal places first; integral results
/// within the exactly-representable `i64` range become `Value::Integer`, all
/// others become `Value::Float`. Non-finite magnitudes stay `Float` untouched.
/// Classifying the magnitude of a classified value is a no-op, which keeps
/// rendered numbers stable across re-parsing.
///
/// # Example
/// ```
/// use unical::interpreter::value::{core::Value, numeric::classify};
///
/// assert_eq!(classify(5.0), Value::Integer(5));
/// assert_eq!(classify(50.1), Value::Float(50.1));
/// assert_eq!(classify(1.999_999_999), Value::Integer(2));
/// ```
#[must_use]
pub fn classify(value: f64) -> Value {
    if !value.is_finite() {
        return Value::Float(value);
    }

    let rounded = round_magnitude(value);
    f64_to_i64_exact(rounded).map_or(Value::Float(rounded), Value::Integer)
}
