/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;
/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(f64)`: The converted value if it is safe.
/// - `Err(error)`: If the value is too large.
///
/// ## Example
/// ```
/// use unical::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside safe range
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}
/// Converts an `f64` to `i64` when the value is finite, integral, and small
/// enough to survive the round trip exactly.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
///
/// # Returns
/// - `Some(i64)`: The value as an integer.
/// - `None`: For fractional, non-finite, or too large values.
///
/// # Example
/// ```
/// use unical::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(1000.0), Some(1000));
/// assert_eq!(f64_to_i64_exact(-3.0), Some(-3));
///
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(value as i64)
}
