/// Returns the base-10 exponent of the leading digit of `value`.
///
/// Zero has no leading digit and non-finite values have no magnitude, so both
/// yield `None`. The floating-point logarithm is corrected against exact
/// powers of ten, so values such as `0.001` or `1000.0` are classified
/// correctly.
///
/// ## Example
/// ```
/// use sigfig::util::num::order_of_magnitude;
///
/// assert_eq!(order_of_magnitude(546.0), Some(2));
/// assert_eq!(order_of_magnitude(0.0789), Some(-2));
/// assert_eq!(order_of_magnitude(-1000.0), Some(3));
/// assert_eq!(order_of_magnitude(0.0), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn order_of_magnitude(value: f64) -> Option<i32> {
    if value == 0.0 || !value.is_finite() {
        return None;
    }

    let magnitude = value.abs();
    // log10 of a finite f64 lies well inside the i32 range
    let mut order = magnitude.log10().floor() as i32;
    if 10_f64.powi(order) > magnitude {
        order -= 1;
    } else if 10_f64.powi(order + 1) <= magnitude {
        order += 1;
    }
    Some(order)
}

/// Returns the digit rank of the leading digit of `value`.
///
/// Ranks count positions to the right of the decimal point: the ones digit has
/// rank `0`, the tens digit rank `-1` and the first decimal digit rank `1`.
/// This is the negated [`order_of_magnitude`]. Zero has no leading digit and
/// yields `None`, which callers treat as an infinitely fine rank.
///
/// ```text
/// rank:   -3 -2 -1  0   1  2  3
/// digit:   1  2  3  4 . 5  6  7
/// ```
///
/// ## Example
/// ```
/// use sigfig::util::num::digit_rank;
///
/// assert_eq!(digit_rank(546.0), Some(-2));
/// assert_eq!(digit_rank(0.0789), Some(2));
/// assert_eq!(digit_rank(7.8), Some(0));
/// assert_eq!(digit_rank(0.0), None);
/// ```
#[must_use]
pub fn digit_rank(value: f64) -> Option<i32> {
    order_of_magnitude(value).map(|order| -order)
}

/// Safely converts a digit count to `i32` if and only if it fits.
///
/// ## Errors
/// Returns `Err(error)` if the count exceeds `i32::MAX`.
///
/// ## Parameters
/// - `value`: The count to convert.
/// - `error`: The error to return if the conversion would truncate.
///
/// ## Example
/// ```
/// use sigfig::util::num::usize_to_i32_checked;
///
/// assert_eq!(usize_to_i32_checked(4, "too many digits"), Ok(4));
/// assert!(usize_to_i32_checked(usize::MAX, "too many digits").is_err());
/// ```
pub fn usize_to_i32_checked<E>(value: usize, error: E) -> Result<i32, E> {
    i32::try_from(value).map_err(|_| error)
}
