use crate::{interpreter::value::SigFigs, util::num::order_of_magnitude};

/// Smallest order of magnitude still printed in fixed notation.
pub const MIN_FIXED_ORDER: i32 = -4;

/// Formats `value` with exactly as many significant digits as `sig_figs`.
///
/// - `Exact` values print the shortest representation that round-trips.
/// - Counts below one print a single digit.
/// - Zero prints with `count - 1` decimals, mirroring how zero literals are
///   read (`0.00` has three significant figures).
/// - Fixed notation is used while the last significant digit sits at or right
///   of the ones place and the magnitude is at least `1e-4`; scientific
///   notation otherwise, so that no trailing zero is printed without being
///   significant.
///
/// Non-finite values are printed as-is.
///
/// # Example
/// ```
/// use sigfig::{interpreter::value::SigFigs, util::render::render};
///
/// assert_eq!(render(2.0, SigFigs::Count(2)), "2.0");
/// assert_eq!(render(7948.8, SigFigs::Count(2)), "7.9e3");
/// assert_eq!(render(0.004_503, SigFigs::Count(3)), "0.00450");
/// assert_eq!(render(9.96, SigFigs::Count(2)), "10");
/// assert_eq!(render(0.0, SigFigs::Count(3)), "0.00");
/// ```
#[must_use]
pub fn render(value: f64, sig_figs: SigFigs) -> String {
    let digits = match sig_figs {
        SigFigs::Exact => return format!("{value}"),
        SigFigs::Count(n) => n.max(1),
    };

    let Some(order) = order_of_magnitude(value) else {
        if value == 0.0 {
            return format!("{:.*}", decimals(digits - 1), 0.0);
        }
        return format!("{value}");
    };
    let order = rounded_order(value, digits, order);

    let fraction_digits = digits - 1 - order;
    if fraction_digits >= 0 && order >= MIN_FIXED_ORDER {
        format!("{:.*}", decimals(fraction_digits), value)
    } else {
        format!("{:.*e}", decimals(digits - 1), value)
    }
}

/// Order of magnitude of `value` once rounded to `digits` significant digits.
///
/// Rounding can carry into a new leading digit (`9.96` to two digits is
/// `10`), which moves the last printed digit one place to the left.
fn rounded_order(value: f64, digits: i32, order: i32) -> i32 {
    let scale = 10_f64.powi(order - digits + 1);
    let rounded = (value / scale).round() * scale;
    order_of_magnitude(rounded).unwrap_or(order)
}

fn decimals(count: i32) -> usize {
    usize::try_from(count).unwrap_or(0)
}
