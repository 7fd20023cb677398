/// Magnitude helpers and checked numeric conversions.
///
/// This module locates the leading digit of a floating-point value, either as
/// a power-of-ten exponent or as a digit rank, and converts digit counts into
/// the integer type used for significant figures without silent truncation.
pub mod num;
/// Rendering of precision-carrying values.
///
/// Formats a value with exactly as many digits as its significant-figure
/// count allows, switching to scientific notation when trailing zeros would be
/// ambiguous.
pub mod render;
