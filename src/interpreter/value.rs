use crate::util::{num::digit_rank, render::render};

/// Significant-figure count carried by a [`PrecisionValue`].
///
/// `Exact` marks defined constants such as `e` and `pi`; it orders above every
/// `Count`, so taking the minimum of two counts always picks the limiting one.
/// `Count` is signed: the power rule can leave a low-precision value with zero
/// or fewer significant figures, which is kept as-is and reported through
/// [`PrecisionValue::is_degenerate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SigFigs {
    /// A measured quantity with this many significant figures.
    Count(i32),
    /// A defined constant that never limits precision.
    Exact,
}

impl SigFigs {
    /// Shifts a count by `delta`; `Exact` is unaffected.
    ///
    /// ## Example
    /// ```
    /// use sigfig::interpreter::value::SigFigs;
    ///
    /// assert_eq!(SigFigs::Count(3).adjust(-1), SigFigs::Count(2));
    /// assert_eq!(SigFigs::Exact.adjust(-1), SigFigs::Exact);
    /// ```
    #[must_use]
    pub const fn adjust(self, delta: i32) -> Self {
        match self {
            Self::Count(n) => Self::Count(n.saturating_add(delta)),
            Self::Exact => Self::Exact,
        }
    }

    /// The finite count, or `None` for exact values.
    #[must_use]
    pub const fn count(self) -> Option<i32> {
        match self {
            Self::Count(n) => Some(n),
            Self::Exact => None,
        }
    }
}

impl std::fmt::Display for SigFigs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

/// A floating-point value paired with its significant-figure count.
///
/// Values are immutable; every operation of the rule engine builds a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecisionValue {
    /// The numeric value.
    pub value:    f64,
    /// How many of its digits carry meaning.
    pub sig_figs: SigFigs,
}

impl PrecisionValue {
    /// Creates a measured value with `sig_figs` significant figures.
    #[must_use]
    pub const fn new(value: f64, sig_figs: i32) -> Self {
        Self { value,
               sig_figs: SigFigs::Count(sig_figs) }
    }

    /// Creates a value for a defined constant.
    #[must_use]
    pub const fn exact(value: f64) -> Self {
        Self { value,
               sig_figs: SigFigs::Exact }
    }

    /// Returns the same quantity with its sign flipped and its precision
    /// untouched.
    #[must_use]
    pub fn negate(self) -> Self {
        Self { value: -self.value,
               ..self }
    }

    /// Rank of the last significant digit: `rank + sig_figs - 1`.
    ///
    /// Zero and exact values have no last significant digit and never limit an
    /// addition, so they yield `None`.
    ///
    /// ## Example
    /// ```
    /// use sigfig::interpreter::value::PrecisionValue;
    ///
    /// // 546 is significant down to the ones place (rank 0).
    /// assert_eq!(PrecisionValue::new(546.0, 3).last_significant_rank(), Some(0));
    /// // 0.0789 is significant down to the fourth decimal place.
    /// assert_eq!(PrecisionValue::new(0.0789, 3).last_significant_rank(), Some(4));
    /// assert_eq!(PrecisionValue::new(0.0, 2).last_significant_rank(), None);
    /// ```
    #[must_use]
    pub fn last_significant_rank(&self) -> Option<i32> {
        match (digit_rank(self.value), self.sig_figs) {
            (Some(rank), SigFigs::Count(n)) => Some(rank + n - 1),
            _ => None,
        }
    }

    /// Whether the rules left this value without a single significant figure.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        matches!(self.sig_figs, SigFigs::Count(n) if n < 1)
    }

    /// Formats the value to exactly its significant figures.
    ///
    /// ## Example
    /// ```
    /// use sigfig::interpreter::value::PrecisionValue;
    ///
    /// assert_eq!(PrecisionValue::new(2.0, 2).render(), "2.0");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        render(self.value, self.sig_figs)
    }
}

impl std::fmt::Display for PrecisionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
