/// An operation the rule engine knows how to apply.
///
/// Binary operators are written as symbols between their operands; unary
/// operators are function names written before their single operand.
/// `Log10` and `Pow10` are spelled `log` and `antilog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `sqrt`
    Sqrt,
    /// `ln`
    Ln,
    /// `exp`
    Exp,
    /// `log`
    Log10,
    /// `antilog`
    Pow10,
}

impl Operator {
    /// Function operators, longest name first so that a shorter name is never
    /// matched inside a longer one (`log` inside `antilog`).
    pub const FUNCTIONS: [Self; 5] = [Self::Pow10, Self::Sqrt, Self::Exp, Self::Log10, Self::Ln];

    /// Maps a binary operator symbol to its operator.
    ///
    /// ## Example
    /// ```
    /// use sigfig::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('^'), Some(Operator::Power));
    /// assert_eq!(Operator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            _ => None,
        }
    }

    /// Matches a function name at the very start of `source`.
    ///
    /// ## Example
    /// ```
    /// use sigfig::ast::Operator;
    ///
    /// assert_eq!(Operator::match_function("antilog(2)"), Some(Operator::Pow10));
    /// assert_eq!(Operator::match_function("log2"), Some(Operator::Log10));
    /// assert_eq!(Operator::match_function("blog2"), None);
    /// ```
    #[must_use]
    pub fn match_function(source: &str) -> Option<Self> {
        Self::FUNCTIONS.into_iter().find(|f| source.starts_with(f.symbol()))
    }

    /// The symbol or function name written in expressions.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Sqrt => "sqrt",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Log10 => "log",
            Self::Pow10 => "antilog",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A decomposed expression.
///
/// The tree is built once by the decomposer with string leaves, converted
/// into a tree of the same shape with [`PrecisionValue`] leaves, and finally
/// reduced to a single value.
///
/// [`PrecisionValue`]: crate::interpreter::value::PrecisionValue
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<T> {
    /// A number or constant.
    Leaf(T),
    /// `left op right`.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    Operator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `op operand`, a function applied to its single operand.
    Function {
        /// The function.
        op:      Operator,
        /// Its operand.
        operand: Box<Self>,
    },
}

impl<T> Expr<T> {
    /// Builds a `Binary` node from its two operands.
    #[must_use]
    pub fn binary(left: Self, op: Operator, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right) }
    }

    /// Builds a `Function` node applying `op` to `operand`.
    #[must_use]
    pub fn function(op: Operator, operand: Self) -> Self {
        Self::Function { op,
                         operand: Box::new(operand) }
    }

    /// Number of nested levels; a lone leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::Function { operand, .. } => 1 + operand.depth(),
        }
    }

    /// Leaves from left to right.
    #[must_use]
    pub fn leaves(&self) -> Vec<&T> {
        match self {
            Self::Leaf(value) => vec![value],
            Self::Binary { left, right, .. } => {
                let mut leaves = left.leaves();
                leaves.extend(right.leaves());
                leaves
            },
            Self::Function { operand, .. } => operand.leaves(),
        }
    }

    /// Converts every leaf, keeping the shape of the tree.
    ///
    /// Stops at the first leaf that fails to convert.
    ///
    /// ## Example
    /// ```
    /// use sigfig::ast::{Expr, Operator};
    ///
    /// let tree = Expr::binary(Expr::Leaf("2"), Operator::Add, Expr::Leaf("x"));
    /// assert!(tree.clone().try_map(&mut |s: &str| s.parse::<f64>()).is_err());
    ///
    /// let tree = Expr::binary(Expr::Leaf("2"), Operator::Add, Expr::Leaf("3"));
    /// let numbers = tree.try_map(&mut |s: &str| s.parse::<f64>()).unwrap();
    /// assert_eq!(numbers.leaves(), vec![&2.0, &3.0]);
    /// ```
    pub fn try_map<U, E, F>(self, convert: &mut F) -> Result<Expr<U>, E>
        where F: FnMut(T) -> Result<U, E>
    {
        Ok(match self {
               Self::Leaf(value) => Expr::Leaf(convert(value)?),
               Self::Binary { left, op, right } => {
                   let left = left.try_map(convert)?;
                   Expr::binary(left, op, right.try_map(convert)?)
               },
               Self::Function { op, operand } => Expr::function(op, operand.try_map(convert)?),
           })
    }

    /// Collapses the tree bottom-up into a single value.
    ///
    /// `apply` receives the operator, the first operand and, for binary
    /// nodes, the second operand. Children are reduced left before right.
    ///
    /// ## Example
    /// ```
    /// use sigfig::ast::{Expr, Operator};
    ///
    /// let tree = Expr::binary(Expr::Leaf(8.0),
    ///                         Operator::Subtract,
    ///                         Expr::binary(Expr::Leaf(2.0), Operator::Multiply, Expr::Leaf(3.0)));
    ///
    /// let result = tree.try_reduce(&mut |op, a: f64, b: Option<f64>| match (op, b) {
    ///                      (Operator::Subtract, Some(b)) => Ok::<_, ()>(a - b),
    ///                      (Operator::Multiply, Some(b)) => Ok(a * b),
    ///                      _ => Err(()),
    ///                  });
    /// assert_eq!(result, Ok(2.0));
    /// ```
    pub fn try_reduce<E, F>(self, apply: &mut F) -> Result<T, E>
        where F: FnMut(Operator, T, Option<T>) -> Result<T, E>
    {
        match self {
            Self::Leaf(value) => Ok(value),
            Self::Binary { left, op, right } => {
                let left = left.try_reduce(apply)?;
                let right = right.try_reduce(apply)?;
                apply(op, left, Some(right))
            },
            Self::Function { op, operand } => {
                let operand = operand.try_reduce(apply)?;
                apply(op, operand, None)
            },
        }
    }
}

/// Prints the tree as nested lists: `[34.56, *, [230, ^, 2]]`.
impl<T: std::fmt::Display> std::fmt::Display for Expr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(value) => write!(f, "{value}"),
            Self::Binary { left, op, right } => write!(f, "[{left}, {op}, {right}]"),
            Self::Function { op, operand } => write!(f, "[{op}, {operand}]"),
        }
    }
}
