use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

/// Maps a boolean to the language's truth values.
const fn truth(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

impl Context<'_> {
    /// Evaluates a scalar comparison.
    ///
    /// Returns `1.0` when the comparison holds and `0.0` otherwise. Equality is
    /// exact; any comparison involving NaN is false except `!=`.
    /// Arithmetic operators are not comparisons and yield `0.0`.
    ///
    /// # Example
    /// ```
    /// use benchexpr::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_comparison(BinaryOperator::LessEqual, 2.0, 2.0), 1.0);
    /// assert_eq!(Context::eval_comparison(BinaryOperator::Equal, 0.1 + 0.2, 0.3), 0.0);
    /// ```
    #[must_use]
    pub fn eval_comparison(op: BinaryOperator, left: f64, right: f64) -> f64 {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        #[allow(clippy::float_cmp)]
        let result = match op {
            Less => left < right,
            Greater => left > right,
            LessEqual => left <= right,
            GreaterEqual => left >= right,
            Equal => left == right,
            NotEqual => left != right,
            _ => false,
        };
        truth(result)
    }
}
