use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// `+`, `-`, `*` and `^` follow IEEE 754 semantics. Division checks its
    /// divisor explicitly: a divisor of exactly zero is an error rather than
    /// an infinity. Comparison operators are not processed here.
    ///
    /// # Example
    /// ```
    /// use benchexpr::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0).unwrap();
    /// assert_eq!(result, 3.0);
    ///
    /// assert!(Context::eval_scalar_op(BinaryOperator::Div, 1.0, 0.0).is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        match op {
            Add => Ok(left + right),
            Sub => Ok(left - right),
            Mul => Ok(left * right),
            Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left / right)
            },
            Pow => Ok(left.powf(right)),
            _ => Ok(Self::eval_comparison(op, left, right)),
        }
    }
}
