use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::array::broadcast,
            core::{Context, EvalResult},
        },
        value::Array,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two arrays.
    ///
    /// The operands are combined element by element using [`broadcast`].
    /// Arithmetic operators go through `eval_scalar_op`, comparisons through
    /// `eval_comparison`.
    ///
    /// # Errors
    /// - `LengthMismatch` when both operands are longer than one element and
    ///   their lengths differ.
    /// - `DivisionByZero` when any paired divisor is exactly zero.
    ///
    /// # Example
    /// ```
    /// use benchexpr::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &[1.0, 2.0], &[10.0]);
    /// assert_eq!(result.unwrap(), vec![11.0, 12.0]);
    ///
    /// let result = Context::eval_binary(BinaryOperator::GreaterEqual, &[50.0, 150.0], &[100.0]);
    /// assert_eq!(result.unwrap(), vec![0.0, 1.0]);
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &[f64], right: &[f64]) -> EvalResult<Array> {
        if op.is_comparison() {
            broadcast(left, right, |l, r| Ok(Self::eval_comparison(op, l, r)))
        } else {
            broadcast(left, right, |l, r| Self::eval_scalar_op(op, l, r))
        }
    }
}
