use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::Context, value::Array},
};

impl Context<'_> {
    /// Evaluates a unary operation on an array.
    ///
    /// `Negate` flips the sign of every element; `Plus` returns the array
    /// unchanged. Neither can fail.
    ///
    /// # Example
    /// ```
    /// use benchexpr::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, vec![1.0, -2.0]);
    /// assert_eq!(v, vec![-1.0, 2.0]);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, mut value: Array) -> Array {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => {
                for v in &mut value {
                    *v = -*v;
                }
                value
            },
        }
    }
}
