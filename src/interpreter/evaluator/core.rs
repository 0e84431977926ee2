use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::function::random::{ProcessRandom, RandomSource},
        value::{Array, Variables},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the evaluation context.
///
/// A context borrows the variable environment and the random source for the
/// duration of one or more evaluations. It holds no other state, so
/// evaluating the same tree twice against the same context yields identical
/// results unless `random()` is involved.
pub struct Context<'a> {
    /// Variable values, looked up by exact name.
    pub variables: &'a Variables,
    /// Source of the numbers returned by `random()`.
    pub random:    &'a dyn RandomSource,
}

impl<'a> Context<'a> {
    /// Creates a context over `variables` drawing `random()` from the
    /// thread-local generator.
    #[must_use]
    pub fn new(variables: &'a Variables) -> Self {
        Self { variables,
               random: &ProcessRandom }
    }

    /// Creates a context with an explicit random source, for callers that
    /// need reproducible `random()` values.
    #[must_use]
    pub fn with_random(variables: &'a Variables, random: &'a dyn RandomSource) -> Self {
        Self { variables,
               random }
    }

    /// Evaluates an expression and returns the resulting array.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// on the expression variant: literals, variables, unary and binary
    /// operations, and function calls. Binary operands are evaluated left
    /// then right.
    ///
    /// # Example
    /// ```
    /// use benchexpr::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::Variables},
    /// };
    ///
    /// let mut variables = Variables::new();
    /// variables.insert("N".to_string(), vec![1.0, 2.0, 3.0]);
    ///
    /// let expr = Expr::binary(Expr::Variable { name: "N".to_string() },
    ///                         BinaryOperator::Mul,
    ///                         Expr::Number { value: 2.0 });
    ///
    /// let context = Context::new(&variables);
    /// assert_eq!(context.eval(&expr).unwrap(), vec![2.0, 4.0, 6.0]);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Array> {
        match expr {
            Expr::Number { value } => Ok(vec![*value]),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::Unary { op, operand } => {
                let value = self.eval(operand)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::Binary { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right)
            },
            Expr::Call { name, args } => self.eval_function_call(name, args),
        }
    }

    fn eval_variable(&self, name: &str) -> EvalResult<Array> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::{
        evaluator::function::random::SeededRandom, lexer::tokenize, parser::core::parse_tokens,
    };

    fn eval_in(source: &str, variables: &Variables) -> EvalResult<Array> {
        let expr = parse_tokens(&tokenize(source).unwrap()).unwrap();
        Context::new(variables).eval(&expr)
    }

    fn vars(entries: &[(&str, &[f64])]) -> Variables {
        entries.iter()
               .map(|(name, values)| ((*name).to_string(), values.to_vec()))
               .collect()
    }

    #[test]
    fn literals_and_variables() {
        let variables = vars(&[("seed", &[7.0]), ("$turns", &[120.0, 80.0])]);
        assert_eq!(eval_in("42", &variables).unwrap(), vec![42.0]);
        assert_eq!(eval_in("seed", &variables).unwrap(), vec![7.0]);
        assert_eq!(eval_in("$turns", &variables).unwrap(), vec![120.0, 80.0]);
    }

    #[test]
    fn variable_names_are_case_sensitive() {
        let variables = vars(&[("score", &[1.0])]);
        assert_eq!(eval_in("Score", &variables),
                   Err(RuntimeError::UnknownVariable { name: "Score".to_string() }));
    }

    #[test]
    fn left_operand_fails_first() {
        let variables = Variables::new();
        assert_eq!(eval_in("a + b", &variables),
                   Err(RuntimeError::UnknownVariable { name: "a".to_string() }));
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let variables = Variables::new();
        let expr = parse_tokens(&tokenize("random() + random()").unwrap()).unwrap();

        let first = SeededRandom::new(99);
        let second = SeededRandom::new(99);
        let a = Context::with_random(&variables, &first).eval(&expr).unwrap();
        let b = Context::with_random(&variables, &second).eval(&expr).unwrap();

        assert_eq!(a, b);
        assert!((0.0..2.0).contains(&a[0]));
    }
}
