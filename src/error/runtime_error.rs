#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a variable missing from the environment.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not a builtin.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a builtin.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of arguments the function takes.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// At least one divisor was exactly zero.
    DivisionByZero,
    /// A function defined only for positive numbers got zero or less.
    NonPositiveArgument {
        /// The name of the function.
        name: String,
    },
    /// An aggregate function was applied to an empty array.
    EmptyArray {
        /// The name of the function.
        name: String,
    },
    /// Two arrays longer than one element had different lengths.
    LengthMismatch {
        /// Length of the left operand.
        left:  usize,
        /// Length of the right operand.
        right: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Evaluation error: unknown variable: {name}"),
            Self::UnknownFunction { name } => write!(f, "Evaluation error: unknown function: {name}"),
            Self::ArgumentCountMismatch { name, expected, found } => write!(f,
                                                                            "Evaluation error: {name}() takes {expected} argument(s) but {found} were given"),
            Self::DivisionByZero => write!(f, "Evaluation error: division by zero"),
            Self::NonPositiveArgument { name } => {
                write!(f, "Evaluation error: {name}() requires positive argument")
            },
            Self::EmptyArray { name } => {
                write!(f, "Evaluation error: {name}() requires a non-empty array")
            },
            Self::LengthMismatch { left, right } => {
                write!(f, "Evaluation error: array length mismatch: {left} vs {right}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
