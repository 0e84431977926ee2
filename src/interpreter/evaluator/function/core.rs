use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{aggregate, elementwise, random},
        },
        value::Array,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluation context and its evaluated arguments,
/// whose count has already been checked against the table.
type BuiltinFn = fn(&Context<'_>, &[Array]) -> EvalResult<Array>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "log"    => { arity: 1, func: |_, args| elementwise::log(&args[0]) },
    "ceil"   => { arity: 1, func: |_, args| Ok(elementwise::ceil(&args[0])) },
    "floor"  => { arity: 1, func: |_, args| Ok(elementwise::floor(&args[0])) },
    "avg"    => { arity: 1, func: |_, args| aggregate::avg(&args[0]) },
    "max"    => { arity: 1, func: |_, args| aggregate::max(&args[0]) },
    "min"    => { arity: 1, func: |_, args| aggregate::min(&args[0]) },
    "random" => { arity: 0, func: |context, _| Ok(random::random(context.random)) },
}

/// Returns `true` if `name` is a builtin function.
///
/// # Example
/// ```
/// use benchexpr::interpreter::evaluator::function::core::is_builtin;
///
/// assert!(is_builtin("avg"));
/// assert!(!is_builtin("sqrt"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

impl Context<'_> {
    /// Evaluates a function call.
    ///
    /// The name is resolved first, so an unknown function is reported even if
    /// its arguments would fail. Then the argument count is checked, and only
    /// then are the arguments evaluated and the builtin executed.
    ///
    /// # Errors
    /// - `UnknownFunction` if the name is not a builtin.
    /// - `ArgumentCountMismatch` if the call has the wrong number of arguments.
    /// - Any error raised by the arguments or the builtin itself.
    pub(crate) fn eval_function_call(&self, name: &str, args: &[Expr]) -> EvalResult<Array> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| RuntimeError::UnknownFunction { name:
                                                                                  name.to_string() })?;

        if args.len() != builtin.arity {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: builtin.arity,
                                                             found:    args.len(), });
        }

        let arg_vals = args.iter()
                           .map(|arg| self.eval(arg))
                           .collect::<EvalResult<Vec<_>>>()?;

        (builtin.func)(self, &arg_vals)
    }
}
