/// Builtin lookup table, arity checks and call dispatch.
pub mod core;
/// Element-wise builtins: `log`, `ceil` and `floor`.
///
/// Each is applied independently to every element and preserves the length
/// of its argument.
pub mod elementwise;
/// Aggregate builtins: `avg`, `max` and `min`.
///
/// Each reduces a non-empty array to a single element.
pub mod aggregate;
/// The `random` builtin and the random sources behind it.
pub mod random;
