/// Dispatch of binary operators to their element-wise implementations.
pub mod core;

/// The broadcasting rule shared by every binary operation.
///
/// Pairs a one-element array with every element of the other operand, zips
/// equal-length arrays and rejects anything else.
pub mod array;

/// Scalar arithmetic: `+`, `-`, `*`, `/` and `^`.
pub mod scalar;

/// Scalar comparisons producing `1` for true and `0` for false.
pub mod comparison;
