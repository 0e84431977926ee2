/// Core evaluation logic and context management.
///
/// Contains the main tree walk and the evaluation context holding the
/// variable environment and the random source.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements element-wise negation and identity.
pub mod unary;

/// Binary operator evaluation.
///
/// Handles arithmetic and comparisons between arrays, including the
/// broadcasting rule that pairs a one-element array with a longer one.
pub mod binary;

/// Function evaluation.
///
/// Handles builtin lookup, argument checking and the builtin implementations.
pub mod function;
