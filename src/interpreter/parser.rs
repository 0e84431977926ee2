/// Core parsing entry points.
///
/// Contains the top-level expression rule and the function that turns a
/// complete token stream into a single tree, rejecting trailing tokens.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative comparison, additive and multiplicative
/// levels and the right-associative power level.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles prefix signs, number literals, variables, function calls and
/// parenthesised groups.
pub mod unary;
