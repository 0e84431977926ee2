use std::collections::HashMap;

/// The evaluator's only value type: an ordered sequence of numbers.
///
/// Scalars are one-element arrays. Variables, intermediate results and final
/// results all share this representation.
pub type Array = Vec<f64>;

/// Maps variable names to their values.
///
/// Names are matched exactly and case-sensitively, including any leading `$`
/// sigil. Built by the caller per evaluation; the evaluator only reads it.
pub type Variables = HashMap<String, Array>;

/// Returns `true` when every element is non-zero, the truth test used for
/// filter predicates. An empty array is not truthy.
///
/// # Example
/// ```
/// use benchexpr::interpreter::value::is_truthy;
///
/// assert!(is_truthy(&[1.0, 2.0]));
/// assert!(!is_truthy(&[1.0, 0.0]));
/// assert!(!is_truthy(&[]));
/// ```
#[must_use]
pub fn is_truthy(values: &[f64]) -> bool {
    !values.is_empty() && values.iter().all(|v| *v != 0.0)
}
