use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Array},
};

/// Computes the arithmetic mean as a one-element array.
///
/// # Example
/// ```
/// use benchexpr::interpreter::evaluator::function::aggregate::avg;
///
/// assert_eq!(avg(&[2.0, 4.0, 6.0]).unwrap(), vec![4.0]);
/// assert!(avg(&[]).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn avg(values: &[f64]) -> EvalResult<Array> {
    non_empty("avg", values)?;
    let sum: f64 = values.iter().sum();
    Ok(vec![sum / values.len() as f64])
}

/// Returns the largest element as a one-element array.
pub fn max(values: &[f64]) -> EvalResult<Array> {
    reduce("max", values, f64::max)
}

/// Returns the smallest element as a one-element array.
pub fn min(values: &[f64]) -> EvalResult<Array> {
    reduce("min", values, f64::min)
}

fn reduce(name: &str, values: &[f64], f: fn(f64, f64) -> f64) -> EvalResult<Array> {
    let (first, rest) = non_empty(name, values)?;
    Ok(vec![rest.iter().copied().fold(first, f)])
}

fn non_empty<'v>(name: &str, values: &'v [f64]) -> EvalResult<(f64, &'v [f64])> {
    match values {
        [first, rest @ ..] => Ok((*first, rest)),
        [] => Err(RuntimeError::EmptyArray { name: name.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element() {
        assert_eq!(avg(&[5.0]).unwrap(), vec![5.0]);
        assert_eq!(max(&[5.0]).unwrap(), vec![5.0]);
        assert_eq!(min(&[5.0]).unwrap(), vec![5.0]);
    }

    #[test]
    fn negative_values() {
        assert_eq!(max(&[-3.0, -1.0, -2.0]).unwrap(), vec![-1.0]);
        assert_eq!(min(&[-3.0, -1.0, -2.0]).unwrap(), vec![-3.0]);
    }

    #[test]
    fn empty_names_the_function() {
        assert_eq!(max(&[]), Err(RuntimeError::EmptyArray { name: "max".to_string() }));
    }
}
