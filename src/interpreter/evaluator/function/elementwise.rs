use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Array},
};

/// Computes the natural logarithm of every element.
///
/// The whole call fails if any element is zero or negative; there is no
/// partial result.
///
/// # Example
/// ```
/// use benchexpr::interpreter::evaluator::function::elementwise::log;
///
/// let r = log(&[1.0, std::f64::consts::E]).unwrap();
/// assert_eq!(r[0], 0.0);
/// assert!((r[1] - 1.0).abs() < 1e-12);
///
/// assert!(log(&[1.0, 0.0]).is_err());
/// ```
pub fn log(values: &[f64]) -> EvalResult<Array> {
    if values.iter().any(|v| *v <= 0.0) {
        return Err(RuntimeError::NonPositiveArgument { name: "log".to_string() });
    }
    Ok(values.iter().map(|v| v.ln()).collect())
}

/// Rounds every element up to the nearest integer.
#[must_use]
pub fn ceil(values: &[f64]) -> Array {
    values.iter().map(|v| v.ceil()).collect()
}

/// Rounds every element down to the nearest integer.
#[must_use]
pub fn floor(values: &[f64]) -> Array {
    values.iter().map(|v| v.floor()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_keeps_length() {
        assert_eq!(ceil(&[-1.5, 0.2, 3.0]), vec![-1.0, 1.0, 3.0]);
        assert_eq!(floor(&[-1.5, 0.2, 3.0]), vec![-2.0, 0.0, 3.0]);
        assert!(floor(&[]).is_empty());
    }

    #[test]
    fn log_rejects_negative_numbers() {
        assert_eq!(log(&[2.0, -1.0]),
                   Err(RuntimeError::NonPositiveArgument { name: "log".to_string() }));
    }
}
