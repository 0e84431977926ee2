use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Combines two arrays element by element.
///
/// This function unifies all binary evaluation paths:
/// - a one-element left operand is paired with every element of the right,
/// - otherwise a one-element right operand is paired with every element of
///   the left,
/// - otherwise arrays of equal length are paired by index,
/// - anything else is a length mismatch.
///
/// Two one-element operands therefore produce a one-element result. The
/// combination is supplied via `f`, whose first error aborts the whole
/// operation; there is no partial result.
///
/// The output type is generic so callers can pair arrays into something other
/// than numbers, such as chart coordinates.
///
/// # Parameters
/// - `left`: Left-hand operand.
/// - `right`: Right-hand operand.
/// - `f`: Element-wise combination.
///
/// # Errors
/// `RuntimeError::LengthMismatch` when both operands are longer than one
/// element and their lengths differ, or the first error returned by `f`.
///
/// # Example
/// ```
/// use benchexpr::interpreter::evaluator::binary::array::broadcast;
///
/// let r = broadcast(&[1.0, 2.0, 3.0], &[10.0], |l, r| Ok(l * r)).unwrap();
/// assert_eq!(r, vec![10.0, 20.0, 30.0]);
///
/// let pairs = broadcast(&[1.0, 2.0], &[5.0, 6.0], |l, r| Ok((l, r))).unwrap();
/// assert_eq!(pairs, vec![(1.0, 5.0), (2.0, 6.0)]);
///
/// assert!(broadcast(&[1.0, 2.0], &[1.0, 2.0, 3.0], |l, r| Ok(l + r)).is_err());
/// ```
pub fn broadcast<T, F>(left: &[f64], right: &[f64], mut f: F) -> EvalResult<Vec<T>>
    where F: FnMut(f64, f64) -> EvalResult<T>
{
    match (left, right) {
        ([l], _) => right.iter().map(|r| f(*l, *r)).collect(),
        (_, [r]) => left.iter().map(|l| f(*l, *r)).collect(),
        _ if left.len() == right.len() => {
            left.iter().zip(right).map(|(l, r)| f(*l, *r)).collect()
        },
        _ => Err(RuntimeError::LengthMismatch { left:  left.len(),
                                                right: right.len(), }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn add(left: &[f64], right: &[f64]) -> EvalResult<Vec<f64>> {
        broadcast(left, right, |l, r| Ok(l + r))
    }

    #[test]
    fn scalar_with_scalar() {
        assert_eq!(add(&[1.0], &[2.0]).unwrap(), vec![3.0]);
    }

    #[test]
    fn scalar_is_repeated_on_either_side() {
        assert_eq!(add(&[1.0], &[1.0, 2.0, 3.0]).unwrap(), vec![2.0, 3.0, 4.0]);
        assert_eq!(add(&[1.0, 2.0, 3.0], &[1.0]).unwrap(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn equal_lengths_pair_by_index() {
        assert_eq!(add(&[1.0, 2.0], &[10.0, 20.0]).unwrap(), vec![11.0, 22.0]);
    }

    #[test]
    fn mismatched_lengths_fail() {
        assert_eq!(add(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
                   Err(RuntimeError::LengthMismatch { left: 2, right: 3 }));
    }

    #[test]
    fn empty_operands() {
        assert_eq!(add(&[], &[1.0]).unwrap(), Vec::<f64>::new());
        assert_eq!(add(&[], &[]).unwrap(), Vec::<f64>::new());
        assert_eq!(add(&[], &[1.0, 2.0]),
                   Err(RuntimeError::LengthMismatch { left: 0, right: 2 }));
    }

    #[test]
    fn first_error_aborts() {
        let mut calls = 0;
        let result: EvalResult<Vec<f64>> = broadcast(&[1.0, 2.0, 3.0], &[0.0], |l, _| {
            calls += 1;
            if l >= 2.0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(l)
            }
        });
        assert_eq!(result, Err(RuntimeError::DivisionByZero));
        assert_eq!(calls, 2);
    }
}
