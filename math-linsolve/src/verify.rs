//! Verification of candidate solutions
//!
//! Substitutes a solution back into the equations and reports how far each
//! row is from balancing. An exact solution gives all zeros; floating-point
//! solvers typically leave residue in the last few digits.

use crate::error::SolverError;
use crate::parallel::parallel_map_indexed;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Per-row deviation `sum_j(a_ij * x_j) - b_i` of `[A | b]` at `solution`
///
/// Returns [`SolverError::DimensionMismatch`] when `solution` does not have
/// one entry per coefficient column.
pub fn deviations<T: RealField>(
    augmented: &Array2<T>,
    solution: &Array1<T>,
) -> Result<Array1<T>, SolverError> {
    let n = solution.len();
    if augmented.ncols() != n + 1 {
        return Err(SolverError::DimensionMismatch {
            expected: augmented.ncols().saturating_sub(1),
            got: n,
        });
    }

    let rows = parallel_map_indexed(augmented.nrows(), |i| {
        let row = augmented.row(i);
        let mut sum = T::zero();
        for (a, x) in row.iter().zip(solution.iter()) {
            sum += *a * *x;
        }
        sum - row[n]
    });
    Ok(Array1::from_vec(rows))
}

/// Largest absolute deviation, NaN if any deviation is NaN
pub fn max_abs_deviation<T: RealField>(
    augmented: &Array2<T>,
    solution: &Array1<T>,
) -> Result<T, SolverError> {
    let max = deviations(augmented, solution)?
        .iter()
        .fold(T::zero(), |acc, &d| {
            if d.is_nan() || acc.is_nan() {
                T::nan()
            } else {
                acc.max(d.abs())
            }
        });
    Ok(max)
}

/// `|d| < 10^-digits`
pub fn close_to_zero<T: RealField>(d: T, digits: i32) -> bool {
    let ten = T::from_f64(10.0).expect("10 is representable in every float type");
    d.abs() < ten.powi(-digits)
}

/// Whether every deviation is within `10^-digits` of zero
pub fn is_solution<T: RealField>(
    augmented: &Array2<T>,
    solution: &Array1<T>,
    digits: i32,
) -> Result<bool, SolverError> {
    Ok(deviations(augmented, solution)?
        .iter()
        .all(|&d| close_to_zero(d, digits)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_exact_solution_has_zero_deviation() {
        let m = array![[1.0_f64, 2.0, 4.0], [2.0, 3.0, 5.0]];
        let x = array![-2.0_f64, 3.0];
        assert_eq!(deviations(&m, &x), Ok(array![0.0, 0.0]));
        assert_eq!(is_solution(&m, &x, 12), Ok(true));
    }

    #[test]
    fn test_wrong_solution_deviates() {
        let m = array![[1.0_f64, 2.0, 4.0], [2.0, 3.0, 5.0]];
        let x = array![0.0_f64, 2.0];
        let d = deviations(&m, &x).expect("shapes match");
        assert_relative_eq!(d[0], 0.0);
        assert_relative_eq!(d[1], 1.0);
        assert_relative_eq!(max_abs_deviation(&m, &x).expect("shapes match"), 1.0);
        assert_eq!(is_solution(&m, &x, 3), Ok(false));
    }

    #[test]
    fn test_nan_propagates() {
        let m = array![[1.0_f64, 1.0, 1.0, f64::NAN]];
        let x = array![1.0_f64, 1.0, 1.0];
        assert!(max_abs_deviation(&m, &x).expect("shapes match").is_nan());
    }

    #[test]
    fn test_close_to_zero() {
        assert!(close_to_zero(1e-11_f64, 10));
        assert!(!close_to_zero(1e-9_f64, 10));
        assert!(close_to_zero(-1e-11_f64, 10));
    }

    #[test]
    fn test_close_to_zero_f32() {
        assert!(close_to_zero(1e-6_f32, 5));
        assert!(!close_to_zero(1e-4_f32, 5));
    }

    #[test]
    fn test_shape_mismatch_is_an_error() {
        let m = array![[1.0_f64, 2.0, 4.0], [2.0, 3.0, 5.0]];
        let short = array![1.0_f64];
        let expected = SolverError::DimensionMismatch {
            expected: 2,
            got: 1,
        };
        assert_eq!(deviations(&m, &short), Err(expected.clone()));
        assert_eq!(max_abs_deviation(&m, &short), Err(expected.clone()));
        assert_eq!(is_solution(&m, &short, 3), Err(expected));
    }
}
