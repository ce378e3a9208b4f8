//! Gauss-Jordan elimination solver
//!
//! Reduces a private copy of the augmented matrix to reduced row-echelon form
//! with partial pivoting. Once the coefficient block is the identity, the last
//! column holds the solution. Cubic in the number of unknowns.

use crate::error::SolverError;
use crate::matrix::{
    add_scaled_row, check_augmented, divide_row, duplicate, round_solution, swap_rows,
};
use crate::traits::{LinearSolver, RealField};
use ndarray::{Array1, Array2};

/// Solve `[A | b]` by Gauss-Jordan elimination
///
/// # Example
///
/// ```
/// use math_audio_linsolve::direct::gauss_jordan;
/// use ndarray::array;
///
/// // x + 2y = 4, 2x + 3y = 5
/// let m = array![[1.0_f64, 2.0, 4.0], [2.0, 3.0, 5.0]];
/// let x = gauss_jordan(&m, Some(12)).unwrap();
/// assert_eq!(x, array![-2.0, 3.0]);
/// ```
pub fn gauss_jordan<T: RealField>(
    augmented: &Array2<T>,
    round_digits: Option<u32>,
) -> Result<Array1<T>, SolverError> {
    let n = check_augmented(augmented)?;
    let mut m = duplicate(augmented);

    for pivot in 0..n {
        // Largest magnitude at or below the pivot row; earliest row wins ties
        let mut max_row = pivot;
        let mut max_value = m[[pivot, pivot]].abs();
        for row in (pivot + 1)..n {
            let value = m[[row, pivot]].abs();
            if value > max_value {
                max_value = value;
                max_row = row;
            }
        }
        swap_rows(&mut m, pivot, max_row);

        let pivot_value = m[[pivot, pivot]];
        if pivot_value.is_exact_zero() {
            return Err(SolverError::SingularMatrix(
                "pivot is zero, would divide by zero",
            ));
        }
        divide_row(&mut m, pivot, pivot_value);

        for row in 0..n {
            if row != pivot {
                let factor = m[[row, pivot]];
                add_scaled_row(&mut m, row, pivot, factor);
            }
        }
    }

    let mut x = m.column(n).to_owned();
    round_solution(&mut x, round_digits);
    Ok(x)
}

/// Gauss-Jordan strategy over an augmented matrix
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussJordanSolver;

impl<T: RealField> LinearSolver<T> for GaussJordanSolver {
    fn name(&self) -> &'static str {
        "gauss-jordan"
    }

    fn solve(
        &self,
        augmented: &Array2<T>,
        round_digits: Option<u32>,
    ) -> Result<Array1<T>, SolverError> {
        gauss_jordan(augmented, round_digits)
    }
}
