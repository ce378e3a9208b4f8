//! Forward and backward substitution on a packed LU factor
//!
//! The factor stores the unit lower triangle strictly below the diagonal and
//! the upper triangle on and above it, as produced by
//! [`LuDecomposition`](super::LuDecomposition).

use crate::error::SolverError;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Solve `Ly = b` in place, with `L` unit lower triangular
pub fn forward_substitution<T: RealField>(lu: &Array2<T>, x: &mut Array1<T>) {
    let n = lu.nrows();
    for i in 1..n {
        let mut sum = x[i];
        for j in 0..i {
            sum -= lu[[i, j]] * x[j];
        }
        x[i] = sum;
    }
}

/// Solve `Ux = y` in place
///
/// A zero on the diagonal of `U` returns [`SolverError::SingularMatrix`] instead
/// of dividing into infinities.
pub fn backward_substitution<T: RealField>(
    lu: &Array2<T>,
    x: &mut Array1<T>,
) -> Result<(), SolverError> {
    let n = lu.nrows();
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum -= lu[[i, j]] * x[j];
        }
        let u_ii = lu[[i, i]];
        if u_ii.is_exact_zero() {
            return Err(SolverError::SingularMatrix("zero on the diagonal of U"));
        }
        x[i] = sum / u_ii;
    }
    Ok(())
}

/// Solve `LUx = b'` where `b'` is the right-hand side already permuted with
/// the decomposition's row permutation (`b'[i] = b[perm[i]]`)
pub fn solve_from_lu<T: RealField>(
    lu: &Array2<T>,
    permuted_rhs: &Array1<T>,
) -> Result<Array1<T>, SolverError> {
    let n = lu.nrows();
    if lu.ncols() != n {
        return Err(SolverError::NonSquareMatrix {
            rows: n,
            cols: lu.ncols(),
        });
    }
    if permuted_rhs.len() != n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: permuted_rhs.len(),
        });
    }

    let mut x = permuted_rhs.clone();
    forward_substitution(lu, &mut x);
    backward_substitution(lu, &mut x)?;
    Ok(x)
}
