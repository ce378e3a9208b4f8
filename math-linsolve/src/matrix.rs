//! Dense matrix helpers shared by the solvers
//!
//! Row operations work in place on an `Array2`; every solver applies them to its
//! own duplicate of the input, never to the caller's matrix.

use crate::error::SolverError;
use crate::traits::RealField;
use ndarray::{Array1, Array2, s};

/// Swap rows `a` and `b` in place
#[inline]
pub fn swap_rows<T: RealField>(m: &mut Array2<T>, a: usize, b: usize) {
    if a == b {
        return;
    }
    for j in 0..m.ncols() {
        m.swap([a, j], [b, j]);
    }
}

/// Row scaling: divide every entry of `row` by `divisor`
///
/// Dividing rather than multiplying by the reciprocal makes the pivot entry
/// itself exactly one.
#[inline]
pub fn divide_row<T: RealField>(m: &mut Array2<T>, row: usize, divisor: T) {
    for v in m.row_mut(row).iter_mut() {
        *v /= divisor;
    }
}

/// Row combination: `m[target] -= factor * m[source]` across all columns
#[inline]
pub fn add_scaled_row<T: RealField>(m: &mut Array2<T>, target: usize, source: usize, factor: T) {
    debug_assert_ne!(target, source, "row combination needs two distinct rows");
    for j in 0..m.ncols() {
        let update = factor * m[[source, j]];
        m[[target, j]] -= update;
    }
}

/// Allocate a private copy of a matrix
#[inline]
pub fn duplicate<T: RealField>(m: &Array2<T>) -> Array2<T> {
    m.to_owned()
}

/// Check that `m` is an `n x (n+1)` augmented matrix with `n >= 1`
///
/// Returns the number of unknowns.
pub fn check_augmented<T: RealField>(m: &Array2<T>) -> Result<usize, SolverError> {
    let rows = m.nrows();
    if rows == 0 {
        return Err(SolverError::EmptySystem);
    }
    if m.ncols() != rows + 1 {
        return Err(SolverError::NonSquareMatrix {
            rows,
            cols: m.ncols().saturating_sub(1),
        });
    }
    Ok(rows)
}

/// Reject NaN and infinite entries
pub fn check_finite<T: RealField>(m: &Array2<T>) -> Result<(), SolverError> {
    match m.indexed_iter().find(|(_, v)| !v.is_finite()) {
        Some(((row, col), _)) => Err(SolverError::NonFiniteInput { row, col }),
        None => Ok(()),
    }
}

/// Split `[A | b]` into an owned coefficient block and right-hand side
pub fn split_augmented<T: RealField>(m: &Array2<T>) -> Result<(Array2<T>, Array1<T>), SolverError> {
    let n = check_augmented(m)?;
    let a = m.slice(s![.., ..n]).to_owned();
    let b = m.column(n).to_owned();
    Ok((a, b))
}

/// Build `[A | b]` from a square coefficient matrix and a right-hand side
pub fn augment<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array2<T>, SolverError> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(SolverError::NonSquareMatrix {
            rows: n,
            cols: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    let mut m = Array2::zeros((n, n + 1));
    m.slice_mut(s![.., ..n]).assign(a);
    m.column_mut(n).assign(b);
    Ok(m)
}

/// Round every component of a solution in place
#[inline]
pub fn round_solution<T: RealField>(x: &mut Array1<T>, digits: Option<u32>) {
    if let Some(digits) = digits {
        x.mapv_inplace(|v| v.round_to_digits(digits));
    }
}

/// Matrix-vector product `y = A * x` over the first `x.len()` columns of `a`
///
/// Accepts an augmented matrix, in which case the trailing column is ignored.
///
/// # Panics
///
/// Panics if `a` has fewer columns than `x` has entries.
pub fn mat_vec<T: RealField>(a: &Array2<T>, x: &Array1<T>) -> Array1<T> {
    assert!(
        a.ncols() >= x.len(),
        "matrix has fewer columns than the vector has entries"
    );
    let mut y = Array1::zeros(a.nrows());
    for (i, yi) in y.iter_mut().enumerate() {
        let mut sum = T::zero();
        for (j, xj) in x.iter().enumerate() {
            sum += a[[i, j]] * *xj;
        }
        *yi = sum;
    }
    y
}
