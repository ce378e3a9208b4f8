//! LU decomposition solver
//!
//! Doolittle factorization with partial pivoting for dense square systems.
//! The lower factor has an implicit unit diagonal and is stored strictly below
//! the diagonal of the same grid that holds the upper factor.

use super::triangular::solve_from_lu;
use crate::error::SolverError;
use crate::matrix::{duplicate, round_solution, split_augmented, swap_rows};
use crate::traits::{LinearSolver, RealField};
use ndarray::{Array1, Array2};

/// LU factorization result
///
/// Holds the packed factors of `PA = LU`, the row permutation and the parity
/// of the number of row swaps.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: RealField> {
    /// Combined L and U matrices (L is unit lower triangular, stored below diagonal)
    pub lu: Array2<T>,
    /// `permutation[i]` is the original row now at position `i`
    pub permutation: Vec<usize>,
    /// +1 for an even number of row swaps, -1 for odd
    pub toggle: i8,
}

impl<T: RealField> LuDecomposition<T> {
    /// Factor a square matrix.
    ///
    /// For each column `j < n-1` the row with the largest magnitude in column
    /// `j` is swapped into place, earliest row winning ties. If the diagonal is
    /// still exactly zero, the *last* row below `j` with a nonzero entry in
    /// column `j` is swapped in instead. No such row means the matrix is
    /// singular.
    pub fn decompose(matrix: &Array2<T>) -> Result<Self, SolverError> {
        let n = matrix.nrows();
        if n != matrix.ncols() {
            return Err(SolverError::NonSquareMatrix {
                rows: n,
                cols: matrix.ncols(),
            });
        }

        let mut result = duplicate(matrix);
        let mut permutation: Vec<usize> = (0..n).collect();
        let mut toggle: i8 = 1;

        for j in 0..n.saturating_sub(1) {
            // Find pivot
            let mut col_max = result[[j, j]].abs();
            let mut p_row = j;
            for i in (j + 1)..n {
                let val = result[[i, j]].abs();
                if val > col_max {
                    col_max = val;
                    p_row = i;
                }
            }

            if p_row != j {
                swap_rows(&mut result, p_row, j);
                permutation.swap(p_row, j);
                toggle = -toggle;
            }

            // Repair a zero diagonal: last nonzero candidate below wins
            if result[[j, j]].is_exact_zero() {
                let good_row = ((j + 1)..n)
                    .filter(|&row| !result[[row, j]].is_exact_zero())
                    .last()
                    .ok_or(SolverError::SingularMatrix(
                        "no nonzero pivot left in column, cannot eliminate",
                    ))?;

                log::debug!("LU: zero diagonal at column {j}, swapping in row {good_row}");

                swap_rows(&mut result, good_row, j);
                permutation.swap(good_row, j);
                toggle = -toggle;
            }

            // Compute multipliers and eliminate
            let pivot = result[[j, j]];
            for i in (j + 1)..n {
                let mult = result[[i, j]] / pivot;
                result[[i, j]] = mult;
                for k in (j + 1)..n {
                    let update = mult * result[[j, k]];
                    result[[i, k]] -= update;
                }
            }
        }

        Ok(Self {
            lu: result,
            permutation,
            toggle,
        })
    }

    /// Matrix dimension
    pub fn n(&self) -> usize {
        self.lu.nrows()
    }

    /// Reorder `b` with the decomposition's permutation: `bp[i] = b[perm[i]]`
    pub fn permute(&self, b: &Array1<T>) -> Array1<T> {
        self.permutation.iter().map(|&p| b[p]).collect()
    }

    /// Solve Ax = b using the pre-computed factorization
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>, SolverError> {
        if b.len() != self.n() {
            return Err(SolverError::DimensionMismatch {
                expected: self.n(),
                got: b.len(),
            });
        }
        solve_from_lu(&self.lu, &self.permute(b))
    }

    /// Determinant of the original matrix: toggle times the product of U's diagonal
    pub fn determinant(&self) -> T {
        let det = self.lu.diag().iter().fold(T::one(), |acc, &d| acc * d);
        if self.toggle < 0 { -det } else { det }
    }

    /// Unit lower-triangular factor
    pub fn lower(&self) -> Array2<T> {
        let n = self.n();
        Array2::from_shape_fn((n, n), |(i, j)| match i.cmp(&j) {
            std::cmp::Ordering::Equal => T::one(),
            std::cmp::Ordering::Greater => self.lu[[i, j]],
            std::cmp::Ordering::Less => T::zero(),
        })
    }

    /// Upper-triangular factor
    pub fn upper(&self) -> Array2<T> {
        let n = self.n();
        Array2::from_shape_fn(
            (n, n),
            |(i, j)| if i <= j { self.lu[[i, j]] } else { T::zero() },
        )
    }

    /// Permutation matrix `P` such that `PA = LU`
    pub fn permutation_matrix(&self) -> Array2<T> {
        let n = self.n();
        let mut p = Array2::zeros((n, n));
        for (i, &pi) in self.permutation.iter().enumerate() {
            p[[i, pi]] = T::one();
        }
        p
    }

    /// Undo the row permutation on a product `LU`, recovering `A`
    pub fn unpermute(&self, lu_product: &Array2<T>) -> Array2<T> {
        let mut result = lu_product.clone();
        for (i, &pi) in self.permutation.iter().enumerate() {
            result.row_mut(pi).assign(&lu_product.row(i));
        }
        result
    }

    /// Inverse of the original matrix, one column per unit right-hand side
    pub fn inverse(&self) -> Result<Array2<T>, SolverError> {
        let n = self.n();
        let mut inv = Array2::zeros((n, n));
        for col in 0..n {
            let e: Array1<T> = self
                .permutation
                .iter()
                .map(|&p| if p == col { T::one() } else { T::zero() })
                .collect();
            let x = solve_from_lu(&self.lu, &e)?;
            inv.column_mut(col).assign(&x);
        }
        Ok(inv)
    }
}

/// Solve Ax = b using LU decomposition
///
/// This is a convenience function that combines factorization and solve.
pub fn lu_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>, SolverError> {
    LuDecomposition::decompose(a)?.solve(b)
}

/// Determinant of a square matrix via LU decomposition
pub fn determinant<T: RealField>(a: &Array2<T>) -> Result<T, SolverError> {
    match LuDecomposition::decompose(a) {
        Ok(lu) => Ok(lu.determinant()),
        Err(SolverError::SingularMatrix(_)) => Ok(T::zero()),
        Err(e) => Err(e),
    }
}

/// LU strategy over an augmented matrix
#[derive(Debug, Clone, Copy, Default)]
pub struct LuSolver;

impl<T: RealField> LinearSolver<T> for LuSolver {
    fn name(&self) -> &'static str {
        "lu"
    }

    fn solve(
        &self,
        augmented: &Array2<T>,
        round_digits: Option<u32>,
    ) -> Result<Array1<T>, SolverError> {
        let (a, b) = split_augmented(augmented)?;
        let mut x = lu_solve(&a, &b)?;
        round_solution(&mut x, round_digits);
        Ok(x)
    }
}
