//! Synthetic test systems with a known solution
//!
//! Each system has nonzero coefficients on the diagonal and down the first
//! column. Row 0 also couples the first two unknowns unless
//! `first_row_only_one_unknown` is set, in which case the whole system is
//! solvable by the fast path.

use crate::matrix::mat_vec;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A generated system `[A | b]` and the unknowns it was built from
#[derive(Debug, Clone)]
pub struct SyntheticSystem {
    /// Augmented matrix of shape `n x (n+1)`
    pub augmented: Array2<f64>,
    /// Ground-truth unknowns
    pub unknowns: Array1<f64>,
}

impl SyntheticSystem {
    /// Number of unknowns
    pub fn len(&self) -> usize {
        self.unknowns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unknowns.is_empty()
    }
}

/// Draw a value with magnitude in `[0, 100)` and a sign decided by the same draw
fn signed_value<R: Rng>(rng: &mut R) -> f64 {
    let d = rng.random::<f64>();
    if d > 0.5 { d * 100.0 } else { -d * 100.0 }
}

/// Generate a system with `n` unknowns from the given random source
pub fn generate_with_rng<R: Rng>(
    n: usize,
    first_row_only_one_unknown: bool,
    rng: &mut R,
) -> SyntheticSystem {
    let unknowns: Array1<f64> = (0..n).map(|_| signed_value(rng)).collect();

    let mut augmented = Array2::zeros((n, n + 1));
    for i in 0..n {
        let mut sum = 0.0;
        for j in 0..n {
            let coupled = i == j || j == 0 || (i == 0 && j == 1 && !first_row_only_one_unknown);
            if coupled {
                let coeff = signed_value(rng);
                augmented[[i, j]] = coeff;
                sum += coeff * unknowns[j];
            }
        }
        augmented[[i, n]] = sum;
    }

    SyntheticSystem {
        augmented,
        unknowns,
    }
}

/// Generate a reproducible system with `n` unknowns
pub fn generate(n: usize, first_row_only_one_unknown: bool, seed: u64) -> SyntheticSystem {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with_rng(n, first_row_only_one_unknown, &mut rng)
}

/// Dense random system whose coefficient block is made strictly diagonally
/// dominant, so it is always non-singular and well conditioned
pub fn generate_dense(n: usize, seed: u64) -> SyntheticSystem {
    let mut rng = StdRng::seed_from_u64(seed);
    let unknowns: Array1<f64> = (0..n).map(|_| signed_value(&mut rng)).collect();

    let mut a = Array2::from_shape_fn((n, n), |_| signed_value(&mut rng));
    for i in 0..n {
        let off_diagonal: f64 = (0..n).filter(|&j| j != i).map(|j| a[[i, j]].abs()).sum();
        a[[i, i]] = off_diagonal + 1.0 + a[[i, i]].abs();
    }

    let b = mat_vec(&a, &unknowns);
    let augmented =
        Array2::from_shape_fn((n, n + 1), |(i, j)| if j < n { a[[i, j]] } else { b[i] });

    SyntheticSystem {
        augmented,
        unknowns,
    }
}
