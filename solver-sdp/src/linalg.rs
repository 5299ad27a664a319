//! Sparse matrix helpers.
//!
//! Affine families are stored as sparse CSC matrices (one per moment index)
//! and only densified inside the barrier evaluation.

use nalgebra::DMatrix;
use sprs::{CsMat, TriMat};

/// Sparse matrix in CSC format (full symmetric storage, both triangles).
pub type SparseCsc = CsMat<f64>;

/// Triplet format sparse matrix builder. Duplicate entries are summed on conversion.
pub type SparseTriMat = TriMat<f64>;

/// Build a square sparse CSC matrix from triplets (row, col, value).
///
/// Duplicate (row, col) pairs are summed.
pub fn from_triplets<I>(n: usize, triplets: I) -> SparseCsc
where
    I: IntoIterator<Item = (usize, usize, f64)>,
{
    let mut tri = SparseTriMat::new((n, n));
    for (i, j, v) in triplets {
        tri.add_triplet(i, j, v);
    }
    tri.to_csc()
}

/// Read a single entry, 0.0 if structurally absent.
pub fn entry(a: &SparseCsc, i: usize, j: usize) -> f64 {
    a.get(i, j).copied().unwrap_or(0.0)
}

/// Dense copy of a sparse matrix.
pub fn to_dense(a: &SparseCsc) -> DMatrix<f64> {
    let mut out = DMatrix::<f64>::zeros(a.rows(), a.cols());
    add_scaled(&mut out, a, 1.0);
    out
}

/// out += alpha * A
pub fn add_scaled(out: &mut DMatrix<f64>, a: &SparseCsc, alpha: f64) {
    assert_eq!(out.nrows(), a.rows());
    assert_eq!(out.ncols(), a.cols());
    if alpha == 0.0 {
        return;
    }
    for (&val, (row, col)) in a.iter() {
        out[(row, col)] += alpha * val;
    }
}

/// tr(A * B) for sparse A and dense B, i.e. Σ A[r,c] B[c,r].
pub fn trace_product(a: &SparseCsc, b: &DMatrix<f64>) -> f64 {
    let mut acc = 0.0;
    for (&val, (row, col)) in a.iter() {
        acc += val * b[(col, row)];
    }
    acc
}

/// Dense product A * B for sparse A.
pub fn sparse_dense_mul(a: &SparseCsc, b: &DMatrix<f64>) -> DMatrix<f64> {
    assert_eq!(a.cols(), b.nrows());
    let mut out = DMatrix::<f64>::zeros(a.rows(), b.ncols());
    for (&val, (row, col)) in a.iter() {
        for k in 0..b.ncols() {
            out[(row, k)] += val * b[(col, k)];
        }
    }
    out
}

/// Check |A[i,j] - A[j,i]| <= tol for every stored entry.
pub fn is_symmetric(a: &SparseCsc, tol: f64) -> bool {
    if a.rows() != a.cols() {
        return false;
    }
    a.iter()
        .all(|(&val, (row, col))| (val - entry(a, col, row)).abs() <= tol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_summed() {
        let a = from_triplets(2, vec![(0, 1, 1.5), (0, 1, 2.0), (1, 0, 3.5)]);
        assert_eq!(entry(&a, 0, 1), 3.5);
        assert_eq!(entry(&a, 1, 0), 3.5);
        assert_eq!(entry(&a, 0, 0), 0.0);
        assert!(is_symmetric(&a, 0.0));
    }

    #[test]
    fn test_trace_product() {
        let a = from_triplets(2, vec![(0, 0, 1.0), (0, 1, 2.0), (1, 0, 2.0)]);
        let b = DMatrix::from_row_slice(2, 2, &[1.0, 3.0, 5.0, 7.0]);
        // tr(A B) = 1*1 + 2*5 + 2*3
        assert_eq!(trace_product(&a, &b), 17.0);
        let dense = to_dense(&a) * &b;
        assert_eq!(dense.trace(), 17.0);
        assert_eq!(sparse_dense_mul(&a, &b), dense);
    }

    #[test]
    fn test_asymmetric_detected() {
        let a = from_triplets(2, vec![(0, 1, 1.0)]);
        assert!(!is_symmetric(&a, 1e-12));
        assert!(is_symmetric(&from_triplets(3, std::iter::empty()), 0.0));
    }
}
