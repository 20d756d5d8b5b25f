// src/core/matrix.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg};

/// A dense, square, row-major matrix.
///
/// Oracle gates are stored as `Matrix<i8>` (0/1 for XOR oracles, ±1 for
/// sign oracles) and converted to `Matrix<Complex<f64>>` only when a backend
/// needs a gate definition. Matrices are built once and then shared
/// read-only; there is no in-place mutation after construction outside
/// this crate.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    dim: usize,
    entries: Vec<T>,
}

/// The oracle representation produced by synthesis.
pub type OracleMatrix = Matrix<i8>;

impl<T: Clone + Zero> Matrix<T> {
    /// Creates a `dim x dim` matrix of zeros.
    ///
    /// # Panics
    /// If `dim * dim` overflows `usize`. Use [`Matrix::try_zeros`] for sizes
    /// derived from untrusted input.
    pub fn zeros(dim: usize) -> Self {
        let len = dim.checked_mul(dim).unwrap_or_else(|| panic!("{}x{} matrix overflows usize", dim, dim));
        Self { dim, entries: vec![T::zero(); len] }
    }

    /// Creates a `dim x dim` matrix of zeros, or `None` if `dim * dim`
    /// overflows or the entries cannot be allocated.
    pub fn try_zeros(dim: usize) -> Option<Self> {
        let len = dim.checked_mul(dim)?;
        let mut entries = Vec::new();
        entries.try_reserve_exact(len).ok()?;
        entries.resize(len, T::zero());
        Some(Self { dim, entries })
    }

    /// Creates a diagonal matrix from the given diagonal entries.
    pub fn from_diagonal(diagonal: Vec<T>) -> Self {
        let mut m = Self::zeros(diagonal.len());
        for (i, value) in diagonal.into_iter().enumerate() {
            m.set(i, i, value);
        }
        m
    }
}

impl<T: Clone + Zero + One> Matrix<T> {
    /// Creates the `dim x dim` identity.
    pub fn identity(dim: usize) -> Self {
        Self::from_diagonal(vec![T::one(); dim])
    }
}

impl<T> Matrix<T> {
    /// Builds a matrix from row-major entries. Returns `None` unless
    /// `entries.len() == dim * dim`.
    pub fn from_entries(dim: usize, entries: Vec<T>) -> Option<Self> {
        (dim.checked_mul(dim) == Some(entries.len())).then_some(Self { dim, entries })
    }

    /// Number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.dim && col < self.dim {
            self.entries.get(row * self.dim + col)
        } else {
            None
        }
    }

    /// Borrow of one row, or `None` if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.dim {
            return None;
        }
        self.entries.get(row * self.dim..(row + 1) * self.dim)
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact(0) panics; an empty matrix has no rows anyway
        self.entries.chunks_exact(self.dim.max(1)).take(self.dim)
    }

    /// Row-major view of every entry.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Applies `f` to every entry.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Matrix<U> {
        Matrix { dim: self.dim, entries: self.entries.iter().map(f).collect() }
    }

    // Crate-visible: synthesis writes entries once, then the matrix is frozen.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        self.entries[row * self.dim + col] = value;
    }
}

impl<T: PartialEq + Zero> Matrix<T> {
    /// Column of the first nonzero entry in `row`.
    /// For a permutation matrix this is where basis state `row` is sent.
    pub fn nonzero_column(&self, row: usize) -> Option<usize> {
        self.row(row)?.iter().position(|v| !v.is_zero())
    }

    /// Number of nonzero entries.
    pub fn count_nonzero(&self) -> usize {
        self.entries.iter().filter(|v| !v.is_zero()).count()
    }
}

impl<T> Matrix<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    /// Matrix product `self · rhs`. Both operands must share a dimension.
    pub fn matmul(&self, rhs: &Matrix<T>) -> Option<Matrix<T>> {
        if self.dim != rhs.dim {
            return None;
        }
        let n = self.dim;
        let mut out = Matrix::zeros(n);
        for i in 0..n {
            for k in 0..n {
                let a = self.entries[i * n + k];
                if a.is_zero() {
                    continue;
                }
                for j in 0..n {
                    out.entries[i * n + j] = out.entries[i * n + j] + a * rhs.entries[k * n + j];
                }
            }
        }
        Some(out)
    }

    /// Matrix-vector product `self · v`.
    pub fn apply(&self, v: &[T]) -> Option<Vec<T>> {
        if v.len() != self.dim {
            return None;
        }
        Some(
            self.rows()
                .map(|row| row.iter().zip(v).fold(T::zero(), |acc, (&a, &b)| acc + a * b))
                .collect(),
        )
    }
}

impl<T: Copy + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Self::Output {
        Matrix { dim: self.dim, entries: self.entries.into_iter().map(|v| -v).collect() }
    }
}

impl<T: Copy + Into<f64>> Matrix<T> {
    /// Real-valued copy, for linear algebra over `f64`.
    pub fn to_real(&self) -> Matrix<f64> {
        self.map(|&v| v.into())
    }

    /// Complex-valued copy, the form a gate definition takes.
    pub fn to_complex(&self) -> Matrix<Complex<f64>> {
        self.map(|&v| Complex::new(v.into(), 0.0))
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "[")?;
            for (i, v) in row.iter().enumerate() {
                write!(f, "{}{:>2}", if i > 0 { " " } else { "" }, v)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

// Dense matrices get large quickly; Debug prints the shape only past 16x16.
impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dim > 16 {
            return write!(f, "Matrix[{}x{}]", self.dim, self.dim);
        }
        f.debug_list().entries(self.rows()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_and_diagonal() {
        let id: Matrix<i8> = Matrix::identity(3);
        assert_eq!(id, Matrix::from_diagonal(vec![1, 1, 1]));
        assert_eq!(id.count_nonzero(), 3);
        assert_eq!(id.nonzero_column(2), Some(2));
        assert_eq!(id.nonzero_column(3), None);
    }

    #[test]
    fn test_from_entries_shape() {
        assert!(Matrix::from_entries(2, vec![1, 0, 0]).is_none());
        let m = Matrix::from_entries(2, vec![0, 1, 1, 0]).unwrap();
        assert_eq!(m.get(0, 1), Some(&1));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.row(1), Some(&[1, 0][..]));
        assert_eq!(m.row(2), None);
    }

    #[test]
    fn test_mul_and_apply() {
        let swap = Matrix::from_entries(2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        let id = swap.matmul(&swap).unwrap();
        assert_eq!(id, Matrix::identity(2));
        assert_eq!(swap.apply(&[3.0, 5.0]), Some(vec![5.0, 3.0]));
        assert_eq!(swap.apply(&[1.0]), None);
        assert!(swap.matmul(&Matrix::identity(3)).is_none());
    }

    #[test]
    fn test_try_zeros_reports_oversized_shapes() {
        assert!(Matrix::<i8>::try_zeros(1usize << (usize::BITS / 2)).is_none());
        assert_eq!(Matrix::<i8>::try_zeros(2), Some(Matrix::zeros(2)));
    }

    #[test]
    fn test_conversions_and_negation() {
        let z: OracleMatrix = Matrix::from_diagonal(vec![-1, 1]);
        let real = z.to_real();
        assert_eq!(real.get(0, 0), Some(&-1.0));
        let complex = z.to_complex();
        assert_eq!(complex.get(1, 1), Some(&Complex::new(1.0, 0.0)));
        assert_eq!(-z, Matrix::from_diagonal(vec![1, -1]));
    }

    #[test]
    fn test_display() {
        let m: OracleMatrix = Matrix::identity(2);
        assert_eq!(m.to_string(), "[ 1  0]\n[ 0  1]\n");
    }
}
