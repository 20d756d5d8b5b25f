// src/validation/mod.rs

//! Provides functions to validate synthesized gate matrices.

use crate::core::constants::oracle_constants::DEFAULT_UNITARY_TOLERANCE;
use crate::core::{Matrix, OracleError, OracleMatrix};
use num_complex::Complex;
use num_traits::Zero;

// --- Helper Functions ---

/// Finds the single nonzero entry of a row, or describes why there is not
/// exactly one. (Internal to this module)
fn single_nonzero(row: &[i8]) -> Result<(usize, i8), String> {
    let mut found = None;
    for (col, &v) in row.iter().enumerate() {
        if v == 0 {
            continue;
        }
        if found.is_some() {
            return Err(format!("second nonzero entry at column {}", col));
        }
        found = Some((col, v));
    }
    found.ok_or_else(|| "no nonzero entry".to_string())
}

/// Checks that every row and every column holds exactly one nonzero entry
/// and that each such entry satisfies `allowed`. (Internal to this module)
fn check_one_per_row_and_column(matrix: &OracleMatrix, allowed: fn(i8) -> bool, expected: &str) -> Result<(), OracleError> {
    let mut column_used = vec![false; matrix.dim()];
    for (r, row) in matrix.rows().enumerate() {
        let (col, value) = single_nonzero(row)
            .map_err(|reason| OracleError::NonPermutation { message: format!("row {}: {}", r, reason) })?;
        if !allowed(value) {
            return Err(OracleError::NonPermutation {
                message: format!("row {}: entry at column {} is {}, expected {}", r, col, value, expected),
            });
        }
        if column_used[col] {
            return Err(OracleError::NonPermutation { message: format!("column {} has more than one nonzero entry", col) });
        }
        column_used[col] = true;
    }
    // dim rows each claimed a distinct column, so every column is covered.
    Ok(())
}

// --- Public Validation Functions ---

/// Checks that every row and every column contains exactly one entry equal
/// to 1 and that all other entries are 0.
///
/// # Returns
/// * `Ok(())` for a permutation matrix.
/// * `Err(OracleError::NonPermutation)` naming the first offending row or column.
pub fn check_permutation(matrix: &OracleMatrix) -> Result<(), OracleError> {
    check_one_per_row_and_column(matrix, |v| v == 1, "1")
}

/// Checks that the matrix is a signed permutation: one ±1 per row and column.
///
/// For integer matrices this is exactly the unitary ones, so it stands in for
/// [`check_unitary`] without the dense complex product.
pub fn check_signed_permutation(matrix: &OracleMatrix) -> Result<(), OracleError> {
    check_one_per_row_and_column(matrix, |v| v == 1 || v == -1, "±1")
}

/// Checks that a sign oracle is diagonal with every diagonal entry ±1.
pub fn check_diagonal_signs(matrix: &OracleMatrix) -> Result<(), OracleError> {
    for (r, row) in matrix.rows().enumerate() {
        let (col, value) = single_nonzero(row)
            .map_err(|reason| OracleError::NonPermutation { message: format!("row {}: {}", r, reason) })?;
        if col != r || !(value == 1 || value == -1) {
            return Err(OracleError::NonPermutation {
                message: format!("row {}: expected ±1 on the diagonal, found {} at column {}", r, value, col),
            });
        }
    }
    Ok(())
}

/// Checks that a complex gate definition is unitary, `U·U† ≈ I`.
///
/// # Arguments
/// * `matrix` - Gate definition to check.
/// * `tolerance` - Allowed deviation per entry (defaults to 1e-9).
///
/// # Returns
/// * `Ok(())` if unitary within tolerance.
/// * `Err(OracleError::NonUnitary)` at the first entry that deviates.
pub fn check_unitary(matrix: &Matrix<Complex<f64>>, tolerance: Option<f64>) -> Result<(), OracleError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_UNITARY_TOLERANCE);
    let adjoint = transpose_conjugate(matrix);
    let product = matrix.matmul(&adjoint).ok_or_else(|| OracleError::NonUnitary {
        message: "adjoint has a different dimension".to_string(),
    })?;

    for (i, row) in product.rows().enumerate() {
        for (j, v) in row.iter().enumerate() {
            let expected = if i == j { Complex::new(1.0, 0.0) } else { Complex::zero() };
            let deviation = (v - expected).norm();
            if deviation > effective_tolerance {
                return Err(OracleError::NonUnitary {
                    message: format!("(U·U†)[{}][{}] = {} deviates by {:.3e} (> {})", i, j, v, deviation, effective_tolerance),
                });
            }
        }
    }
    Ok(())
}

fn transpose_conjugate(matrix: &Matrix<Complex<f64>>) -> Matrix<Complex<f64>> {
    let dim = matrix.dim();
    let entries = (0..dim)
        .flat_map(|r| (0..dim).map(move |c| matrix.entries()[c * dim + r].conj()))
        .collect();
    // Same dim, same entry count as the input.
    Matrix::from_entries(dim, entries).unwrap_or_else(|| Matrix::zeros(dim))
}
