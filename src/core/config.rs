// src/core/config.rs

//! Resource limits for synthesis and solving.

use super::constants::oracle_constants::{DEFAULT_MAX_ORACLE_QUBITS, DEFAULT_MAX_SOLVER_BITS};
use super::error::OracleError;
use super::matrix::Matrix;
use num_traits::Zero;

/// Ceilings applied before any dense allocation or exponential search.
///
/// Dense oracle synthesis is O(4^n) in both time and memory, so anything past
/// roughly a dozen qubits is rejected with [`OracleError::CapacityExceeded`]
/// rather than attempting the allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleConfig {
    /// Maximum number of qubits a synthesized matrix may act on
    /// (`n + 1` for single-bit oracles, `2n` for Simon oracles).
    pub max_oracle_qubits: usize,
    /// Maximum bit width accepted by the Simon solver.
    pub max_solver_bits: usize,
}

impl OracleConfig {
    /// Creates a configuration with the crate defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the qubit ceiling for dense matrix synthesis.
    pub fn with_max_oracle_qubits(mut self, max_oracle_qubits: usize) -> Self {
        self.max_oracle_qubits = max_oracle_qubits;
        self
    }

    /// Overrides the bit-width ceiling for the Simon solver.
    pub fn with_max_solver_bits(mut self, max_solver_bits: usize) -> Self {
        self.max_solver_bits = max_solver_bits;
        self
    }

    /// Fails with `CapacityExceeded` if a matrix over `qubits` qubits is too large.
    pub(crate) fn ensure_oracle_capacity(&self, qubits: usize) -> Result<(), OracleError> {
        if qubits > self.max_oracle_qubits {
            return Err(OracleError::CapacityExceeded { qubits, limit: self.max_oracle_qubits });
        }
        Ok(())
    }

    /// Fails with `CapacityExceeded` if an `n`-bit search space is too large.
    pub(crate) fn ensure_solver_capacity(&self, n: usize) -> Result<(), OracleError> {
        if n > self.max_solver_bits {
            return Err(OracleError::CapacityExceeded { qubits: n, limit: self.max_solver_bits });
        }
        Ok(())
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            max_oracle_qubits: DEFAULT_MAX_ORACLE_QUBITS,
            max_solver_bits: DEFAULT_MAX_SOLVER_BITS,
        }
    }
}

/// Returns `2^bits`, or `CapacityExceeded` if it does not fit in `usize`.
pub(crate) fn dimension(bits: usize) -> Result<usize, OracleError> {
    u32::try_from(bits)
        .ok()
        .and_then(|b| 1usize.checked_shl(b))
        .ok_or(OracleError::CapacityExceeded { qubits: bits, limit: usize::BITS as usize - 1 })
}

/// Allocates the `2^qubits` square zero matrix, or fails with
/// `CapacityExceeded` if its entry count overflows `usize` or the allocation
/// is refused.
pub(crate) fn zero_matrix<T: Clone + Zero>(qubits: usize) -> Result<Matrix<T>, OracleError> {
    let limit = usize::BITS as usize / 2 - 1;
    let dim = dimension(qubits)?;
    Matrix::try_zeros(dim).ok_or(OracleError::CapacityExceeded { qubits, limit })
}

/// Rejects `n < 1` for any operation defined over `{0,1}^n`.
pub(crate) fn ensure_nonempty_domain(n: usize) -> Result<(), OracleError> {
    if n == 0 {
        return Err(OracleError::InvalidDomain { message: "n must be at least 1".to_string() });
    }
    Ok(())
}
