//! Error handling logic

use thiserror::Error;

/// Error types raised by oracle synthesis, the Simon solver and the
/// algorithm drivers built on top of them.
///
/// Every public operation in the crate returns `Result<_, OracleError>`.
/// Nothing at this layer is retried; the caller decides what to do.
#[derive(Debug, Clone, PartialEq, Eq, Error)] // Eq useful for testing error variants
pub enum OracleError {
    /// The declared input domain is unusable (e.g. `n < 1`, or a lookup
    /// table whose length does not match `2^n`).
    #[error("Invalid Domain: {message}")]
    InvalidDomain {
        /// InvalidDomain failure message
        message: String,
    },

    /// The oracle produced a value outside its declared output range.
    #[error("Output Out Of Range: f({input}) = {output}, expected a value below {bound}")]
    OutputOutOfRange {
        /// Input that was evaluated
        input: u64,
        /// Offending output
        output: u64,
        /// Exclusive upper bound for outputs
        bound: u64,
    },

    /// The requested dense matrix or search space exceeds the configured ceiling.
    #[error("Capacity Exceeded: {qubits} qubits requested, limit is {limit}")]
    CapacityExceeded {
        /// Number of qubits (or bits) the operation would need
        qubits: usize,
        /// Configured ceiling
        limit: usize,
    },

    /// A measured equation has bits set at or above position `n`.
    #[error("Equation Out Of Range: {equation:#b} does not fit in {n} bits")]
    EquationOutOfRange {
        /// Offending equation
        equation: u64,
        /// Declared bit width
        n: usize,
    },

    /// A matrix expected to be a permutation matrix is not one.
    #[error("Non-Permutation: {message}")]
    NonPermutation {
        /// NonPermutation failure message
        message: String,
    },

    /// A gate definition is not unitary within tolerance.
    #[error("Non-Unitary: {message}")]
    NonUnitary {
        /// NonUnitary failure message
        message: String,
    },

    /// A Grover sign convention failed to amplify the marked states.
    #[error("Convergence Failure: {message}")]
    Convergence {
        /// Convergence failure message
        message: String,
    },

    /// The external backend rejected or failed a job.
    #[error("Backend Error: {message}")]
    Backend {
        /// Backend failure message
        message: String,
    },

    /// A bounded retry loop ran out of attempts without a result.
    #[error("Retries Exhausted: no result after {attempts} attempts")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: usize,
    },
}
