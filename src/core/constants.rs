//! Limits and defaults shared across the crate.

/// Defaults governing dense matrix construction and brute-force search.
pub mod oracle_constants {
    /// Default ceiling on the number of qubits a dense oracle matrix may span.
    /// A 12-qubit oracle is a 4096 x 4096 matrix (16 MiB of `i8`).
    pub const DEFAULT_MAX_ORACLE_QUBITS: usize = 12;
    /// Default ceiling on the bit width the Simon solver will brute force.
    pub const DEFAULT_MAX_SOLVER_BITS: usize = 24;
    /// Default tolerance for unitary checks on complex gate definitions.
    pub const DEFAULT_UNITARY_TOLERANCE: f64 = 1e-9;
    /// Tolerance used when comparing marked-state probabilities.
    pub const PROBABILITY_TOLERANCE: f64 = 1e-12;
    /// Default number of backend submissions a driver makes before giving up.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 10;
    /// Used for the Grover iteration count `floor(π/4 · √N)`.
    pub const PI: f64 = std::f64::consts::PI;
}
