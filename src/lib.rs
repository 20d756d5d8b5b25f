// src/lib.rs

//! `qoracle` - Oracle synthesis and classical post-processing for textbook
//! quantum algorithms
//!
//! This library builds the reversible oracle gates used by Bernstein–Vazirani,
//! Deutsch–Jozsa, Grover and Simon, solves the parity system Simon's algorithm
//! produces, and drives all four algorithms against any [`Backend`] that can
//! turn a [`Job`] into measurement [`Counts`].

pub mod core;
pub mod oracle;
pub mod solver;
pub mod grover;
pub mod validation;
pub mod backend;
pub mod algorithms;

// Re-export the most common types for easier top-level use
pub use crate::core::{Matrix, OracleConfig, OracleError, OracleFunction, OracleMatrix};
pub use oracle::{
    Arity,
    OracleCache,
    SignConvention,
    synthesize_oracle_matrix,
    synthesize_oracle_matrix_with,
    synthesize_phase_oracle,
    zero_reflection,
};
pub use solver::{SimonSolution, analyze_simon_system, gf2_rank, solve_simon_system};
pub use grover::{check_amplification, grover_operator, optimal_iterations};
pub use backend::{Algorithm, Backend, Counts, Job, OracleGate};
pub use algorithms::{AlgorithmRunner, FunctionClass, RetryPolicy};
pub use validation::{check_permutation, check_signed_permutation, check_unitary};

// Example 1: Bernstein-Vazirani oracle
// Builds U_f for f(x) = popcount(x) mod 2 over two bits (truth table [1, 0, 0, 1])
// and traces where each basis state |x>|b> is sent.
/// ```
/// use qoracle::{synthesize_oracle_matrix, check_permutation, Arity, OracleError, OracleFunction};
///
/// fn main() -> Result<(), OracleError> {
///     let f = OracleFunction::table(vec![1, 0, 0, 1]);
///     let u_f = synthesize_oracle_matrix(2, &f, Arity::OneBit)?;
///
///     // 2 input qubits + 1 helper qubit -> 8 x 8 permutation matrix
///     assert_eq!(u_f.dim(), 8);
///     assert_eq!(u_f.count_nonzero(), 8);
///     check_permutation(&u_f)?;
///
///     // |x=0b01>|b=0> goes to |0b01>|0 ^ f(1)> = |0b01>|0>
///     assert_eq!(u_f.nonzero_column(0b010), Some(0b010));
///     // |x=0b11>|b=0> goes to |0b11>|1>
///     assert_eq!(u_f.nonzero_column(0b110), Some(0b111));
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Simon post-processing
// Measured outcomes are parity constraints e·s = 0 (mod 2). With n - 1
// independent ones the hidden string is pinned down.
/// ```
/// use qoracle::{analyze_simon_system, solve_simon_system, OracleError, SimonSolution};
///
/// fn main() -> Result<(), OracleError> {
///     let measured = [0b001, 0b111, 0b110, 0b000];
///     assert_eq!(solve_simon_system(&measured, 3)?, 0b110);
///     assert_eq!(analyze_simon_system(&measured, 3)?, SimonSolution::Unique(0b110));
///
///     // All-zero measurements say nothing; the solver still answers 1.
///     assert_eq!(solve_simon_system(&[0, 0, 0], 3)?, 1);
///     assert!(matches!(
///         analyze_simon_system(&[0, 0, 0], 3)?,
///         SimonSolution::Underdetermined { rank: 0, .. }
///     ));
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
