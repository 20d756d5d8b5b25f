// src/oracle/mod.rs

//! Synthesis of oracle gate matrices from classical functions.
//!
//! Every quantum algorithm in this crate queries its hidden function through a
//! reversible gate. For XOR oracles the gate is the permutation
//! `U_f |x⟩|b⟩ = |x⟩|b ⊕ f(x)⟩`, built here as a dense 0/1 matrix. Grover's
//! search additionally needs the sign oracle `Z_f` and the reflection `Z_0`
//! about the all-zero state.
//!
//! All functions are pure: the same `(n, f)` always yields the same matrix,
//! and nothing is cached here. See [`cache::OracleCache`] for caller-side
//! memoization.

pub mod cache;

use crate::core::config::{dimension, ensure_nonempty_domain, zero_matrix};
use crate::core::{OracleConfig, OracleError, OracleFunction, OracleMatrix};
use tracing::debug;

pub use cache::{OracleCache, OracleKind};

/// Output width of an XOR oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// `f : {0,1}^n -> {0,1}` with a single helper qubit
    /// (Bernstein–Vazirani, Deutsch–Jozsa).
    OneBit,
    /// `f : {0,1}^n -> {0,1}^n` with an `n`-qubit helper register (Simon).
    NBit,
}

impl Arity {
    /// Number of helper qubits the oracle acts on besides the `n` inputs.
    pub fn helper_qubits(self, n: usize) -> usize {
        match self {
            Arity::OneBit => 1,
            Arity::NBit => n,
        }
    }

    /// Total qubits the oracle acts on.
    pub fn total_qubits(self, n: usize) -> usize {
        n + self.helper_qubits(n)
    }
}

/// Sign convention for the Grover oracle `Z_f`.
///
/// The two conventions differ by a global phase of -1, which leaves the
/// measured distribution of `G = -H·Z_0·H·Z_f` unchanged. Use
/// [`crate::grover::check_amplification`] to confirm a convention amplifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignConvention {
    /// `Z_f[x][x] = (-1)^f(x)`
    #[default]
    Standard,
    /// `Z_f[x][x] = -(-1)^f(x)`
    GlobalPhaseFlip,
}

impl SignConvention {
    fn sign(self, fx: u64) -> i8 {
        let phase = if fx == 0 { 1 } else { -1 };
        match self {
            SignConvention::Standard => phase,
            SignConvention::GlobalPhaseFlip => -phase,
        }
    }
}

/// Builds the permutation matrix of `U_f` using the default [`OracleConfig`].
///
/// See [`synthesize_oracle_matrix_with`].
pub fn synthesize_oracle_matrix(n: usize, f: &OracleFunction, arity: Arity) -> Result<OracleMatrix, OracleError> {
    synthesize_oracle_matrix_with(n, f, arity, &OracleConfig::default())
}

/// Builds the permutation matrix of `U_f |x⟩|b⟩ = |x⟩|b ⊕ f(x)⟩`.
///
/// With `h` helper qubits (1 for [`Arity::OneBit`], `n` for [`Arity::NBit`])
/// the matrix has dimension `2^(n+h)` and for every input `x` and helper value
/// `b`:
///
/// ```text
/// row = (x << h) ^ b
/// col = (x << h) ^ (f(x) ^ b)
/// M[row][col] = 1
/// ```
///
/// The result is a permutation matrix for any `f`, since `b ↦ b ^ f(x)` is a
/// bijection on the helper register for each fixed `x`.
///
/// # Errors
/// * `InvalidDomain` if `n == 0` or a lookup table does not have `2^n` entries.
/// * `CapacityExceeded` if `n + h` exceeds `config.max_oracle_qubits`. This is
///   checked before anything is allocated.
/// * `OutputOutOfRange` if some `f(x)` is not below `2^h`.
pub fn synthesize_oracle_matrix_with(
    n: usize,
    f: &OracleFunction,
    arity: Arity,
    config: &OracleConfig,
) -> Result<OracleMatrix, OracleError> {
    ensure_nonempty_domain(n)?;
    let helpers = arity.helper_qubits(n);
    let qubits = arity.total_qubits(n);
    config.ensure_oracle_capacity(qubits)?;

    let inputs = dimension(n)?;
    let helper_values = dimension(helpers)?;
    f.check_domain(inputs)?;

    let mut matrix: OracleMatrix = zero_matrix(qubits)?;
    for x in 0..inputs {
        let fx = f.evaluate_bounded(x as u64, helper_values as u64)? as usize;
        for b in 0..helper_values {
            let row = (x << helpers) ^ b;
            let col = (x << helpers) ^ (fx ^ b);
            matrix.set(row, col, 1);
        }
    }

    debug!(n, ?arity, dim = matrix.dim(), "synthesized oracle matrix");
    Ok(matrix)
}

/// Builds Grover's sign oracle `Z_f` using the default [`OracleConfig`].
pub fn synthesize_phase_oracle(
    n: usize,
    f: &OracleFunction,
    convention: SignConvention,
) -> Result<OracleMatrix, OracleError> {
    synthesize_phase_oracle_with(n, f, convention, &OracleConfig::default())
}

/// Builds Grover's sign oracle: a `2^n` diagonal matrix with `(-1)^f(x)` at
/// `[x][x]` (negated under [`SignConvention::GlobalPhaseFlip`]).
///
/// `f` must be single-bit valued.
pub fn synthesize_phase_oracle_with(
    n: usize,
    f: &OracleFunction,
    convention: SignConvention,
    config: &OracleConfig,
) -> Result<OracleMatrix, OracleError> {
    ensure_nonempty_domain(n)?;
    config.ensure_oracle_capacity(n)?;
    let dim = dimension(n)?;
    f.check_domain(dim)?;

    let mut matrix: OracleMatrix = zero_matrix(n)?;
    for x in 0..dim {
        let fx = f.evaluate_bounded(x as u64, 2)?;
        matrix.set(x, x, convention.sign(fx));
    }

    debug!(n, ?convention, "synthesized phase oracle");
    Ok(matrix)
}

/// Builds `Z_0` using the default [`OracleConfig`].
pub fn zero_reflection(n: usize) -> Result<OracleMatrix, OracleError> {
    zero_reflection_with(n, &OracleConfig::default())
}

/// Builds `Z_0`, the reflection about `|0…0⟩`: the `2^n` identity with
/// `[0][0] = -1`.
pub fn zero_reflection_with(n: usize, config: &OracleConfig) -> Result<OracleMatrix, OracleError> {
    ensure_nonempty_domain(n)?;
    config.ensure_oracle_capacity(n)?;
    let mut matrix: OracleMatrix = zero_matrix(n)?;
    matrix.set(0, 0, -1);
    for i in 1..matrix.dim() {
        matrix.set(i, i, 1);
    }
    Ok(matrix)
}
