// src/grover/mod.rs

//! Grover's reflection operator and a check that a sign convention actually
//! amplifies marked states.
//!
//! Different revisions of Grover oracles disagree on the overall sign of
//! `Z_f`. Rather than trust any one of them, [`check_amplification`] builds
//! `G = -H·Z_0·H·Z_f` densely and watches the marked-state probability as `G`
//! is applied to the uniform superposition.

use crate::core::config::{dimension, ensure_nonempty_domain, zero_matrix};
use crate::core::constants::oracle_constants::{PI, PROBABILITY_TOLERANCE};
use crate::core::{Matrix, OracleConfig, OracleError, OracleFunction, OracleMatrix};
use crate::oracle::zero_reflection_with;
use crate::validation::check_diagonal_signs;
use tracing::debug;

/// Number of Grover iterations for an `n`-bit search space,
/// `floor(π/4 · √(2^n))`.
pub fn optimal_iterations(n: usize) -> usize {
    let states = (n as f64).exp2();
    (PI / 4.0 * states.sqrt()).floor() as usize
}

/// Builds `H^{⊗n}` using the default [`OracleConfig`].
pub fn hadamard_transform(n: usize) -> Result<Matrix<f64>, OracleError> {
    hadamard_transform_with(n, &OracleConfig::default())
}

/// The `n`-fold Walsh–Hadamard transform,
/// `H[r][c] = (-1)^popcount(r & c) / √(2^n)`.
///
/// `n` is checked against `config.max_oracle_qubits` before allocating.
pub fn hadamard_transform_with(n: usize, config: &OracleConfig) -> Result<Matrix<f64>, OracleError> {
    ensure_nonempty_domain(n)?;
    config.ensure_oracle_capacity(n)?;
    let mut h: Matrix<f64> = zero_matrix(n)?;
    let scale = 1.0 / (h.dim() as f64).sqrt();

    for r in 0..h.dim() {
        for c in 0..h.dim() {
            h.set(r, c, if (r & c).count_ones() % 2 == 0 { scale } else { -scale });
        }
    }
    Ok(h)
}

/// Builds `G` using the default [`OracleConfig`].
pub fn grover_operator(n: usize, z_f: &OracleMatrix) -> Result<Matrix<f64>, OracleError> {
    grover_operator_with(n, z_f, &OracleConfig::default())
}

/// Builds `G = -H·Z_0·H·Z_f` for a sign oracle `z_f` over `n` qubits.
///
/// # Errors
/// `InvalidDomain` if `z_f` is not `2^n` square, `NonPermutation` if it is not
/// a ±1 diagonal, `CapacityExceeded` if `n` is above `config.max_oracle_qubits`.
pub fn grover_operator_with(n: usize, z_f: &OracleMatrix, config: &OracleConfig) -> Result<Matrix<f64>, OracleError> {
    ensure_nonempty_domain(n)?;
    config.ensure_oracle_capacity(n)?;
    let dim = dimension(n)?;
    if z_f.dim() != dim {
        return Err(OracleError::InvalidDomain {
            message: format!("Z_f has dimension {} but {} qubits need {}", z_f.dim(), n, dim),
        });
    }
    check_diagonal_signs(z_f)?;

    let h = hadamard_transform_with(n, config)?;
    let z_0 = zero_reflection_with(n, config)?.to_real();
    let shape_error = || OracleError::InvalidDomain { message: "operand dimensions diverged".to_string() };

    let reflection = h.matmul(&z_0).and_then(|m| m.matmul(&h)).ok_or_else(shape_error)?;
    let g = reflection.matmul(&z_f.to_real()).ok_or_else(shape_error)?;
    Ok(-g)
}

/// Marked-state probabilities observed while iterating `G`.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplificationReport {
    /// Marked probability of the uniform superposition, `M / N`.
    pub initial: f64,
    /// Marked probability after each application of `G`.
    pub probabilities: Vec<f64>,
}

impl AmplificationReport {
    /// Marked probability after the last iteration.
    pub fn final_probability(&self) -> f64 {
        self.probabilities.last().copied().unwrap_or(self.initial)
    }
}

/// Runs the amplification check using the default [`OracleConfig`].
pub fn check_amplification(
    n: usize,
    f: &OracleFunction,
    z_f: &OracleMatrix,
) -> Result<AmplificationReport, OracleError> {
    check_amplification_with(n, f, z_f, &OracleConfig::default())
}

/// Iterates `G` built from `z_f` [`optimal_iterations`] times starting from
/// the uniform superposition and records the probability of measuring a
/// marked state (`f(x) = 1`) after each step.
///
/// When marked states exist and make up less than half of the domain, the
/// first application of `G` must raise the marked probability. A sign
/// convention that does not is rejected with `Convergence`.
pub fn check_amplification_with(
    n: usize,
    f: &OracleFunction,
    z_f: &OracleMatrix,
    config: &OracleConfig,
) -> Result<AmplificationReport, OracleError> {
    let g = grover_operator_with(n, z_f, config)?;
    let dim = g.dim();
    f.check_domain(dim)?;

    let mut marked = Vec::new();
    for x in 0..dim {
        if f.evaluate_bounded(x as u64, 2)? == 1 {
            marked.push(x);
        }
    }
    let marked_probability = |state: &[f64]| marked.iter().map(|&x| state[x] * state[x]).sum::<f64>();

    let mut state = vec![1.0 / (dim as f64).sqrt(); dim];
    let initial = marked_probability(&state);
    let iterations = optimal_iterations(n);
    let mut probabilities = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        state = g.apply(&state).ok_or_else(|| OracleError::InvalidDomain {
            message: "state and operator dimensions diverged".to_string(),
        })?;
        probabilities.push(marked_probability(&state));
    }

    let report = AmplificationReport { initial, probabilities };
    debug!(n, marked = marked.len(), initial, final_probability = report.final_probability(), "grover amplification");

    if !marked.is_empty() && 2 * marked.len() < dim {
        let first = report.probabilities.first().copied().unwrap_or(initial);
        if first <= initial + PROBABILITY_TOLERANCE {
            return Err(OracleError::Convergence {
                message: format!(
                    "marked probability went from {:.6} to {:.6} after one iteration",
                    initial, first
                ),
            });
        }
    }
    Ok(report)
}
