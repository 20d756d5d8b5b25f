// src/solver/mod.rs

//! Classical post-processing for Simon's algorithm.
//!
//! Each measurement `e` from a Simon circuit is a homogeneous linear equation
//! `e · s ≡ 0 (mod 2)` on the hidden string `s`. Given a batch of them, the
//! solver searches for a nonzero `s` that satisfies every equation.

use crate::core::config::{dimension, ensure_nonempty_domain};
use crate::core::{OracleConfig, OracleError};
use std::fmt;
use tracing::{debug, warn};

/// Outcome of analyzing an equation set, with the legacy `0` sentinel
/// disambiguated by the rank of the system over GF(2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimonSolution {
    /// Rank `n - 1`: exactly one nonzero string satisfies every equation.
    Unique(u64),
    /// Rank `n`: only the zero string satisfies every equation.
    Trivial,
    /// Rank below `n - 1`: several nonzero strings fit. `first_candidate` is
    /// the smallest of them, i.e. what [`solve_simon_system`] returns.
    Underdetermined {
        /// Smallest nonzero consistent candidate
        first_candidate: u64,
        /// Rank of the equation set over GF(2)
        rank: usize,
    },
}

impl SimonSolution {
    /// The hidden string if the system pins it down, `Some(0)` for the trivial
    /// case, `None` while underdetermined.
    pub fn hidden_string(&self) -> Option<u64> {
        match self {
            SimonSolution::Unique(s) => Some(*s),
            SimonSolution::Trivial => Some(0),
            SimonSolution::Underdetermined { .. } => None,
        }
    }
}

impl fmt::Display for SimonSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimonSolution::Unique(s) => write!(f, "Unique({:#b})", s),
            SimonSolution::Trivial => write!(f, "Trivial(0)"),
            SimonSolution::Underdetermined { first_candidate, rank } => {
                write!(f, "Underdetermined(rank {}, first candidate {:#b})", rank, first_candidate)
            }
        }
    }
}

/// Parity of `e · t` over GF(2).
fn dot_parity(e: u64, t: u64) -> u32 {
    (e & t).count_ones() & 1
}

fn validate_equations(equations: &[u64], n: usize, config: &OracleConfig) -> Result<u64, OracleError> {
    ensure_nonempty_domain(n)?;
    config.ensure_solver_capacity(n)?;
    let bound = dimension(n)? as u64;
    if let Some(&equation) = equations.iter().find(|&&e| e >= bound) {
        return Err(OracleError::EquationOutOfRange { equation, n });
    }
    Ok(bound)
}

/// Finds the hidden string using the default [`OracleConfig`].
///
/// See [`solve_simon_system_with`].
pub fn solve_simon_system(equations: &[u64], n: usize) -> Result<u64, OracleError> {
    solve_simon_system_with(equations, n, &OracleConfig::default())
}

/// Returns the smallest nonzero `t < 2^n` with `popcount(e & t)` even for
/// every equation `e`, or `0` if there is none.
///
/// A `0` result is ambiguous with a genuine hidden string of zero, and a
/// rank-deficient system (e.g. all-zero equations) yields the first candidate,
/// `1`, whether or not that is the true answer. Use
/// [`analyze_simon_system`] when the distinction matters.
///
/// Runs in O(2^n · k) for `k` equations.
///
/// # Errors
/// * `InvalidDomain` if `n == 0`.
/// * `CapacityExceeded` if `n` exceeds `config.max_solver_bits`.
/// * `EquationOutOfRange` if an equation has bits set at or above `n`.
pub fn solve_simon_system_with(equations: &[u64], n: usize, config: &OracleConfig) -> Result<u64, OracleError> {
    let bound = validate_equations(equations, n, config)?;
    let solution = (1..bound)
        .find(|&t| equations.iter().all(|&e| dot_parity(e, t) == 0))
        .unwrap_or(0);
    debug!(n, equations = equations.len(), solution, "solved simon system");
    Ok(solution)
}

/// Rank of a set of bit vectors over GF(2).
///
/// Keeps an xor basis indexed by leading bit; each vector is reduced against
/// it and, if anything is left, joins the basis.
pub fn gf2_rank(equations: &[u64]) -> usize {
    let mut basis = [0u64; u64::BITS as usize];
    let mut rank = 0;
    for &equation in equations {
        let mut v = equation;
        while v != 0 {
            let lead = (u64::BITS - 1 - v.leading_zeros()) as usize;
            if basis[lead] == 0 {
                basis[lead] = v;
                rank += 1;
                break;
            }
            v ^= basis[lead];
        }
    }
    rank
}

/// Analyzes an equation set using the default [`OracleConfig`].
pub fn analyze_simon_system(equations: &[u64], n: usize) -> Result<SimonSolution, OracleError> {
    analyze_simon_system_with(equations, n, &OracleConfig::default())
}

/// Classifies an equation set by its GF(2) rank and solves it.
///
/// Fails with the same errors as [`solve_simon_system_with`].
pub fn analyze_simon_system_with(
    equations: &[u64],
    n: usize,
    config: &OracleConfig,
) -> Result<SimonSolution, OracleError> {
    let first_candidate = solve_simon_system_with(equations, n, config)?;
    let rank = gf2_rank(equations);

    let solution = if rank == n {
        SimonSolution::Trivial
    } else if rank + 1 == n {
        SimonSolution::Unique(first_candidate)
    } else {
        warn!(n, rank, first_candidate, "simon system is underdetermined");
        SimonSolution::Underdetermined { first_candidate, rank }
    };
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_posed_system() -> Result<(), OracleError> {
        assert_eq!(solve_simon_system(&[0b001, 0b110, 0b111], 3)?, 0b110);
        // 0b011 · 0b110 is odd, so these equations point at 0b111 instead
        assert_eq!(solve_simon_system(&[0b110, 0b011, 0b101], 3)?, 0b111);
        Ok(())
    }

    #[test]
    fn test_all_zero_equations_pick_first_candidate() -> Result<(), OracleError> {
        assert_eq!(solve_simon_system(&[0, 0, 0], 3)?, 1);
        assert_eq!(solve_simon_system(&[], 2)?, 1);
        Ok(())
    }

    #[test]
    fn test_full_rank_returns_sentinel() -> Result<(), OracleError> {
        assert_eq!(solve_simon_system(&[0b01, 0b10], 2)?, 0);
        assert_eq!(analyze_simon_system(&[0b01, 0b10], 2)?, SimonSolution::Trivial);
        Ok(())
    }

    #[test]
    fn test_recorded_measurements() -> Result<(), OracleError> {
        // equations sampled from a run with s = 0b110
        let eqns = [0b110, 0b111, 0b111, 0b000, 0b001, 0b001, 0b110, 0b110];
        assert_eq!(solve_simon_system(&eqns, 3)?, 0b110);
        // s = 0b10 for n = 2
        assert_eq!(solve_simon_system(&[0b01, 0b01, 0b00], 2)?, 0b10);
        Ok(())
    }

    #[test]
    fn test_rank() {
        assert_eq!(gf2_rank(&[]), 0);
        assert_eq!(gf2_rank(&[0, 0]), 0);
        assert_eq!(gf2_rank(&[0b110, 0b011, 0b101]), 2);
        assert_eq!(gf2_rank(&[0b100, 0b010, 0b001, 0b111]), 3);
        assert_eq!(gf2_rank(&[u64::MAX, 1]), 2);
    }

    #[test]
    fn test_analysis_classifies_rank() -> Result<(), OracleError> {
        assert_eq!(analyze_simon_system(&[0b011, 0b101], 3)?, SimonSolution::Unique(0b111));
        assert_eq!(
            analyze_simon_system(&[0, 0, 0], 3)?,
            SimonSolution::Underdetermined { first_candidate: 1, rank: 0 }
        );
        assert_eq!(SimonSolution::Unique(0b10).hidden_string(), Some(0b10));
        assert_eq!(SimonSolution::Trivial.hidden_string(), Some(0));
        Ok(())
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(
            solve_simon_system(&[0b1000], 3),
            Err(OracleError::EquationOutOfRange { equation: 0b1000, n: 3 })
        );
        assert!(matches!(solve_simon_system(&[], 0), Err(OracleError::InvalidDomain { .. })));
        let config = OracleConfig::default().with_max_solver_bits(4);
        assert_eq!(
            solve_simon_system_with(&[], 5, &config),
            Err(OracleError::CapacityExceeded { qubits: 5, limit: 4 })
        );
    }
}
