// src/backend/mod.rs

//! The narrow interface to whatever actually runs circuits.
//!
//! A [`Backend`] receives a [`Job`] (which algorithm, how many input qubits,
//! the oracle gates to embed, how many shots) and answers with measurement
//! [`Counts`]. Hadamard layers, helper-qubit preparation, measurement wiring,
//! compilation and provider selection are all the backend's business.

mod results;

pub use results::Counts;

use crate::core::{Matrix, OracleError, OracleMatrix};
use crate::validation::check_signed_permutation;
use num_complex::Complex;
use std::fmt;
use std::sync::Arc;

/// Which textbook algorithm a job runs. Determines how the backend wires the
/// oracle gates and which register it measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// One helper qubit prepared in `|1⟩`; measures the `n` inputs.
    BernsteinVazirani,
    /// Same circuit shape as Bernstein–Vazirani.
    DeutschJozsa,
    /// `Z_f`, `H`, `Z_0`, `H` repeated `iterations` times; measures all `n` qubits.
    Grover,
    /// `n` helper qubits in `|0⟩`; measures the `n` inputs.
    Simon,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::BernsteinVazirani => "Bernstein-Vazirani",
            Algorithm::DeutschJozsa => "Deutsch-Jozsa",
            Algorithm::Grover => "Grover",
            Algorithm::Simon => "Simon",
        };
        f.write_str(name)
    }
}

/// A named gate definition backed by a shared oracle matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleGate {
    /// Gate name as it would appear in a circuit (`U_f`, `Z_f`, `Z_0`).
    pub name: String,
    /// The synthesized matrix, shared with the oracle cache.
    pub matrix: Arc<OracleMatrix>,
}

impl OracleGate {
    /// Wraps a synthesized matrix under `name`.
    pub fn new(name: impl Into<String>, matrix: Arc<OracleMatrix>) -> Self {
        Self { name: name.into(), matrix }
    }

    /// Number of qubits the gate acts on.
    pub fn qubits(&self) -> usize {
        self.matrix.dim().trailing_zeros() as usize
    }

    /// Complex gate definition for backends that want one.
    pub fn to_complex(&self) -> Matrix<Complex<f64>> {
        self.matrix.to_complex()
    }
}

/// One submission to a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    /// Algorithm whose circuit shape the backend should assemble.
    pub algorithm: Algorithm,
    /// Width of the input register.
    pub n: usize,
    /// Gates to embed, in application order.
    pub gates: Vec<OracleGate>,
    /// Number of shots to run.
    pub shots: usize,
    /// Repetitions of the gate sequence (Grover iterations; 1 otherwise).
    pub iterations: usize,
}

impl Job {
    /// Creates a job after checking that it asks for at least one shot and
    /// that every gate is unitary (a signed permutation, for integer gates).
    pub fn new(algorithm: Algorithm, n: usize, gates: Vec<OracleGate>, shots: usize) -> Result<Self, OracleError> {
        if shots == 0 {
            return Err(OracleError::Backend { message: format!("{} job requests zero shots", algorithm) });
        }
        for gate in &gates {
            check_signed_permutation(&gate.matrix).map_err(|e| OracleError::NonUnitary {
                message: format!("gate {}: {}", gate.name, e),
            })?;
        }
        Ok(Self { algorithm, n, gates, shots, iterations: 1 })
    }

    /// Sets the number of repetitions of the gate sequence.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Looks up a gate by name.
    pub fn gate(&self, name: &str) -> Option<&OracleGate> {
        self.gates.iter().find(|g| g.name == name)
    }
}

/// Anything that can execute a [`Job`]: a local simulator, a cloud provider,
/// or a scripted stand-in for tests.
pub trait Backend {
    /// Runs the job and returns its measurement histogram.
    ///
    /// Implementations own compilation, timeouts and provider retries; errors
    /// should be reported as [`OracleError::Backend`].
    fn execute(&mut self, job: &Job) -> Result<Counts, OracleError>;
}

impl<B: Backend + ?Sized> Backend for &mut B {
    fn execute(&mut self, job: &Job) -> Result<Counts, OracleError> {
        (**self).execute(job)
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn execute(&mut self, job: &Job) -> Result<Counts, OracleError> {
        (**self).execute(job)
    }
}
