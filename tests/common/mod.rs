// tests/common/mod.rs

//! A reference backend for integration tests.
//!
//! It reads the classical function back out of the submitted oracle gates and
//! samples outcomes from the textbook output distribution of each algorithm,
//! using a seeded PRNG so runs are reproducible.

#![allow(dead_code)]

use qoracle::grover::grover_operator;
use qoracle::{Algorithm, Backend, Counts, Job, OracleError, OracleMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

pub struct ReferenceBackend {
    rng: StdRng,
    pub jobs_run: usize,
}

impl ReferenceBackend {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), jobs_run: 0 }
    }
}

fn backend_error(message: &str) -> OracleError {
    OracleError::Backend { message: message.to_string() }
}

fn gate<'a>(job: &'a Job, name: &str) -> Result<&'a OracleMatrix, OracleError> {
    job.gate(name).map(|g| g.matrix.as_ref()).ok_or_else(|| backend_error("missing gate"))
}

fn parity(v: usize) -> f64 {
    if v.count_ones() % 2 == 0 { 1.0 } else { -1.0 }
}

/// Recovers f(x) from U_f by following row (x << helpers) with b = 0.
fn read_function(u_f: &OracleMatrix, n: usize, helpers: usize) -> Result<Vec<usize>, OracleError> {
    (0..1usize << n)
        .map(|x| {
            let row = x << helpers;
            u_f.nonzero_column(row).map(|col| col ^ row).ok_or_else(|| backend_error("empty row in U_f"))
        })
        .collect()
}

/// Probability of each measured outcome for the circuit the job describes.
fn distribution(job: &Job) -> Result<Vec<f64>, OracleError> {
    let n = job.n;
    let dim = 1usize << n;
    let scale = 1.0 / dim as f64;
    match job.algorithm {
        Algorithm::BernsteinVazirani | Algorithm::DeutschJozsa => {
            let f = read_function(gate(job, "U_f")?, n, 1)?;
            Ok((0..dim)
                .map(|y| {
                    let amp: f64 = (0..dim).map(|x| parity(x & y) * parity(f[x])).sum::<f64>() * scale;
                    amp * amp
                })
                .collect())
        }
        Algorithm::Simon => {
            let f = read_function(gate(job, "U_f")?, n, n)?;
            Ok((0..dim)
                .map(|y| {
                    let mut per_output: HashMap<usize, f64> = HashMap::new();
                    for x in 0..dim {
                        *per_output.entry(f[x]).or_insert(0.0) += parity(x & y) * scale;
                    }
                    per_output.values().map(|a| a * a).sum()
                })
                .collect())
        }
        Algorithm::Grover => {
            let g = grover_operator(n, gate(job, "Z_f")?)?;
            let mut state = vec![scale.sqrt(); dim];
            for _ in 0..job.iterations {
                state = g.apply(&state).ok_or_else(|| backend_error("dimension mismatch"))?;
            }
            Ok(state.iter().map(|a| a * a).collect())
        }
    }
}

impl Backend for ReferenceBackend {
    fn execute(&mut self, job: &Job) -> Result<Counts, OracleError> {
        self.jobs_run += 1;
        let probabilities = distribution(job)?;
        let mut counts = Counts::new();
        for _ in 0..job.shots {
            let sample: f64 = self.rng.random::<f64>();
            let mut cumulative = 0.0;
            // Falls back to the last outcome with weight if rounding leaves sample above the total.
            let mut outcome = probabilities.iter().rposition(|&p| p > 1e-12).unwrap_or(0);
            for (y, p) in probabilities.iter().enumerate() {
                cumulative += p;
                if sample < cumulative {
                    outcome = y;
                    break;
                }
            }
            counts.record(outcome as u64, 1);
        }
        Ok(counts)
    }
}
