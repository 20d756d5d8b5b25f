// src/algorithms/mod.rs

//! Drivers for Bernstein–Vazirani, Deutsch–Jozsa, Grover and Simon.
//!
//! Each driver synthesizes (or fetches from the cache) the oracle gates,
//! submits a [`Job`] to the backend and interprets the returned counts.
//! Drivers that may need several submissions use an explicit loop bounded by
//! [`RetryPolicy::max_attempts`].

use crate::backend::{Algorithm, Backend, Counts, Job, OracleGate};
use crate::core::constants::oracle_constants::DEFAULT_MAX_ATTEMPTS;
use crate::core::{OracleConfig, OracleError, OracleFunction};
use crate::grover::optimal_iterations;
use crate::oracle::{Arity, OracleCache, SignConvention};
use crate::solver::{analyze_simon_system_with, SimonSolution};
use std::fmt;
use tracing::{debug, info, warn};

/// Bounds on how hard a driver tries before reporting failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of jobs a single driver call may submit.
    pub max_attempts: usize,
    /// Shots per job. `None` uses the algorithm's own default
    /// (1 for Bernstein–Vazirani, Deutsch–Jozsa and Grover, `n` for Simon).
    pub shots_per_attempt: Option<usize>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: DEFAULT_MAX_ATTEMPTS, shots_per_attempt: None }
    }
}

/// Deutsch–Jozsa verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionClass {
    /// `f` returns the same bit for every input.
    Constant,
    /// `f` returns 0 on exactly half the inputs.
    Balanced,
}

impl fmt::Display for FunctionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionClass::Constant => write!(f, "constant"),
            FunctionClass::Balanced => write!(f, "balanced"),
        }
    }
}

/// Runs the four algorithms against a backend, sharing one oracle cache.
pub struct AlgorithmRunner<B: Backend> {
    backend: B,
    cache: OracleCache,
    config: OracleConfig,
    policy: RetryPolicy,
    convention: SignConvention,
}

impl<B: Backend> AlgorithmRunner<B> {
    /// Creates a runner with default limits, retry policy and sign convention.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: OracleCache::new(),
            config: OracleConfig::default(),
            policy: RetryPolicy::default(),
            convention: SignConvention::default(),
        }
    }

    /// Replaces the resource limits. Clears the cache.
    pub fn with_config(mut self, config: OracleConfig) -> Self {
        self.config = config;
        self.cache = OracleCache::with_config(config);
        self
    }

    /// Replaces the retry policy.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Selects the sign convention for Grover's `Z_f`.
    pub fn with_sign_convention(mut self, convention: SignConvention) -> Self {
        self.convention = convention;
        self
    }

    /// The oracle cache, for inspection.
    pub fn cache(&self) -> &OracleCache {
        &self.cache
    }

    /// The backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the runner and returns its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn shots_or(&self, default: usize) -> usize {
        self.policy.shots_per_attempt.unwrap_or(default)
    }

    fn submit(&mut self, job: &Job) -> Result<Counts, OracleError> {
        let counts = self.backend.execute(job)?;
        if counts.is_empty() {
            return Err(OracleError::Backend { message: format!("{} job returned no outcomes", job.algorithm) });
        }
        let bound = 1u64 << job.n;
        if let Some(outcome) = counts.outcomes().into_iter().find(|&o| o >= bound) {
            return Err(OracleError::Backend {
                message: format!("outcome {:#b} does not fit in {} measured qubits", outcome, job.n),
            });
        }
        Ok(counts)
    }

    /// Recovers `(a, b)` for `f(x) = a · x ⊕ b`.
    ///
    /// One job: `a` is the most frequent outcome and `b = f(0)`.
    pub fn bernstein_vazirani(&mut self, n: usize, f: &OracleFunction) -> Result<(u64, u64), OracleError> {
        let u_f = self.cache.xor_oracle(n, f, Arity::OneBit)?;
        let job = Job::new(Algorithm::BernsteinVazirani, n, vec![OracleGate::new("U_f", u_f)], self.shots_or(1))?;
        let counts = self.submit(&job)?;

        let a = counts.most_frequent().unwrap_or(0);
        let b = f.evaluate_bounded(0, 2)?;
        info!(n, a, b, "bernstein-vazirani finished");
        Ok((a, b))
    }

    /// Decides whether `f` is constant or balanced (promised to be one of them).
    ///
    /// `f` is constant iff every measured outcome is 0.
    pub fn deutsch_jozsa(&mut self, n: usize, f: &OracleFunction) -> Result<FunctionClass, OracleError> {
        let u_f = self.cache.xor_oracle(n, f, Arity::OneBit)?;
        let job = Job::new(Algorithm::DeutschJozsa, n, vec![OracleGate::new("U_f", u_f)], self.shots_or(1))?;
        let counts = self.submit(&job)?;

        let class = if counts.outcomes().iter().all(|&o| o == 0) {
            FunctionClass::Constant
        } else {
            FunctionClass::Balanced
        };
        info!(n, %class, "deutsch-jozsa finished");
        Ok(class)
    }

    /// Searches for an `x` with `f(x) = 1`.
    ///
    /// Each attempt runs [`optimal_iterations`] Grover iterations and checks the
    /// measured outcomes classically, most frequent first. Returns `None` once
    /// `max_attempts` jobs have produced no marked element (which is the
    /// expected answer when `f ≡ 0`).
    pub fn grover(&mut self, n: usize, f: &OracleFunction) -> Result<Option<u64>, OracleError> {
        let z_f = self.cache.phase_oracle(n, f, self.convention)?;
        let z_0 = self.cache.zero_reflection(n)?;
        let gates = vec![OracleGate::new("Z_f", z_f), OracleGate::new("Z_0", z_0)];
        let job = Job::new(Algorithm::Grover, n, gates, self.shots_or(1))?.with_iterations(optimal_iterations(n));

        for attempt in 1..=self.policy.max_attempts {
            let counts = self.submit(&job)?;
            let mut ranked = counts.outcomes();
            ranked.sort_by_key(|&o| std::cmp::Reverse(counts.get(o)));
            for x in ranked {
                if f.evaluate_bounded(x, 2)? == 1 {
                    info!(n, attempt, x, "grover found a marked element");
                    return Ok(Some(x));
                }
            }
            debug!(n, attempt, "grover attempt measured no marked element");
        }
        warn!(n, attempts = self.policy.max_attempts, "grover found no marked element");
        Ok(None)
    }

    /// Recovers the hidden string `s` of a two-to-one (or one-to-one) `f`.
    ///
    /// Outcomes from every attempt are pooled and analyzed together. A unique
    /// candidate `s` is accepted once `f(s) = f(0)` confirms it; a full-rank
    /// system means `s = 0`.
    ///
    /// # Errors
    /// `RetriesExhausted` if `max_attempts` jobs do not pin `s` down.
    pub fn simon(&mut self, n: usize, f: &OracleFunction) -> Result<u64, OracleError> {
        let u_f = self.cache.xor_oracle(n, f, Arity::NBit)?;
        let job = Job::new(Algorithm::Simon, n, vec![OracleGate::new("U_f", u_f)], self.shots_or(n))?;
        let f0 = f.evaluate(0)?;
        let mut equations: Vec<u64> = Vec::new();

        for attempt in 1..=self.policy.max_attempts {
            let counts = self.submit(&job)?;
            for outcome in counts.outcomes() {
                if !equations.contains(&outcome) {
                    equations.push(outcome);
                }
            }

            match analyze_simon_system_with(&equations, n, &self.config)? {
                SimonSolution::Trivial => {
                    info!(n, attempt, "simon: f is one-to-one");
                    return Ok(0);
                }
                SimonSolution::Unique(s) if f.evaluate(s)? == f0 => {
                    info!(n, attempt, s, "simon recovered hidden string");
                    return Ok(s);
                }
                solution => debug!(n, attempt, %solution, "simon needs more equations"),
            }
        }
        Err(OracleError::RetriesExhausted { attempts: self.policy.max_attempts })
    }
}
