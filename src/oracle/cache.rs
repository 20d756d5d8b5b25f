// src/oracle/cache.rs

use super::{Arity, SignConvention};
use crate::core::{FunctionIdentity, OracleConfig, OracleError, OracleFunction, OracleMatrix};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// Which gate a cached matrix represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OracleKind {
    /// XOR oracle `U_f`
    Xor(Arity),
    /// Sign oracle `Z_f`
    Phase(SignConvention),
    /// Reflection `Z_0` (independent of `f`)
    ZeroReflection,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    n: usize,
    kind: OracleKind,
    function: Option<FunctionIdentity>,
}

/// Caller-side memoization of synthesized gates.
///
/// Algorithms that re-submit the same oracle (retry loops, repeated Grover
/// iterations) fetch it here instead of re-synthesizing. Entries are keyed by
/// `(n, kind, function identity)` and handed out as `Arc`s, so every caller
/// shares one immutable matrix. A cached closure stays alive until the
/// cache is cleared or dropped.
#[derive(Debug, Default)]
pub struct OracleCache {
    config: OracleConfig,
    entries: HashMap<CacheKey, Arc<OracleMatrix>>,
    hits: usize,
    misses: usize,
}

impl OracleCache {
    /// Creates an empty cache that synthesizes with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache that synthesizes with `config`.
    pub fn with_config(config: OracleConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Returns the cached `U_f`, synthesizing it on first use.
    pub fn xor_oracle(&mut self, n: usize, f: &OracleFunction, arity: Arity) -> Result<Arc<OracleMatrix>, OracleError> {
        let config = self.config;
        self.get_or_insert_with(n, OracleKind::Xor(arity), Some(f.identity()), || {
            super::synthesize_oracle_matrix_with(n, f, arity, &config)
        })
    }

    /// Returns the cached `Z_f`, synthesizing it on first use.
    pub fn phase_oracle(
        &mut self,
        n: usize,
        f: &OracleFunction,
        convention: SignConvention,
    ) -> Result<Arc<OracleMatrix>, OracleError> {
        let config = self.config;
        self.get_or_insert_with(n, OracleKind::Phase(convention), Some(f.identity()), || {
            super::synthesize_phase_oracle_with(n, f, convention, &config)
        })
    }

    /// Returns the cached `Z_0`, building it on first use.
    pub fn zero_reflection(&mut self, n: usize) -> Result<Arc<OracleMatrix>, OracleError> {
        let config = self.config;
        self.get_or_insert_with(n, OracleKind::ZeroReflection, None, || super::zero_reflection_with(n, &config))
    }

    fn get_or_insert_with<F>(
        &mut self,
        n: usize,
        kind: OracleKind,
        function: Option<FunctionIdentity>,
        build: F,
    ) -> Result<Arc<OracleMatrix>, OracleError>
    where
        F: FnOnce() -> Result<OracleMatrix, OracleError>,
    {
        let key = CacheKey { n, kind, function };
        if let Some(matrix) = self.entries.get(&key) {
            self.hits += 1;
            trace!(n, ?kind, "oracle cache hit");
            return Ok(Arc::clone(matrix));
        }
        // Failed builds are not cached; the error goes straight back to the caller.
        let matrix = Arc::new(build()?);
        self.misses += 1;
        self.entries.insert(key, Arc::clone(&matrix));
        Ok(matrix)
    }

    /// Number of lookups served from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of lookups that required synthesis.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Number of cached gates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached gate. Hit/miss counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_lookup_shares_matrix() -> Result<(), OracleError> {
        let mut cache = OracleCache::new();
        let f = OracleFunction::table(vec![0, 1, 1, 0]);
        let first = cache.xor_oracle(2, &f, Arity::OneBit)?;
        let second = cache.xor_oracle(2, &f.clone(), Arity::OneBit)?;
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!((cache.hits(), cache.misses()), (1, 1));
        Ok(())
    }

    #[test]
    fn test_distinct_keys() -> Result<(), OracleError> {
        let mut cache = OracleCache::new();
        let f = OracleFunction::predicate(|x| x == 2);
        cache.xor_oracle(2, &f, Arity::OneBit)?;
        cache.phase_oracle(2, &f, SignConvention::Standard)?;
        cache.phase_oracle(2, &f, SignConvention::GlobalPhaseFlip)?;
        cache.zero_reflection(2)?;
        cache.zero_reflection(3)?;
        assert_eq!(cache.len(), 5);
        assert_eq!(cache.hits(), 0);

        cache.clear();
        assert!(cache.is_empty());
        Ok(())
    }

    #[test]
    fn test_dropped_closures_do_not_alias() -> Result<(), OracleError> {
        let mut cache = OracleCache::new();
        for target in 0..4u64 {
            // each closure is dropped before the next one is allocated
            let f = OracleFunction::predicate(move |x| x == target);
            let cached = cache.phase_oracle(2, &f, SignConvention::Standard)?;
            let fresh = crate::oracle::synthesize_phase_oracle(2, &f, SignConvention::Standard)?;
            assert_eq!(*cached, fresh, "target {}", target);
        }
        assert_eq!((cache.hits(), cache.misses()), (0, 4));
        Ok(())
    }

    #[test]
    fn test_errors_are_not_cached() {
        let mut cache = OracleCache::with_config(OracleConfig::default().with_max_oracle_qubits(2));
        let f = OracleFunction::callable(|_| 0);
        assert!(cache.xor_oracle(2, &f, Arity::OneBit).is_err());
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 0);
    }
}
