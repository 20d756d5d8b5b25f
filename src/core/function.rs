// src/core/function.rs

use super::error::OracleError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A black-box classical function `f : [0, 2^n) -> [0, 2^m)` encoding the
/// hidden structure a quantum algorithm is meant to extract.
///
/// Oracles arrive either as an explicit truth table or as a closure. Both are
/// evaluated through [`OracleFunction::evaluate`], so synthesis never needs to
/// know which form it was given. The function is assumed referentially
/// transparent: evaluating the same `x` twice must give the same result.
#[derive(Clone)]
pub enum OracleFunction {
    /// Truth table indexed by input; `table[x] = f(x)`.
    TableLookup(Vec<u64>),
    /// Arbitrary pure function of the input.
    Callable(Arc<dyn Fn(u64) -> u64 + Send + Sync>),
}

/// Identity of an oracle function, used to key caller-side caches.
///
/// Tables are identified by their contents. Closures are identified by the
/// shared `Arc` itself, which the identity keeps alive: while a cache entry
/// exists its closure cannot be freed and its address cannot be handed to a
/// different closure.
#[derive(Clone)]
pub enum FunctionIdentity {
    /// Contents of a lookup table
    Table(Vec<u64>),
    /// A clone of the shared closure
    Callable(Arc<dyn Fn(u64) -> u64 + Send + Sync>),
}

impl PartialEq for FunctionIdentity {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FunctionIdentity::Table(a), FunctionIdentity::Table(b)) => a == b,
            (FunctionIdentity::Callable(a), FunctionIdentity::Callable(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for FunctionIdentity {}

impl Hash for FunctionIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            FunctionIdentity::Table(table) => {
                0u8.hash(state);
                table.hash(state);
            }
            FunctionIdentity::Callable(f) => {
                1u8.hash(state);
                // address only, matching `Arc::ptr_eq`
                (Arc::as_ptr(f) as *const ()).hash(state);
            }
        }
    }
}

impl fmt::Debug for FunctionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionIdentity::Table(table) => f.debug_tuple("Table").field(table).finish(),
            FunctionIdentity::Callable(func) => write!(f, "Callable({:p})", Arc::as_ptr(func) as *const ()),
        }
    }
}

impl OracleFunction {
    /// Wraps a truth table.
    pub fn table(values: impl Into<Vec<u64>>) -> Self {
        OracleFunction::TableLookup(values.into())
    }

    /// Wraps a closure.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(u64) -> u64 + Send + Sync + 'static,
    {
        OracleFunction::Callable(Arc::new(f))
    }

    /// Wraps a predicate as a single-bit oracle (`true` maps to 1).
    pub fn predicate<P>(p: P) -> Self
    where
        P: Fn(u64) -> bool + Send + Sync + 'static,
    {
        Self::callable(move |x| u64::from(p(x)))
    }

    /// Evaluates `f(x)`.
    ///
    /// A `TableLookup` asked for an input past its end reports
    /// `InvalidDomain` instead of panicking.
    pub fn evaluate(&self, x: u64) -> Result<u64, OracleError> {
        match self {
            OracleFunction::TableLookup(table) => usize::try_from(x)
                .ok()
                .and_then(|i| table.get(i).copied())
                .ok_or_else(|| OracleError::InvalidDomain {
                    message: format!("input {} is outside a lookup table of length {}", x, table.len()),
                }),
            OracleFunction::Callable(f) => Ok(f(x)),
        }
    }

    /// Evaluates `f(x)` and checks it lies in `[0, bound)`.
    pub fn evaluate_bounded(&self, x: u64, bound: u64) -> Result<u64, OracleError> {
        let output = self.evaluate(x)?;
        if output >= bound {
            return Err(OracleError::OutputOutOfRange { input: x, output, bound });
        }
        Ok(output)
    }

    /// Checks that the function is declared over exactly `domain_size` inputs.
    /// Closures carry no declared domain and always pass.
    pub fn check_domain(&self, domain_size: usize) -> Result<(), OracleError> {
        match self {
            OracleFunction::TableLookup(table) if table.len() != domain_size => {
                Err(OracleError::InvalidDomain {
                    message: format!(
                        "lookup table has {} entries but the domain has {}",
                        table.len(),
                        domain_size
                    ),
                })
            }
            _ => Ok(()),
        }
    }

    /// Returns the identity used for cache lookups.
    pub fn identity(&self) -> FunctionIdentity {
        match self {
            OracleFunction::TableLookup(table) => FunctionIdentity::Table(table.clone()),
            OracleFunction::Callable(f) => FunctionIdentity::Callable(Arc::clone(f)),
        }
    }
}

impl fmt::Debug for OracleFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleFunction::TableLookup(table) => f.debug_tuple("TableLookup").field(table).finish(),
            OracleFunction::Callable(_) => f.write_str("Callable(<fn>)"),
        }
    }
}

impl From<Vec<u64>> for OracleFunction {
    fn from(table: Vec<u64>) -> Self {
        OracleFunction::TableLookup(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_and_callable_agree() -> Result<(), OracleError> {
        let table = OracleFunction::table(vec![1, 0, 0, 1]);
        let parity = OracleFunction::callable(|x| u64::from(x.count_ones() % 2 == 0));
        for x in 0..4 {
            assert_eq!(table.evaluate(x)?, parity.evaluate(x)?);
        }
        Ok(())
    }

    #[test]
    fn test_table_out_of_domain() {
        let table = OracleFunction::table(vec![0, 1]);
        assert!(matches!(table.evaluate(2), Err(OracleError::InvalidDomain { .. })));
        assert!(table.check_domain(4).is_err());
        assert!(table.check_domain(2).is_ok());
    }

    #[test]
    fn test_bounded_evaluation() {
        let f = OracleFunction::callable(|x| x + 1);
        assert_eq!(f.evaluate_bounded(0, 2), Ok(1));
        assert_eq!(
            f.evaluate_bounded(1, 2),
            Err(OracleError::OutputOutOfRange { input: 1, output: 2, bound: 2 })
        );
    }

    #[test]
    fn test_identity_follows_shared_closure() {
        let f = OracleFunction::predicate(|x| x == 3);
        let g = f.clone();
        let h = OracleFunction::predicate(|x| x == 3);
        assert_eq!(f.identity(), g.identity());
        assert_ne!(f.identity(), h.identity());
        assert_eq!(
            OracleFunction::table(vec![1, 2]).identity(),
            OracleFunction::from(vec![1, 2]).identity()
        );
    }

    #[test]
    fn test_identity_keeps_closure_alive() {
        let f = OracleFunction::predicate(|x| x == 1);
        let identity = f.identity();
        drop(f);
        // a fresh closure can never compare equal to one still held by an identity
        let g = OracleFunction::predicate(|x| x == 2);
        assert_ne!(identity, g.identity());
        assert_ne!(identity, FunctionIdentity::Table(vec![0, 1]));
    }
}
