// src/backend/results.rs
use std::collections::HashMap;
use std::fmt;

/// Histogram of measurement outcomes returned by a backend for one job.
///
/// Each outcome is the integer read off the measured register, with bit `i`
/// holding qubit `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counts {
    /// Maps each observed outcome to the number of shots that produced it.
    outcomes: HashMap<u64, usize>,
}

impl Counts {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `shots` additional observations of `outcome`.
    pub fn record(&mut self, outcome: u64, shots: usize) {
        if shots > 0 {
            *self.outcomes.entry(outcome).or_insert(0) += shots;
        }
    }

    /// Number of shots that produced `outcome`.
    pub fn get(&self, outcome: u64) -> usize {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    /// Total number of shots recorded.
    pub fn shots(&self) -> usize {
        self.outcomes.values().sum()
    }

    /// Returns `true` if no shot was recorded.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Distinct outcomes in ascending order.
    pub fn outcomes(&self) -> Vec<u64> {
        let mut outcomes: Vec<u64> = self.outcomes.keys().copied().collect();
        outcomes.sort_unstable();
        outcomes
    }

    /// Outcome with the highest count; ties go to the smaller outcome.
    pub fn most_frequent(&self) -> Option<u64> {
        self.outcomes
            .iter()
            .max_by(|(a, ca), (b, cb)| ca.cmp(cb).then(b.cmp(a)))
            .map(|(outcome, _)| *outcome)
    }

    /// Read-only access to the underlying map.
    pub fn as_map(&self) -> &HashMap<u64, usize> {
        &self.outcomes
    }
}

impl FromIterator<u64> for Counts {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for outcome in iter {
            counts.record(outcome, 1);
        }
        counts
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Counts ({} shots):", self.shots())?;
        if self.outcomes.is_empty() {
            writeln!(f, "  No outcomes recorded.")?;
        } else {
            // Sort by outcome for consistent and readable output
            for outcome in self.outcomes() {
                writeln!(f, "    {:#b}: {}", outcome, self.get(outcome))?;
            }
        }
        Ok(())
    }
}
