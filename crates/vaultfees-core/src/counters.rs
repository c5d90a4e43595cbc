use serde::{Deserialize, Serialize};

/// Qualifying deposits seen for one denomination since its last reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeAccrualCounter {
    pub denom: String,
    pub count: u64,
}

/// All fee-accrual counters, in the order denominations were first seen.
///
/// At most one entry per denom. Callers load the whole collection, mutate it,
/// and write it back in one go.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeAccrualCounters {
    pub counters: Vec<FeeAccrualCounter>,
}

impl FeeAccrualCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, denom: &str) -> Option<u64> {
        self.counters.iter().find(|c| c.denom == denom).map(|c| c.count)
    }

    /// Bump the counter for `denom`, appending a fresh entry if needed.
    /// Returns the new count.
    pub fn increment(&mut self, denom: &str) -> u64 {
        match self.counters.iter_mut().find(|c| c.denom == denom) {
            Some(c) => {
                c.count = c.count.saturating_add(1);
                c.count
            }
            None => {
                self.counters.push(FeeAccrualCounter {
                    denom: denom.to_string(),
                    count: 1,
                });
                1
            }
        }
    }

    /// Zero the counter for `denom`. The entry itself is kept.
    pub fn reset(&mut self, denom: &str) {
        if let Some(c) = self.counters.iter_mut().find(|c| c.denom == denom) {
            c.count = 0;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeeAccrualCounter> {
        self.counters.iter()
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// First denom that appears more than once, if any.
    pub fn find_duplicate(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        self.counters
            .iter()
            .find(|c| !seen.insert(c.denom.as_str()))
            .map(|c| c.denom.as_str())
    }
}
