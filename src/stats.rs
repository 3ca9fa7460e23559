use std::fmt;
use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::cache::AccessOutcome;

/// Running hit/miss/eviction totals for a simulation. Can be serialised for
/// comparison against stored reference counts
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
pub struct Summary {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl Summary {
    /// Folds one access outcome into the totals. A miss that evicted counts
    /// towards both misses and evictions
    pub fn record(&mut self, outcome: AccessOutcome) {
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Miss => self.misses += 1,
            AccessOutcome::MissEviction => {
                self.misses += 1;
                self.evictions += 1;
            }
        }
    }

    /// The total number of accesses serviced so far
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Writes the three counts to a file as a single space-separated line,
    /// creating or truncating the file
    pub fn persist<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let contents = format!("{} {} {}\n", self.hits, self.misses, self.evictions);
        fs::write(&path, contents).map_err(|e| {
            format!(
                "Couldn't write the results file at path {}: {e}",
                path.as_ref().display()
            )
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits:{} misses:{} evictions:{}",
            self.hits, self.misses, self.evictions
        )
    }
}
