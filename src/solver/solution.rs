use std::fmt;

use crate::operation::Step;

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Generations fully expanded before the search stopped
    pub generations: usize,
    /// Operations that passed their precondition
    pub candidates: usize,
}

/// Best value reached for a target, and how it was reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub(crate) target: u32,
    pub(crate) best_value: u32,
    pub(crate) steps: Vec<Step>,
    pub(crate) stats: SearchStats,
}

impl Solution {
    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn best_value(&self) -> u32 {
        self.best_value
    }

    pub fn is_exact(&self) -> bool {
        self.best_value == self.target
    }

    /// Absolute gap between the best value and the target
    pub fn distance(&self) -> u32 {
        self.best_value.abs_diff(self.target)
    }

    /// Operations applied, in the order they were chosen
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Human readable trace, one line per operation.
    ///
    /// When no operation was needed (the largest plaque was kept as is)
    /// the trace is that plaque on its own.
    pub fn trace(&self) -> Vec<String> {
        if self.steps.is_empty() {
            vec![self.best_value.to_string()]
        } else {
            self.steps.iter().map(|s| s.to_string()).collect()
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = if self.is_exact() { "Exact" } else { "Approached" };
        writeln!(f, "Solution [{}]", state)?;
        writeln!(f)?;
        for line in self.trace() {
            writeln!(f, "{}", line)?;
        }
        if !self.is_exact() {
            write!(f, "Off by {}", self.distance())?;
        }
        Ok(())
    }
}
