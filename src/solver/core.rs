use log::{debug, info};

use crate::operation::Step;
use crate::solver::errors::SolverError;
use crate::solver::search::{Generation, SearchState};
use crate::solver::solution::{SearchStats, Solution};
use crate::solver::validation::validate_hand;

/// Finds the value closest to a target reachable from six plaques
pub struct Solver {}

impl Solver {
    /// Create a new solver
    pub fn new() -> Self {
        Self {}
    }

    /// Search for the target, stopping at the first exact match.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not six strictly positive plaques or
    /// if the target is zero.
    pub fn solve(&self, hand: &[u32], target: u32) -> Result<Solution, SolverError> {
        self.solve_with_observer(hand, target, |_, _| {})
    }

    /// Same as [`Solver::solve`], calling `observer` with the value and
    /// steps of every strict improvement of the best result.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Solver::solve`].
    pub fn solve_with_observer<F>(
        &self,
        hand: &[u32],
        target: u32,
        observer: F,
    ) -> Result<Solution, SolverError>
    where
        F: FnMut(u32, &[Step]),
    {
        validate_hand(hand, target)?;

        let mut sorted = hand.to_vec();
        sorted.sort_unstable();
        info!("Searching {} from plaques {:?}", target, sorted);

        let mut state = SearchState::new(&sorted, target, observer);
        let mut generations = 0;

        if state.best.value == target {
            info!("Largest plaque already matches the target");
        } else {
            while state.depth > 1 {
                match state.advance() {
                    Generation::Exact => {
                        debug!("Exact match during generation {}", generations + 1);
                        break;
                    }
                    Generation::Complete => generations += 1,
                }
            }
        }

        let solution = Solution {
            target,
            best_value: state.best.value,
            steps: state.best.steps,
            stats: SearchStats {
                generations,
                candidates: state.candidates,
            },
        };

        if solution.is_exact() {
            info!(
                "Found {} in {} operations ({} candidates)",
                target,
                solution.steps.len(),
                solution.stats.candidates
            );
        } else {
            info!(
                "No exact match, closest is {} (off by {}, {} candidates)",
                solution.best_value,
                solution.distance(),
                solution.stats.candidates
            );
        }
        Ok(solution)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
