//! Compte est Bon - A solver for the "Le Compte est Bon" number game
//!
//! Six plaques are drawn from a fixed pool of 24 and a target between 101
//! and 998 is picked at random. The solver combines the plaques with
//! addition, multiplication, subtraction and exact division, each plaque
//! used at most once, to reach the target or get as close as possible.

pub mod operation;
pub mod pool;
pub mod solver;

// Re-export the main public API
pub use operation::{Operation, OperationError, Step};
pub use pool::{Round, TilePool};
pub use solver::{PendingSolution, SearchStats, Solution, Solver, SolverError};

/// Find the closest value to `target` reachable from the six plaques of `hand`
///
/// This is a convenience function that creates a default solver.
///
/// # Errors
///
/// This function will return an error if:
/// * The hand does not hold exactly six plaques
/// * A plaque or the target is zero
///
/// # Examples
///
/// ```
/// use compte_est_bon::solve;
///
/// match solve(&[1, 2, 3, 4, 5, 6], 15) {
///     Ok(solution) if solution.is_exact() => println!("Found:\n{}", solution),
///     Ok(solution) => println!("Closest: {}", solution.best_value()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(hand: &[u32], target: u32) -> Result<Solution, SolverError> {
    Solver::new().solve(hand, target)
}
