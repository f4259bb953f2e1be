mod background;
mod core;
mod errors;
mod search;
mod solution;
mod validation;

pub use background::{PendingSolution, spawn};
pub use self::core::Solver;
pub use errors::SolverError;
pub use solution::{SearchStats, Solution};
pub use validation::validate_hand;

#[cfg(test)]
mod tests;
