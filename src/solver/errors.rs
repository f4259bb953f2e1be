use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Expected {expected} plaques, got {actual}")]
    InvalidHandSize { expected: usize, actual: usize },
    #[error("Plaques must be strictly positive")]
    ZeroTile,
    #[error("Target must be strictly positive")]
    ZeroTarget,
    #[error("Solver worker stopped without sending a solution")]
    WorkerDisconnected,
}
