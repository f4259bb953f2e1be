use std::sync::mpsc::{self, Receiver};
use std::thread;

use log::debug;

use crate::solver::core::Solver;
use crate::solver::errors::SolverError;
use crate::solver::solution::Solution;

/// A solve running on its own thread, waiting to be collected once
pub struct PendingSolution {
    receiver: Receiver<Result<Solution, SolverError>>,
}

impl PendingSolution {
    /// Block until the worker hands its solution back.
    ///
    /// # Errors
    ///
    /// Returns the solver's own error, or [`SolverError::WorkerDisconnected`]
    /// if the worker ended without sending anything.
    pub fn wait(self) -> Result<Solution, SolverError> {
        self.receiver
            .recv()
            .map_err(|_| SolverError::WorkerDisconnected)?
    }
}

/// Run one solve off the calling thread
pub fn spawn(hand: Vec<u32>, target: u32) -> PendingSolution {
    let (sender, receiver) = mpsc::sync_channel(1);

    thread::spawn(move || {
        debug!("Worker solving {} from {:?}", target, hand);
        let result = Solver::new().solve(&hand, target);
        // The caller may have dropped its handle; nothing else to do then
        let _ = sender.send(result);
    });

    PendingSolution { receiver }
}
