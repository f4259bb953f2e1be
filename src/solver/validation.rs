use log::{debug, warn};

use crate::pool::constants::HAND_SIZE;
use crate::solver::errors::SolverError;

/// # Errors
///
/// Returns an error if the hand does not hold exactly six plaques, if any
/// plaque is zero, or if the target is zero.
pub fn validate_hand(hand: &[u32], target: u32) -> Result<(), SolverError> {
    debug!("Validating hand {:?} for target {}", hand, target);

    if hand.len() != HAND_SIZE {
        warn!("Hand has {} plaques instead of {}", hand.len(), HAND_SIZE);
        return Err(SolverError::InvalidHandSize {
            expected: HAND_SIZE,
            actual: hand.len(),
        });
    }

    if hand.contains(&0) {
        warn!("Hand contains a zero plaque: {:?}", hand);
        return Err(SolverError::ZeroTile);
    }

    if target == 0 {
        warn!("Target is zero");
        return Err(SolverError::ZeroTarget);
    }

    Ok(())
}
