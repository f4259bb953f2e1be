use std::fmt;

use crate::pool::constants::HAND_SIZE;

/// The plaques and target of one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub hand: [u32; HAND_SIZE],
    pub target: u32,
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let plaques: Vec<String> = self.hand.iter().map(|p| p.to_string()).collect();
        write!(f, "Plaques: {}  Target: {}", plaques.join(" "), self.target)
    }
}
