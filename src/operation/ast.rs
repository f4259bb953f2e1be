/// One of the four operations of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Multiply,
    Subtract,
    Divide,
}

impl Operation {
    /// Exploration order used by the solver
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Multiply,
        Operation::Subtract,
        Operation::Divide,
    ];
}

/// A single applied operation: `left op right = value`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub left: u32,
    pub operation: Operation,
    pub right: u32,
    pub value: u32,
}
