use std::fmt;

use crate::operation::ast::{Operation, Step};

impl Operation {
    /// Symbol used when rendering a step
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Multiply => 'x',
            Operation::Subtract => '-',
            Operation::Divide => '/',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operation, self.right, self.value
        )
    }
}
