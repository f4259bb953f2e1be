use log::trace;

use crate::operation::ast::{Operation, Step};
use crate::operation::errors::OperationError;

impl Operation {
    /// Apply the operation to `left` and `right`, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error when the operation would not help reach a target:
    /// - multiplying or dividing by 1
    /// - a subtraction that does not stay strictly positive
    /// - a division with a remainder
    /// - a result that does not fit in a `u32`
    pub fn apply(&self, left: u32, right: u32) -> Result<u32, OperationError> {
        let result = match self {
            Operation::Add => left.checked_add(right).ok_or(OperationError::Overflow {
                left,
                symbol: self.symbol(),
                right,
            }),
            Operation::Multiply => {
                if right == 1 {
                    Err(OperationError::UnitOperand)
                } else {
                    left.checked_mul(right).ok_or(OperationError::Overflow {
                        left,
                        symbol: self.symbol(),
                        right,
                    })
                }
            }
            Operation::Subtract => {
                if left > right {
                    Ok(left - right)
                } else {
                    Err(OperationError::NonPositiveDifference { left, right })
                }
            }
            Operation::Divide => {
                if right == 1 {
                    Err(OperationError::UnitOperand)
                } else if right == 0 || left % right != 0 {
                    Err(OperationError::InexactDivision { left, right })
                } else {
                    Ok(left / right)
                }
            }
        };

        if let Err(ref err) = result {
            trace!("Pruned {} {} {}: {}", left, self, right, err);
        }
        result
    }

    /// Apply the operation and record it as a trace step.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Operation::apply`].
    pub fn step(&self, left: u32, right: u32) -> Result<Step, OperationError> {
        let value = self.apply(left, right)?;
        Ok(Step {
            left,
            operation: *self,
            right,
            value,
        })
    }
}
