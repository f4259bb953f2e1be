use thiserror::Error;

/// Reasons an operation is refused between two operands
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationError {
    #[error("Operand 1 makes the operation a no-op")]
    UnitOperand,
    #[error("Subtraction would not stay strictly positive: {left} - {right}")]
    NonPositiveDifference { left: u32, right: u32 },
    #[error("Division is not exact: {left} / {right}")]
    InexactDivision { left: u32, right: u32 },
    #[error("Result overflows: {left} {symbol} {right}")]
    Overflow {
        left: u32,
        symbol: char,
        right: u32,
    },
}
