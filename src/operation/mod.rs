//! Arithmetic operations allowed between two plaques, and the trace steps they produce

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Operation, Step};
pub use errors::OperationError;
