//! The fixed set of 24 plaques and the random draws made from it

pub mod constants;
mod core;
mod round;

pub use self::core::TilePool;
pub use round::Round;
