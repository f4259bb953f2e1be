// Composition of the game
pub const HAND_SIZE: usize = 6;
pub const POOL_SIZE: usize = 24;
pub const SMALL_TILES: std::ops::RangeInclusive<u32> = 1..=10;
pub const SMALL_TILE_COPIES: usize = 2;
pub const LARGE_TILES: [u32; 4] = [25, 50, 75, 100];

// Targets are drawn from MIN_TARGET..MAX_TARGET (upper bound excluded)
pub const MIN_TARGET: u32 = 101;
pub const MAX_TARGET: u32 = 999;
