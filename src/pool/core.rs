use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::pool::constants::{
    HAND_SIZE, LARGE_TILES, MAX_TARGET, MIN_TARGET, POOL_SIZE, SMALL_TILE_COPIES, SMALL_TILES,
};
use crate::pool::round::Round;

/// The 24 plaques of a game session
///
/// The multiset never changes: 1 to 10 twice each, then 25, 50, 75 and 100
/// once each. Only the order is randomized, once, at construction.
#[derive(Debug, Clone)]
pub struct TilePool {
    plaques: Vec<u32>,
}

impl TilePool {
    /// Build the pool and shuffle it with the given random source
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool = Self::canonical();
        pool.plaques.shuffle(rng);
        debug!("Shuffled pool: {:?}", pool.plaques);
        pool
    }

    /// The pool in its fixed, unshuffled layout
    pub fn canonical() -> Self {
        let mut plaques = Vec::with_capacity(POOL_SIZE);
        for n in SMALL_TILES {
            plaques.extend(std::iter::repeat_n(n, SMALL_TILE_COPIES));
        }
        plaques.extend(LARGE_TILES);
        Self { plaques }
    }

    /// Current order of the plaques
    pub fn plaques(&self) -> &[u32] {
        &self.plaques
    }

    /// Draw six plaques from distinct positions of the pool, in draw order.
    ///
    /// Positions are sampled uniformly and a collision is simply resampled,
    /// so equal values may appear but a position is never used twice.
    pub fn draw_hand<R: Rng + ?Sized>(&self, rng: &mut R) -> [u32; HAND_SIZE] {
        let mut chosen: Vec<usize> = Vec::with_capacity(HAND_SIZE);
        while chosen.len() < HAND_SIZE {
            let idx = rng.random_range(0..self.plaques.len());
            if !chosen.contains(&idx) {
                chosen.push(idx);
            }
        }
        debug!("Drawn positions: {:?}", chosen);

        let mut hand = [0; HAND_SIZE];
        for (slot, idx) in hand.iter_mut().zip(&chosen) {
            if let Some(&value) = self.plaques.get(*idx) {
                *slot = value;
            }
        }
        hand
    }

    /// Draw a target uniformly in `MIN_TARGET..MAX_TARGET`
    pub fn draw_target<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        MIN_TARGET + rng.random_range(0..MAX_TARGET - MIN_TARGET)
    }

    /// Draw a hand, then an independent target
    pub fn draw_round<R: Rng + ?Sized>(&self, rng: &mut R) -> Round {
        let hand = self.draw_hand(rng);
        let target = self.draw_target(rng);
        Round { hand, target }
    }
}
