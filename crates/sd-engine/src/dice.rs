//! The game's one source of randomness.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sides on the die every roll in the game uses.
pub const D20: i32 = 20;

/// A seeded d20 with an optional queue of predetermined results.
///
/// Loaded values are consumed before the generator is touched, so a replay
/// or a test can force exact rolls and then fall back to seeded play.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: StdRng,
    loaded: VecDeque<i32>,
}

impl Dice {
    /// Create dice from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            loaded: VecDeque::new(),
        }
    }

    /// Queue results to be returned by the next rolls.
    pub fn load(&mut self, values: impl IntoIterator<Item = i32>) {
        self.loaded.extend(values);
    }

    /// Loaded results not yet consumed.
    pub fn loaded(&self) -> usize {
        self.loaded.len()
    }

    /// Roll a d20.
    pub fn roll(&mut self) -> i32 {
        match self.loaded.pop_front() {
            Some(value) => value,
            None => self.rng.random_range(1..=D20),
        }
    }

    /// The underlying generator, for card draws.
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_stay_on_the_die() {
        let mut dice = Dice::new(42);
        for _ in 0..500 {
            let r = dice.roll();
            assert!((1..=D20).contains(&r));
        }
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = Dice::new(9);
        let mut b = Dice::new(9);
        let ra: Vec<_> = (0..20).map(|_| a.roll()).collect();
        let rb: Vec<_> = (0..20).map(|_| b.roll()).collect();
        assert_eq!(ra, rb);
    }

    #[test]
    fn loaded_values_come_first() {
        let mut dice = Dice::new(1);
        dice.load([20, 1, 7]);
        assert_eq!(dice.loaded(), 3);
        assert_eq!(dice.roll(), 20);
        assert_eq!(dice.roll(), 1);
        assert_eq!(dice.roll(), 7);
        assert_eq!(dice.loaded(), 0);
        assert!((1..=D20).contains(&dice.roll()));
    }
}
