//! Configuration for a game.

/// Configuration for a single game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible rolls and draws.
    pub seed: u64,
    /// Scheduled innings (at least 1).
    pub innings: u32,
    /// Cards each side draws before the first pitch.
    pub opening_hand: usize,
    /// Die results forced before the seeded generator is used.
    pub loaded_dice: Vec<i32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            innings: 9,
            opening_hand: 0,
            loaded_dice: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the scheduled innings (clamped to at least 1).
    pub fn with_innings(mut self, innings: u32) -> Self {
        self.innings = innings.max(1);
        self
    }

    /// Set the opening hand size.
    pub fn with_opening_hand(mut self, cards: usize) -> Self {
        self.opening_hand = cards;
        self
    }

    /// Force the first die results.
    pub fn with_loaded_dice(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.loaded_dice = values.into_iter().collect();
        self
    }
}
