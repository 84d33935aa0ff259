//! Core domain: shared session resources.

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Global counters and terminal flags for the current session.
///
/// `game_over` and `level_complete` are one-way: nothing in a session ever
/// clears them once set.
#[derive(Resource, Debug, Default)]
pub struct SessionState {
    pub score: u32,
    pub lives: u32,
    pub game_over: bool,
    pub level_complete: bool,
}

impl SessionState {
    pub fn new(lives: u32) -> Self {
        Self {
            score: 0,
            lives,
            game_over: false,
            level_complete: false,
        }
    }

    pub fn add_score(&mut self, amount: u32) {
        self.score += amount;
    }

    /// Deduct one life. Returns true if this deduction ended the session.
    pub fn lose_life(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.game_over = true;
            return true;
        }
        false
    }

    pub fn complete_level(&mut self) {
        self.level_complete = true;
    }

    pub fn is_active(&self) -> bool {
        !self.game_over
    }
}

/// Run condition: gameplay systems only run while the session is live.
pub fn session_active(session: Res<SessionState>) -> bool {
    session.is_active()
}

#[derive(Resource, Debug)]
pub struct SessionConfig {
    pub seed: u64,
    pub starting_lives: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
            starting_lives: 3,
        }
    }
}

/// Seeded RNG for enemy stat rolls and spawn platform selection.
#[derive(Resource, Debug)]
pub struct SessionRng(pub ChaCha8Rng);
