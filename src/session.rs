//! A single game session: the world plus the handles the rules need.

use rand::Rng;

use crate::compute::{fire, init_state, move_ship_left, move_ship_right, restart, tick};
use crate::config::GameConfig;
use crate::entities::WorldState;
use crate::feedback::FeedbackSink;
use crate::input::Intent;

pub struct Session<R, F> {
    pub world: WorldState,
    rng: R,
    feedback: F,
}

impl<R: Rng, F: FeedbackSink> Session<R, F> {
    pub fn new(config: GameConfig, mut rng: R, feedback: F) -> Self {
        let world = init_state(config, &mut rng);
        Self { world, rng, feedback }
    }

    /// Apply an intent immediately, between frames.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::MoveLeft => move_ship_left(&mut self.world),
            Intent::MoveRight => move_ship_right(&mut self.world),
            Intent::Fire => fire(&mut self.world, &mut self.feedback),
            Intent::Restart => restart(&mut self.world, &mut self.rng),
        }
    }

    pub fn tick(&mut self) {
        tick(&mut self.world, &mut self.rng, &mut self.feedback);
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }
}
