//! Seedable random number generator shared by gameplay systems.
//!
//! Word sampling, ship colours and star layout all draw from [`GameRng`], so a
//! fixed seed replays the same round.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub fastrand::Rng);

impl Default for GameRng {
    fn default() -> Self {
        GameRng(fastrand::Rng::new())
    }
}

impl GameRng {
    pub fn with_seed(seed: u64) -> Self {
        GameRng(fastrand::Rng::with_seed(seed))
    }
}
