//! Tweens that run during gameplay.
//!
//! Lazer flights live in [`GameplayTweens`]. Their completion callbacks get a
//! [`TweenCommands`] queue instead of the world, and the tween system applies
//! the queued requests once every tween has been advanced.

use bevy_ecs::prelude::*;

use crate::components::tween::TweenGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenCmd {
    Despawn(Entity),
}

/// Requests raised by tween callbacks during one advance.
#[derive(Debug, Default)]
pub struct TweenCommands {
    queue: Vec<TweenCmd>,
}

impl TweenCommands {
    pub fn despawn(&mut self, entity: Entity) {
        self.queue.push(TweenCmd::Despawn(entity));
    }

    pub fn drain(&mut self) -> impl Iterator<Item = TweenCmd> + '_ {
        self.queue.drain(..)
    }
}

#[derive(Resource, Default)]
pub struct GameplayTweens(pub TweenGroup<TweenCommands>);
