//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned when the game
//! switches screens. Observers and registered hook systems carry it so they
//! survive every screen change.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across screen changes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
