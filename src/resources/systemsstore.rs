//! Registry of screen hooks.
//!
//! Enter hooks for each screen are registered once at startup under string
//! keys and looked up by the game state observer when a transition happens.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

use crate::components::persistent::Persistent;

/// Map of string names to system IDs.
#[derive(Resource, Default)]
pub struct SystemsStore {
    pub map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        SystemsStore {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<&SystemId> {
        self.map.get(name.as_ref())
    }

    /// Register `system` in `world` under `name`.
    ///
    /// Registered systems live on entities, so the entity is marked
    /// [`Persistent`] to survive screen cleanup.
    pub fn register<M>(
        &mut self,
        world: &mut World,
        name: impl Into<String>,
        system: impl IntoSystem<(), (), M> + 'static,
    ) -> SystemId {
        let id = world.register_system(system);
        world.entity_mut(id.entity()).insert(Persistent);
        self.insert(name, id);
        id
    }
}
