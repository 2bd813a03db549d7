//! Word solved notification.
//!
//! Triggered by the submission system for every word the player types
//! exactly. [`observe_word_solved`] shows the word's definition on the HUD.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::dictionary::Dictionary;
use crate::resources::hud::DefinitionPanel;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct WordSolvedEvent {
    /// The word entity, despawned once the lazer reaches it.
    pub entity: Entity,
    pub word: String,
}

/// Show `"WORD: definition"` for the solved word. Words without a definition
/// show an empty one.
pub fn observe_word_solved(
    trigger: On<WordSolvedEvent>,
    dictionary: Option<Res<Dictionary>>,
    mut panel: ResMut<DefinitionPanel>,
) {
    let event = trigger.event();
    let definition = dictionary
        .as_deref()
        .map(|d| d.definition(&event.word))
        .unwrap_or("");
    debug!("Defining '{}'", event.word);
    panel.show(&event.word, definition);
}
