//! Turret systems.
//!
//! The turret first turns towards its current target angle, then picks a new
//! target from the best match for what the player has typed. Retargeting only
//! sets the angle to seek; the barrel keeps turning at its fixed rate.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::turret::{Turret, base_center};
use crate::components::word::{Word, label_center};
use crate::resources::input::TextInput;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::targeting::{best_match, get_angle};

pub fn turret_rotate_system(world_time: Res<WorldTime>, mut query: Query<&mut Turret>) {
    for mut turret in query.iter_mut() {
        turret.update(world_time.delta);
    }
}

/// Aim at the label of the best matching live word, in spawn order.
pub fn turret_retarget_system(
    text_input: Res<TextInput>,
    screen: Res<ScreenSize>,
    words: Query<(&Word, &MapPosition)>,
    mut turrets: Query<&mut Turret>,
) {
    let mut live: Vec<_> = words.iter().collect();
    live.sort_by_key(|(word, _)| word.serial);
    let Some(target) = best_match(
        &text_input.buffer,
        live.iter().map(|(word, pos)| (pos.pos, word.text.as_str())),
    ) else {
        return;
    };
    let angle = get_angle(
        base_center(screen.width(), screen.height()),
        label_center(target),
    );
    for mut turret in turrets.iter_mut() {
        turret.seek_angle(angle);
    }
}
