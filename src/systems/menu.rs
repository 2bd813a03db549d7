//! Title screen menu.
//!
//! [`title_menu_system`] drives the difficulty buttons: hover and press state,
//! the size tween each state change starts, and activation. Up/Down move a
//! keyboard focus that also acts as the pointer until the mouse moves again;
//! Enter activates the focused button as if it had been clicked.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

use crate::components::button::{ButtonTweens, MaskedButton};
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::hud::TitleMenu;
use crate::resources::input::InputState;
use crate::resources::session::{Difficulty, SelectedDifficulty};

/// Pointer input as one button sees it this frame.
#[derive(Debug, Clone, Copy)]
pub struct PointerFrame {
    pub pos: Vector2,
    pub held: bool,
    pub released: bool,
}

/// Update one button's hover/press state. Returns true when it was clicked.
///
/// Each transition restarts the button's size tween: squeeze while pressed,
/// grow while hovered, back to rest otherwise.
pub fn update_button(
    owner: Entity,
    button: &mut MaskedButton,
    tweens: &mut ButtonTweens,
    pointer: PointerFrame,
) -> bool {
    let was_hovered = button.hovered;
    button.hovered = button.contains(pointer.pos);

    if !pointer.held && button.held {
        button.held = false;
        let target = if button.hovered {
            button.high
        } else {
            button.initial_size
        };
        tweens.inflate(owner, button, target);
    } else if button.hovered && pointer.held && !button.held {
        button.held = true;
        tweens.inflate(owner, button, button.low);
    } else if !was_hovered && button.hovered {
        tweens.inflate(owner, button, button.high);
    } else if was_hovered && !button.hovered {
        button.held = false;
        tweens.inflate(owner, button, button.initial_size);
    }

    pointer.released && button.hovered
}

pub fn title_menu_system(
    input: Res<InputState>,
    mut menu: ResMut<TitleMenu>,
    mut buttons: Query<(Entity, &mut MaskedButton, &mut ButtonTweens)>,
    mut selected: ResMut<SelectedDifficulty>,
    mut next_state: ResMut<NextGameState>,
) {
    if next_state.is_pending() {
        return;
    }
    if input.back.just_pressed {
        next_state.set(GameStates::Quitting);
        return;
    }

    let mut ordered: Vec<_> = buttons.iter_mut().collect();
    ordered.sort_by(|(_, a, _), (_, b, _)| a.center.y.total_cmp(&b.center.y));
    let count = ordered.len();

    if input.up.just_pressed {
        menu.scroll(-1, count);
    } else if input.down.just_pressed {
        menu.scroll(1, count);
    } else if input.mouse.moved {
        menu.keyboard_driven = false;
    }

    let keyboard_click = input.confirm.just_pressed;
    if keyboard_click {
        menu.keyboard_driven = true;
    }
    let focus = menu.focus.min(count.saturating_sub(1));
    let pointer = match ordered.get(focus) {
        Some((_, button, _)) if menu.keyboard_driven => PointerFrame {
            pos: button.center,
            held: false,
            released: keyboard_click,
        },
        _ => PointerFrame {
            pos: input.mouse.pos,
            held: input.mouse.left_down,
            released: input.mouse.left_released,
        },
    };

    let mut clicked: Option<Difficulty> = None;
    for (index, (entity, button, tweens)) in ordered.iter_mut().enumerate() {
        if update_button(*entity, button, tweens, pointer) && clicked.is_none() {
            clicked = Some(button.difficulty);
        }
        if button.hovered && !menu.keyboard_driven {
            menu.focus = index;
        }
    }

    if let Some(difficulty) = clicked {
        info!("Difficulty {} selected", difficulty.name());
        selected.0 = difficulty;
        next_state.set(GameStates::Playing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tween::SingleTarget;

    fn setup() -> (Entity, MaskedButton, ButtonTweens) {
        let mut world = World::new();
        let owner = world.spawn_empty().id();
        let button = MaskedButton::new(Vector2 { x: 100.0, y: 100.0 }, 100.0, Difficulty::Normal);
        (owner, button, ButtonTweens::default())
    }

    fn settle(button: &mut MaskedButton, tweens: &mut ButtonTweens) {
        tweens.0.advance_all(1000.0, &mut SingleTarget(button), &mut ());
    }

    fn frame(x: f32, held: bool, released: bool) -> PointerFrame {
        PointerFrame {
            pos: Vector2 { x, y: 100.0 },
            held,
            released,
        }
    }

    #[test]
    fn test_hover_inflates_and_leave_restores() {
        let (owner, mut button, mut tweens) = setup();
        assert!(!update_button(owner, &mut button, &mut tweens, frame(100.0, false, false)));
        settle(&mut button, &mut tweens);
        assert_eq!(button.size, button.high);

        update_button(owner, &mut button, &mut tweens, frame(500.0, false, false));
        settle(&mut button, &mut tweens);
        assert_eq!(button.size, 100.0);
    }

    #[test]
    fn test_press_squeezes_and_release_clicks() {
        let (owner, mut button, mut tweens) = setup();
        update_button(owner, &mut button, &mut tweens, frame(100.0, false, false));
        update_button(owner, &mut button, &mut tweens, frame(100.0, true, false));
        assert!(button.held);
        settle(&mut button, &mut tweens);
        assert_eq!(button.size, button.low);

        let clicked = update_button(owner, &mut button, &mut tweens, frame(100.0, false, true));
        assert!(clicked);
        assert!(!button.held);
        settle(&mut button, &mut tweens);
        assert_eq!(button.size, button.high);
    }

    #[test]
    fn test_release_outside_does_not_click() {
        let (owner, mut button, mut tweens) = setup();
        let clicked = update_button(owner, &mut button, &mut tweens, frame(500.0, false, true));
        assert!(!clicked);
        assert!(tweens.0.is_empty());
    }
}
