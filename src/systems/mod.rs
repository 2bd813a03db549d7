//! Game systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`gameover`] – blinking labels and input on the results screen
//! - [`gamestate`] – check for pending state transitions and run conditions
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`menu`] – title screen buttons
//! - [`render`] – draw the frame using Raylib
//! - [`session`] – round clock, word submission and game over
//! - [`star`] – background star update and layout
//! - [`targeting`] – text matching and aiming math
//! - [`time`] – update simulation time and delta
//! - [`turret`] – turret rotation and retargeting
//! - [`tween`] – easing curves and the tween systems
//! - [`word`] – spawning, movement and escape of word ships

pub mod gameover;
pub mod gamestate;
pub mod input;
pub mod menu;
pub mod render;
pub mod session;
pub mod star;
pub mod targeting;
pub mod time;
pub mod turret;
pub mod tween;
pub mod word;

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ScheduleConfigs;
use bevy_ecs::system::ScheduleSystem;

/// One frame of gameplay, in order: tweens, round clock, stars, spawning,
/// word movement and escape, turret, then the submitted line.
///
/// Runs only while the round is in progress; the caller adds the screen
/// condition and ordering against state changes.
pub fn gameplay_systems() -> ScheduleConfigs<ScheduleSystem> {
    (
        tween::gameplay_tween_system,
        session::session_clock_system,
        star::star_system,
        word::word_spawner_system,
        word::word_movement_system,
        word::word_frames_system,
        word::word_escape_system,
        turret::turret_rotate_system,
        turret::turret_retarget_system,
        session::abort_session_system,
        session::submit_system,
    )
        .chain()
        .run_if(session::session_in_progress)
}
