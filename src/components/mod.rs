//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world: the word ships and the turret that shoots them, background
//! stars, title screen buttons and screen-space labels, plus the tween engine
//! that animates them.
//!
//! Submodules overview:
//! - [`animation`] – looping frame cursor for ship exhaust flicker
//! - [`button`] – springy difficulty buttons and their size tweens
//! - [`label`] – anchored screen text and blinking
//! - [`lazer`] – shots in flight
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`persistent`] – marker for entities that persist across scene changes
//! - [`star`] – twinkling, drifting background stars
//! - [`turret`] – the gun: eased rotation towards a target angle
//! - [`tween`] – attribute tweens, easing selection and tween groups
//! - [`word`] – word ships and their geometry

pub mod animation;
pub mod button;
pub mod label;
pub mod lazer;
pub mod mapposition;
pub mod persistent;
pub mod star;
pub mod turret;
pub mod tween;
pub mod word;
