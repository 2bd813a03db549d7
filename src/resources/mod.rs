//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `dictionary` – playable words and their definitions
//! - `gameconfig` – window and game settings loaded from an INI file
//! - `gamestate` – authoritative and pending high-level game state
//! - `hud` – definition panel and title menu focus
//! - `input` – per-frame key and mouse state, and the typed line
//! - `rng` – seedable random source
//! - `screensize` – current framebuffer dimensions in pixels
//! - `session` – difficulty table, round state and the game over report
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `tweens` – gameplay tween group and its callback command queue
//! - `worldtime` – simulation time and delta
pub mod dictionary;
pub mod gameconfig;
pub mod gamestate;
pub mod hud;
pub mod input;
pub mod rng;
pub mod screensize;
pub mod session;
pub mod systemsstore;
pub mod tweens;
pub mod worldtime;
