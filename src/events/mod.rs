//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies.
//!
//! Submodules:
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`wordsolved`] – raised for each word the player types exactly
pub mod gamestate;
pub mod wordsolved;
