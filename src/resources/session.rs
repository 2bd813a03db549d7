//! Gameplay session state.
//!
//! [`Session`] holds everything one round of play accumulates: the clock, the
//! score, the spawn timer and the rotating spawn slots. Difficulty parameters
//! are copied in when the session starts and never change afterwards.
//!
//! When the round ends, the session is packed into a [`GameOverReport`] that
//! the game over screen takes exactly once.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::star::Star;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
    Insane,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Insane,
    ];

    pub fn params(self) -> DifficultyParams {
        match self {
            Difficulty::Easy => DifficultyParams::new(4500.0, 8, 0.02),
            Difficulty::Normal => DifficultyParams::new(3500.0, 10, 0.025),
            Difficulty::Hard => DifficultyParams::new(3000.0, 12, 0.03),
            Difficulty::Insane => DifficultyParams::new(2500.0, 12, 0.05),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Insane => "Insane",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Spawn cadence and word shape for one difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyParams {
    /// Milliseconds between spawns.
    pub spawn_frequency: f32,
    /// Words must be strictly shorter than this.
    pub max_length: usize,
    /// Pixels per millisecond.
    pub word_speed: f32,
}

impl DifficultyParams {
    pub fn new(spawn_frequency: f32, max_length: usize, word_speed: f32) -> Self {
        DifficultyParams {
            spawn_frequency,
            max_length,
            word_speed,
        }
    }
}

/// Difficulty picked on the title screen (or from the command line).
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SelectedDifficulty(pub Difficulty);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    GameOver,
}

/// Number of rows words spawn on.
pub const SPAWN_SLOTS: usize = 4;
/// Row order of the spawn cycle.
const SLOT_ROWS: [f32; SPAWN_SLOTS] = [1.0, 3.0, 0.0, 2.0];

#[derive(Resource, Debug, Clone)]
pub struct Session {
    pub difficulty: Difficulty,
    pub params: DifficultyParams,
    /// Milliseconds played. Kept in f64 so frame deltas still add up
    /// exactly in long rounds.
    pub game_time: f64,
    /// Characters of solved words.
    pub points: u32,
    pub num_solved: u32,
    pub word_timer: f32,
    pub spawn_slots: ArrayVec<Vector2, SPAWN_SLOTS>,
    pub next_slot: usize,
    pub next_serial: u64,
    status: SessionStatus,
}

impl Session {
    pub fn new(difficulty: Difficulty, screen_w: f32) -> Self {
        Self::with_params(difficulty, difficulty.params(), screen_w)
    }

    pub fn with_params(difficulty: Difficulty, params: DifficultyParams, screen_w: f32) -> Self {
        let spawn_slots = SLOT_ROWS
            .iter()
            .map(|row| Vector2 {
                x: screen_w + 128.0,
                y: 80.0 + 128.0 * row,
            })
            .collect();
        Session {
            difficulty,
            params,
            game_time: 0.0,
            points: 0,
            num_solved: 0,
            word_timer: 0.0,
            spawn_slots,
            next_slot: 0,
            next_serial: 0,
            status: SessionStatus::InProgress,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == SessionStatus::InProgress
    }

    /// Move to the terminal state. Returns false if it already was there.
    pub fn end(&mut self) -> bool {
        if self.status == SessionStatus::GameOver {
            return false;
        }
        self.status = SessionStatus::GameOver;
        true
    }

    /// Accumulate `dt` into the spawn timer and report whether a word is due.
    ///
    /// At most one spawn per call; the overshoot carries into the next wait.
    pub fn tick_spawn_timer(&mut self, dt: f32) -> bool {
        self.word_timer += dt;
        if self.word_timer >= self.params.spawn_frequency {
            self.word_timer -= self.params.spawn_frequency;
            return true;
        }
        false
    }

    /// Next slot in the fixed rotation, plus a fresh spawn serial.
    pub fn take_spawn_slot(&mut self) -> (Vector2, u64) {
        let slot = self.spawn_slots[self.next_slot % self.spawn_slots.len()];
        self.next_slot = (self.next_slot + 1) % self.spawn_slots.len();
        let serial = self.next_serial;
        self.next_serial += 1;
        (slot, serial)
    }

    pub fn advance_clock(&mut self, dt: f32) {
        self.game_time += f64::from(dt.max(0.0));
    }

    /// Whole milliseconds played.
    pub fn elapsed_ms(&self) -> u64 {
        self.game_time.max(0.0) as u64
    }

    pub fn record_solved(&mut self, text: &str) {
        self.num_solved += 1;
        self.points += text.chars().count() as u32;
    }
}

/// What the game over screen needs from the finished round.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct GameOverReport {
    /// Milliseconds played.
    pub game_time: u64,
    pub num_words: u32,
    pub num_chars: u32,
    pub difficulty: Difficulty,
    pub stars: Vec<Star>,
}

impl GameOverReport {
    pub fn from_session(session: &Session, stars: Vec<Star>) -> Self {
        GameOverReport {
            game_time: session.elapsed_ms(),
            num_words: session.num_solved,
            num_chars: session.points,
            difficulty: session.difficulty,
            stars,
        }
    }

    /// Five characters make a word; zero when no time was played.
    pub fn words_per_minute(&self) -> f32 {
        if self.game_time == 0 {
            return 0.0;
        }
        (self.num_chars as f32 / 5.0) / (self.game_time as f32 / 60_000.0)
    }
}

fn two_digits(n: u64) -> String {
    format!("{:02}", n)
}

/// `:SS` under a minute, `MM:SS` under an hour, `HH:MM:SS` beyond.
pub fn time_format(milliseconds: u64) -> String {
    let total_seconds = milliseconds / 1000;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;
    if hours > 0 {
        format!(
            "{}:{}:{}",
            two_digits(hours),
            two_digits(minutes),
            two_digits(seconds)
        )
    } else if minutes > 0 {
        format!("{}:{}", two_digits(minutes), two_digits(seconds))
    } else {
        format!(":{}", two_digits(seconds))
    }
}
