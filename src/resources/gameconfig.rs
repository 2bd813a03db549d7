//! Game configuration resource.
//!
//! Settings loaded from an INI file at startup. Every value has a safe default
//! so a missing or partial file still yields a playable game.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! vsync = true
//!
//! [game]
//! dictionary = ./resources/dictionary.json
//! stars = 100
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_DICTIONARY_PATH: &str = "./resources/dictionary.json";
const DEFAULT_STAR_COUNT: u32 = 100;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub vsync: bool,
    /// JSON word list.
    pub dictionary_path: PathBuf,
    /// Background stars per screen.
    pub star_count: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            star_count: DEFAULT_STAR_COUNT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, dictionary={:?}, stars={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.dictionary_path,
            self.star_count
        );

        Ok(())
    }

    /// Same as [`GameConfig::load_from_file`] but from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [game] section
        if let Some(path) = config.get("game", "dictionary") {
            self.dictionary_path = PathBuf::from(path);
        }
        if let Some(stars) = config.getuint("game", "stars").ok().flatten() {
            self.star_count = stars as u32;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set(
            "game",
            "dictionary",
            Some(self.dictionary_path.to_string_lossy().into_owned()),
        );
        config.set("game", "stars", Some(self.star_count.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.star_count, 100);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\nwidth = 800\n\n[game]\nstars = 20\n")
            .expect("valid ini");
        assert_eq!(config.window_size(), (800, 720));
        assert_eq!(config.star_count, 20);
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut config = GameConfig::with_path("./no/such/config.ini");
        let err = config.load_from_file().unwrap_err();
        assert!(err.starts_with("Failed to load config file"));
        assert_eq!(config.window_width, 1280);
    }

    #[test]
    fn test_saved_file_loads_back() {
        let path = std::env::temp_dir().join(format!("wordstorm-{}.ini", std::process::id()));
        let mut saved = GameConfig::with_path(&path);
        saved.vsync = false;
        saved.dictionary_path = PathBuf::from("words.json");
        saved.save_to_file().expect("writable temp dir");

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().expect("file just written");
        let _ = std::fs::remove_file(&path);
        assert!(!loaded.vsync);
        assert_eq!(loaded.dictionary_path, PathBuf::from("words.json"));
    }
}
