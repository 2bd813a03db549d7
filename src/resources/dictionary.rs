//! Word list with definitions.
//!
//! The dictionary file is a JSON object mapping words to their definitions.
//! Only lowercase ASCII words longer than two letters and shorter than the
//! difficulty's maximum length are kept. Sampling is uniform over the kept
//! words.

use std::path::Path;

use bevy_ecs::prelude::*;
use log::info;
use rustc_hash::FxHashMap;

/// Used when the dictionary file cannot be read.
const BUILTIN_WORDS: &[(&str, &str)] = &[
    ("cat", "A small domesticated carnivorous mammal."),
    ("ship", "A large vessel that travels over water or through space."),
    ("star", "A luminous point in the night sky."),
    ("laser", "A device that emits a narrow, intense beam of light."),
    ("orbit", "The curved path of a celestial object around another."),
    ("comet", "An icy body that releases gas near the sun."),
    ("planet", "A large body in orbit around a star."),
    ("rocket", "A vehicle propelled by a jet of expelled gas."),
    ("galaxy", "A system of millions or billions of stars."),
    ("nebula", "A cloud of gas and dust in outer space."),
    ("quasar", "An extremely luminous active galactic nucleus."),
    ("meteor", "A small body that burns up on entering the atmosphere."),
    ("turret", "A small tower housing a gun that can rotate."),
    ("typing", "The action of writing with a keyboard."),
    ("photon", "A particle representing a quantum of light."),
    ("vector", "A quantity having direction as well as magnitude."),
    ("gravity", "The force that attracts a body towards another."),
    ("eclipse", "An obscuring of the light from one celestial body by another."),
    ("stellar", "Relating to a star or stars."),
    ("keyboard", "A panel of keys that operate a computer."),
    ("asteroid", "A small rocky body orbiting the sun."),
    ("satellite", "An object placed in orbit around a planet."),
    ("spaceship", "A spacecraft, especially one controlled by a crew."),
    ("starlight", "The light of the stars."),
    ("telescope", "An instrument for making distant objects appear nearer."),
    ("astronomer", "An expert in or student of astronomy."),
    ("cosmonaut", "A Russian astronaut."),
];

#[derive(Resource, Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashMap<String, String>,
    /// Keys in a stable order for sampling.
    keys: Vec<String>,
}

/// Whether `word` (already lowercased) is playable under `max_length`.
pub fn is_playable(word: &str, max_length: usize) -> bool {
    let len = word.chars().count();
    len > 2 && len < max_length && word.chars().all(|c| c.is_ascii_lowercase())
}

impl Dictionary {
    /// Build from `(word, definition)` pairs, keeping playable words only.
    pub fn from_entries<I, K, V>(entries: I, max_length: usize) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut words = FxHashMap::default();
        for (word, definition) in entries {
            let word = word.as_ref().to_lowercase();
            if is_playable(&word, max_length) {
                words.insert(word, definition.into());
            }
        }
        let mut keys: Vec<String> = words.keys().cloned().collect();
        keys.sort();
        Dictionary { words, keys }
    }

    /// Parse a JSON object of `{ word: definition }`.
    ///
    /// Definitions that are not strings are kept as empty definitions.
    pub fn from_json(json: &str, max_length: usize) -> Result<Self, String> {
        let raw: FxHashMap<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse dictionary: {}", e))?;
        Ok(Self::from_entries(
            raw.into_iter().map(|(word, value)| {
                let definition = match value {
                    serde_json::Value::String(s) => s,
                    _ => String::new(),
                };
                (word, definition)
            }),
            max_length,
        ))
    }

    pub fn load(path: impl AsRef<Path>, max_length: usize) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read dictionary {:?}: {}", path, e))?;
        let dictionary = Self::from_json(&json, max_length)?;
        info!(
            "Loaded {} words shorter than {} from {:?}",
            dictionary.len(),
            max_length,
            path
        );
        Ok(dictionary)
    }

    /// Small word list compiled into the game.
    pub fn builtin(max_length: usize) -> Self {
        Self::from_entries(BUILTIN_WORDS.iter().copied(), max_length)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Definition of `word`, or `""` when there is none.
    pub fn definition(&self, word: &str) -> &str {
        self.words.get(word).map(String::as_str).unwrap_or("")
    }

    /// Uniformly random word, `None` when empty.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> Option<&str> {
        if self.keys.is_empty() {
            return None;
        }
        let index = rng.usize(..self.keys.len());
        Some(self.keys[index].as_str())
    }
}

/// Split `text` into lines of at most `limit` characters, breaking on spaces.
///
/// Words longer than `limit` get a line of their own.
pub fn wrap_text(text: &str, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > limit && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keeps_playable_words() {
        let dict = Dictionary::from_entries(
            [
                ("cat", "a feline"),
                ("ox", "a bovine"),
                ("don't", "contraction"),
                ("Dog", "a canine"),
                ("elephant", "large"),
                ("giraffe", "tall"),
            ],
            8,
        );
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("giraffe"));
        assert!(!dict.contains("ox"));
        assert!(!dict.contains("don't"));
        assert!(!dict.contains("elephant"));
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_missing_definition_is_empty() {
        let dict = Dictionary::from_entries([("cat", "a feline")], 8);
        assert_eq!(dict.definition("cat"), "a feline");
        assert_eq!(dict.definition("dog"), "");
    }

    #[test]
    fn test_from_json() {
        let dict = Dictionary::from_json(r#"{"Cat": "a feline", "moon": null, "x": "no"}"#, 8)
            .expect("valid json");
        assert_eq!(dict.definition("cat"), "a feline");
        assert!(dict.contains("moon"));
        assert_eq!(dict.definition("moon"), "");
        assert!(!dict.contains("x"));
    }

    #[test]
    fn test_from_json_reports_errors() {
        let err = Dictionary::from_json("[1, 2", 8).unwrap_err();
        assert!(err.starts_with("Failed to parse dictionary"));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(Dictionary::load("./does/not/exist.json", 8).is_err());
    }

    #[test]
    fn test_sample_is_deterministic_with_seed() {
        let dict = Dictionary::builtin(12);
        let mut a = fastrand::Rng::with_seed(7);
        let mut b = fastrand::Rng::with_seed(7);
        for _ in 0..10 {
            assert_eq!(dict.sample(&mut a), dict.sample(&mut b));
        }
        assert!(Dictionary::default().sample(&mut a).is_none());
    }

    #[test]
    fn test_builtin_respects_max_length() {
        let dict = Dictionary::builtin(6);
        assert!(dict.contains("cat"));
        assert!(!dict.contains("planet"));
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("CAT: a small domesticated carnivorous mammal", 20);
        assert_eq!(lines, vec!["CAT: a small", "domesticated", "carnivorous mammal"]);
        assert!(wrap_text("", 10).is_empty());
    }
}
