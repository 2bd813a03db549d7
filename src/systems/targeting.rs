//! Text matching and aiming math.
//!
//! The turret aims at the live word that best matches what the player has
//! typed so far. Scoring is position aligned: character `i` of the input only
//! counts if it equals character `i` of the word. A backspaced typo therefore
//! keeps scoring against the same positions; there is no realignment.
//!
//! Candidates are supplied in spawn order and ties go to the earliest one.
//! Any non-empty candidate set yields a match, even when every score is zero.

use std::f32::consts::TAU;

use raylib::prelude::Vector2;

/// Number of positions where `candidate` and `input` hold the same character.
pub fn match_score(candidate: &str, input: &str) -> usize {
    candidate
        .chars()
        .zip(input.chars())
        .filter(|(a, b)| a == b)
        .count()
}

/// First candidate with the highest [`match_score`]; `None` only when there are
/// no candidates.
pub fn best_match<'a, T>(input: &str, candidates: impl IntoIterator<Item = (T, &'a str)>) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    for (handle, text) in candidates {
        let score = match_score(text, input);
        match &best {
            Some((_, best_score)) if score <= *best_score => {}
            _ => best = Some((handle, score)),
        }
    }
    best.map(|(handle, _)| handle)
}

/// Every candidate whose text is exactly `submitted`, in candidate order.
pub fn exact_matches<'a, T>(
    submitted: &str,
    candidates: impl IntoIterator<Item = (T, &'a str)>,
) -> Vec<T> {
    candidates
        .into_iter()
        .filter(|(_, text)| *text == submitted)
        .map(|(handle, _)| handle)
        .collect()
}

/// Angle from `origin` to `destination` in `[0, 2π)`, with screen y pointing
/// down so that targets above the origin have angles below π.
pub fn get_angle(origin: Vector2, destination: Vector2) -> f32 {
    let dx = destination.x - origin.x;
    let dy = destination.y - origin.y;
    (-dy).atan2(dx).rem_euclid(TAU)
}

pub fn get_distance(a: Vector2, b: Vector2) -> f32 {
    (b.x - a.x).hypot(b.y - a.y)
}
