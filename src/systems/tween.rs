//! Tween systems and easing curves.
//!
//! - [`ease`] – maps normalized progress through an [`Easing`] curve
//! - [`gameplay_tween_system`] – advances lazer flights and applies the
//!   despawns their callbacks request
//! - [`button_tween_system`] – advances each button's own size tweens
//!
//! Both systems read the frame delta in milliseconds from
//! [`WorldTime`](crate::resources::worldtime::WorldTime).

use crate::components::button::{ButtonTweens, MaskedButton};
use crate::components::mapposition::MapPosition;
use crate::components::tween::{Easing, SingleTarget};
use crate::resources::tweens::{GameplayTweens, TweenCmd, TweenCommands};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use log::debug;

/// Period of the elastic curve as a fraction of the duration.
const ELASTIC_PERIOD: f32 = 0.3;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        }
        Easing::ElasticOut => {
            if t == 0.0 || t == 1.0 {
                t
            } else {
                let s = ELASTIC_PERIOD / 4.0;
                2f32.powf(-10.0 * t) * ((t - s) * std::f32::consts::TAU / ELASTIC_PERIOD).sin()
                    + 1.0
            }
        }
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance lazer tweens and apply the despawns their callbacks queue.
pub fn gameplay_tween_system(
    world_time: Res<WorldTime>,
    mut tweens: ResMut<GameplayTweens>,
    mut positions: Query<&mut MapPosition>,
    mut commands: Commands,
) {
    if tweens.0.is_empty() {
        return;
    }
    let mut requests = TweenCommands::default();
    let finished = tweens
        .0
        .advance_all(world_time.delta, &mut positions, &mut requests);
    if finished > 0 {
        debug!("{} gameplay tween(s) finished", finished);
    }
    for request in requests.drain() {
        match request {
            TweenCmd::Despawn(entity) => {
                commands.entity(entity).try_despawn();
            }
        }
    }
}

/// Advance every button's size tweens.
pub fn button_tween_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut MaskedButton, &mut ButtonTweens)>,
) {
    let dt = world_time.delta;
    for (mut button, mut tweens) in query.iter_mut() {
        if tweens.0.is_empty() {
            continue;
        }
        tweens
            .0
            .advance_all(dt, &mut SingleTarget(&mut *button), &mut ());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    const ALL_CURVES: [Easing; 8] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::ElasticOut,
    ];

    // ==================== EASING FUNCTION TESTS ====================

    #[test]
    fn test_ease_endpoints() {
        for easing in ALL_CURVES {
            assert!(approx_eq(ease(easing, 0.0), 0.0), "{:?} at t=0.0", easing);
            assert!(approx_eq(ease(easing, 1.0), 1.0), "{:?} at t=1.0", easing);
        }
    }

    #[test]
    fn test_ease_clamps_input() {
        for easing in ALL_CURVES {
            assert!(approx_eq(ease(easing, -0.5), 0.0), "{:?} below 0", easing);
            assert!(approx_eq(ease(easing, 1.5), 1.0), "{:?} above 1", easing);
        }
    }

    #[test]
    fn test_ease_quad() {
        assert!(approx_eq(ease(Easing::QuadIn, 0.5), 0.25));
        assert!(approx_eq(ease(Easing::QuadOut, 0.25), 0.4375));
        assert!(approx_eq(ease(Easing::QuadInOut, 0.25), 0.125));
        assert!(approx_eq(ease(Easing::QuadInOut, 0.75), 0.875));
    }

    #[test]
    fn test_ease_cubic() {
        assert!(approx_eq(ease(Easing::CubicIn, 0.5), 0.125));
        assert!(approx_eq(ease(Easing::CubicOut, 0.5), 0.875));
        assert!(approx_eq(ease(Easing::CubicInOut, 0.25), 0.0625));
        assert!(approx_eq(ease(Easing::CubicInOut, 0.75), 0.9375));
    }

    #[test]
    fn test_ease_monotonic_except_elastic() {
        for easing in ALL_CURVES.into_iter().filter(|e| *e != Easing::ElasticOut) {
            let mut prev = ease(easing, 0.0);
            for i in 1..=100 {
                let curr = ease(easing, i as f32 / 100.0);
                assert!(curr >= prev - EPSILON, "{:?} not monotonic at {}", easing, i);
                prev = curr;
            }
        }
    }

    #[test]
    fn test_elastic_out_overshoots() {
        let peak = (1..100)
            .map(|i| ease(Easing::ElasticOut, i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "elastic peak {} should exceed 1.0", peak);
    }

    // ==================== INTERPOLATION ====================

    #[test]
    fn test_lerp_f32() {
        assert!(approx_eq(lerp_f32(0.0, 10.0, 0.5), 5.0));
        assert!(approx_eq(lerp_f32(-10.0, 10.0, 0.25), -5.0));
        assert!(approx_eq(lerp_f32(5.0, 5.0, 0.7), 5.0));
        // lerp itself does not clamp; eased values above 1.0 overshoot
        assert!(approx_eq(lerp_f32(0.0, 10.0, 1.5), 15.0));
    }
}
