//! Tween components for animated interpolation.
//!
//! A [`Tween`] drives one or more numeric attributes of a target entity from
//! wherever they are when the tween is started to fixed end values, over a
//! duration in milliseconds:
//! - [`Easing`] – the curve applied to normalized progress
//! - [`TweenAttr`] – the closed set of attributes a tween can drive
//! - [`Tweenable`] – implemented by components that expose those attributes
//! - [`TweenGroup`] – an owned collection of active tweens advanced together
//!
//! Tweens hold their target as an [`Entity`] back-reference. The group resolves
//! it on every advance through [`TweenTargets`], so a tween never owns the
//! component it animates. See [`crate::systems::tween`] for the easing curves
//! and the systems that advance the groups each frame.

use bevy_ecs::prelude::*;
use log::warn;
use smallvec::SmallVec;

use crate::components::mapposition::MapPosition;
use crate::systems::tween::{ease, lerp_f32};

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    #[default]
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Starts slow, accelerates (cubic).
    CubicIn,
    /// Starts fast, decelerates (cubic).
    CubicOut,
    /// Slow start and end (cubic).
    CubicInOut,
    /// Overshoots the end value and springs back before settling.
    ElasticOut,
}

/// Attributes a [`Tween`] knows how to drive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TweenAttr {
    /// Horizontal position.
    X,
    /// Vertical position.
    Y,
    /// Edge length of a square widget.
    Size,
}

/// Read/write access to tweenable attributes.
///
/// `tween_value` returns `None` for attributes the implementor does not have;
/// such attributes are skipped when a tween starts.
pub trait Tweenable {
    fn tween_value(&self, attr: TweenAttr) -> Option<f32>;
    fn set_tween_value(&mut self, attr: TweenAttr, value: f32);
}

impl Tweenable for MapPosition {
    fn tween_value(&self, attr: TweenAttr) -> Option<f32> {
        match attr {
            TweenAttr::X => Some(self.pos.x),
            TweenAttr::Y => Some(self.pos.y),
            TweenAttr::Size => None,
        }
    }

    fn set_tween_value(&mut self, attr: TweenAttr, value: f32) {
        match attr {
            TweenAttr::X => self.pos.x = value,
            TweenAttr::Y => self.pos.y = value,
            TweenAttr::Size => {}
        }
    }
}

/// Result of advancing a tween.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TweenStatus {
    /// Still waiting out its delay or interpolating.
    Running,
    /// Reached its end on this call. Reported exactly once per start.
    Finished,
    /// Not started yet, or finished on an earlier call.
    Idle,
}

/// Completion callback. Receives the context handed to [`Tween::advance`].
pub type TweenCallback<C> = Box<dyn FnOnce(&mut C) + Send + Sync + 'static>;

#[derive(Copy, Clone, Debug, PartialEq)]
struct Track {
    attr: TweenAttr,
    from: f32,
    to: f32,
}

/// Interpolates attributes of `target` towards fixed end values.
///
/// Construction and activation are separate: a tween does nothing until
/// [`Tween::start`] captures the current attribute values as start points.
/// Times are in milliseconds.
pub struct Tween<C = ()> {
    /// Entity whose attributes are animated.
    pub target: Entity,
    ends: SmallVec<[(TweenAttr, f32); 2]>,
    tracks: SmallVec<[Track; 2]>,
    /// Total interpolation time, not counting `delay`.
    pub duration: f32,
    /// Time to wait after `start` before interpolation begins.
    pub delay: f32,
    pub easing: Easing,
    /// Round every intermediate value to the nearest integer.
    pub round_values: bool,
    elapsed: f32,
    started: bool,
    finished: bool,
    on_complete: Option<TweenCallback<C>>,
}

impl<C> Tween<C> {
    pub fn new(
        target: Entity,
        ends: impl IntoIterator<Item = (TweenAttr, f32)>,
        duration: f32,
    ) -> Self {
        Tween {
            target,
            ends: ends.into_iter().collect(),
            tracks: SmallVec::new(),
            duration,
            delay: 0.0,
            easing: Easing::Linear,
            round_values: false,
            elapsed: 0.0,
            started: false,
            finished: false,
            on_complete: None,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
    pub fn with_round_values(mut self) -> Self {
        self.round_values = true;
        self
    }
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }
    pub fn with_callback(mut self, callback: impl FnOnce(&mut C) + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Replace the completion callback. Useful once the tween already exists.
    pub fn set_callback(&mut self, callback: impl FnOnce(&mut C) + Send + Sync + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// Capture start values from `target` and begin accumulating time.
    ///
    /// Calling this again restarts in place: elapsed time goes back to zero
    /// and the start values are re-read, so the tween continues from wherever
    /// the target currently is.
    pub fn start(&mut self, target: &dyn Tweenable) {
        self.tracks.clear();
        for &(attr, to) in self.ends.iter() {
            match target.tween_value(attr) {
                Some(from) => self.tracks.push(Track { attr, from, to }),
                None => warn!("Tween target has no {:?} attribute, skipping it", attr),
            }
        }
        self.elapsed = 0.0;
        self.started = true;
        self.finished = false;
    }

    /// Advance by `dt` milliseconds and write the interpolated values.
    ///
    /// On the call that completes the tween every attribute is set to its
    /// exact end value and the callback, if any, runs with `ctx` before this
    /// returns [`TweenStatus::Finished`].
    pub fn advance(&mut self, target: &mut dyn Tweenable, dt: f32, ctx: &mut C) -> TweenStatus {
        if !self.started || self.finished {
            return TweenStatus::Idle;
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed < self.delay {
            return TweenStatus::Running;
        }

        let active = self.elapsed - self.delay;
        if self.duration <= 0.0 || active >= self.duration {
            for track in self.tracks.iter() {
                target.set_tween_value(track.attr, track.to);
            }
            self.finished = true;
            if let Some(callback) = self.on_complete.take() {
                callback(ctx);
            }
            return TweenStatus::Finished;
        }

        let t = ease(self.easing, active / self.duration);
        for track in self.tracks.iter() {
            let mut value = lerp_f32(track.from, track.to, t);
            if self.round_values {
                value = value.round();
            }
            target.set_tween_value(track.attr, value);
        }
        TweenStatus::Running
    }

    pub fn is_started(&self) -> bool {
        self.started
    }
    pub fn is_finished(&self) -> bool {
        self.finished
    }
    /// Milliseconds accumulated since the last `start`, delay included.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
    /// Start value captured for `attr`, if the tween is tracking it.
    pub fn start_value(&self, attr: TweenAttr) -> Option<f32> {
        self.tracks.iter().find(|t| t.attr == attr).map(|t| t.from)
    }
    /// End value requested for `attr`.
    pub fn end_value(&self, attr: TweenAttr) -> Option<f32> {
        self.ends.iter().find(|(a, _)| *a == attr).map(|(_, v)| *v)
    }
}

/// Resolves tween targets to something that can be animated.
pub trait TweenTargets {
    fn resolve(&mut self, entity: Entity) -> Option<&mut dyn Tweenable>;
}

impl TweenTargets for Query<'_, '_, &mut MapPosition> {
    fn resolve(&mut self, entity: Entity) -> Option<&mut dyn Tweenable> {
        self.get_mut(entity)
            .ok()
            .map(|position| position.into_inner() as &mut dyn Tweenable)
    }
}

/// Resolves every entity to one borrowed value.
///
/// For groups that only ever animate their owner, like a button's size.
pub struct SingleTarget<'a, T: Tweenable>(pub &'a mut T);

impl<T: Tweenable> TweenTargets for SingleTarget<'_, T> {
    fn resolve(&mut self, _entity: Entity) -> Option<&mut dyn Tweenable> {
        Some(&mut *self.0 as &mut dyn Tweenable)
    }
}

/// Handle returned by [`TweenGroup::add`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TweenId(u64);

/// Owned collection of active tweens.
///
/// No ordering is guaranteed between tweens within one advance. A tween lives
/// in exactly one group; moving it out with [`TweenGroup::remove`] cancels it
/// without running its callback.
pub struct TweenGroup<C: Send + Sync + 'static = ()> {
    tweens: Vec<(TweenId, Tween<C>)>,
    next_id: u64,
}

impl<C: Send + Sync + 'static> Default for TweenGroup<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Send + Sync + 'static> TweenGroup<C> {
    pub fn new() -> Self {
        TweenGroup {
            tweens: Vec::new(),
            next_id: 0,
        }
    }

    pub fn add(&mut self, tween: Tween<C>) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.push((id, tween));
        id
    }

    /// Take a tween out of the group. Values it already wrote stay written.
    pub fn remove(&mut self, id: TweenId) -> Option<Tween<C>> {
        let index = self.tweens.iter().position(|(tid, _)| *tid == id)?;
        Some(self.tweens.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween<C>> {
        self.tweens.iter().find(|(tid, _)| *tid == id).map(|(_, tw)| tw)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TweenId, &Tween<C>)> {
        self.tweens.iter().map(|(id, tween)| (*id, tween))
    }

    pub fn contains(&self, id: TweenId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Advance every tween once, then drop the ones that are no longer running.
    ///
    /// Tweens must be started before they are added; an idle tween is dropped
    /// like a finished one. Tweens whose target can no longer be resolved are
    /// dropped without running their callback. Returns how many tweens
    /// finished on this call.
    pub fn advance_all<T>(&mut self, dt: f32, targets: &mut T, ctx: &mut C) -> usize
    where
        T: TweenTargets + ?Sized,
    {
        let mut finished = 0;
        self.tweens.retain_mut(|(_, tween)| {
            let Some(target) = targets.resolve(tween.target) else {
                return false;
            };
            match tween.advance(target, dt, ctx) {
                TweenStatus::Running => true,
                TweenStatus::Finished => {
                    finished += 1;
                    false
                }
                TweenStatus::Idle => false,
            }
        });
        finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Vector2;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn entity() -> Entity {
        let mut world = World::new();
        world.spawn_empty().id()
    }

    fn position(x: f32, y: f32) -> MapPosition {
        MapPosition {
            pos: Vector2 { x, y },
        }
    }

    /// Tweenable that only knows `Size`, for exercising missing attributes.
    struct Square {
        size: f32,
    }

    impl Tweenable for Square {
        fn tween_value(&self, attr: TweenAttr) -> Option<f32> {
            (attr == TweenAttr::Size).then_some(self.size)
        }
        fn set_tween_value(&mut self, attr: TweenAttr, value: f32) {
            if attr == TweenAttr::Size {
                self.size = value;
            }
        }
    }

    // ==================== LIFECYCLE ====================

    #[test]
    fn test_tween_does_nothing_before_start() {
        let mut pos = position(0.0, 0.0);
        let mut tw: Tween = Tween::new(entity(), [(TweenAttr::X, 100.0)], 100.0);

        assert_eq!(tw.advance(&mut pos, 50.0, &mut ()), TweenStatus::Idle);
        assert!(approx_eq(pos.pos.x, 0.0));
        assert!(approx_eq(tw.elapsed(), 0.0));
    }

    #[test]
    fn test_tween_captures_start_values_at_start_not_creation() {
        let mut pos = position(0.0, 0.0);
        let mut tw: Tween = Tween::new(entity(), [(TweenAttr::X, 100.0)], 100.0);

        pos.pos.x = 40.0;
        tw.start(&pos);
        assert_eq!(tw.start_value(TweenAttr::X), Some(40.0));

        tw.advance(&mut pos, 50.0, &mut ());
        assert!(approx_eq(pos.pos.x, 70.0));
    }

    #[test]
    fn test_tween_linear_midpoint() {
        let mut pos = position(0.0, 10.0);
        let mut tw: Tween = Tween::new(
            entity(),
            [(TweenAttr::X, 100.0), (TweenAttr::Y, 30.0)],
            200.0,
        );
        tw.start(&pos);

        assert_eq!(tw.advance(&mut pos, 100.0, &mut ()), TweenStatus::Running);
        assert!(approx_eq(pos.pos.x, 50.0));
        assert!(approx_eq(pos.pos.y, 20.0));
    }

    #[test]
    fn test_tween_converges_to_exact_end_and_finishes_once() {
        let mut pos = position(0.3, 0.0);
        let mut tw: Tween = Tween::new(entity(), [(TweenAttr::X, 99.7)], 90.0);
        tw.start(&pos);

        let mut finished = 0;
        for _ in 0..3 {
            if tw.advance(&mut pos, 30.0, &mut ()) == TweenStatus::Finished {
                finished += 1;
            }
        }
        assert_eq!(pos.pos.x, 99.7);
        for _ in 0..5 {
            if tw.advance(&mut pos, 30.0, &mut ()) == TweenStatus::Finished {
                finished += 1;
            }
        }
        assert_eq!(finished, 1);
        assert!(tw.is_finished());
        assert_eq!(pos.pos.x, 99.7);
    }

    #[test]
    fn test_tween_overshooting_dt_never_extrapolates() {
        let mut pos = position(0.0, 0.0);
        let mut tw: Tween = Tween::new(entity(), [(TweenAttr::X, 10.0)], 100.0);
        tw.start(&pos);

        assert_eq!(tw.advance(&mut pos, 250.0, &mut ()), TweenStatus::Finished);
        assert_eq!(pos.pos.x, 10.0);
    }

    #[test]
    fn test_tween_zero_duration_finishes_on_first_advance() {
        let mut pos = position(5.0, 0.0);
        let mut tw: Tween = Tween::new(entity(), [(TweenAttr::X, 8.0)], 0.0);
        tw.start(&pos);

        assert_eq!(tw.advance(&mut pos, 0.0, &mut ()), TweenStatus::Finished);
        assert_eq!(pos.pos.x, 8.0);
    }

    #[test]
    fn test_tween_callback_runs_once_with_context() {
        let mut pos = position(0.0, 0.0);
        let mut calls: Vec<&'static str> = Vec::new();
        let mut tw: Tween<Vec<&'static str>> =
            Tween::new(entity(), [(TweenAttr::X, 1.0)], 10.0)
                .with_callback(|calls: &mut Vec<&'static str>| calls.push("done"));
        tw.start(&pos);

        tw.advance(&mut pos, 5.0, &mut calls);
        assert!(calls.is_empty());
        tw.advance(&mut pos, 5.0, &mut calls);
        tw.advance(&mut pos, 5.0, &mut calls);
        assert_eq!(calls, vec!["done"]);
    }

    #[test]
    fn test_tween_callback_replaced_after_construction() {
        let mut pos = position(0.0, 0.0);
        let mut calls: Vec<&'static str> = Vec::new();
        let mut tw: Tween<Vec<&'static str>> =
            Tween::new(entity(), [(TweenAttr::X, 1.0)], 10.0)
                .with_callback(|calls: &mut Vec<&'static str>| calls.push("first"));
        tw.start(&pos);
        tw.set_callback(|calls: &mut Vec<&'static str>| calls.push("second"));

        tw.advance(&mut pos, 10.0, &mut calls);
        assert_eq!(calls, vec!["second"]);
    }

    #[test]
    fn test_tween_round_values() {
        let mut pos = position(0.0, 0.0);
        let mut tw: Tween = Tween::new(entity(), [(TweenAttr::X, 10.0)], 3.0).with_round_values();
        tw.start(&pos);

        tw.advance(&mut pos, 1.0, &mut ());
        assert_eq!(pos.pos.x, 3.0); // 3.333 rounded
        tw.advance(&mut pos, 1.0, &mut ());
        assert_eq!(pos.pos.x, 7.0); // 6.667 rounded
    }

    #[test]
    fn test_tween_delay_holds_values() {
        let mut pos = position(0.0, 0.0);
        let mut tw: Tween = Tween::new(entity(), [(TweenAttr::X, 100.0)], 100.0).with_delay(50.0);
        tw.start(&pos);

        assert_eq!(tw.advance(&mut pos, 40.0, &mut ()), TweenStatus::Running);
        assert!(approx_eq(pos.pos.x, 0.0));
        tw.advance(&mut pos, 60.0, &mut ()); // 50 into the interpolation
        assert!(approx_eq(pos.pos.x, 50.0));
        assert_eq!(tw.advance(&mut pos, 50.0, &mut ()), TweenStatus::Finished);
        assert_eq!(pos.pos.x, 100.0);
    }

    #[test]
    fn test_tween_restart_recaptures_current_value() {
        let mut pos = position(0.0, 0.0);
        let mut tw: Tween = Tween::new(entity(), [(TweenAttr::X, 100.0)], 100.0);
        tw.start(&pos);
        tw.advance(&mut pos, 50.0, &mut ());
        assert!(approx_eq(pos.pos.x, 50.0));

        tw.start(&pos);
        assert_eq!(tw.start_value(TweenAttr::X), Some(50.0));
        assert!(approx_eq(tw.elapsed(), 0.0));
        tw.advance(&mut pos, 50.0, &mut ());
        assert!(approx_eq(pos.pos.x, 75.0));
    }

    #[test]
    fn test_tween_restart_after_finish_runs_again() {
        let mut pos = position(0.0, 0.0);
        let mut tw: Tween = Tween::new(entity(), [(TweenAttr::X, 10.0)], 10.0);
        tw.start(&pos);
        assert_eq!(tw.advance(&mut pos, 10.0, &mut ()), TweenStatus::Finished);

        pos.pos.x = 0.0;
        tw.start(&pos);
        assert!(!tw.is_finished());
        assert_eq!(tw.advance(&mut pos, 10.0, &mut ()), TweenStatus::Finished);
        assert_eq!(pos.pos.x, 10.0);
    }

    #[test]
    fn test_tween_skips_missing_attributes() {
        let mut square = Square { size: 10.0 };
        let mut tw: Tween = Tween::new(
            entity(),
            [(TweenAttr::X, 50.0), (TweenAttr::Size, 20.0)],
            10.0,
        );
        tw.start(&square);

        assert_eq!(tw.start_value(TweenAttr::X), None);
        assert_eq!(tw.end_value(TweenAttr::X), Some(50.0));
        tw.advance(&mut square, 5.0, &mut ());
        assert!(approx_eq(square.size, 15.0));
    }

    #[test]
    fn test_tween_elastic_overshoots_end_value() {
        let mut square = Square { size: 100.0 };
        let mut tw: Tween =
            Tween::new(entity(), [(TweenAttr::Size, 120.0)], 120.0).with_easing(Easing::ElasticOut);
        tw.start(&square);

        let mut max_seen = square.size;
        while tw.advance(&mut square, 4.0, &mut ()) == TweenStatus::Running {
            max_seen = max_seen.max(square.size);
        }
        assert!(max_seen > 120.0, "expected overshoot, max was {}", max_seen);
        assert_eq!(square.size, 120.0);
    }

    // ==================== GROUP ====================

    #[test]
    fn test_group_advances_and_drops_finished() {
        let e = entity();
        let mut pos = position(0.0, 0.0);
        let mut group: TweenGroup = TweenGroup::new();

        let mut short: Tween = Tween::new(e, [(TweenAttr::X, 10.0)], 10.0);
        short.start(&pos);
        let mut long: Tween = Tween::new(e, [(TweenAttr::Y, 10.0)], 100.0);
        long.start(&pos);
        let short_id = group.add(short);
        let long_id = group.add(long);

        let finished = group.advance_all(10.0, &mut SingleTarget(&mut pos), &mut ());
        assert_eq!(finished, 1);
        assert_eq!(group.len(), 1);
        assert!(!group.contains(short_id));
        assert!(group.contains(long_id));
        assert_eq!(pos.pos.x, 10.0);
        assert!(approx_eq(pos.pos.y, 1.0));
    }

    #[test]
    fn test_group_drops_unstarted_tweens() {
        let e = entity();
        let mut pos = position(0.0, 0.0);
        let mut group: TweenGroup = TweenGroup::new();
        let idle: Tween = Tween::new(e, [(TweenAttr::X, 10.0)], 10.0);
        assert!(!idle.is_started());
        group.add(idle);

        assert_eq!(group.advance_all(50.0, &mut SingleTarget(&mut pos), &mut ()), 0);
        assert!(group.is_empty());
        assert!(approx_eq(pos.pos.x, 0.0));
    }

    #[test]
    fn test_group_remove_cancels_without_callback() {
        let e = entity();
        let mut pos = position(0.0, 0.0);
        let mut fired = 0u32;
        let mut group: TweenGroup<u32> = TweenGroup::new();
        let mut tw: Tween<u32> =
            Tween::new(e, [(TweenAttr::X, 10.0)], 10.0).with_callback(|n: &mut u32| *n += 1);
        tw.start(&pos);
        let id = group.add(tw);

        group.advance_all(5.0, &mut SingleTarget(&mut pos), &mut fired);
        assert!(group.remove(id).is_some());
        group.advance_all(50.0, &mut SingleTarget(&mut pos), &mut fired);

        assert_eq!(fired, 0);
        assert!(approx_eq(pos.pos.x, 5.0)); // already-written value stays
        assert!(group.remove(id).is_none());
    }

    #[test]
    fn test_group_clear() {
        let e = entity();
        let mut group: TweenGroup = TweenGroup::new();
        group.add(Tween::new(e, [(TweenAttr::X, 1.0)], 1.0));
        group.add(Tween::new(e, [(TweenAttr::Y, 1.0)], 1.0));
        group.clear();
        assert!(group.is_empty());
    }

    #[test]
    fn test_group_drops_unresolvable_targets() {
        struct Nothing;
        impl TweenTargets for Nothing {
            fn resolve(&mut self, _entity: Entity) -> Option<&mut dyn Tweenable> {
                None
            }
        }

        let mut fired = 0u32;
        let mut group: TweenGroup<u32> = TweenGroup::new();
        let mut tw: Tween<u32> =
            Tween::new(entity(), [(TweenAttr::X, 1.0)], 1.0).with_callback(|n: &mut u32| *n += 1);
        tw.start(&position(0.0, 0.0));
        group.add(tw);

        assert_eq!(group.advance_all(10.0, &mut Nothing, &mut fired), 0);
        assert!(group.is_empty());
        assert_eq!(fired, 0);
    }
}
