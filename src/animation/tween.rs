//! A single in-flight tween.

use web_time::{Duration, Instant};

use super::easing::Easing;

/// Handle identifying a tween within its scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub(crate) u64);

/// A transient interpolation task.
///
/// The payload `T` carries the start and end values; the scheduler only
/// deals in normalized progress and hands the payload back with each event.
#[derive(Debug, Clone)]
pub struct Tween<T> {
    /// Scheduler-assigned handle.
    pub id: TweenId,
    /// Time of the first scheduler pass that saw this tween. `None` until
    /// then, so a tween created while the host is idle starts on its next
    /// frame.
    pub start_time: Option<Instant>,
    /// Time from progress 0 to progress 1.
    pub duration: Duration,
    /// Curve mapping elapsed fraction to progress.
    pub easing: Easing,
    /// Start/end values owned by the tween for its lifetime.
    pub payload: T,
}

impl<T> Tween<T> {
    /// Fraction of the duration elapsed at `now`, in `[0, 1]`.
    ///
    /// A zero-length tween is always complete; an unanchored one reads as
    /// zero.
    #[inline]
    pub fn elapsed_fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let Some(start) = self.start_time else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased progress at `now`.
    #[inline]
    pub fn progress(&self, now: Instant) -> f32 {
        let fraction = self.elapsed_fraction(now);
        if fraction >= 1.0 {
            1.0
        } else {
            self.easing.evaluate(fraction)
        }
    }

    /// Fix the start time to `now` unless it is already set.
    #[inline]
    pub fn anchor(&mut self, now: Instant) {
        let _ = self.start_time.get_or_insert(now);
    }

    /// Whether the tween reaches its end value at `now`.
    #[inline]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.elapsed_fraction(now) >= 1.0
    }
}
