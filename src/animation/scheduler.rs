//! Cooperative, frame-driven tween scheduler.
//!
//! The scheduler owns every active [`Tween`] and is advanced once per frame
//! by the caller supplying the current timestamp. Instead of invoking stored
//! callbacks it returns the events for that frame, in tween start order, so
//! the owner can apply them to its own state without shared mutability.
//!
//! Per tween the event stream is strictly ordered: `Update` events with
//! non-decreasing progress, then exactly one `Complete` right after the
//! `Update` at progress 1. A cancelled tween produces nothing further.
//!
//! A tween's clock starts at the first update that sees it, which reports
//! progress 0. Hosts may stop calling `update` while nothing is active.

use web_time::{Duration, Instant};

use super::easing::Easing;
use super::tween::{Tween, TweenId};

/// Event produced for one tween during one [`TweenScheduler::update`] pass.
#[derive(Debug, Clone, PartialEq)]
pub enum TweenEvent<T> {
    /// The tween advanced to `progress`.
    Update {
        /// Tween handle.
        id: TweenId,
        /// Eased progress in `[0, 1]`.
        progress: f32,
        /// Start/end values of the tween.
        payload: T,
    },
    /// The tween reached progress 1 and has been removed.
    Complete {
        /// Tween handle.
        id: TweenId,
        /// Start/end values of the tween.
        payload: T,
    },
}

impl<T> TweenEvent<T> {
    /// Handle of the tween this event belongs to.
    pub fn id(&self) -> TweenId {
        match self {
            Self::Update { id, .. } | Self::Complete { id, .. } => *id,
        }
    }
}

/// Ordered collection of active tweens, one instance per engine.
#[derive(Debug)]
pub struct TweenScheduler<T> {
    tasks: Vec<Tween<T>>,
    next_id: u64,
}

impl<T> Default for TweenScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TweenScheduler<T> {
    /// Empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Vec::with_capacity(4),
            next_id: 0,
        }
    }

    /// Start a tween. Its clock and its first event both begin on the next
    /// [`update`](Self::update).
    pub fn start(
        &mut self,
        duration: Duration,
        easing: Easing,
        payload: T,
    ) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Tween {
            id,
            start_time: None,
            duration,
            easing,
            payload,
        });
        id
    }

    /// Remove a tween without completing it. Returns whether it was active.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        before != self.tasks.len()
    }

    /// Cancel every active tween.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Whether `id` is still active.
    pub fn is_active(&self, id: TweenId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Number of active tweens.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no tween is active.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Start the clock of every tween that has not been updated yet.
    ///
    /// Lets an owner chain a tween from inside its event handling without
    /// losing a frame.
    pub fn anchor_pending(&mut self, now: Instant) {
        for task in &mut self.tasks {
            task.anchor(now);
        }
    }

    /// Look up an active tween.
    pub fn get(&self, id: TweenId) -> Option<&Tween<T>> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

impl<T: Clone> TweenScheduler<T> {
    /// Advance every active tween to `now`.
    ///
    /// Tweens started since the last update begin here. Finished tweens are
    /// removed and yield `Update { progress: 1.0 }` followed by `Complete`.
    pub fn update(&mut self, now: Instant) -> Vec<TweenEvent<T>> {
        let mut events = Vec::with_capacity(self.tasks.len() + 1);

        self.tasks.retain_mut(|task| {
            task.anchor(now);
            let progress = task.progress(now);
            events.push(TweenEvent::Update {
                id: task.id,
                progress,
                payload: task.payload.clone(),
            });
            if task.is_finished(now) {
                events.push(TweenEvent::Complete {
                    id: task.id,
                    payload: task.payload.clone(),
                });
                false
            } else {
                true
            }
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn completes_exactly_once_after_final_update() {
        let start = Instant::now();
        let mut sched = TweenScheduler::new();
        let id = sched.start(ms(100), Easing::Linear, 7u8);

        let first = sched.update(start);
        assert_eq!(first, vec![TweenEvent::Update { id, progress: 0.0, payload: 7 }]);

        let mid = sched.update(start + ms(50));
        assert_eq!(mid.len(), 1);
        assert!(matches!(mid[0], TweenEvent::Update { progress, .. } if (progress - 0.5).abs() < 0.01));

        let end = sched.update(start + ms(120));
        assert_eq!(end.len(), 2);
        assert_eq!(
            end[0],
            TweenEvent::Update { id, progress: 1.0, payload: 7 }
        );
        assert_eq!(end[1], TweenEvent::Complete { id, payload: 7 });

        assert!(sched.is_empty());
        assert!(sched.update(start + ms(200)).is_empty());
    }

    #[test]
    fn progress_is_monotonic_across_frames() {
        let start = Instant::now();
        let mut sched = TweenScheduler::new();
        let _ = sched.start(ms(160), Easing::Linear, ());

        let mut last = -1.0;
        for frame in 1..=12 {
            for event in sched.update(start + ms(frame * 16)) {
                if let TweenEvent::Update { progress, .. } = event {
                    assert!(progress >= last);
                    last = progress;
                }
            }
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn cancel_suppresses_completion() {
        let start = Instant::now();
        let mut sched = TweenScheduler::new();
        let id = sched.start(ms(100), Easing::Linear, ());

        let _ = sched.update(start);
        let _ = sched.update(start + ms(30));
        assert!(sched.cancel(id));
        assert!(!sched.is_active(id));
        assert!(sched.update(start + ms(200)).is_empty());
        assert!(!sched.cancel(id));
    }

    #[test]
    fn events_follow_start_order() {
        let start = Instant::now();
        let mut sched = TweenScheduler::new();
        let a = sched.start(ms(100), Easing::Linear, 'a');
        let b = sched.start(ms(50), Easing::Linear, 'b');
        let _ = sched.update(start);

        let ids: Vec<_> =
            sched.update(start + ms(60)).iter().map(TweenEvent::id).collect();
        assert_eq!(ids, vec![a, b, b]);
        assert!(sched.is_active(a));
        assert!(!sched.is_active(b));
    }

    #[test]
    fn zero_duration_completes_on_first_advance() {
        let start = Instant::now();
        let mut sched = TweenScheduler::new();
        let id = sched.start(Duration::ZERO, Easing::Linear, ());
        let events = sched.update(start);
        assert_eq!(events.last(), Some(&TweenEvent::Complete { id, payload: () }));
    }

    #[test]
    fn clear_drops_everything() {
        let start = Instant::now();
        let mut sched = TweenScheduler::new();
        let _ = sched.start(ms(10), Easing::Linear, ());
        let _ = sched.start(ms(10), Easing::Linear, ());
        assert_eq!(sched.len(), 2);
        sched.clear();
        assert!(sched.update(start + ms(20)).is_empty());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut sched = TweenScheduler::new();
        let a = sched.start(ms(10), Easing::Linear, ());
        sched.clear();
        let b = sched.start(ms(10), Easing::Linear, ());
        assert_ne!(a, b);
        assert!(sched.get(b).is_some());
        assert!(sched.get(a).is_none());
    }

    #[test]
    fn clock_starts_on_first_update_after_idling() {
        let start = Instant::now();
        let mut sched = TweenScheduler::new();
        let id = sched.start(ms(100), Easing::Linear, ());

        let late = start + Duration::from_secs(5);
        let first = sched.update(late);
        assert_eq!(first, vec![TweenEvent::Update { id, progress: 0.0, payload: () }]);
        assert_eq!(sched.get(id).and_then(|t| t.start_time), Some(late));

        let mid = sched.update(late + ms(50));
        assert!(matches!(mid[0], TweenEvent::Update { progress, .. } if (progress - 0.5).abs() < 0.01));
        assert_eq!(sched.update(late + ms(100)).len(), 2);
    }

    #[test]
    fn anchored_tween_skips_the_zero_update() {
        let start = Instant::now();
        let mut sched = TweenScheduler::new();
        let id = sched.start(ms(100), Easing::Linear, ());
        sched.anchor_pending(start);

        let events = sched.update(start + ms(25));
        assert!(matches!(events[0], TweenEvent::Update { progress, .. } if (progress - 0.25).abs() < 0.01));
        assert_eq!(sched.get(id).and_then(|t| t.start_time), Some(start));
    }
}
