//! Per-frame advancement.

use glam::Quat;
use web_time::Instant;

use super::{BlochSphere, Motion, MotionKind, Notice};
use crate::animation::TweenEvent;

impl BlochSphere {
    /// Advance every active animation to `now`.
    ///
    /// Tween events are applied in scheduler order, then any relaxation
    /// process is sampled. Animations started since the previous tick begin
    /// at `now`. Returns whether anything moved this frame.
    pub fn tick(&mut self, now: Instant) -> bool {
        let events = self.scheduler.update(now);
        let mut changed = !events.is_empty();
        for event in events {
            self.apply_tween_event(event);
        }
        // Half-turns re-armed above continue from this frame.
        self.scheduler.anchor_pending(now);

        changed |= self.advance_relaxation(now);
        changed
    }

    fn apply_tween_event(&mut self, event: TweenEvent<Motion>) {
        let id = event.id();
        let current = match event {
            TweenEvent::Update { payload, .. }
            | TweenEvent::Complete { payload, .. } => match payload.kind {
                MotionKind::Gate => self.rotation == Some(id),
                MotionKind::Drive => self.drive.tween == Some(id),
            },
        };
        if !current {
            log::debug!("dropping stale event for {id:?}");
            return;
        }

        match event {
            TweenEvent::Update {
                progress, payload, ..
            } => self.move_arrow(payload.at(progress)),
            TweenEvent::Complete { payload, .. } => match payload.kind {
                MotionKind::Gate => self.complete_rotation(payload.to),
                MotionKind::Drive => self.complete_drive_half_turn(payload.to),
            },
        }
    }

    /// Set the orientation, record the tip, and check challenge markers.
    fn move_arrow(&mut self, orientation: Quat) {
        self.orientation = orientation;

        let tip = self.arrow_tip();
        self.trace.push(tip);

        if let Some(done) = self
            .challenge
            .check(tip, self.options.challenge.capture_radius)
        {
            self.notices.push(Notice::ChallengeCompleted(done));
        }
    }
}
