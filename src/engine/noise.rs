//! Noise channels and relaxation processes.

use web_time::Instant;

use super::{BlochSphere, Notice};
use crate::animation::relaxation::{RelaxationKind, RelaxationProcess};
use crate::state::NoiseChannel;

impl BlochSphere {
    /// Replace the deformation with the image of `channel`.
    ///
    /// Instantaneous and not cumulative. A running relaxation is stopped so
    /// it does not overwrite the channel on the next frame.
    pub fn apply_channel(&mut self, channel: NoiseChannel) {
        if let Some(process) = self.relaxation.take() {
            log::debug!("{} interrupted by {channel}", process.kind());
        }
        self.deformation = channel.deformation();
        log::debug!("applied {channel}");
    }

    /// Phase-flip channel with probability `p`.
    pub fn apply_phase_flip_channel(&mut self, p: f32) {
        self.apply_channel(NoiseChannel::PhaseFlip(p));
    }

    /// Bit-flip channel with probability `p`.
    pub fn apply_bit_flip_channel(&mut self, p: f32) {
        self.apply_channel(NoiseChannel::BitFlip(p));
    }

    /// Bit-phase-flip channel with probability `p`.
    pub fn apply_bit_phase_flip_channel(&mut self, p: f32) {
        self.apply_channel(NoiseChannel::BitPhaseFlip(p));
    }

    /// Depolarizing channel with probability `p`.
    pub fn apply_depolarizing_channel(&mut self, p: f32) {
        self.apply_channel(NoiseChannel::Depolarizing(p));
    }

    /// Generalized amplitude damping with decay `gamma`.
    pub fn apply_amplitude_damping(&mut self, gamma: f32) {
        self.apply_channel(NoiseChannel::AmplitudeDamping(gamma));
    }

    /// Animate energy relaxation with time constant `t1` seconds.
    pub fn animate_t1(&mut self, t1: f32) -> bool {
        self.animate_relaxation(RelaxationKind::T1 { t1 })
    }

    /// Animate dephasing with time constant `t2` seconds.
    pub fn animate_t2(&mut self, t2: f32) -> bool {
        self.animate_relaxation(RelaxationKind::T2 { t2 })
    }

    /// Animate both relaxation processes together.
    pub fn animate_t1_t2(&mut self, t1: f32, t2: f32) -> bool {
        self.animate_relaxation(RelaxationKind::T1T2 { t1, t2 })
    }

    /// Start a relaxation process, replacing any running one.
    ///
    /// The deformation is reset to the process's starting shape at once;
    /// decay time counts from the next [`tick`](Self::tick). Invalid time
    /// constants are logged and ignored.
    pub fn animate_relaxation(&mut self, kind: RelaxationKind) -> bool {
        match RelaxationProcess::new(kind, &self.options.relaxation) {
            Ok(process) => {
                log::debug!("starting {kind} relaxation");
                self.deformation = process.sample(0.0).deformation;
                self.relaxation = Some(process);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// Apply the running relaxation at `now`. Returns whether a process
    /// was running.
    pub(super) fn advance_relaxation(&mut self, now: Instant) -> bool {
        let Some(process) = &mut self.relaxation else {
            return false;
        };
        let sample = process.advance(now);
        self.deformation = sample.deformation;
        if sample.converged {
            let kind = process.kind();
            self.relaxation = None;
            log::info!(
                "{kind} relaxation converged (gamma {:.3}, coherence {:.3})",
                sample.gamma,
                sample.coherence
            );
            self.notices.push(Notice::RelaxationSettled(kind));
        }
        true
    }
}
