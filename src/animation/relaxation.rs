//! T1/T2 relaxation driven by wall-clock time.
//!
//! Unlike gate rotations these processes do not run on the tween scheduler:
//! each frame recomputes the decay from the seconds elapsed since the
//! process started and applies the resulting deformation directly, until the
//! convergence predicate holds. The clock starts on the first
//! [`RelaxationProcess::advance`], not at construction.

use std::fmt;

use web_time::Instant;

use crate::error::BlochError;
use crate::options::RelaxationOptions;
use crate::state::channel::{amplitude_damping, phase_damping, Deformation};

/// Which relaxation process to run, with its time constants in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RelaxationKind {
    /// Energy relaxation toward |0⟩.
    T1 {
        /// Relaxation time.
        t1: f32,
    },
    /// Loss of transverse coherence.
    T2 {
        /// Dephasing time.
        t2: f32,
    },
    /// Both processes at once.
    T1T2 {
        /// Relaxation time.
        t1: f32,
        /// Dephasing time.
        t2: f32,
    },
}

impl RelaxationKind {
    /// Reject time constants that are not finite and positive.
    pub fn validate(self) -> Result<Self, BlochError> {
        let check = |name: &str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(BlochError::InvalidParameter(format!(
                    "{name} must be finite and positive, got {value}"
                )))
            }
        };
        match self {
            Self::T1 { t1 } => check("T1", t1)?,
            Self::T2 { t2 } => check("T2", t2)?,
            Self::T1T2 { t1, t2 } => {
                check("T1", t1)?;
                check("T2", t2)?;
            }
        }
        Ok(self)
    }
}

impl fmt::Display for RelaxationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::T1 { t1 } => write!(f, "T1({t1}s)"),
            Self::T2 { t2 } => write!(f, "T2({t2}s)"),
            Self::T1T2 { t1, t2 } => write!(f, "T1T2({t1}s, {t2}s)"),
        }
    }
}

/// Decay factors at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxationSample {
    /// Amplitude-damping probability `γ = 1 − e^(−t/T1)` (0 without T1).
    pub gamma: f32,
    /// Transverse coherence `√(1−λ) = e^(−t/(2·T2))` (1 without T2).
    pub coherence: f32,
    /// Deformation to apply for this frame.
    pub deformation: Deformation,
    /// Whether the process has converged and should stop.
    pub converged: bool,
}

/// A running relaxation process.
#[derive(Debug, Clone)]
pub struct RelaxationProcess {
    kind: RelaxationKind,
    start_time: Option<Instant>,
    gamma_threshold: f32,
    coherence_threshold: f32,
}

impl RelaxationProcess {
    /// Prepare `kind`; time starts at the first [`advance`](Self::advance).
    pub fn new(
        kind: RelaxationKind,
        options: &RelaxationOptions,
    ) -> Result<Self, BlochError> {
        Ok(Self {
            kind: kind.validate()?,
            start_time: None,
            gamma_threshold: options.gamma_threshold,
            coherence_threshold: options.coherence_threshold,
        })
    }

    /// Process kind and time constants.
    pub fn kind(&self) -> RelaxationKind {
        self.kind
    }

    /// When the clock started, if it has.
    pub fn start_time(&self) -> Option<Instant> {
        self.start_time
    }

    /// Sample at `now`. The first call starts the clock and samples t = 0.
    pub fn advance(&mut self, now: Instant) -> RelaxationSample {
        let start = *self.start_time.get_or_insert(now);
        self.sample(now.saturating_duration_since(start).as_secs_f32())
    }

    /// Sample the process `t` seconds after it started.
    pub fn sample(&self, t: f32) -> RelaxationSample {
        let t = t.max(0.0);
        let gamma_at = |t1: f32| 1.0 - (-t / t1).exp();
        let coherence_at = |t2: f32| (-t / (2.0 * t2)).exp();

        match self.kind {
            RelaxationKind::T1 { t1 } => {
                let gamma = gamma_at(t1);
                RelaxationSample {
                    gamma,
                    coherence: 1.0,
                    deformation: amplitude_damping(gamma),
                    converged: gamma >= self.gamma_threshold,
                }
            }
            RelaxationKind::T2 { t2 } => {
                let coherence = coherence_at(t2);
                RelaxationSample {
                    gamma: 0.0,
                    coherence,
                    deformation: phase_damping(coherence),
                    converged: coherence <= self.coherence_threshold,
                }
            }
            RelaxationKind::T1T2 { t1, t2 } => {
                let gamma = gamma_at(t1);
                let coherence = coherence_at(t2);
                let mut deformation = amplitude_damping(gamma);
                deformation.scale.x *= coherence;
                deformation.scale.z *= coherence;
                RelaxationSample {
                    gamma,
                    coherence,
                    deformation,
                    converged: gamma >= self.gamma_threshold
                        && coherence <= self.coherence_threshold,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    fn process(kind: RelaxationKind) -> RelaxationProcess {
        RelaxationProcess::new(kind, &RelaxationOptions::default()).unwrap()
    }

    #[test]
    fn starts_undeformed() {
        for kind in [
            RelaxationKind::T1 { t1: 2.0 },
            RelaxationKind::T2 { t2: 2.0 },
            RelaxationKind::T1T2 { t1: 2.0, t2: 3.0 },
        ] {
            let s = process(kind).sample(0.0);
            assert!(s.deformation.is_identity(), "{kind}");
            assert!(!s.converged);
        }
    }

    #[test]
    fn t1_follows_exponential_decay() {
        let p = process(RelaxationKind::T1 { t1: 1.0 });
        let s = p.sample(1.0);
        let expected = 1.0 - (-1.0f32).exp();
        assert!((s.gamma - expected).abs() < 1e-4);
        assert!((s.deformation.offset_y - expected).abs() < 1e-4);
        assert!((s.deformation.scale.y - (1.0 - expected)).abs() < 1e-4);
    }

    #[test]
    fn t1_converges_after_three_time_constants() {
        // 1 − e^(−3) ≈ 0.9502
        let p = process(RelaxationKind::T1 { t1: 0.5 });
        assert!(!p.sample(1.4).converged);
        assert!(p.sample(1.51).converged);
    }

    #[test]
    fn t2_leaves_vertical_axis_alone() {
        let p = process(RelaxationKind::T2 { t2: 1.0 });
        let s = p.sample(2.0);
        assert_eq!(s.deformation.scale.y, 1.0);
        assert_eq!(s.deformation.offset_y, 0.0);
        assert!((s.coherence - (-1.0f32).exp()).abs() < 1e-4);
    }

    #[test]
    fn t2_converges_when_coherence_drops_below_threshold() {
        // e^(−t/2) ≤ 0.05 ⇔ t ≥ 2·ln 20 ≈ 5.99
        let p = process(RelaxationKind::T2 { t2: 1.0 });
        assert!(!p.sample(5.9).converged);
        assert!(p.sample(6.1).converged);
    }

    #[test]
    fn combined_needs_both_predicates() {
        // T1 converges at ~0.3s, T2 at ~60s.
        let p = process(RelaxationKind::T1T2 { t1: 0.1, t2: 10.0 });
        let s = p.sample(1.0);
        assert!(s.gamma >= 0.95);
        assert!(!s.converged);
        assert!(p.sample(61.0).converged);
    }

    #[test]
    fn combined_scales_transverse_axes_by_both_factors() {
        let p = process(RelaxationKind::T1T2 { t1: 2.0, t2: 1.0 });
        let s = p.sample(1.0);
        let expected = (1.0 - s.gamma).sqrt() * s.coherence;
        assert!((s.deformation.scale.x - expected).abs() < 1e-5);
        assert_eq!(s.deformation.scale.x, s.deformation.scale.z);
    }

    #[test]
    fn rejects_non_positive_time_constants() {
        let opts = RelaxationOptions::default();
        for kind in [
            RelaxationKind::T1 { t1: 0.0 },
            RelaxationKind::T2 { t2: -1.0 },
            RelaxationKind::T1T2 { t1: 1.0, t2: f32::INFINITY },
        ] {
            assert!(matches!(
                RelaxationProcess::new(kind, &opts),
                Err(BlochError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn clock_starts_on_first_advance() {
        let mut p = process(RelaxationKind::T1 { t1: 1.0 });
        assert_eq!(p.start_time(), None);

        let late = Instant::now() + Duration::from_secs(10);
        let first = p.advance(late);
        assert_eq!(p.start_time(), Some(late));
        assert!(first.deformation.is_identity());
        assert!(!first.converged);

        let s = p.advance(late + Duration::from_secs(1));
        assert!((s.gamma - (1.0 - (-1.0f32).exp())).abs() < 1e-4);
    }
}
