//! Challenge mode: collect markers by steering the state arrow onto them.
//!
//! The mode is a small state machine. [`ChallengeMode::start`] places the
//! markers for a difficulty tier and activates it; every orientation update
//! feeds the arrow tip to [`ChallengeMode::check`], which removes each marker
//! within the capture radius. Removing the last marker deactivates the mode
//! and yields the completion exactly once.

mod marker;

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use rand::Rng;

pub use marker::{Marker, MarkerState};

use crate::error::BlochError;
use crate::options::SphereOptions;

/// Difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChallengeLevel {
    /// The four cardinal states other than |0⟩.
    Easy,
    /// Four states between the cardinal ones.
    Medium,
    /// Three random states; completion is reported as hard mode.
    Hard,
}

impl ChallengeLevel {
    /// Marker states placed for this tier.
    pub fn marker_states(self) -> &'static [MarkerState] {
        match self {
            Self::Easy => &[
                MarkerState::One,
                MarkerState::PlusI,
                MarkerState::Plus,
                MarkerState::Minus,
            ],
            Self::Medium => &[
                MarkerState::Hanover,
                MarkerState::Gpt,
                MarkerState::TZone,
                MarkerState::TZone2,
            ],
            Self::Hard => &[
                MarkerState::Random,
                MarkerState::Random,
                MarkerState::Random,
            ],
        }
    }

    /// Control name of the tier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for ChallengeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChallengeLevel {
    type Err = BlochError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(BlochError::UnknownLevel(s.to_owned())),
        }
    }
}

/// Reported once when the last marker of a run is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeCompletion {
    /// Tier that was completed.
    pub level: ChallengeLevel,
}

impl ChallengeCompletion {
    /// Whether the completed run was the hard tier.
    pub fn hard_mode(self) -> bool {
        self.level == ChallengeLevel::Hard
    }

    /// Congratulation text shown to the user.
    pub fn message(self) -> &'static str {
        if self.hard_mode() {
            "Congratulations! You have completed the challenge ON THE HARDEST MODE! Nice job."
        } else {
            "Congratulations! You have completed the challenge."
        }
    }
}

/// Challenge-mode state: inactive, or active with remaining markers.
#[derive(Debug, Clone, Default)]
pub struct ChallengeMode {
    level: Option<ChallengeLevel>,
    markers: Vec<Marker>,
}

impl ChallengeMode {
    /// Inactive challenge mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear any markers, place the markers for `level`, and activate.
    pub fn start<R: Rng>(
        &mut self,
        level: ChallengeLevel,
        sphere: &SphereOptions,
        rng: &mut R,
    ) {
        self.clear();
        self.markers = level
            .marker_states()
            .iter()
            .map(|&state| Marker {
                state,
                position: sphere.point_at(state.direction(rng)),
            })
            .collect();
        self.level = Some(level);
        log::info!(
            "challenge started: {level} ({} markers)",
            self.markers.len()
        );
    }

    /// Add one more marker to the running challenge. Returns `false` when no
    /// challenge is active.
    pub fn add_marker<R: Rng>(
        &mut self,
        state: MarkerState,
        sphere: &SphereOptions,
        rng: &mut R,
    ) -> bool {
        if self.level.is_none() {
            return false;
        }
        self.markers.push(Marker {
            state,
            position: sphere.point_at(state.direction(rng)),
        });
        true
    }

    /// Remove every marker and deactivate.
    pub fn clear(&mut self) {
        self.markers.clear();
        self.level = None;
    }

    /// Collect markers within `capture_radius` of `tip`.
    ///
    /// Returns the completion when this call removes the final marker.
    pub fn check(
        &mut self,
        tip: Vec3,
        capture_radius: f32,
    ) -> Option<ChallengeCompletion> {
        let level = self.level?;
        let before = self.markers.len();
        self.markers
            .retain(|m| m.position.distance(tip) >= capture_radius);
        let collected = before - self.markers.len();
        if collected > 0 {
            log::debug!(
                "collected {collected} marker(s), {} remaining",
                self.markers.len()
            );
        }
        if self.markers.is_empty() {
            self.level = None;
            let completion = ChallengeCompletion { level };
            log::info!("{}", completion.message());
            return Some(completion);
        }
        None
    }

    /// Whether a run is in progress.
    pub fn is_active(&self) -> bool {
        self.level.is_some()
    }

    /// Tier of the run in progress.
    pub fn level(&self) -> Option<ChallengeLevel> {
        self.level
    }

    /// Whether the run in progress is the hard tier.
    pub fn is_hard_mode(&self) -> bool {
        self.level == Some(ChallengeLevel::Hard)
    }

    /// Markers not yet collected.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn started(level: ChallengeLevel) -> ChallengeMode {
        let mut mode = ChallengeMode::new();
        let mut rng = StdRng::seed_from_u64(3);
        mode.start(level, &SphereOptions::default(), &mut rng);
        mode
    }

    #[test]
    fn tiers_place_expected_marker_counts() {
        assert_eq!(started(ChallengeLevel::Easy).markers().len(), 4);
        assert_eq!(started(ChallengeLevel::Medium).markers().len(), 4);
        let hard = started(ChallengeLevel::Hard);
        assert_eq!(hard.markers().len(), 3);
        assert!(hard.is_hard_mode());
    }

    #[test]
    fn markers_sit_on_the_sphere() {
        let mode = started(ChallengeLevel::Hard);
        for m in mode.markers() {
            assert!((m.position.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn markers_follow_sphere_geometry() {
        let sphere = SphereOptions {
            radius: 2.0,
            origin_y: 0.5,
        };
        let mut mode = ChallengeMode::new();
        let mut rng = StdRng::seed_from_u64(1);
        mode.start(ChallengeLevel::Easy, &sphere, &mut rng);
        assert_eq!(mode.markers()[0].position, Vec3::new(0.0, -1.5, 0.0));
    }

    #[test]
    fn far_tip_collects_nothing() {
        let mut mode = started(ChallengeLevel::Easy);
        assert_eq!(mode.check(Vec3::Y, 0.1), None);
        assert_eq!(mode.markers().len(), 4);
        assert!(mode.is_active());
    }

    #[test]
    fn visiting_every_marker_completes_once() {
        let mut mode = started(ChallengeLevel::Easy);
        let stops = [Vec3::NEG_Y, Vec3::Z, Vec3::X];
        for tip in stops {
            assert_eq!(mode.check(tip, 0.1), None);
        }
        let done = mode.check(Vec3::NEG_X + Vec3::splat(0.01), 0.1);
        assert_eq!(
            done,
            Some(ChallengeCompletion {
                level: ChallengeLevel::Easy
            })
        );
        assert!(!mode.is_active());
        assert_eq!(mode.check(Vec3::NEG_X, 0.1), None);
    }

    #[test]
    fn extra_markers_need_a_running_challenge() {
        let sphere = SphereOptions::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut idle = ChallengeMode::new();
        assert!(!idle.add_marker(MarkerState::Gpt, &sphere, &mut rng));
        assert!(idle.markers().is_empty());

        let mut mode = started(ChallengeLevel::Easy);
        assert!(mode.add_marker(MarkerState::Gpt, &sphere, &mut rng));
        assert_eq!(mode.markers().len(), 5);
        assert_eq!(mode.markers()[4].state, MarkerState::Gpt);
    }

    #[test]
    fn hard_completion_has_its_own_message() {
        let hard = ChallengeCompletion {
            level: ChallengeLevel::Hard,
        };
        let easy = ChallengeCompletion {
            level: ChallengeLevel::Easy,
        };
        assert!(hard.hard_mode());
        assert_ne!(hard.message(), easy.message());
    }

    #[test]
    fn restart_replaces_markers() {
        let mut mode = started(ChallengeLevel::Easy);
        let _ = mode.check(Vec3::NEG_Y, 0.1);
        assert_eq!(mode.markers().len(), 3);
        let mut rng = StdRng::seed_from_u64(9);
        mode.start(ChallengeLevel::Medium, &SphereOptions::default(), &mut rng);
        assert_eq!(mode.markers().len(), 4);
        assert_eq!(mode.level(), Some(ChallengeLevel::Medium));
    }

    #[test]
    fn inactive_mode_never_completes() {
        let mut mode = ChallengeMode::new();
        assert_eq!(mode.check(Vec3::Y, 10.0), None);
    }

    #[test]
    fn parses_levels() {
        assert_eq!("Easy".parse::<ChallengeLevel>().ok(), Some(ChallengeLevel::Easy));
        assert!(matches!(
            "extreme".parse::<ChallengeLevel>(),
            Err(BlochError::UnknownLevel(_))
        ));
    }
}
