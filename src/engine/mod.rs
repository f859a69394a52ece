//! The state-animation engine: one animated Bloch sphere.

mod accessors;
mod animation;
pub mod command;
mod drive;
mod gates;
mod noise;

use std::fmt;

use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_time::Duration;

pub use self::command::BlochCommand;
use crate::animation::relaxation::{RelaxationKind, RelaxationProcess};
use crate::animation::{TweenId, TweenScheduler};
use crate::camera::SceneContext;
use crate::challenge::{
    ChallengeCompletion, ChallengeLevel, ChallengeMode, MarkerState,
};
use crate::options::Options;
use crate::state::{Deformation, TracePath};

/// Which animation a tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MotionKind {
    /// A gate rotation.
    Gate,
    /// One half-turn of the dephasing drive.
    Drive,
}

/// An animated rotation of the arrow from `from` to `to`.
///
/// Intermediate orientations follow the rotation's own axis, which is the
/// spherical interpolation between the endpoints; for half turns, where
/// the shortest arc is ambiguous, this keeps the direction of the gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Motion {
    pub(crate) kind: MotionKind,
    pub(crate) from: Quat,
    pub(crate) to: Quat,
    axis: Vec3,
    angle: f32,
}

impl Motion {
    /// Rotation by `angle` about unit `axis`, pre-multiplied onto `from`.
    pub(crate) fn new(kind: MotionKind, from: Quat, axis: Vec3, angle: f32) -> Self {
        Self {
            kind,
            from,
            to: (Quat::from_axis_angle(axis, angle) * from).normalize(),
            axis,
            angle,
        }
    }

    /// Orientation at eased progress `t`; exactly `to` at `t = 1`.
    pub(crate) fn at(&self, t: f32) -> Quat {
        if t >= 1.0 {
            return self.to;
        }
        (Quat::from_axis_angle(self.axis, self.angle * t) * self.from)
            .normalize()
    }
}

/// Continuous-drive bookkeeping.
#[derive(Debug, Clone)]
struct DriveState {
    /// Whether the user has the drive switched on. Stays set while the
    /// drive is suspended behind a gate rotation.
    enabled: bool,
    /// In-flight half-turn, if running.
    tween: Option<TweenId>,
    /// Half-turn duration.
    duration: Duration,
}

/// Something the user should be told about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notice {
    /// The last challenge marker was collected.
    ChallengeCompleted(ChallengeCompletion),
    /// A T1/T2 animation crossed its convergence threshold.
    RelaxationSettled(RelaxationKind),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChallengeCompleted(c) => f.write_str(c.message()),
            Self::RelaxationSettled(kind) => {
                write!(f, "{kind} relaxation complete")
            }
        }
    }
}

/// Animated Bloch-sphere state for one visualization.
///
/// Owns the arrow orientation, the sphere-group deformation, the tip trace,
/// and a private tween scheduler. Nothing here is global: each instance is
/// independent.
///
/// # Frame loop
///
/// Call [`tick`](Self::tick) once per rendered frame with the frame
/// timestamp; it advances every tween and any relaxation process before the
/// caller renders. Operations invoked between frames start their animations
/// at the most recent tick time.
///
/// # Operations
///
/// - gates: [`apply_gate`](Self::apply_gate),
///   [`apply_rotation`](Self::apply_rotation)
/// - drive: [`start_dephasing`](Self::start_dephasing),
///   [`stop_dephasing`](Self::stop_dephasing),
///   [`toggle_dephasing`](Self::toggle_dephasing),
///   [`set_drive_frequency`](Self::set_drive_frequency)
/// - noise: [`apply_channel`](Self::apply_channel) and the named
///   `apply_*_channel` wrappers, [`animate_t1`](Self::animate_t1),
///   [`animate_t2`](Self::animate_t2),
///   [`animate_t1_t2`](Self::animate_t1_t2)
/// - [`reset`](Self::reset), [`start_challenge`](Self::start_challenge),
///   [`place_marker`](Self::place_marker)
pub struct BlochSphere {
    /// Runtime options.
    options: Options,
    /// Camera and viewport.
    scene: SceneContext,
    /// Arrow rotation relative to the rest pose.
    orientation: Quat,
    /// Sphere-group scale and offset.
    deformation: Deformation,
    /// Arrow-tip trajectory.
    trace: TracePath,
    /// Active tweens.
    scheduler: TweenScheduler<Motion>,
    /// In-flight gate rotation. Gate controls are disabled while set.
    rotation: Option<TweenId>,
    /// Dephasing drive.
    drive: DriveState,
    /// Running T1/T2 process.
    relaxation: Option<RelaxationProcess>,
    /// Challenge-mode overlay.
    challenge: ChallengeMode,
    /// Undelivered user notices.
    notices: Vec<Notice>,
    /// Source for random challenge markers.
    rng: StdRng,
}

impl BlochSphere {
    /// Sphere at rest for a `size.0 × size.1` canvas.
    ///
    /// The engine keeps no clock of its own. Animations started by an
    /// operation begin at the next [`tick`](Self::tick), so a host may stop
    /// ticking while [`is_animating`](Self::is_animating) is false.
    pub fn new(options: Options, size: (u32, u32)) -> Self {
        let scene = SceneContext::new(&options.camera, size.0, size.1);
        let trace = TracePath::new(options.sphere.rest_tip());
        let drive = DriveState {
            enabled: false,
            tween: None,
            duration: options.animation.drive_duration(),
        };
        Self {
            options,
            scene,
            orientation: Quat::IDENTITY,
            deformation: Deformation::IDENTITY,
            trace,
            scheduler: TweenScheduler::new(),
            rotation: None,
            drive,
            relaxation: None,
            challenge: ChallengeMode::new(),
            notices: Vec::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reseed the challenge-marker RNG.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Return to the rest pose.
    ///
    /// Cancels the drive, any in-flight rotation and any relaxation; the
    /// orientation and deformation become identity, the trace shrinks to the
    /// rest tip, and all challenge markers are removed.
    pub fn reset(&mut self) {
        self.scheduler.clear();
        self.rotation = None;
        self.drive.enabled = false;
        self.drive.tween = None;
        self.relaxation = None;
        self.orientation = Quat::IDENTITY;
        self.deformation = Deformation::IDENTITY;
        self.trace.reset(self.options.sphere.rest_tip());
        self.challenge.clear();
        log::debug!("sphere reset");
    }

    /// Clear any markers, place the markers for `level`, and activate
    /// challenge mode.
    pub fn start_challenge(&mut self, level: ChallengeLevel) {
        self.challenge
            .start(level, &self.options.sphere, &mut self.rng);
    }

    /// Start challenge mode from a level name. Unknown names are logged and
    /// ignored.
    pub fn start_challenge_named(&mut self, level: &str) {
        match level.parse() {
            Ok(level) => self.start_challenge(level),
            Err(e) => log::warn!("{e}"),
        }
    }

    /// Add a marker by state key (`|+>`, `hanover`, `random`, ...) to the
    /// running challenge. Unknown keys, or no running challenge, are logged
    /// and ignored.
    pub fn place_marker(&mut self, key: &str) -> bool {
        let state = match key.parse::<MarkerState>() {
            Ok(state) => state,
            Err(e) => {
                log::warn!("{e}");
                return false;
            }
        };
        let placed =
            self.challenge
                .add_marker(state, &self.options.sphere, &mut self.rng);
        if !placed {
            log::warn!("no challenge running; ignoring marker {state}");
        }
        placed
    }

    /// Handle a window-resize notification.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width, height);
    }

    /// Run a trigger-surface command.
    pub fn execute(&mut self, command: BlochCommand) -> bool {
        command.execute(self)
    }

    /// Take every notice raised since the last call.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl fmt::Debug for BlochSphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlochSphere")
            .field("orientation", &self.orientation)
            .field("deformation", &self.deformation)
            .field("trace_len", &self.trace.len())
            .field("active_tweens", &self.scheduler.len())
            .field("dephasing", &self.drive.enabled)
            .field("challenge", &self.challenge.level())
            .finish_non_exhaustive()
    }
}
