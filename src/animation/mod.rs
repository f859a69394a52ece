//! Time-based animation: easing curves, a per-engine tween scheduler, and
//! wall-clock relaxation processes.

pub mod easing;
pub mod relaxation;
pub mod scheduler;
pub mod tween;

pub use easing::Easing;
pub use scheduler::{TweenEvent, TweenScheduler};
pub use tween::{Tween, TweenId};
