// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Animated Bloch-sphere visualization engine.
//!
//! Bloch drives a single-qubit state arrow on a unit sphere: gate
//! rotations, a continuous dephasing drive, noise channels that deform the
//! sphere, wall-clock T1/T2 relaxation, a tip-trajectory trace, and a
//! marker-collecting challenge mode. Rendering is left to the host; the
//! engine exposes the arrow orientation, group deformation, trace and
//! markers after every [`BlochSphere::tick`].
//!
//! # Key entry points
//!
//! - [`engine::BlochSphere`] - one animated sphere
//! - [`engine::BlochCommand`] - the full trigger surface as data
//! - [`options::Options`] - runtime configuration (timing, thresholds,
//!   camera)
//! - [`animation`] - easing, tween scheduler and relaxation processes
//!
//! # Frame loop
//!
//! ```no_run
//! use bloch::{BlochSphere, Options};
//! use bloch::state::Gate;
//! use web_time::Instant;
//!
//! let mut sphere = BlochSphere::new(Options::default(), (800, 600));
//! let _ = sphere.apply_gate(Gate::H);
//! loop {
//!     let _ = sphere.tick(Instant::now());
//!     // draw sphere.orientation(), sphere.deformation(), sphere.trace()
//!     # break;
//! }
//! ```

pub mod animation;
pub mod camera;
pub mod challenge;
pub mod engine;
pub mod error;
pub mod options;
pub mod state;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{BlochCommand, BlochSphere, Notice};
pub use error::BlochError;
pub use options::Options;
