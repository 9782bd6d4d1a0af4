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

//! Idle-driven camera choreography for a 3D scene, rendered with wgpu.
//!
//! While the user is active the camera belongs to the orbit controls. When
//! input stops, the camera starts a slow autorotate after a short delay and,
//! after a longer one, an eased move to a new viewpoint. Any interaction
//! cancels both. Fog density and bloom strength follow the camera's distance
//! to its target every frame.
//!
//! # Key entry points
//!
//! - [`engine::ChoreographyEngine`] - the per-frame state machine
//! - [`choreography`] - idle deadlines, autorotate and eased transitions
//! - [`effects::EffectMapper`] - distance-to-effect curves
//! - [`options::Options`] - TOML-backed configuration
//! - `viewer::Viewer` - a winit window running the engine (feature
//!   `viewer`)
//!
//! # Frame order
//!
//! Each [`engine::ChoreographyEngine::frame`] call ticks the idle watcher,
//! starts a transition if one is due, advances the transition *or* the
//! autorotate, maps effects from the resulting camera, damps the orbit
//! controls and hands the result to an [`engine::FrameSink`].

pub mod camera;
pub mod choreography;
pub mod effects;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::ChoreographyEngine;
pub use error::LullError;
pub use options::Options;
