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
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Keyframe playback engine for interactive 3D scene views.
//!
//! Sceneplay stores a sequence of scene snapshots ([`Frame`]: background
//! color, camera pose, light pose, explosion offset) and reconstructs a
//! smoothly interpolated snapshot for any point in normalized playback
//! time. Matrix-valued fields are blended through a TRS decomposition
//! ([`Trs`]): translation and scale interpolate linearly, rotation
//! spherically along the shortest arc, and the parts are recomposed into
//! a pose.
//!
//! # Key entry points
//!
//! - [`AnimationTrack`] - keyframe storage and the
//!   [`play`](AnimationTrack::play) query
//! - [`Frame`] - one captured scene-view snapshot
//! - [`Trs`] - affine matrix decomposition/recomposition
//! - [`Blend`] - the per-type pairwise blend rules
//!
//! # Architecture
//!
//! The engine is a pure-computation core: no rendering, no I/O, no input
//! handling, no internal clock. The embedding viewer captures live scene
//! state into [`Frame`] values, appends them as keyframes, and during
//! playback maps wall-clock time to a normalized `t` which it feeds to
//! [`AnimationTrack::play`]. The returned frame is applied back onto the
//! live scene state for the next draw. Everything is single-threaded and
//! synchronous; callers serialize any cross-thread sharing externally.

pub mod error;
pub mod frame;
pub mod interpolation;
pub mod track;
pub mod transform;

pub use error::PlaybackError;
pub use frame::Frame;
pub use interpolation::Blend;
pub use track::AnimationTrack;
pub use transform::Trs;
