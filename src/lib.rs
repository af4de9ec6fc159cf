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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
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
// Geodesy math compares against exact constants and converts freely
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

//! Geodetic math core for State Plane Coordinate System visualization.
//!
//! The crate derives everything the rendering layer needs to draw SPCS
//! zones on a 2D map and on a 3D reference-ellipsoid scene: DMS angle
//! parsing/formatting, ellipsoid and graticule geometry, zone parameter
//! resolution, projection-surface alignment transforms, and camera orbit
//! interpolation. Rendering itself (map tiles, WebGL scene, DOM wiring,
//! boundary-feed fetch) lives in collaborating layers that consume the
//! values produced here.
//!
//! # Key entry points
//!
//! - [`angle::parse`] / [`angle::Angle`] - the DMS angle codec
//! - [`geodesy::Graticule`] - parallels/meridians on a reference ellipsoid
//! - [`zones::lookup`] - datum + regional code to zone parameter record
//! - [`projection::align_zone`] - zone record to projection-surface
//!   transform
//! - [`orbit::OrbitAnimator`] - generation-token camera orbit interpolation
//! - [`options::Options`] - host configuration (graticule, orbit, scene)
//!
//! # Error posture
//!
//! Malformed angle strings and unknown zone codes are ordinary absences,
//! returned as sentinels or `None`. The only hard failures are requesting
//! an unimplemented projection surface and options-file I/O, both surfaced
//! as [`error::StateplaneError`].

pub mod angle;
pub mod error;
pub mod geodesy;
pub mod options;
pub mod orbit;
pub mod projection;
pub mod util;
pub mod zones;

pub use error::StateplaneError;
