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
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
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

//! Per-frame interaction and animation engine for 3D card carousels.
//!
//! Vitrine drives a carousel of selectable cards: it resolves each card's
//! interaction state every frame, damps transforms and material parameters
//! toward state-derived targets, scrolls and snaps the carousel, and keeps
//! the camera in sync. Rendering is external; the engine writes its output
//! into a host-provided [`scene::SceneSink`].
//!
//! # Key entry points
//!
//! - [`engine::CarouselEngine`] - the carousel session, ticked once per frame
//! - [`engine::CarouselCommand`] - the complete interactive vocabulary
//! - [`catalog::Catalog`] - the immutable card catalog consumed at startup
//! - [`options::Options`] - runtime configuration (layout, looks, smoothing,
//!   camera, input, key bindings)
//! - [`animation::damping`] - the half-life damping primitive everything
//!   animates through
//!
//! # Frame loop
//!
//! Event handlers ([`engine::CarouselEngine::handle_input`],
//! [`engine::CarouselEngine::handle_key_press`],
//! [`engine::CarouselEngine::execute`]) only write pending state. One call
//! to [`engine::CarouselEngine::tick`] per rendered frame advances, in
//! order: scroll controller → state resolver → card animator → camera →
//! scene writes. Targets are re-derived from state every tick, so rapid
//! selection or scroll changes never need explicit cancellation.

pub mod animation;
pub mod camera;
pub mod card;
pub mod carousel;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod input;
pub mod interaction;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "web")]
pub mod web;
