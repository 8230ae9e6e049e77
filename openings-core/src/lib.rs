// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Openings Core
//!
//! Core types, grouping, and renderings for `chess-openings-live`.
//!
//! This crate holds everything downstream of the network: the normalized
//! [`LiveGame`] record, the opening-key grouping rules, and the two
//! deterministic renderings of a set of live games:
//!
//! - [`render_grouped`] - human-readable text, groups sorted by opening key
//! - [`build_payload`] - JSON payload, groups ranked by descending game count
//!
//! No I/O happens here; both renderings are pure functions of the input
//! sequence and independent of the order games were fetched in.

pub mod models;
pub mod render;

// Re-export model types
pub use models::{GameSummary, LiveGame, OpeningGroup};

// Re-export renderings
pub use render::{build_payload, render_grouped};
