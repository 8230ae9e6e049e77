// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Openings Sources
//!
//! Game discovery and aggregation for `chess-openings-live`.
//!
//! Live games can be discovered through two structurally different Lichess
//! listings: the TV channel listing and the broadcast tournament listing.
//! This crate turns either into a uniform, ordered set of
//! [`ResolvedGame`] entries and then into normalized
//! [`openings_core::LiveGame`] records:
//!
//! - [`extract`] - pure id-extraction heuristics over the raw listing shapes
//! - [`resolve`] - per-source resolution, the `auto` fallback policy, and
//!   the broadcast round-id derivation
//! - [`aggregate`] - per-game export fetch and normalization
//!
//! All fetches go through the [`openings_fetch::LichessApi`] seam and run
//! strictly sequentially in resolution order.

pub mod aggregate;
pub mod extract;
pub mod resolve;

// Re-export the pipeline surface
pub use aggregate::collect_games;
pub use resolve::{ResolvedGame, SourceMode, resolve};
