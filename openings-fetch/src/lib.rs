// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Openings Fetch
//!
//! Lichess API client for `chess-openings-live`.
//!
//! This crate owns everything that touches the network:
//!
//! - [`LichessClient`] - reqwest-backed client with a fixed User-Agent and
//!   a bounded per-request timeout
//! - [`LichessApi`] - the trait seam the discovery pipeline is written
//!   against, so resolution and aggregation can run against in-memory stubs
//!   in tests
//! - [`FetchError`] - typed fetch failures carrying the URL and cause, with
//!   a distinguishable not-found case that broadcast-round resolution is
//!   allowed to skip
//!
//! Listing records are deliberately kept as [`serde_json::Value`]: the two
//! discovery endpoints vary in shape, and the id-extraction heuristics live
//! downstream in `openings-sources`.

pub mod api;
pub mod client;
pub mod error;

// Re-export key types at crate root
pub use api::LichessApi;
pub use client::LichessClient;
pub use error::FetchError;
