//! Domain models for chess-openings-live.
//!
//! ## Submodules
//!
//! - [`game`] - The normalized live game record ([`LiveGame`])
//! - [`group`] - Opening-group payload types ([`OpeningGroup`], [`GameSummary`])

mod game;
mod group;

// Re-export everything at the models level
pub use game::LiveGame;
pub use group::{GameSummary, OpeningGroup};
