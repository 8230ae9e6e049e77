//! The upstream API seam.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;

/// The four upstream reads the discovery pipeline is built on.
///
/// [`crate::LichessClient`] is the production implementation; tests inject
/// in-memory stubs so resolution and aggregation run without a network.
#[async_trait]
pub trait LichessApi: Send + Sync {
    /// Fetches the live TV channel listing, normalized to one record per
    /// channel regardless of whether the endpoint returned a mapping or a
    /// sequence.
    async fn tv_channels(&self) -> Result<Vec<Value>, FetchError>;

    /// Fetches the broadcast listing, one record per NDJSON line.
    async fn broadcasts(&self) -> Result<Vec<Value>, FetchError>;

    /// Fetches one broadcast round's detail record.
    ///
    /// A missing round surfaces as [`FetchError::NotFound`] so the caller
    /// can skip it rather than abort.
    async fn broadcast_round(&self, round_id: &str) -> Result<Value, FetchError>;

    /// Fetches one game's export record, with moves and opening annotations
    /// but without clocks or evaluations.
    async fn game(&self, game_id: &str) -> Result<Value, FetchError>;
}
