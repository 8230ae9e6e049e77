//! Reqwest-backed Lichess client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde_json::Value;
use tracing::debug;

use crate::api::LichessApi;
use crate::error::FetchError;

/// Live TV channel listing endpoint.
const TV_CHANNELS_URL: &str = "https://lichess.org/api/tv/channels";

/// Broadcast listing endpoint (NDJSON).
const BROADCASTS_URL: &str = "https://lichess.org/api/broadcast";

/// Broadcast round detail endpoint prefix.
const BROADCAST_ROUND_URL: &str = "https://lichess.org/api/broadcast/round";

/// Game export endpoint prefix.
const GAME_EXPORT_URL: &str = "https://lichess.org/game/export";

/// Per-request timeout for all upstream calls.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// User agent string sent on every request.
const USER_AGENT: &str = concat!("chess-openings-live/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Lichess Client
// ============================================================================

/// HTTP client for the Lichess API.
///
/// Constructed once at startup and shared read-only for the process
/// lifetime; holds no per-request state.
#[derive(Debug, Clone)]
pub struct LichessClient {
    inner: Client,
}

impl LichessClient {
    /// Creates a client with the fixed timeout and User-Agent.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be built, which only
    /// happens when the system TLS configuration is broken and no network
    /// operation could succeed anyway.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| panic!("failed to create HTTP client: {e}"));

        Self { inner: client }
    }

    /// Fetches a URL body as text, mapping transport and status failures.
    async fn fetch_text(&self, url: &str, accept: &str) -> Result<String, FetchError> {
        debug!(%url, "GET");
        let response = self
            .inner
            .get(url)
            .header(header::ACCEPT, accept)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })
    }

    /// Fetches a URL body and parses it as a single JSON document.
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        let body = self.fetch_text(url, "application/json").await?;
        serde_json::from_str(&body).map_err(|source| FetchError::Json {
            url: url.to_string(),
            source,
        })
    }
}

impl Default for LichessClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LichessApi for LichessClient {
    async fn tv_channels(&self) -> Result<Vec<Value>, FetchError> {
        let body = self.fetch_text(TV_CHANNELS_URL, "application/json").await?;
        debug!(payload = %body, "raw TV payload");
        let data: Value = serde_json::from_str(&body).map_err(|source| FetchError::Json {
            url: TV_CHANNELS_URL.to_string(),
            source,
        })?;
        Ok(normalize_channels(&data))
    }

    async fn broadcasts(&self) -> Result<Vec<Value>, FetchError> {
        let body = self
            .fetch_text(BROADCASTS_URL, "application/x-ndjson")
            .await?;
        debug!(payload = %body, "raw broadcast payload");
        parse_ndjson(&body).map_err(|source| FetchError::Json {
            url: BROADCASTS_URL.to_string(),
            source,
        })
    }

    async fn broadcast_round(&self, round_id: &str) -> Result<Value, FetchError> {
        self.fetch_json(&format!("{BROADCAST_ROUND_URL}/{round_id}"))
            .await
    }

    async fn game(&self, game_id: &str) -> Result<Value, FetchError> {
        self.fetch_json(&format!(
            "{GAME_EXPORT_URL}/{game_id}?moves=true&opening=true&clocks=false&evals=false"
        ))
        .await
    }
}

// ============================================================================
// Payload Normalization
// ============================================================================

/// Normalizes the `channels` field of the TV listing to one record per
/// channel.
///
/// The endpoint has returned both shapes over time: a mapping from channel
/// name to channel payload, and a plain sequence of payloads. For the
/// mapping shape, a `name` field is synthesized from the map key when the
/// payload lacks one; non-object values are dropped. Any other shape yields
/// an empty listing.
fn normalize_channels(data: &Value) -> Vec<Value> {
    match data.get("channels") {
        Some(Value::Object(map)) => map
            .iter()
            .filter_map(|(name, payload)| {
                let mut channel = payload.as_object()?.clone();
                channel
                    .entry("name")
                    .or_insert_with(|| Value::String(name.clone()));
                Some(Value::Object(channel))
            })
            .collect(),
        Some(Value::Array(list)) => list.clone(),
        _ => Vec::new(),
    }
}

/// Parses an NDJSON body: one JSON record per non-blank line.
fn parse_ndjson(body: &str) -> Result<Vec<Value>, serde_json::Error> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(serde_json::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_channels_synthesizes_name_from_mapping_key() {
        let data = json!({
            "channels": {
                "Blitz": {"gameId": "g1"},
                "Bullet": {"name": "Custom", "gameId": "g2"}
            }
        });
        let channels = normalize_channels(&data);
        assert_eq!(channels.len(), 2);
        let blitz = channels
            .iter()
            .find(|c| c["gameId"] == "g1")
            .expect("Blitz channel present");
        assert_eq!(blitz["name"], "Blitz");
        // An explicit name wins over the mapping key.
        let bullet = channels
            .iter()
            .find(|c| c["gameId"] == "g2")
            .expect("Bullet channel present");
        assert_eq!(bullet["name"], "Custom");
    }

    #[test]
    fn normalize_channels_keeps_document_order() {
        let data = json!({"channels": {"b": {"gameId": "g1"}, "a": {"gameId": "g2"}}});
        let channels = normalize_channels(&data);
        assert_eq!(channels[0]["name"], "b");
        assert_eq!(channels[1]["name"], "a");
    }

    #[test]
    fn normalize_channels_drops_non_object_mapping_values() {
        let data = json!({"channels": {"Blitz": {"gameId": "g1"}, "Junk": 42}});
        let channels = normalize_channels(&data);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0]["name"], "Blitz");
    }

    #[test]
    fn normalize_channels_passes_sequences_through() {
        let data = json!({"channels": [{"name": "Blitz", "gameId": "g1"}]});
        let channels = normalize_channels(&data);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0]["name"], "Blitz");
    }

    #[test]
    fn normalize_channels_tolerates_missing_or_odd_shapes() {
        assert!(normalize_channels(&json!({})).is_empty());
        assert!(normalize_channels(&json!({"channels": "nope"})).is_empty());
    }

    #[test]
    fn parse_ndjson_skips_blank_lines() {
        let body = "{\"a\":1}\n\n  \n{\"b\":2}\n";
        let records = parse_ndjson(body).unwrap();
        assert_eq!(records, vec![json!({"a": 1}), json!({"b": 2})]);
    }

    #[test]
    fn parse_ndjson_rejects_malformed_lines() {
        assert!(parse_ndjson("{\"a\":1}\nnot json\n").is_err());
    }
}
