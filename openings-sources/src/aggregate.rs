//! Per-game export fetch and normalization.

use serde_json::Value;

use openings_core::LiveGame;
use openings_fetch::{FetchError, LichessApi};

use crate::resolve::ResolvedGame;

/// Fetches and normalizes the export record for every resolved game.
///
/// Fetches run strictly sequentially in resolution order. Unlike the
/// round-level not-found tolerance during resolution, any failure here
/// aborts the whole aggregation. Duplicate game ids are not deduplicated;
/// a game discovered twice appears twice.
pub async fn collect_games(
    api: &dyn LichessApi,
    entries: &[ResolvedGame],
) -> Result<Vec<LiveGame>, FetchError> {
    let mut games = Vec::with_capacity(entries.len());
    for entry in entries {
        let data = api.game(&entry.game_id).await?;
        games.push(live_game_from_export(&entry.channel, &data));
    }
    Ok(games)
}

/// Normalizes one game export record into a [`LiveGame`].
///
/// Every field tolerates absence: the opening defaults to `"Unknown"` with
/// an empty eco, player names default to `"Unknown"` when any level of the
/// `players.{color}.user.name` chain is missing, and moves default to the
/// empty string.
pub fn live_game_from_export(channel: &str, data: &Value) -> LiveGame {
    let opening = data.get("opening");
    LiveGame {
        game_id: string_field(data.get("id"), ""),
        channel: channel.to_string(),
        opening_name: string_field(opening.and_then(|o| o.get("name")), "Unknown"),
        eco: string_field(opening.and_then(|o| o.get("eco")), ""),
        white: player_name(data, "white"),
        black: player_name(data, "black"),
        moves: string_field(data.get("moves"), ""),
    }
}

fn player_name(data: &Value, color: &str) -> String {
    data.get("players")
        .and_then(|players| players.get(color))
        .and_then(|player| player.get("user"))
        .and_then(|user| user.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("Unknown")
        .to_string()
}

fn string_field(value: Option<&Value>, default: &str) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}
