//! Source resolution: turning a discovery listing into ordered game ids.
//!
//! Each source yields an ordered sequence of [`ResolvedGame`] entries, a
//! (channel label, game id) pair per discovered game. The `auto` mode is a
//! strict fallback, not a union: TV first, broadcasts only when TV yields
//! nothing.

use serde_json::Value;
use tracing::debug;

use openings_fetch::{FetchError, LichessApi};

use crate::extract::{game_id_from_channel, round_game_ids};

/// Channel label applied to every game discovered through a broadcast.
const BROADCAST_LABEL: &str = "Broadcast";

// ============================================================================
// Source Mode
// ============================================================================

/// Which discovery listing to resolve games from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceMode {
    /// Live TV channels only.
    Tv,
    /// Broadcast tournament rounds only.
    Broadcast,
    /// TV first, falling back to broadcasts when TV yields nothing.
    #[default]
    Auto,
}

// ============================================================================
// Resolved Game
// ============================================================================

/// One discovered game: its id plus the label of the source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGame {
    /// Display label: a TV channel name, or `"Broadcast"`.
    pub channel: String,
    /// The raw game id to fetch detail for.
    pub game_id: String,
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolves live game ids from the configured source.
///
/// Empty results are normal, not errors; any fetch failure other than the
/// broadcast-round not-found case propagates to the caller.
pub async fn resolve(
    api: &dyn LichessApi,
    mode: SourceMode,
    limit: Option<usize>,
) -> Result<Vec<ResolvedGame>, FetchError> {
    match mode {
        SourceMode::Tv => resolve_tv(api, limit).await,
        SourceMode::Broadcast => resolve_broadcast(api, limit).await,
        SourceMode::Auto => {
            let games = resolve_tv(api, limit).await?;
            if games.is_empty() {
                resolve_broadcast(api, limit).await
            } else {
                Ok(games)
            }
        }
    }
}

/// Resolves games from the TV channel listing.
///
/// Channels beyond `limit` are ignored; channels without an extractable
/// game id are skipped.
async fn resolve_tv(
    api: &dyn LichessApi,
    limit: Option<usize>,
) -> Result<Vec<ResolvedGame>, FetchError> {
    let mut channels = api.tv_channels().await?;
    if let Some(limit) = limit {
        channels.truncate(limit);
    }

    let mut games = Vec::new();
    for channel in &channels {
        let Some(game_id) = game_id_from_channel(channel) else {
            continue;
        };
        let label = channel
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        games.push(ResolvedGame {
            channel: label,
            game_id,
        });
    }
    Ok(games)
}

/// Resolves games from broadcast tournament rounds.
///
/// Round ids come from [`candidate_round_ids`]; a round whose detail fetch
/// 404s is skipped, any other failure aborts the resolution.
async fn resolve_broadcast(
    api: &dyn LichessApi,
    limit: Option<usize>,
) -> Result<Vec<ResolvedGame>, FetchError> {
    let broadcasts = api.broadcasts().await?;
    let now_ms = chrono::Utc::now().timestamp_millis();
    let mut round_ids = candidate_round_ids(&broadcasts, now_ms);
    if let Some(limit) = limit {
        round_ids.truncate(limit);
    }

    let mut games = Vec::new();
    for round_id in &round_ids {
        let payload = match api.broadcast_round(round_id).await {
            Ok(payload) => payload,
            Err(error) if error.is_not_found() => {
                debug!(%round_id, "skipping missing broadcast round");
                continue;
            }
            Err(error) => return Err(error),
        };
        let game_ids = round_game_ids(&payload);
        if game_ids.is_empty() {
            debug!(%round_id, "no game ids found in broadcast round");
        }
        for game_id in game_ids {
            games.push(ResolvedGame {
                channel: BROADCAST_LABEL.to_string(),
                game_id,
            });
        }
    }
    Ok(games)
}

// ============================================================================
// Round Selection
// ============================================================================

/// Derives the candidate round ids from a broadcast listing.
///
/// Includes each tournament's `tour.defaultRoundId` when present, plus every
/// round that is not marked finished and has not yet started strictly in the
/// future of `now_ms`. Ids are deduplicated preserving first-seen order.
fn candidate_round_ids(broadcasts: &[Value], now_ms: i64) -> Vec<String> {
    let mut round_ids: Vec<String> = Vec::new();
    for item in broadcasts {
        if let Some(default_round) = item
            .get("tour")
            .and_then(|tour| tour.get("defaultRoundId"))
            .and_then(round_id_value)
        {
            round_ids.push(default_round);
        }
        let Some(rounds) = item.get("rounds").and_then(Value::as_array) else {
            continue;
        };
        for round in rounds {
            if !round.is_object() {
                continue;
            }
            if round.get("finished").and_then(Value::as_bool) == Some(true) {
                continue;
            }
            if let Some(starts_at) = round.get("startsAt").and_then(Value::as_i64) {
                if starts_at > now_ms {
                    continue;
                }
            }
            if let Some(round_id) = round.get("id").and_then(round_id_value) {
                round_ids.push(round_id);
            }
        }
    }

    let mut seen = std::collections::HashSet::new();
    round_ids.retain(|id| seen.insert(id.clone()));
    round_ids
}

/// Stringifies a round-id value; string and numeric ids are accepted.
fn round_id_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW_MS: i64 = 1_700_000_000_000;

    #[test]
    fn finished_rounds_are_always_excluded() {
        let broadcasts = vec![json!({
            "rounds": [{"id": "r1", "finished": true, "startsAt": NOW_MS - 1000}]
        })];
        assert!(candidate_round_ids(&broadcasts, NOW_MS).is_empty());
    }

    #[test]
    fn unfinished_round_without_start_time_is_included() {
        let broadcasts = vec![json!({"rounds": [{"id": "r1"}]})];
        assert_eq!(candidate_round_ids(&broadcasts, NOW_MS), vec!["r1"]);
    }

    #[test]
    fn round_starting_in_the_future_is_excluded() {
        let broadcasts = vec![json!({
            "rounds": [
                {"id": "future", "startsAt": NOW_MS + 1},
                {"id": "now", "startsAt": NOW_MS},
                {"id": "past", "startsAt": NOW_MS - 1}
            ]
        })];
        assert_eq!(candidate_round_ids(&broadcasts, NOW_MS), vec!["now", "past"]);
    }

    #[test]
    fn default_round_id_is_included_first() {
        let broadcasts = vec![json!({
            "tour": {"defaultRoundId": "default"},
            "rounds": [{"id": "r1"}]
        })];
        assert_eq!(
            candidate_round_ids(&broadcasts, NOW_MS),
            vec!["default", "r1"]
        );
    }

    #[test]
    fn round_ids_are_deduplicated_in_first_seen_order() {
        let broadcasts = vec![json!({
            "tour": {"defaultRoundId": "r1"},
            "rounds": [{"id": "r1"}, {"id": "r2"}, {"id": "r2"}]
        })];
        assert_eq!(candidate_round_ids(&broadcasts, NOW_MS), vec!["r1", "r2"]);
    }

    #[test]
    fn non_object_rounds_are_skipped() {
        let broadcasts = vec![json!({"rounds": ["junk", {"id": "r1"}]})];
        assert_eq!(candidate_round_ids(&broadcasts, NOW_MS), vec!["r1"]);
    }
}
