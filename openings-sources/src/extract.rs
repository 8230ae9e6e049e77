//! Id-extraction heuristics over the raw listing shapes.
//!
//! The two discovery endpoints carry game ids in different places, and the
//! broadcast round payloads have varied over time. All the shape-sniffing
//! lives here, as pure functions over [`serde_json::Value`], so it can be
//! tested without any transport.

use serde_json::Value;

/// Extracts a game id from one TV channel record.
///
/// Prefers a direct `gameId` field, falling back to a nested `game.id`
/// only when the `gameId` key is absent entirely; absent otherwise.
pub fn game_id_from_channel(channel: &Value) -> Option<String> {
    if let Some(value) = channel.get("gameId") {
        return value_as_id(value);
    }
    channel
        .get("game")
        .and_then(|game| game.get("id"))
        .and_then(value_as_id)
}

/// Extracts a game id from one round pairing record.
///
/// Checks, in priority order: `id`, `gameId`, `lichessId`, nested
/// `game.id`, and finally the trailing path segment of a `url` field.
pub fn game_id_from_pairing(entry: &Value) -> Option<String> {
    if !entry.is_object() {
        return None;
    }
    for key in ["id", "gameId", "lichessId"] {
        if let Some(id) = entry.get(key).and_then(value_as_id) {
            return Some(id);
        }
    }
    if let Some(id) = entry
        .get("game")
        .and_then(|game| game.get("id"))
        .and_then(value_as_id)
    {
        return Some(id);
    }
    entry
        .get("url")
        .and_then(Value::as_str)
        .and_then(game_id_from_url)
}

/// Extracts a game id from the trailing path segment of a URL.
///
/// Trailing slashes are stripped first; an empty URL or empty trailing
/// segment counts as absent.
pub fn game_id_from_url(url: &str) -> Option<String> {
    let trimmed = url.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    let segment = trimmed.rsplit('/').next()?;
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}

/// Extracts all game ids from a round detail payload, in listing order.
///
/// Games may sit under a `games` or a `pairings` key, and the value may be
/// a sequence or a mapping (whose values are taken in iteration order).
/// A missing, null, or empty `games` value falls through to `pairings`.
/// Entries yielding no id are skipped.
pub fn round_game_ids(payload: &Value) -> Vec<String> {
    let games = payload
        .get("games")
        .filter(|v| has_entries(v))
        .or_else(|| payload.get("pairings"));

    let entries: Vec<&Value> = match games {
        Some(Value::Array(list)) => list.iter().collect(),
        Some(Value::Object(map)) => map.values().collect(),
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .filter_map(game_id_from_pairing)
        .collect()
}

/// True when the value is a non-empty sequence or mapping.
fn has_entries(value: &Value) -> bool {
    match value {
        Value::Array(list) => !list.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => false,
    }
}

/// Renders an id-bearing JSON value as a string id.
///
/// Round payloads have carried ids both as strings and as bare numbers;
/// anything else is treated as absent.
fn value_as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
