//! The normalized live game record.

use serde::{Deserialize, Serialize};

/// Base URL for linking to a game on Lichess.
const GAME_URL_BASE: &str = "https://lichess.org";

// ============================================================================
// Live Game
// ============================================================================

/// A single live game, normalized from a Lichess game export.
///
/// Built once per resolved game id by normalizing the heterogeneous export
/// record; never mutated afterwards. Missing upstream fields are tolerated
/// via defaults rather than raised as errors: opening name and player names
/// fall back to `"Unknown"`, eco and moves to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveGame {
    /// The Lichess game id.
    pub game_id: String,
    /// Source label: a TV channel name, or `"Broadcast"`.
    pub channel: String,
    /// Opening name, `"Unknown"` when the export carries no opening.
    pub opening_name: String,
    /// ECO classification code, empty when absent upstream.
    pub eco: String,
    /// White player display name, `"Unknown"` when absent.
    pub white: String,
    /// Black player display name, `"Unknown"` when absent.
    pub black: String,
    /// Move list in the export's notation, may be empty.
    pub moves: String,
}

impl LiveGame {
    /// The grouping key for this game's opening.
    ///
    /// `"{eco} {opening_name}"` when an ECO code is present, otherwise the
    /// bare opening name. Two games with the same opening name but
    /// different ECO codes land in distinct groups.
    pub fn opening_key(&self) -> String {
        if self.eco.is_empty() {
            self.opening_name.clone()
        } else {
            format!("{} {}", self.eco, self.opening_name)
        }
    }

    /// URL of this game on Lichess.
    pub fn url(&self) -> String {
        format!("{GAME_URL_BASE}/{}", self.game_id)
    }

    /// `"{white} vs {black}"`, as shown in both renderings.
    pub fn players(&self) -> String {
        format!("{} vs {}", self.white, self.black)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(eco: &str, name: &str) -> LiveGame {
        LiveGame {
            game_id: "abcd1234".to_string(),
            channel: "Blitz".to_string(),
            opening_name: name.to_string(),
            eco: eco.to_string(),
            white: "alice".to_string(),
            black: "bob".to_string(),
            moves: String::new(),
        }
    }

    #[test]
    fn opening_key_includes_eco_when_present() {
        assert_eq!(
            game("B20", "Sicilian Defense").opening_key(),
            "B20 Sicilian Defense"
        );
    }

    #[test]
    fn opening_key_is_bare_name_without_eco() {
        assert_eq!(game("", "Sicilian Defense").opening_key(), "Sicilian Defense");
    }

    #[test]
    fn url_points_at_lichess() {
        assert_eq!(game("", "x").url(), "https://lichess.org/abcd1234");
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let json = serde_json::to_value(game("B20", "Sicilian Defense")).unwrap();
        assert_eq!(json["game_id"], "abcd1234");
        assert_eq!(json["opening_name"], "Sicilian Defense");
    }
}
