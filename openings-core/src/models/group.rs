//! Opening-group payload types.

use serde::Serialize;

use super::game::LiveGame;

// ============================================================================
// Opening Group
// ============================================================================

/// One opening group in the structured payload.
///
/// Produced by [`crate::render::build_payload`]; games keep the order they
/// were resolved in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpeningGroup {
    /// The opening key, `"{eco} {name}"` or the bare name.
    pub opening: String,
    /// Number of live games in this group.
    pub count: usize,
    /// The games, in resolution order.
    pub games: Vec<GameSummary>,
}

/// One game inside an [`OpeningGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// Link to the game on Lichess.
    pub url: String,
    /// `"{white} vs {black}"`.
    pub players: String,
    /// Source label the game was discovered through.
    pub channel: String,
    /// Move list, may be empty.
    pub moves: String,
}

impl GameSummary {
    /// Builds the summary shown in the payload for one game.
    pub fn from_game(game: &LiveGame) -> Self {
        Self {
            url: game.url(),
            players: game.players(),
            channel: game.channel.clone(),
            moves: game.moves.clone(),
        }
    }
}
