//! Deterministic renderings of a set of live games.
//!
//! Both renderings group games by opening key first, then differ in how the
//! groups are ordered:
//!
//! - [`render_grouped`] sorts groups lexicographically by key (text report)
//! - [`build_payload`] ranks groups by descending game count (JSON endpoint)
//!
//! Within a group, games always keep the order they were resolved in.

use crate::models::{GameSummary, LiveGame, OpeningGroup};

// ============================================================================
// Grouping
// ============================================================================

/// Groups games by opening key, preserving first-encountered group order
/// and per-group insertion order.
fn group_by_opening(games: &[LiveGame]) -> Vec<(String, Vec<&LiveGame>)> {
    let mut groups: Vec<(String, Vec<&LiveGame>)> = Vec::new();
    for game in games {
        let key = game.opening_key();
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(game),
            None => groups.push((key, vec![game])),
        }
    }
    groups
}

// ============================================================================
// Renderings
// ============================================================================

/// Renders games as grouped text, one section per opening.
///
/// Groups are sorted lexicographically by opening key. Each section starts
/// with `"{key} ({count} games)"` followed by one line per game; sections
/// are separated by a blank line.
pub fn render_grouped(games: &[LiveGame]) -> String {
    let mut groups = group_by_opening(games);
    groups.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut lines: Vec<String> = Vec::new();
    for (key, members) in &groups {
        // The leading newline doubles as the blank separator between groups.
        lines.push(format!("\n{key} ({} games)", members.len()));
        for game in members {
            lines.push(format!(
                "  - {} [{}] {}",
                game.players(),
                game.channel,
                game.url()
            ));
        }
    }
    lines.join("\n").trim_start().to_string()
}

/// Builds the structured payload served at `/api/openings`.
///
/// Groups are ordered by descending game count; ties keep the order the
/// groups were first encountered in (the sort is stable).
pub fn build_payload(games: &[LiveGame]) -> Vec<OpeningGroup> {
    let mut groups = group_by_opening(games);
    groups.sort_by_key(|(_, members)| std::cmp::Reverse(members.len()));

    groups
        .into_iter()
        .map(|(opening, members)| OpeningGroup {
            opening,
            count: members.len(),
            games: members.into_iter().map(GameSummary::from_game).collect(),
        })
        .collect()
}
