//! Integration tests for opening grouping and the two renderings.

use openings_core::{LiveGame, build_payload, render_grouped};

fn game(id: &str, channel: &str, eco: &str, opening: &str, white: &str, black: &str) -> LiveGame {
    LiveGame {
        game_id: id.to_string(),
        channel: channel.to_string(),
        opening_name: opening.to_string(),
        eco: eco.to_string(),
        white: white.to_string(),
        black: black.to_string(),
        moves: "1. e4 e5".to_string(),
    }
}

#[test]
fn games_with_same_name_but_different_eco_split_into_groups() {
    let games = vec![
        game("g1", "Blitz", "B20", "Sicilian Defense", "a", "b"),
        game("g2", "Blitz", "B21", "Sicilian Defense", "c", "d"),
    ];
    let payload = build_payload(&games);
    assert_eq!(payload.len(), 2);
    let openings: Vec<&str> = payload.iter().map(|g| g.opening.as_str()).collect();
    assert!(openings.contains(&"B20 Sicilian Defense"));
    assert!(openings.contains(&"B21 Sicilian Defense"));
}

#[test]
fn empty_eco_groups_under_bare_opening_name() {
    let games = vec![game("g1", "Blitz", "", "Sicilian Defense", "a", "b")];
    let payload = build_payload(&games);
    assert_eq!(payload[0].opening, "Sicilian Defense");
}

#[test]
fn render_grouped_sorts_groups_lexicographically() {
    let games = vec![
        game("g1", "Blitz", "C50", "Italian Game", "a", "b"),
        game("g2", "Bullet", "B20", "Sicilian Defense", "c", "d"),
    ];
    let text = render_grouped(&games);
    let sicilian = text.find("B20 Sicilian Defense").unwrap();
    let italian = text.find("C50 Italian Game").unwrap();
    assert!(sicilian < italian, "B20 should render before C50:\n{text}");
}

#[test]
fn render_grouped_formats_headers_and_game_lines() {
    let games = vec![
        game("abcd1234", "Blitz", "C50", "Italian Game", "alice", "bob"),
        game("efgh5678", "Bullet", "C50", "Italian Game", "carol", "dave"),
    ];
    let text = render_grouped(&games);
    assert!(text.starts_with("C50 Italian Game (2 games)"));
    assert!(text.contains("  - alice vs bob [Blitz] https://lichess.org/abcd1234"));
    assert!(text.contains("  - carol vs dave [Bullet] https://lichess.org/efgh5678"));
}

#[test]
fn render_grouped_separates_groups_with_a_blank_line() {
    let games = vec![
        game("g1", "Blitz", "B20", "Sicilian Defense", "a", "b"),
        game("g2", "Bullet", "C50", "Italian Game", "c", "d"),
    ];
    let text = render_grouped(&games);
    assert!(text.contains("https://lichess.org/g1\n\nC50 Italian Game (1 games)"));
    assert!(!text.starts_with('\n'), "leading whitespace must be trimmed");
}

#[test]
fn build_payload_ranks_groups_by_descending_count() {
    let games = vec![
        game("g1", "Blitz", "C50", "Italian Game", "a", "b"),
        game("g2", "Bullet", "B20", "Sicilian Defense", "c", "d"),
        game("g3", "Rapid", "B20", "Sicilian Defense", "e", "f"),
    ];
    let payload = build_payload(&games);
    assert_eq!(payload[0].opening, "B20 Sicilian Defense");
    assert_eq!(payload[0].count, 2);
    assert_eq!(payload[1].opening, "C50 Italian Game");
    assert_eq!(payload[1].count, 1);
}

#[test]
fn build_payload_count_ties_keep_first_encountered_order() {
    let games = vec![
        game("g1", "Blitz", "C50", "Italian Game", "a", "b"),
        game("g2", "Bullet", "B20", "Sicilian Defense", "c", "d"),
    ];
    let payload = build_payload(&games);
    assert_eq!(payload[0].opening, "C50 Italian Game");
    assert_eq!(payload[1].opening, "B20 Sicilian Defense");
}

#[test]
fn build_payload_games_carry_url_players_channel_and_moves() {
    let games = vec![game("abcd1234", "Blitz", "C50", "Italian Game", "alice", "bob")];
    let payload = build_payload(&games);
    assert_eq!(payload.len(), 1);
    let group = &payload[0];
    assert_eq!(group.opening, "C50 Italian Game");
    assert_eq!(group.count, 1);
    assert_eq!(group.games[0].url, "https://lichess.org/abcd1234");
    assert_eq!(group.games[0].players, "alice vs bob");
    assert_eq!(group.games[0].channel, "Blitz");
    assert_eq!(group.games[0].moves, "1. e4 e5");
}

#[test]
fn duplicate_game_ids_are_not_deduplicated() {
    let games = vec![
        game("g1", "Broadcast", "B20", "Sicilian Defense", "a", "b"),
        game("g1", "Broadcast", "B20", "Sicilian Defense", "a", "b"),
    ];
    let payload = build_payload(&games);
    assert_eq!(payload[0].count, 2);
}

#[test]
fn payload_serializes_to_expected_json_shape() {
    let games = vec![game("abcd1234", "Blitz", "C50", "Italian Game", "alice", "bob")];
    let json = serde_json::to_value(build_payload(&games)).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "opening": "C50 Italian Game",
            "count": 1,
            "games": [{
                "url": "https://lichess.org/abcd1234",
                "players": "alice vs bob",
                "channel": "Blitz",
                "moves": "1. e4 e5"
            }]
        }])
    );
}
