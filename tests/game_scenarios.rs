//! Integration tests driving the public API: scripted games, a JSON
//! scenario suite, and automated play.

use rand::prelude::*;
use serde::Deserialize;

use chess_tree::game::{Color, Location, Move, PieceKind, Position, PositionBuilder};

#[derive(Deserialize)]
struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    side_to_move: String,
    pieces: Vec<String>,
    expected: String,
}

/// Build a position from piece specs like "Ra8" (uppercase = White).
fn build_scenario(scenario: &Scenario) -> Position {
    let mut builder = PositionBuilder::new();
    for spec in &scenario.pieces {
        let (piece_char, square) = spec.split_at(1);
        let piece_char = piece_char.chars().next().expect("empty piece spec");
        let kind = PieceKind::from_char(piece_char)
            .unwrap_or_else(|| panic!("bad piece char in '{spec}'"));
        let color = if piece_char.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let location: Location = square
            .parse()
            .unwrap_or_else(|_| panic!("bad square in '{spec}'"));
        builder = builder.piece(location, color, kind);
    }
    let side = match scenario.side_to_move.as_str() {
        "white" => Color::White,
        "black" => Color::Black,
        other => panic!("bad side_to_move '{other}'"),
    };
    builder
        .side_to_move(side)
        .build()
        .unwrap_or_else(|e| panic!("invalid scenario '{}': {e}", scenario.name))
}

#[test]
fn scenario_suite() {
    let data = include_str!("data/scenarios.json");
    let set: ScenarioSet = serde_json::from_str(data).expect("invalid scenarios.json");

    for scenario in &set.scenarios {
        let position = build_scenario(scenario);
        let state = if position.is_checkmate() {
            "checkmate"
        } else if position.is_stalemate() {
            "stalemate"
        } else if position.is_check() {
            "check"
        } else {
            "quiet"
        };
        assert_eq!(
            state, scenario.expected,
            "scenario '{}' misclassified:\n{position}",
            scenario.name
        );
        if scenario.expected == "checkmate" || scenario.expected == "stalemate" {
            assert!(position.legal_moves().is_empty());
        }
    }
}

fn play(mut position: Position, moves: &[&str]) -> Position {
    for notation in moves {
        let mv: Move = notation.parse().unwrap();
        let before = position.clone();
        position = position.attempt_move(mv);
        assert_ne!(position, before, "move {notation} was rejected:\n{before}");
    }
    position
}

#[test]
fn fools_mate_ends_in_checkmate() {
    let position = play(Position::new(), &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(position.is_checkmate());
    assert!(!position.is_check());
    assert!(!position.is_stalemate());
    assert!(position.legal_moves().is_empty());
    assert_eq!(position.side_to_move(), Color::White);
}

#[test]
fn illegal_moves_are_silent_no_ops() {
    let position = Position::new();
    let original = position.clone();

    // From an empty square.
    let position = position.attempt_move("d4d5".parse().unwrap());
    assert_eq!(position, original);

    // To a destination not in the legal move list.
    let position = position.attempt_move("e2d3".parse().unwrap());
    assert_eq!(position, original);

    // A legal move still works afterwards.
    let position = position.attempt_move("e2e4".parse().unwrap());
    assert_ne!(position, original);
    assert!(position.get(Location(4, 1)).is_empty());
    assert_eq!(
        position.get(Location(4, 3)).kind(),
        Some(PieceKind::Pawn)
    );
}

#[test]
fn automated_play_stays_legal() {
    let mut rng = StdRng::seed_from_u64(0xA11CE);
    let mut position = Position::new();

    for _ in 0..8 {
        if position.legal_moves().is_empty() {
            break;
        }
        let parent = position.clone();
        position = position.choose_automated_move(&mut rng);
        assert!(
            parent
                .legal_moves()
                .iter()
                .any(|&mv| parent.clone().attempt_move(mv) == position),
            "automated move does not correspond to any legal move"
        );
    }
}

#[test]
fn automated_move_on_terminal_position_is_identity() {
    let mut rng = StdRng::seed_from_u64(2);
    let mate = play(Position::new(), &["f2f3", "e7e5", "g2g4", "d8h4"]);
    let expected = mate.clone();
    assert_eq!(mate.choose_automated_move(&mut rng), expected);
}

#[test]
fn automated_game_with_fixed_seed_is_reproducible() {
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut position = Position::new();
        let mut transcript = Vec::new();
        for _ in 0..6 {
            position = position.choose_automated_move(&mut rng);
            transcript.push(position.to_string());
        }
        transcript
    };
    assert_eq!(run(99), run(99));
}
