//! Integration tests for the Pentago game engine.
//!
//! These tests drive complete games through the public API only.

use pentago_core::*;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Play a script of `"pos quadrant rotation"` moves, alternating colors from Black
fn play_script(game: &mut GameState, script: &[&str]) {
    for (i, line) in script.iter().enumerate() {
        let color = if i % 2 == 0 { Color::Black } else { Color::White };
        let mv: Move = line.parse().unwrap();
        game.play(color, mv)
            .unwrap_or_else(|e| panic!("move {} ({}) rejected: {}", i + 1, line, e));
    }
}

fn pos(token: &str) -> Position {
    token.parse().unwrap()
}

#[test]
fn test_opening_move() {
    let mut game = GameState::new();
    game.apply_move(Color::Black, pos("b0"), Quadrant::BottomRight, Rotation::Clockwise)
        .unwrap();

    assert_eq!(game.current_player(), Color::White);
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert_eq!(game.board().get(pos("b0")), Cell::Black);
    assert_eq!(game.marble_count(), 1);
}

#[test]
fn test_white_cannot_open() {
    let mut game = GameState::new();
    let result = game.apply_move(Color::White, pos("a0"), Quadrant::TopLeft, Rotation::Clockwise);
    assert_eq!(result, Err(GameError::WrongTurn));
    assert_eq!(game.marble_count(), 0);
    assert_eq!(game.current_player(), Color::Black);
}

#[test]
fn test_occupied_cell_is_rejected_without_rotation() {
    let mut game = GameState::new();
    play_script(&mut game, &["a0 4 C", "a1 4 C"]);
    let board_before = *game.board();

    let result = game.apply_move(Color::Black, pos("a1"), Quadrant::TopLeft, Rotation::Clockwise);

    assert_eq!(result, Err(GameError::CellOccupied));
    assert_eq!(*game.board(), board_before);
    assert_eq!(game.current_player(), Color::Black);
}

#[test]
fn test_black_wins_before_rotation() {
    let mut game = GameState::new();
    play_script(
        &mut game,
        &[
            "b0 4 C", "d0 4 C", //
            "b1 4 C", "d1 4 C", //
            "b2 4 C", "e0 4 A", //
            "b3 4 C", "f2 4 C", //
        ],
    );
    let board_before = *game.board();

    // b4 completes row b; quadrant 3 holds White marbles that would move
    let events = game
        .apply_move(Color::Black, pos("b4"), Quadrant::BottomLeft, Rotation::Clockwise)
        .unwrap();

    assert_eq!(game.phase(), GamePhase::BlackWon);
    assert_eq!(game.winner(), Some(Color::Black));
    assert_eq!(game.current_player(), Color::Black);
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::QuadrantRotated { .. })));
    for p in Quadrant::BottomLeft.positions() {
        assert_eq!(game.board().get(p), board_before.get(p));
    }
    assert_eq!(
        game.board().render(&Glyphs::ASCII),
        concat!(
            "  0 1 2   3 4 5\n",
            "a . . . | . . .\n",
            "b X X X | X X .\n",
            "c . . . | . . .\n",
            "  -------------\n",
            "d O O . | . . .\n",
            "e O . . | . . .\n",
            "f . . O | . . .\n",
        )
    );
}

#[test]
fn test_rotation_completes_a_line() {
    let mut game = GameState::new();
    play_script(
        &mut game,
        &[
            "a0 4 C", "f5 4 C", //
            "a1 4 C", "f4 4 C", //
            "a2 4 C", "e5 4 A", //
            "b3 4 C", "e4 4 C", //
        ],
    );
    assert!(!game.board().has_five_in_a_row(Color::Black));

    // c3 and b3 swing up into a3 and a4
    let events = game
        .apply_move(Color::Black, pos("c3"), Quadrant::TopRight, Rotation::Clockwise)
        .unwrap();

    assert_eq!(game.phase(), GamePhase::BlackWon);
    assert_eq!(game.current_player(), Color::White);
    assert!(events.contains(&GameEvent::GameWon {
        winner: Color::Black,
        before_rotation: false,
    }));

    let board_before = *game.board();
    let result = game.apply_move(Color::White, pos("d0"), Quadrant::TopLeft, Rotation::Clockwise);
    assert_eq!(result, Err(GameError::GameFinished));
    assert_eq!(*game.board(), board_before);
    assert!(game.valid_moves().is_empty());
}

#[test]
fn test_full_board_is_a_draw() {
    let mut game = GameState::with_players("alice", "jake");
    play_script(
        &mut game,
        &[
            "f3 4 C", "c2 4 C", "b1 4 A", "e3 1 C", "a5 1 C", "a1 4 C", //
            "e3 2 C", "f0 3 C", "f1 3 C", "e1 2 A", "d1 4 C", "c3 4 A", //
            "f3 2 A", "c1 2 C", "b0 2 C", "d3 4 A", "b3 4 C", "c0 3 C", //
            "f1 1 A", "a1 4 A", "e0 3 A", "f0 4 C", "b5 1 A", "c4 1 C", //
            "f5 2 A", "b3 4 C", "a2 1 C", "c5 1 C", "a3 2 A", "f4 3 A", //
            "f0 2 C", "d2 3 C", "c2 1 A", "e3 2 A", "b4 2 C", //
        ],
    );
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert_eq!(game.marble_count(), 35);

    let events = game.play(Color::White, "e4 4 C".parse().unwrap()).unwrap();

    assert_eq!(game.phase(), GamePhase::Draw);
    assert_eq!(game.winner(), None);
    assert!(game.board().is_full());
    assert_eq!(game.marble_count(), CELL_COUNT);
    assert_eq!(game.current_player(), Color::Black);
    assert_eq!(
        events,
        vec![
            GameEvent::MarblePlaced {
                color: Color::White,
                position: pos("e4"),
            },
            GameEvent::QuadrantRotated {
                quadrant: Quadrant::BottomRight,
                rotation: Rotation::Clockwise,
            },
            GameEvent::GameDrawn,
            GameEvent::TurnPassed { next: Color::Black },
        ]
    );
    assert_eq!(
        game.to_json_friendly().rows,
        vec!["WWBBBB", "BBWWBW", "WWBWBW", "BBWBWB", "BWBWWB", "WBWBWW"]
    );
}

#[test]
fn test_random_games_count_marbles() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new();
        let mut moves_played = 0;

        while !game.is_finished() {
            let moves = game.valid_moves();
            let mv = *moves.choose(&mut rng).expect("unfinished game has moves");
            let mover = game.current_player();

            game.play(mover, mv).unwrap();
            moves_played += 1;

            assert_eq!(game.marble_count(), moves_played);
            assert_eq!(
                game.board().count(Cell::Black)
                    + game.board().count(Cell::White)
                    + game.board().count(Cell::Empty),
                CELL_COUNT
            );
            if !game.is_finished() {
                assert_eq!(game.current_player(), mover.other());
            }
        }

        assert!(moves_played <= CELL_COUNT);
        match game.phase() {
            GamePhase::BlackWon => assert!(game.board().has_five_in_a_row(Color::Black)),
            GamePhase::WhiteWon => assert!(game.board().has_five_in_a_row(Color::White)),
            GamePhase::Draw => assert!(game.board().is_full()),
            GamePhase::InProgress => unreachable!(),
        }

        // Once finished, nothing gets through
        let before = game.clone();
        let any_cell = Position::all().next().unwrap();
        assert_eq!(
            game.apply_move(
                game.current_player(),
                any_cell,
                Quadrant::TopLeft,
                Rotation::Clockwise
            ),
            Err(GameError::GameFinished)
        );
        assert_eq!(game, before);
    }
}

#[test]
fn test_game_state_serde_roundtrip() {
    let mut game = GameState::with_players("alice", "jake");
    play_script(&mut game, &["c2 1 A", "d4 3 C", "a5 2 C"]);

    let json = serde_json::to_string(&game).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
    assert_eq!(restored.player_name(Color::White), "jake");
}
