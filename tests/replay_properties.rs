//! Replay behaviour over full records, through the public API only.

use reversi_kifu::store::Store;
use reversi_kifu::{Board, Cell, Player, Position, ReplayError, Session, parse_move, player_at, replay};

/// A 60-ply training line; C8 is entered twice, leaving G7 empty.
const FULL_GAME: &str = "F5 D6 C3 D3 C4 F4 F6 F3 E6 E7 D7 G6 F8 F7 G5 H6 H4 G4 H3 C5 \
                         E3 E8 C8 D8 B5 C6 G3 H5 B4 C7 B6 A6 A3 B3 A4 A5 C2 D2 E2 B1 \
                         C1 D1 E1 F2 F1 G1 G2 H1 H2 A2 A1 B2 A7 B7 A8 B8 C8 G8 H8 H7";

fn full_game() -> Vec<&'static str> {
    FULL_GAME.split_whitespace().collect()
}

#[test]
fn incremental_application_agrees_with_full_rebuild_for_every_prefix() {
    let moves = full_game();

    let mut board = Board::new();
    let mut rejected = Vec::new();
    for (n, notation) in moves.iter().enumerate() {
        let outcome = replay(&moves, n as i64);
        assert_eq!(outcome.board, board, "diverged before ply {n}");

        let pos = parse_move(notation).unwrap();
        if let Err(err) = board.place(pos, player_at(n)) {
            rejected.push((n, err));
        }
    }
    assert_eq!(
        rejected,
        vec![(
            56,
            ReplayError::OccupiedCell {
                position: parse_move("C8").unwrap()
            }
        )]
    );
    assert_eq!(replay(&moves, moves.len() as i64).board, board);
}

#[test]
fn disc_total_grows_by_one_per_applied_ply() {
    let moves = full_game();

    for n in 0..moves.len() {
        let before = replay(&moves, n as i64);
        let after = replay(&moves, n as i64 + 1);
        let total = |b: &Board| {
            let (black, white) = b.count();
            black as usize + white as usize
        };

        if after.warnings.len() == before.warnings.len() {
            assert_eq!(total(&after.board), total(&before.board) + 1);
        } else {
            assert_eq!(after.board, before.board);
        }
    }
}

#[test]
fn duplicate_square_in_record_is_skipped_but_rest_still_replays() {
    // "C8" appears twice in FULL_GAME; the second one lands on an occupied cell.
    let moves = full_game();
    let outcome = replay(&moves, moves.len() as i64);

    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].index, 56);
    assert_eq!(outcome.warnings[0].notation, "C8");
    assert_eq!(outcome.board.cell(Position::new(6, 6).unwrap()), Cell::Empty);
    assert_eq!(
        outcome.warnings[0].reason,
        ReplayError::OccupiedCell {
            position: parse_move("C8").unwrap()
        }
        .to_string()
    );
    assert_eq!(
        outcome.board.cell(Position::new(6, 7).unwrap()),
        match player_at(59) {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    );
}

#[test]
fn navigation_jumps_are_independent_of_history() {
    let moves: Vec<String> = full_game().into_iter().map(String::from).collect();

    let (session, direct) = Session::new(moves.clone()).seek(20);

    let (session_b, _) = Session::new(moves).last();
    let (session_b, _) = session_b.seek(3);
    let (session_b, via_detour) = session_b.seek(20);

    assert_eq!(direct, via_detour);
    assert_eq!(session, session_b);
}

#[test]
fn store_record_replays_like_its_move_list() {
    let store = Store::from_json(
        r#"{ "kifuByPath": { "A/B": [{ "name": "short", "moves": ["F5", "d6", "C3"] }] } }"#,
    )
    .unwrap();
    let kifu = store.kifu("A", "B", 0).unwrap();

    let outcome = replay(&kifu.moves, 3);

    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].index, 1);
    assert_eq!(outcome.next_player, Player::White);
    assert_eq!(outcome.board.cell(Position::new(2, 2).unwrap()), Cell::Black);
}
