//! Tests for the Quarto engine through its public API.

use strictly_quarto::{
    Attribute, Cell, Game, LineKind, Move, MoveError, Piece, Ruleset, Seat, format_index,
    is_winning_line, new_game, parse_cell, play, shares_attribute, try_play,
};

fn piece(code: u8) -> Piece {
    Piece::new(code).expect("valid piece code")
}

fn cell(text: &str) -> Cell {
    parse_cell(text).expect("valid cell")
}

/// Plays alternating offer/place turns, starting with whoever is active.
fn play_turns(mut game: Game, turns: &[(u8, &str)]) -> Game {
    for (code, target) in turns {
        let offerer = game.active_player_id().to_string();
        game = try_play(&game, &Move::offer_piece(offerer, piece(*code))).expect("offer accepted");
        let placer = game.active_player_id().to_string();
        game = try_play(&game, &Move::place(placer, cell(target))).expect("placement accepted");
    }
    game
}

#[test]
fn test_shares_attribute_symmetry() {
    for a in 0..16 {
        for b in 0..16 {
            for attribute in [
                Attribute::Shape,
                Attribute::Hole,
                Attribute::Height,
                Attribute::Color,
            ] {
                assert_eq!(
                    shares_attribute(piece(a), piece(b), attribute),
                    shares_attribute(piece(b), piece(a), attribute)
                );
            }
        }
    }
}

#[test]
fn test_concrete_win_and_non_win() {
    assert!(is_winning_line(&[0, 2, 4, 6].map(|c| Some(piece(c)))));
    assert!(!is_winning_line(&[1, 2, 4, 8].map(|c| Some(piece(c)))));
    assert!(!is_winning_line(&[Some(piece(0)), Some(piece(2)), None, Some(piece(6))]));
}

#[test]
fn test_cell_round_trip() {
    for index in 0..16 {
        let text = format_index(index).expect("index in range").to_string();
        assert_eq!(parse_cell(&text).expect("formatted cell parses").index(), index);
    }
}

#[test]
fn test_turn_enforcement() {
    let game = new_game("A", "B", Ruleset::Basic);
    assert_eq!(play(&game, &Move::offer_piece("B", piece(5))), game);
    assert_eq!(
        try_play(&game, &Move::offer_piece("B", piece(5))),
        Err(MoveError::WrongPlayer("B".to_string()))
    );
}

#[test]
fn test_offer_place_sequence() {
    let game = new_game("A", "B", Ruleset::Basic);
    let game = play(
        &play(&game, &Move::offer_piece("A", piece(5))),
        &Move::place("B", cell("a1")),
    );
    assert_eq!(game.board().get(0), Some(piece(5)));
    assert_eq!(game.piece_on_offer(), None);
    assert_eq!(game.active_player(), Seat::Second);
}

#[test]
fn test_double_offer_is_noop() {
    let game = new_game("A", "B", Ruleset::Basic);
    let offered = play(&game, &Move::offer_piece("A", piece(5)));
    let again = play(&offered, &Move::offer_piece("B", piece(3)));
    assert_eq!(again.piece_on_offer(), Some(piece(5)));
    assert_eq!(again, offered);
}

#[test]
fn test_claim_without_win_is_noop() {
    let game = play_turns(new_game("A", "B", Ruleset::Basic), &[(1, "a1"), (2, "b1"), (4, "c1")]);
    let claimant = game.active_player_id().to_string();
    let after = play(&game, &Move::claim(claimant.clone()));
    assert!(!after.game_over());
    assert_eq!(after, game);
    assert_eq!(
        try_play(&game, &Move::claim(claimant)),
        Err(MoveError::NoWinToClaim)
    );
}

#[test]
fn test_advanced_square_win() {
    let game = play_turns(
        new_game("A", "B", Ruleset::Advanced),
        &[(0, "b2"), (2, "c2"), (4, "b3"), (6, "c3")],
    );
    let claimant = game.active_player_id().to_string();
    let won = play(&game, &Move::claim(claimant));

    assert!(won.game_over());
    assert_eq!(won.win_type(), Some(LineKind::Square));
    assert_eq!(won.winning_fields(), Some([5, 6, 9, 10]));
    assert_eq!(won.winning_line().map(|w| w.attribute()), Some(Attribute::Shape));
}

#[test]
fn test_square_does_not_win_under_basic_rules() {
    let game = play_turns(
        new_game("A", "B", Ruleset::Basic),
        &[(0, "b2"), (2, "c2"), (4, "b3"), (6, "c3")],
    );
    let claimant = game.active_player_id().to_string();
    assert_eq!(play(&game, &Move::claim(claimant)), game);
}

#[test]
fn test_missed_win_can_be_claimed_next_turn() {
    // The row is completed by the fourth placement but not claimed; the
    // next player places elsewhere and may still claim it.
    let game = play_turns(
        new_game("A", "B", Ruleset::Basic),
        &[(0, "a1"), (2, "b1"), (4, "c1"), (6, "d1"), (9, "a4")],
    );
    let claimant = game.active_player_id().to_string();
    let won = play(&game, &Move::claim(claimant.clone()));
    assert!(won.game_over());
    assert_eq!(won.player(won.winning_player().expect("winner")), claimant);
    assert_eq!(won.win_type(), Some(LineKind::Row));
    assert_eq!(won.win_index(), Some(0));
}

#[test]
fn test_stale_win_cannot_be_claimed() {
    // Two full turns after the row was completed it drops out of the
    // placement history.
    let game = play_turns(
        new_game("A", "B", Ruleset::Basic),
        &[(0, "a1"), (2, "b1"), (4, "c1"), (6, "d1"), (9, "a4"), (11, "b4")],
    );
    let claimant = game.active_player_id().to_string();
    assert_eq!(play(&game, &Move::claim(claimant)), game);
}

#[test]
fn test_game_round_trips_through_json() {
    let game = play_turns(new_game("A", "B", Ruleset::Advanced), &[(3, "d4"), (12, "a2")]);
    let game = play(&game, &Move::offer_piece(game.active_player_id().to_string(), piece(7)));

    let json = serde_json::to_string(&game).expect("serialize");
    let restored: Game = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, game);
}

#[test]
fn test_move_serialization_shape() {
    let json = serde_json::to_value(Move::place("A", cell("c2"))).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "player": "A", "kind": { "type": "place", "data": "c2" } })
    );
}

#[test]
fn test_moves_after_game_over_are_not_blocked_by_engine() {
    let game = new_game("A", "B", Ruleset::Basic);
    let over = play(&game, &Move::resign("A"));
    assert!(over.game_over());
    let later = play(&over, &Move::offer_draw("A"));
    assert!(later.draw_being_offered());
}

#[test]
fn test_stored_game_with_duplicate_piece_is_rejected() {
    let game = play_turns(new_game("A", "B", Ruleset::Basic), &[(3, "a1")]);
    let mut json = serde_json::to_value(&game).expect("serialize");
    json["board"][5] = serde_json::json!(3);
    assert!(serde_json::from_value::<Game>(json).is_err());
}
