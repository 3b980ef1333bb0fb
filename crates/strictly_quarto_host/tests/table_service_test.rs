//! Tests for the challenge lifecycle and move submission.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::thread;
use strictly_quarto::{Cell, Move, MoveError, Piece, Ruleset};
use strictly_quarto_host::{GameStore, MemoryStore, TableError, TableRecord, TableService, game_id};

fn piece(code: u8) -> Piece {
    Piece::new(code).expect("valid piece")
}

fn cell(text: &str) -> Cell {
    text.parse().expect("valid cell")
}

fn accepted(ruleset: Ruleset) -> (TableService<MemoryStore>, String) {
    let service = TableService::new(MemoryStore::new());
    let id = service.challenge("U1", "U2", "general").expect("challenge");
    service.choose_rules(&id, ruleset).expect("rules");
    service
        .accept(&id, &mut StdRng::seed_from_u64(42))
        .expect("accept");
    (service, id)
}

fn active(service: &TableService<MemoryStore>, id: &str) -> String {
    let record = service.status(id).expect("status");
    record
        .game()
        .as_ref()
        .expect("accepted game")
        .active_player_id()
        .to_string()
}

fn turn(service: &TableService<MemoryStore>, id: &str, code: u8, target: &str) {
    service
        .submit(id, &Move::offer_piece(active(service, id), piece(code)))
        .expect("offer");
    service
        .submit(id, &Move::place(active(service, id), cell(target)))
        .expect("place");
}

#[test]
fn test_game_id_matches_challenge() {
    let service = TableService::new(MemoryStore::new());
    let id = service.challenge("U2", "U1", "general").unwrap();
    assert_eq!(id, game_id("U1", "U2"));
    let record = service.status(&id).unwrap();
    assert_eq!(record.challenger(), "U2");
    assert_eq!(record.channel(), "general");
    assert!(!record.accepted());
}

#[test]
fn test_rules_carry_into_game() {
    let (service, id) = accepted(Ruleset::Advanced);
    let record = service.status(&id).unwrap();
    assert!(*record.accepted());
    assert!(record.game().as_ref().unwrap().advanced_rules());
    assert!(matches!(
        service.choose_rules(&id, Ruleset::Basic),
        Err(TableError::AlreadyAccepted(_))
    ));
}

#[test]
fn test_seat_order_depends_on_rng() {
    let firsts: Vec<String> = (0..32)
        .map(|seed| {
            let service = TableService::new(MemoryStore::new());
            let id = service.challenge("U1", "U2", "general").unwrap();
            let record = service
                .accept(&id, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            record.game().as_ref().unwrap().players()[0].clone()
        })
        .collect();
    assert!(firsts.iter().any(|p| p == "U1"));
    assert!(firsts.iter().any(|p| p == "U2"));
}

#[test]
fn test_decline_removes_record() {
    let service = TableService::new(MemoryStore::new());
    let id = service.challenge("U1", "U2", "general").unwrap();
    service.decline(&id).unwrap();
    assert!(service.store().get(&id).unwrap().is_none());
    assert!(matches!(service.status(&id), Err(TableError::NotFound(_))));
    assert!(matches!(service.decline(&id), Err(TableError::NotFound(_))));
    // The pair may challenge again.
    assert!(service.challenge("U1", "U2", "general").is_ok());
}

#[test]
fn test_rejected_move_leaves_record_unchanged() {
    let (service, id) = accepted(Ruleset::Basic);
    let before = service.status(&id).unwrap();
    let waiting = if active(&service, &id) == "U1" { "U2" } else { "U1" };
    let result = service.submit(&id, &Move::offer_piece(waiting, piece(3)));
    assert!(matches!(
        result,
        Err(TableError::Rejected(MoveError::WrongPlayer(_)))
    ));
    assert_eq!(service.status(&id).unwrap(), before);
}

#[test]
fn test_failed_claim_sets_tried_for_victory() {
    let (service, id) = accepted(Ruleset::Basic);
    turn(&service, &id, 1, "a1");

    let claimant = active(&service, &id);
    assert!(matches!(
        service.submit(&id, &Move::claim(claimant.clone())),
        Err(TableError::Rejected(MoveError::NoWinToClaim))
    ));
    assert!(*service.status(&id).unwrap().tried_for_victory());

    service
        .submit(&id, &Move::offer_piece(claimant, piece(2)))
        .unwrap();
    assert!(!*service.status(&id).unwrap().tried_for_victory());
}

#[test]
fn test_moves_after_game_over_are_rejected() {
    let (service, id) = accepted(Ruleset::Basic);
    let resigning = active(&service, &id);
    let record = service.submit(&id, &Move::resign(resigning.clone())).unwrap();
    assert!(record.game().as_ref().unwrap().game_over());
    assert!(matches!(
        service.submit(&id, &Move::offer_draw(resigning)),
        Err(TableError::GameOver(_))
    ));
}

#[test]
fn test_claimed_win_is_stored() {
    let (service, id) = accepted(Ruleset::Basic);
    for (code, target) in [(0, "a3"), (2, "b3"), (4, "c3"), (6, "d3")] {
        turn(&service, &id, code, target);
    }
    let claimant = active(&service, &id);
    let record = service.submit(&id, &Move::claim(claimant.clone())).unwrap();
    let game = record.game().as_ref().unwrap();
    assert!(game.game_over());
    assert_eq!(game.player(game.winning_player().unwrap()), claimant);
    assert_eq!(game.winning_fields(), Some([8, 9, 10, 11]));
}

#[test]
fn test_concurrent_submissions_apply_once() {
    let (service, id) = accepted(Ruleset::Basic);
    let service = Arc::new(service);
    let offerer = active(&service, &id);

    let handles: Vec<_> = (0..8u8)
        .map(|code| {
            let service = Arc::clone(&service);
            let id = id.clone();
            let offerer = offerer.clone();
            thread::spawn(move || {
                service
                    .submit(&id, &Move::offer_piece(offerer, piece(code)))
                    .is_ok()
            })
        })
        .collect();
    let accepted = handles
        .into_iter()
        .map(|h| h.join().expect("thread"))
        .filter(|ok| *ok)
        .count();

    assert_eq!(accepted, 1);
    let record = service.status(&id).unwrap();
    assert!(record.game().as_ref().unwrap().piece_on_offer().is_some());
}

#[test]
fn test_record_round_trips_through_json() {
    let (service, id) = accepted(Ruleset::Advanced);
    turn(&service, &id, 9, "c2");
    let record = service.status(&id).unwrap();
    let json = serde_json::to_string(&record).unwrap();
    let restored: TableRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, restored);
}

#[test]
fn test_repeated_claim_is_refused_until_next_offer() {
    let (service, id) = accepted(Ruleset::Basic);
    turn(&service, &id, 1, "a1");
    let claimant = active(&service, &id);

    assert!(service.submit(&id, &Move::claim(claimant.clone())).is_err());
    let before = service.status(&id).unwrap();
    assert!(matches!(
        service.submit(&id, &Move::claim(claimant.clone())),
        Err(TableError::AlreadyTriedForVictory(_))
    ));
    assert_eq!(service.status(&id).unwrap(), before);

    service
        .submit(&id, &Move::offer_piece(claimant, piece(2)))
        .unwrap();
    let placer = active(&service, &id);
    service.submit(&id, &Move::place(placer.clone(), cell("b1"))).unwrap();
    assert!(matches!(
        service.submit(&id, &Move::claim(placer)),
        Err(TableError::Rejected(MoveError::NoWinToClaim))
    ));
}

#[test]
fn test_decline_then_rechallenge_from_many_threads() {
    let service = Arc::new(TableService::new(MemoryStore::new()));
    let id = service.challenge("U1", "U2", "general").unwrap();
    service.decline(&id).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                service
                    .challenge("U1", "U2", &format!("channel{}", n))
                    .is_ok()
            })
        })
        .collect();
    let issued = handles
        .into_iter()
        .map(|h| h.join().expect("thread"))
        .filter(|ok| *ok)
        .count();
    assert_eq!(issued, 1);
}
