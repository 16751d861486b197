use chesser::board::cozy::{Outcome, Position};
use cozy_chess::{Color, Piece, Square};

const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
const STALEMATE: &str = "k7/8/1Q6/8/8/8/8/7K b - - 0 1";

#[test]
fn apply_startpos_moves_sequence() {
    let moves = vec!["e2e4".to_string(), "e7e5".to_string(), "g1f3".to_string()];
    let pos = Position::set_from_start_and_moves(&moves).expect("legal move sequence");
    assert_eq!(pos.side_to_move(), Color::Black, "expected black to move after 3 plies");
    assert_eq!(pos.history().len(), 3);
    assert_eq!(pos.piece_at(Square::F3), Some((Color::White, Piece::Knight)));
    assert_eq!(pos.piece_at(Square::G1), None);
}

#[test]
fn illegal_uci_move_is_rejected_without_change() {
    let mut pos = Position::startpos();
    assert!(pos.make_move_uci("e2e5").is_err());
    assert!(pos.history().is_empty());
    assert_eq!(pos.side_to_move(), Color::White);
}

#[test]
fn startpos_has_twenty_legal_moves_and_no_outcome() {
    let pos = Position::startpos();
    assert_eq!(pos.legal_moves().len(), 20);
    assert_eq!(pos.outcome(), None);
    assert!(!pos.in_check());
}

#[test]
fn checkmate_is_reported_with_winner() {
    let pos = Position::from_fen(FOOLS_MATE).expect("valid fen");
    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate());
    assert!(pos.legal_moves().is_empty());
    assert_eq!(pos.outcome(), Some(Outcome::Checkmate { winner: Color::Black }));
}

#[test]
fn stalemate_is_reported_as_stalemate() {
    let pos = Position::from_fen(STALEMATE).expect("valid fen");
    assert!(pos.is_stalemate());
    assert!(!pos.is_checkmate());
    assert_eq!(pos.outcome(), Some(Outcome::Stalemate));
}

#[test]
fn fifty_move_rule_is_a_draw_not_a_stalemate() {
    let pos = Position::from_fen("k7/8/8/8/8/8/8/1R5K w - - 100 80").expect("valid fen");
    assert!(!pos.legal_moves().is_empty());
    assert_eq!(pos.outcome(), Some(Outcome::Draw));
}

#[test]
fn bad_fen_is_an_error() {
    assert!(Position::from_fen("not a fen").is_err());
}
