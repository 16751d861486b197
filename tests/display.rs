use chesser::board::cozy::Position;
use chesser::controller::Session;
use chesser::display::{cell_of, square_at, Geometry, Shade, Snapshot};
use cozy_chess::{Color, Piece, Square};
use pretty_assertions::assert_eq;

#[test]
fn corners_map_to_a8_and_h1() {
    assert_eq!(square_at(0, 0), Square::A8);
    assert_eq!(square_at(7, 7), Square::H1);
    assert_eq!(square_at(7, 4), Square::E1);
    assert_eq!(cell_of(Square::E2), (6, 4));
}

#[test]
fn startpos_snapshot_layout() {
    let snap = Snapshot::capture(&Position::startpos(), None);
    let a8 = snap.cell(0, 0);
    assert_eq!(a8.square, Square::A8);
    assert_eq!(a8.occupant, Some((Color::Black, Piece::Rook)));
    assert_eq!(a8.shade, Shade::Light);
    assert_eq!(snap.cell(0, 1).shade, Shade::Dark);
    assert_eq!(snap.cell(7, 4).occupant, Some((Color::White, Piece::King)));
    assert_eq!(snap.cell(4, 4).occupant, None);
    assert_eq!(snap.cells().filter(|(_, _, c)| c.occupant.is_some()).count(), 32);
    assert!(snap.highlighted().is_empty());
}

#[test]
fn redraw_is_idempotent() {
    let mut s = Session::new(Position::startpos());
    s.click(Square::B1);
    let first = Snapshot::of(&s);
    let second = Snapshot::of(&s);
    assert_eq!(first, second);
}

#[test]
fn selection_highlights_only_its_square() {
    let mut s = Session::new(Position::startpos());
    s.click(Square::G1);
    assert_eq!(Snapshot::of(&s).highlighted(), vec![Square::G1]);

    // illegal destination, highlight goes back to neutral
    s.click(Square::G4);
    let snap = Snapshot::of(&s);
    assert!(snap.highlighted().is_empty());
    assert_eq!(snap, Snapshot::capture(&Position::startpos(), None));
}

#[test]
fn pixels_to_squares() {
    let g = Geometry::new(60.0);
    assert_eq!(g.board_px(), 480.0);
    assert_eq!(g.square_at_px(5.0, 5.0), Some(Square::A8));
    assert_eq!(g.square_at_px(479.0, 479.0), Some(Square::H1));
    assert_eq!(g.square_at_px(250.0, 430.0), Some(Square::E1));
    assert_eq!(g.cell_origin(7, 4), (240.0, 420.0));
}

#[test]
fn pixels_off_the_board_are_ignored() {
    let g = Geometry::new(60.0);
    assert_eq!(g.cell_at(480.0, 10.0), None);
    assert_eq!(g.cell_at(10.0, 490.0), None);
    assert_eq!(g.cell_at(-1.0, 10.0), None);
}
