use cozy_chess::{Color, File, Piece, Rank, Square};

use crate::board::cozy::Position;
use crate::controller::Session;

pub const BOARD_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shade { Light, Dark }

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub square: Square,
    pub occupant: Option<(Color, Piece)>,
    pub shade: Shade,
    pub highlighted: bool,
}

/// Row 0 is the top of the window (eighth rank), col 0 the a-file.
pub fn square_at(row: usize, col: usize) -> Square {
    Square::new(File::index(col), Rank::index(BOARD_SIZE - 1 - row))
}

pub fn cell_of(sq: Square) -> (usize, usize) {
    (BOARD_SIZE - 1 - sq.rank() as usize, sq.file() as usize)
}

pub fn shade_of(row: usize, col: usize) -> Shade {
    if (row + col) % 2 == 0 { Shade::Light } else { Shade::Dark }
}

/// Every cell of the board, fully recomputed on each capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    cells: [Cell; BOARD_SIZE * BOARD_SIZE],
}

impl Snapshot {
    pub fn capture(pos: &Position, selection: Option<Square>) -> Self {
        let cells = std::array::from_fn(|i| {
            let (row, col) = (i / BOARD_SIZE, i % BOARD_SIZE);
            let square = square_at(row, col);
            Cell {
                square,
                occupant: pos.piece_at(square),
                shade: shade_of(row, col),
                highlighted: selection == Some(square),
            }
        });
        Self { cells }
    }

    pub fn of(session: &Session) -> Self {
        Self::capture(session.position(), session.selection())
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * BOARD_SIZE + col]
    }

    /// Cells in row-major screen order with their `(row, col)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells.iter().enumerate().map(|(i, c)| (i / BOARD_SIZE, i % BOARD_SIZE, c))
    }

    pub fn highlighted(&self) -> Vec<Square> {
        self.cells.iter().filter(|c| c.highlighted).map(|c| c.square).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub cell_size: f32,
}

impl Geometry {
    pub fn new(cell_size: f32) -> Self { Self { cell_size } }

    pub fn board_px(&self) -> f32 { self.cell_size * BOARD_SIZE as f32 }

    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (col as f32 * self.cell_size, row as f32 * self.cell_size)
    }

    /// `None` when the point is off the board.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 || x >= self.board_px() || y >= self.board_px() { return None; }
        let col = (x / self.cell_size) as usize;
        let row = (y / self.cell_size) as usize;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some((row, col))
    }

    pub fn square_at_px(&self, x: f32, y: f32) -> Option<Square> {
        self.cell_at(x, y).map(|(row, col)| square_at(row, col))
    }
}
