use cozy_chess::{Board as CozyBoard, Color, GameStatus, Move, Piece, Square};

/// How a finished game ended, as reported by the rules library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    /// Drawn for any reason other than stalemate (fifty-move rule).
    Draw,
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Checkmate { winner } => format!("Checkmate! {} wins.", color_name(*winner)),
            Outcome::Stalemate => "Stalemate! The game is drawn.".to_string(),
            Outcome::Draw => "Draw by the fifty-move rule.".to_string(),
        }
    }
}

pub fn color_name(color: Color) -> &'static str {
    match color { Color::White => "White", Color::Black => "Black" }
}

#[derive(Clone, Debug)]
pub struct Position {
    board: CozyBoard,
    history: Vec<Move>,
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: CozyBoard::default(), history: Vec::new() }
    }

    pub fn from_fen(fen: &str) -> Result<Self, String> {
        CozyBoard::from_fen(fen, false)
            .map(|b| Self { board: b, history: Vec::new() })
            .map_err(|e| format!("FEN error: {e:?}"))
    }

    pub fn board(&self) -> &CozyBoard { &self.board }

    pub fn history(&self) -> &[Move] { &self.history }

    pub fn side_to_move(&self) -> Color { self.board.side_to_move() }

    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let piece = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some((color, piece))
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        self.board.generate_moves(|ml| { moves.extend(ml); false });
        moves
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// Applies `mv`, which must come from `legal_moves`.
    pub fn play(&mut self, mv: Move) {
        self.board.play(mv);
        self.history.push(mv);
    }

    pub fn make_move_uci(&mut self, mv_uci: &str) -> Result<(), String> {
        let found = self.legal_moves().into_iter().find(|m| format!("{}", m) == mv_uci);
        if let Some(m) = found { self.play(m); Ok(()) } else { Err(format!("Illegal move: {}", mv_uci)) }
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self, String> {
        let mut pos = Self::startpos();
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }

    pub fn in_check(&self) -> bool { !self.board.checkers().is_empty() }

    pub fn is_checkmate(&self) -> bool {
        self.board.status() == GameStatus::Won
    }

    pub fn is_stalemate(&self) -> bool {
        self.board.status() == GameStatus::Drawn && !self.in_check() && self.legal_moves().is_empty()
    }

    /// `None` while the game is still going.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_checkmate() {
            // the side to move is the one mated
            Some(Outcome::Checkmate { winner: !self.side_to_move() })
        } else if self.is_stalemate() {
            Some(Outcome::Stalemate)
        } else if self.board.status() == GameStatus::Drawn {
            Some(Outcome::Draw)
        } else {
            None
        }
    }
}
