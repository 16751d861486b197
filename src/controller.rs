use cozy_chess::{Color, Move, Piece, Rank, Square};
use log::{debug, info};

use crate::board::cozy::{color_name, Outcome, Position};
use crate::opponent::MoveSelector;

/// The human always plays White.
pub const HUMAN: Color = Color::White;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Origin square chosen, waiting for the destination click.
    Armed(Square),
}

impl Phase {
    pub fn selection(&self) -> Option<Square> {
        match self { Phase::Idle => None, Phase::Armed(sq) => Some(*sq) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Ignore,
    Select(Square),
    Deselect,
    Play(Move),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub phase: Phase,
    pub action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Redraw,
    /// Run `Session::opponent_turn` after the pacing delay.
    ScheduleOpponent,
    GameOver(Outcome),
}

/// Builds the move meant by clicking `from` and then `to`.
///
/// Pawns reaching the first or eighth rank always promote to a queen. A king
/// stepping two files along its rank is rewritten to the rules library's
/// castling form (king takes own rook) when the matching right exists.
pub fn candidate_move(pos: &Position, from: Square, to: Square) -> Move {
    let mut target = to;
    let mut promotion = None;
    match pos.piece_at(from) {
        Some((_, Piece::Pawn)) if matches!(to.rank(), Rank::First | Rank::Eighth) => {
            promotion = Some(Piece::Queen);
        }
        Some((color, Piece::King)) => {
            if let Some(rook) = castling_rook(pos, color, from, to) { target = rook; }
        }
        _ => {}
    }
    Move { from, to: target, promotion }
}

fn castling_rook(pos: &Position, color: Color, from: Square, to: Square) -> Option<Square> {
    if from.rank() != to.rank() { return None; }
    let (f, t) = (from.file() as i8, to.file() as i8);
    if (t - f).abs() != 2 { return None; }
    let rights = pos.board().castle_rights(color);
    let rook_file = (if t > f { rights.short } else { rights.long })?;
    Some(Square::new(rook_file, from.rank()))
}

fn selectable(pos: &Position, human: Color, sq: Square) -> bool {
    pos.side_to_move() == human && matches!(pos.piece_at(sq), Some((c, _)) if c == human)
}

/// One transition of the click gesture. Never touches the position.
pub fn dispatch(phase: Phase, pos: &Position, human: Color, clicked: Square) -> Step {
    match phase {
        Phase::Idle => {
            if selectable(pos, human, clicked) {
                Step { phase: Phase::Armed(clicked), action: Action::Select(clicked) }
            } else {
                Step { phase: Phase::Idle, action: Action::Ignore }
            }
        }
        Phase::Armed(from) => {
            // The origin is checked again in case the board moved under the selection.
            if !selectable(pos, human, from) {
                return Step { phase: Phase::Idle, action: Action::Deselect };
            }
            let mv = candidate_move(pos, from, clicked);
            let action = if pos.is_legal(mv) { Action::Play(mv) } else { Action::Deselect };
            Step { phase: Phase::Idle, action }
        }
    }
}

pub struct Session {
    start: Position,
    position: Position,
    phase: Phase,
    outcome: Option<Outcome>,
    opponent_pending: bool,
}

impl Session {
    pub fn new(start: Position) -> Self {
        info!("new game, {} to move", color_name(start.side_to_move()));
        Self { position: start.clone(), start, phase: Phase::Idle, outcome: None, opponent_pending: false }
    }

    pub fn position(&self) -> &Position { &self.position }
    pub fn phase(&self) -> Phase { self.phase }
    pub fn selection(&self) -> Option<Square> { self.phase.selection() }
    pub fn outcome(&self) -> Option<Outcome> { self.outcome }
    pub fn opponent_pending(&self) -> bool { self.opponent_pending }

    /// Back to the starting position. Drops any selection and any pending opponent turn.
    pub fn new_game(&mut self) -> Vec<Effect> {
        info!("new game");
        self.position = self.start.clone();
        self.phase = Phase::Idle;
        self.outcome = None;
        self.opponent_pending = false;
        vec![Effect::Redraw]
    }

    pub fn click(&mut self, sq: Square) -> Vec<Effect> {
        if self.outcome.is_some() || self.opponent_pending {
            debug!("click on {} ignored", sq);
            return Vec::new();
        }
        let step = dispatch(self.phase, &self.position, HUMAN, sq);
        self.phase = step.phase;
        match step.action {
            Action::Ignore => {
                debug!("click on {} selects nothing", sq);
                Vec::new()
            }
            Action::Select(from) => {
                debug!("selected {}", from);
                vec![Effect::Redraw]
            }
            Action::Deselect => {
                debug!("no legal move to {}, selection cleared", sq);
                vec![Effect::Redraw]
            }
            Action::Play(mv) => {
                info!("{} plays {}", color_name(HUMAN), mv);
                self.position.play(mv);
                self.opponent_pending = true;
                vec![Effect::Redraw, Effect::ScheduleOpponent]
            }
        }
    }

    /// The deferred reply to an accepted human move. Does nothing unless one is pending.
    pub fn opponent_turn<S: MoveSelector + ?Sized>(&mut self, selector: &mut S) -> Vec<Effect> {
        if !self.opponent_pending { return Vec::new(); }
        self.opponent_pending = false;
        let mut effects = Vec::new();
        if self.position.outcome().is_none() {
            if let Some(mv) = selector.select_move(&self.position) {
                info!("{} plays {}", color_name(self.position.side_to_move()), mv);
                self.position.play(mv);
                effects.push(Effect::Redraw);
            }
        }
        if let Some(outcome) = self.position.outcome() {
            info!("game over: {}", outcome.message());
            self.outcome = Some(outcome);
            effects.push(Effect::GameOver(outcome));
        }
        effects
    }
}
