use log::debug;
use macroquad::prelude::*;

use crate::assets::PieceSet;
use crate::board::cozy::{color_name, Position};
use crate::config::Config;
use crate::controller::{Effect, Session, HUMAN};
use crate::display::{Geometry, Shade, Snapshot};
use crate::opponent::RandomMover;

const LIGHT_COLOUR: Color = WHITE;
const DARK_COLOUR: Color = GRAY;
const HIGHLIGHT_COLOUR: Color = YELLOW;
const STATUS_HEIGHT: f32 = 28.0;

pub fn window_conf(config: &Config) -> Conf {
    let side = (config.square_size * 8) as i32;
    Conf {
        window_title: "Chess vs AI".to_string(),
        window_width: side,
        window_height: side + STATUS_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

struct Notice {
    title: &'static str,
    text: String,
}

pub struct App {
    session: Session,
    mover: RandomMover,
    geometry: Geometry,
    textures: PieceSet<Texture2D>,
    snapshot: Snapshot,
    ai_delay: f64,
    /// Frame time at which the pending opponent turn fires.
    opponent_due: Option<f64>,
    notice: Option<Notice>,
}

impl App {
    /// Must be called inside the window, textures need a GL context.
    pub fn new(config: &Config, start: Position, images: &PieceSet<Image>) -> Self {
        let textures = images.map(|img| {
            let texture = Texture2D::from_image(img);
            texture.set_filter(FilterMode::Linear);
            texture
        });
        let session = Session::new(start);
        let snapshot = Snapshot::of(&session);
        Self {
            session,
            mover: RandomMover::new(config.seed),
            geometry: Geometry::new(config.square_size as f32),
            textures,
            snapshot,
            ai_delay: config.ai_delay_ms as f64 / 1000.0,
            opponent_due: None,
            notice: None,
        }
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Redraw => self.snapshot = Snapshot::of(&self.session),
                Effect::ScheduleOpponent => self.opponent_due = Some(get_time() + self.ai_delay),
                Effect::GameOver(outcome) => {
                    self.notice = Some(Notice { title: "Game Over", text: outcome.message() });
                }
            }
        }
    }

    fn handle_input(&mut self) {
        if self.notice.is_some() {
            if is_mouse_button_pressed(MouseButton::Left) || is_key_pressed(KeyCode::Enter) {
                self.notice = None;
            }
            return;
        }
        if is_key_pressed(KeyCode::N) {
            self.opponent_due = None;
            let effects = self.session.new_game();
            self.apply(effects);
            return;
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            match self.geometry.square_at_px(x, y) {
                Some(sq) => {
                    let effects = self.session.click(sq);
                    self.apply(effects);
                }
                None => debug!("click at ({x:.0}, {y:.0}) is off the board"),
            }
        }
    }

    fn run_deferred(&mut self) {
        let Some(due) = self.opponent_due else { return };
        if get_time() < due { return; }
        self.opponent_due = None;
        let effects = self.session.opponent_turn(&mut self.mover);
        self.apply(effects);
    }

    fn status_line(&self) -> String {
        let pos = self.session.position();
        if let Some(outcome) = self.session.outcome() {
            return format!("{} Press N for a new game.", outcome.message());
        }
        if self.session.opponent_pending() {
            return format!("{} is thinking...", color_name(pos.side_to_move()));
        }
        let mut line = format!("{} to move", color_name(pos.side_to_move()));
        if pos.in_check() { line.push_str(" (check)"); }
        if pos.side_to_move() == HUMAN && self.session.selection().is_none() {
            line.push_str(" - click a piece");
        }
        line
    }

    fn draw_board(&self) {
        let size = self.geometry.cell_size;
        for (row, col, cell) in self.snapshot.cells() {
            let (x, y) = self.geometry.cell_origin(row, col);
            let colour = match (cell.highlighted, cell.shade) {
                (true, _) => HIGHLIGHT_COLOUR,
                (false, Shade::Light) => LIGHT_COLOUR,
                (false, Shade::Dark) => DARK_COLOUR,
            };
            draw_rectangle(x, y, size, size, colour);
            if let Some((color, piece)) = cell.occupant {
                draw_texture_ex(
                    self.textures.get(color, piece),
                    x,
                    y,
                    WHITE,
                    DrawTextureParams { dest_size: Some(vec2(size, size)), ..Default::default() },
                );
            }
        }
    }

    fn draw_status(&self) {
        let top = self.geometry.board_px();
        draw_rectangle(0.0, top, self.geometry.board_px(), STATUS_HEIGHT, DARKGRAY);
        draw_text(&self.status_line(), 6.0, top + STATUS_HEIGHT - 8.0, 18.0, WHITE);
    }

    fn draw_notice(&self, notice: &Notice) {
        let side = self.geometry.board_px();
        draw_rectangle(0.0, 0.0, side, side, Color::new(0.0, 0.0, 0.0, 0.45));
        let (w, h) = (side * 0.8, 110.0);
        let (x, y) = ((side - w) / 2.0, (side - h) / 2.0);
        draw_rectangle(x, y, w, h, LIGHTGRAY);
        draw_rectangle_lines(x, y, w, h, 2.0, BLACK);
        for (text, size, dy) in [(notice.title, 30.0, 36.0), (notice.text.as_str(), 20.0, 68.0), ("click to close", 16.0, 96.0)] {
            let dims = measure_text(text, None, size as u16, 1.0);
            draw_text(text, x + (w - dims.width) / 2.0, y + dy, size, BLACK);
        }
    }

    fn draw(&self) {
        clear_background(BLACK);
        self.draw_board();
        self.draw_status();
        if let Some(notice) = &self.notice { self.draw_notice(notice); }
    }

    pub async fn run(mut self) {
        loop {
            if is_key_pressed(KeyCode::Escape) { break; }
            self.handle_input();
            self.run_deferred();
            self.draw();
            next_frame().await;
        }
    }
}
