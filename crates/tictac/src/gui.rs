//! Desktop window front-end.

use crate::config::AppConfig;
use crate::palette::Rgb;
use anyhow::Result;
use eframe::egui;
use tictac_engine::{ConfigConflict, Coord, GameEngine, PlayerId, RoundStatus};
use tracing::{debug, info, instrument, warn};

const CELL_SIZE: f32 = 100.0;
const WIN_FILL: egui::Color32 = egui::Color32::from_rgb(144, 238, 144);

/// Opens the window and blocks until it closes.
#[instrument(skip_all)]
pub fn run(config: &AppConfig) -> Result<()> {
    let (engine, conflict) = crate::build_engine(config);
    let app = GameApp::new(engine, conflict);
    info!("Opening game window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Window failed: {e}"))
}

/// Window state: the engine plus the setup fields and dialogs.
pub struct GameApp {
    engine: GameEngine,
    input_names: [String; 2],
    input_symbols: [String; 2],
    message: Option<String>,
    confirm_reset: bool,
}

impl GameApp {
    fn new(engine: GameEngine, conflict: Option<ConfigConflict>) -> Self {
        let [one, two] = engine.players();
        Self {
            input_names: [one.name().clone(), two.name().clone()],
            input_symbols: [one.symbol().clone(), two.symbol().clone()],
            message: conflict.map(|c| format!("{c}. Using default players.")),
            confirm_reset: false,
            engine,
        }
    }

    fn seat_color(&self, seat: PlayerId) -> egui::Color32 {
        let rgb = Rgb::for_player(self.engine.player(seat).color(), seat);
        egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
    }

    fn set_players(&mut self) {
        let [one, two] = [PlayerId::One, PlayerId::Two].map(|seat| {
            let i = seat.index();
            tictac_engine::PlayerSetup::new(
                &self.input_names[i],
                &self.input_symbols[i],
                self.engine.player(seat).color(),
            )
        });
        match self.engine.reconfigure_players(one, two) {
            Ok(()) => {
                self.message = None;
                let [one, two] = self.engine.players();
                self.input_names = [one.name().clone(), two.name().clone()];
                self.input_symbols = [one.symbol().clone(), two.symbol().clone()];
            }
            Err(conflict) => {
                warn!(%conflict, "Player setup rejected");
                self.message = Some(conflict.to_string());
            }
        }
    }

    fn place(&mut self, at: Coord) {
        match self.engine.apply_move(at.row, at.col) {
            Ok(outcome) => {
                debug!(?outcome, %at, "Move applied");
                self.message = None;
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn status_text(&self) -> (String, egui::Color32) {
        match self.engine.status() {
            RoundStatus::Won { seat, .. } => (
                format!("🏆 {} wins!", self.engine.player(seat).name()),
                self.seat_color(seat),
            ),
            RoundStatus::Drawn => ("🤝 It's a draw!".to_string(), egui::Color32::GRAY),
            RoundStatus::NotStarted | RoundStatus::InProgress => {
                let seat = self.engine.current_seat();
                let player = self.engine.player(seat);
                (
                    format!("{}'s turn [{}]", player.name(), player.symbol()),
                    self.seat_color(seat),
                )
            }
        }
    }

    fn render_setup(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("players").num_columns(3).show(ui, |ui| {
            for (i, label) in ["Player 1", "Player 2"].into_iter().enumerate() {
                ui.label(label);
                ui.add(egui::TextEdit::singleline(&mut self.input_names[i]).desired_width(160.0));
                ui.add(egui::TextEdit::singleline(&mut self.input_symbols[i]).desired_width(40.0));
                ui.end_row();
            }
        });
        if ui.button("Set Players").clicked() {
            self.set_players();
        }
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let snapshot = self.engine.board_snapshot();
        let winning = self.engine.winning_line();
        let round_over = self.engine.status().is_terminal();
        let mut clicked = None;

        egui::Grid::new("board").spacing([6.0, 6.0]).show(ui, |ui| {
            for at in Coord::all() {
                let occupant = self.engine.board().get(at).occupant();
                let text = match (&snapshot[at.row][at.col], occupant) {
                    (Some(symbol), Some(seat)) => egui::RichText::new(symbol.as_str())
                        .size(50.0)
                        .color(self.seat_color(seat)),
                    _ => egui::RichText::new(" ").size(50.0),
                };
                let mut button =
                    egui::Button::new(text).min_size(egui::vec2(CELL_SIZE, CELL_SIZE));
                if winning.is_some_and(|line| line.contains(&at)) {
                    button = button.fill(WIN_FILL);
                }
                if ui
                    .add_enabled(!round_over && occupant.is_none(), button)
                    .clicked()
                {
                    clicked = Some(at);
                }
                if at.col == 2 {
                    ui.end_row();
                }
            }
        });

        if let Some(at) = clicked {
            self.place(at);
        }
    }

    fn render_confirm(&mut self, ctx: &egui::Context) {
        egui::Window::new("Reset Scores")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("Reset all scores?");
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        self.engine.reset_scores();
                        self.engine.reset_round();
                        self.confirm_reset = false;
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Tic Tac Toe");
                ui.add_space(8.0);
                self.render_setup(ui);
                ui.add_space(8.0);

                ui.label(self.engine.scoreboard().to_string());
                let (status, color) = self.status_text();
                ui.colored_label(color, status);
                if let Some(message) = &self.message {
                    ui.colored_label(egui::Color32::RED, message);
                }
                ui.add_space(8.0);

                self.render_board(ui);
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("🔄 Play Again (keep scores)").clicked() {
                        self.engine.reset_round();
                        self.message = None;
                    }
                    if ui.button("Reset Scores").clicked() {
                        self.confirm_reset = true;
                    }
                    if ui.button("Exit").clicked() {
                        info!("Exit requested");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        if self.confirm_reset {
            self.render_confirm(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_players_rejects_duplicates() {
        let mut app = GameApp::new(GameEngine::default(), None);
        app.input_names = ["Sam".to_string(), "Sam".to_string()];
        app.set_players();
        assert!(app.message.is_some());
        assert_eq!(app.engine.player(PlayerId::One).name(), "Player X");
    }

    #[test]
    fn test_place_reports_outcome() {
        let mut app = GameApp::new(GameEngine::default(), None);
        for index in [0, 3, 1, 4, 2] {
            app.place(Coord::from_index(index).unwrap());
        }
        assert!(matches!(app.engine.status(), RoundStatus::Won { .. }));
        app.place(Coord { row: 2, col: 2 });
        assert!(app.message.is_some());
    }
}
