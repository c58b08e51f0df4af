//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, Frame, RichText, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::config::GameSettings;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
}

impl TicTacToeApp {
    /// Create a new app with the given settings
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: GameSettings) -> Self {
        Self {
            state: GameState::new(&settings),
            board_view: BoardView::new(settings.cell_size),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Reset Scores").clicked() {
                        self.state.reset_scores();
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render the status line, counters and last result
    fn render_status_panel(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel")
            .frame(Frame::new().fill(BOARD_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(self.state.status())
                            .size(STATUS_TEXT_SIZE)
                            .color(TEXT_PRIMARY),
                    );
                    if let Some(outcome) = self.state.last_outcome {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new(outcome.message()).strong().color(TEXT_PRIMARY));
                        });
                    }
                });

                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.state.scores.to_string()).color(TEXT_SECONDARY));

                    if let Some(msg) = &self.state.message {
                        ui.label(RichText::new(msg).color(TEXT_ERROR));
                    } else if let Some(result) = &self.state.last_ai_result {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new(format!("{} nodes, {}ms", result.nodes, result.time_ms))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                        });
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                let accepting = self.state.is_human_turn();
                let clicked = self.board_view.show(ui, &self.state.board, accepting);

                // Handle click
                if let Some((row, col)) = clicked {
                    match self.state.try_place_mark(row, col) {
                        // Repaint so the AI answers on the next frame.
                        Ok(()) => ui.ctx().request_repaint(),
                        Err(err) => {
                            debug!(%err, "move rejected");
                            self.state.message = Some(err.to_string());
                        }
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.state.new_game();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The search is fast enough to run inside the frame.
        if self.state.is_ai_turn() {
            self.state.play_ai_turn();
        }

        // Render UI
        self.render_menu_bar(ctx);
        self.render_status_panel(ctx);
        self.render_board(ctx);
    }
}
