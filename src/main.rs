//! Tic-tac-toe GUI
//!
//! Play against the minimax AI in a native window.

use clap::Parser;
use tictactoe::config::{init_tracing, Cli};
use tictactoe::ui::TicTacToeApp;
use tracing::info;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();
    init_tracing(cli.default_filter());

    let settings = cli.settings();
    info!(?settings, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size())
            .with_resizable(false)
            .with_title("Tic Tac Toe AI"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, settings)))),
    )
}
