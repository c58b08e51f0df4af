//! Command-line settings and logging setup.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Default cell edge length in pixels
pub const DEFAULT_CELL_SIZE: f32 = 140.0;

/// Height reserved under the grid for the status line and counters
pub const STATUS_AREA_HEIGHT: f32 = 80.0;

/// Tic-tac-toe against a minimax AI
#[derive(Parser, Debug, Clone)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against an alpha-beta minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Let the AI open every game
    #[arg(long)]
    pub ai_first: bool,

    /// Cell edge length in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE, value_parser = parse_cell_size)]
    pub cell_size: f32,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Game settings derived from the command line
    pub fn settings(&self) -> GameSettings {
        GameSettings {
            ai_first: self.ai_first,
            cell_size: self.cell_size,
        }
    }

    /// Log filter used when RUST_LOG is absent
    pub fn default_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Settings consumed by the game and its window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSettings {
    pub ai_first: bool,
    pub cell_size: f32,
}

impl GameSettings {
    /// Inner window size fitting the grid plus the status area
    pub fn window_size(&self) -> [f32; 2] {
        let board = self.cell_size * crate::BOARD_SIZE as f32;
        [board, board + STATUS_AREA_HEIGHT]
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            ai_first: false,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

fn parse_cell_size(s: &str) -> Result<f32, String> {
    let size: f32 = s.parse().map_err(|e| format!("invalid cell size: {e}"))?;
    if size.is_finite() && size >= 20.0 {
        Ok(size)
    } else {
        Err(format!("cell size must be at least 20 pixels, got {size}"))
    }
}

/// Install the global `tracing` subscriber.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert!(!cli.ai_first);
        assert_eq!(cli.cell_size, DEFAULT_CELL_SIZE);
        assert_eq!(cli.default_filter(), "info");
        assert_eq!(cli.settings(), GameSettings::default());
        assert_eq!(cli.settings().window_size(), [420.0, 500.0]);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["tictactoe", "--ai-first", "--cell-size", "100", "-v"]);
        assert!(cli.ai_first);
        assert_eq!(cli.cell_size, 100.0);
        assert_eq!(cli.default_filter(), "debug");
        assert_eq!(cli.settings().window_size(), [300.0, 380.0]);
    }

    #[test]
    fn test_rejects_tiny_cells() {
        assert!(Cli::try_parse_from(["tictactoe", "--cell-size", "5"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "--cell-size", "abc"]).is_err());
    }
}
