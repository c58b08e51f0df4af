//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::WHITE;
pub const GRID_LINE: Color32 = Color32::BLACK;
pub const MARK_COLOR: Color32 = Color32::BLACK;

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::BLACK;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(90, 90, 95);
pub const TEXT_ERROR: Color32 = Color32::from_rgb(200, 40, 40);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 40)
}

// Sizes
pub const GRID_LINE_WIDTH: f32 = 5.0;
/// Glyph height relative to the cell
pub const MARK_SIZE_RATIO: f32 = 0.7;
pub const STATUS_TEXT_SIZE: f32 = 24.0;
