//! Board rendering for the tic-tac-toe GUI

use egui::{CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Cell, Pos, BOARD_SIZE};

use super::theme::*;

/// Map a point relative to the board's top-left corner to (row, col).
///
/// Points left of or above the board give `None`; points past the far
/// edges give indices of 3 or more, which the game rejects.
pub fn cell_at(relative: Vec2, cell_size: f32) -> Option<(usize, usize)> {
    if relative.x < 0.0 || relative.y < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let row = (relative.y / cell_size) as usize;
    let col = (relative.x / cell_size) as usize;
    Some((row, col))
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Edge length of one cell in pixels
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl BoardView {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            board_rect: Rect::NOTHING,
        }
    }

    /// Render the board and return the clicked (row, col) if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        accepting_input: bool,
    ) -> Option<(usize, usize)> {
        let side = self.cell_size * BOARD_SIZE as f32;
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::ZERO, BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if !accepting_input {
            return None;
        }

        let pointer = response.hover_pos()?;
        let (row, col) = cell_at(pointer - self.board_rect.min, self.cell_size)?;

        if row < BOARD_SIZE && col < BOARD_SIZE && board.is_empty(Pos::new(row as u8, col as u8)) {
            painter.rect_filled(self.cell_rect(row, col), CornerRadius::ZERO, hover_valid());
        }

        if response.clicked() {
            Some((row, col))
        } else {
            None
        }
    }

    /// Draw the two horizontal and two vertical separators
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let side = self.cell_size * BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(0.0, offset);
            painter.line_segment([start, start + Vec2::new(side, 0.0)], stroke);

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, 0.0);
            painter.line_segment([start, start + Vec2::new(0.0, side)], stroke);
        }
    }

    /// Draw X and O glyphs
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        let font = FontId::proportional(self.cell_size * MARK_SIZE_RATIO);

        for pos in (0..crate::board::TOTAL_CELLS).map(Pos::from_index) {
            let cell = board.get(pos);
            if cell == Cell::Empty {
                continue;
            }
            painter.text(
                self.cell_center(pos),
                egui::Align2::CENTER_CENTER,
                cell.symbol(),
                font.clone(),
                MARK_COLOR,
            );
        }
    }

    fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let min = self.board_rect.min + Vec2::new(col as f32, row as f32) * self.cell_size;
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert board position to screen coordinates
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos.row as usize, pos.col as usize).center()
    }
}
