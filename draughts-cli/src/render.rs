//! 棋盘绘制

use draughts_core::{Board, Coordinate, Side, BOARD_SIZE};

use crate::settings::{BoardStyle, Settings};

/// 浅色格（双方棋子都不会到达的格子）
const LIGHT_SQUARE: &str = "██";

/// 按设置绘制棋盘
pub fn render(board: &Board, settings: &Settings) -> String {
    match settings.style {
        BoardStyle::Plain => render_plain(board, settings),
        BoardStyle::Checkered => render_checkered(board, settings),
    }
}

fn glyph_at(board: &Board, coord: Coordinate, settings: &Settings) -> Option<char> {
    board.at(coord).ok().flatten().map(|piece| match piece.side {
        Side::X => settings.x_glyph,
        Side::O => settings.o_glyph,
    })
}

fn render_plain(board: &Board, settings: &Settings) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE as i8 {
        for col in 0..BOARD_SIZE as i8 {
            let glyph = glyph_at(board, Coordinate::new(row, col), settings);
            out.push(glyph.unwrap_or(settings.empty_glyph));
        }
        out.push('\n');
    }
    out
}

fn render_checkered(board: &Board, settings: &Settings) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE as i8 {
        out.push('|');
        for col in 0..BOARD_SIZE as i8 {
            if (row + col) % 2 == 0 {
                out.push_str(LIGHT_SQUARE);
                continue;
            }
            match glyph_at(board, Coordinate::new(row, col), settings) {
                Some(glyph) => {
                    out.push(glyph);
                    out.push(' ');
                }
                None => out.push_str("  "),
            }
        }
        out.push_str("|\n");
    }
    out
}
