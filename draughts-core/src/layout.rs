//! 棋盘文本布局
//!
//! 行优先，每格一个字符：`X` / `O` 表示棋子，`-` 表示空格，每行以换行结束。
//!
//! 初始局面：
//! ```text
//! -X-X-X-X
//! X-X-X-X-
//! -X-X-X-X
//! --------
//! --------
//! O-O-O-O-
//! -O-O-O-O
//! O-O-O-O-
//! ```

use crate::board::Board;
use crate::constants::{BOARD_SIZE, EMPTY_GLYPH};
use crate::coordinate::Coordinate;
use crate::error::{DraughtsError, Result};
use crate::piece::{Piece, Side};

/// 初始局面布局
pub const INITIAL_LAYOUT: &str = "\
-X-X-X-X
X-X-X-X-
-X-X-X-X
--------
--------
O-O-O-O-
-O-O-O-O
O-O-O-O-
";

/// 文本布局处理
pub struct Layout;

impl Layout {
    /// 解析文本布局，棋子按本方前进方向创建
    pub fn parse(text: &str) -> Result<Board> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(DraughtsError::InvalidLayout {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut board = Board::empty();

        for (row_idx, row) in rows.iter().enumerate() {
            let glyphs: Vec<char> = row.chars().collect();
            if glyphs.len() != BOARD_SIZE {
                return Err(DraughtsError::InvalidLayout {
                    reason: format!(
                        "Row {} has {} columns, expected {}",
                        row_idx,
                        glyphs.len(),
                        BOARD_SIZE
                    ),
                });
            }

            for (col_idx, c) in glyphs.into_iter().enumerate() {
                if c == EMPTY_GLYPH {
                    continue;
                }
                let side = Side::from_glyph(c).ok_or_else(|| DraughtsError::InvalidLayout {
                    reason: format!("Invalid piece character: {}", c),
                })?;
                board.place(
                    Piece::for_side(side),
                    Coordinate::new(row_idx as i8, col_idx as i8),
                )?;
            }
        }

        Ok(board)
    }

    /// 将棋盘转换为文本布局
    pub fn to_string(board: &Board) -> String {
        let mut result = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let coord = Coordinate::new(row as i8, col as i8);
                let glyph = match board.at(coord) {
                    Ok(Some(piece)) => piece.glyph(),
                    _ => EMPTY_GLYPH,
                };
                result.push(glyph);
            }
            result.push('\n');
        }

        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Layout::to_string(self))
    }
}
