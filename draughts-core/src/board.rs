//! 棋盘状态

use crate::constants::{BOARD_SIZE, HOME_ROWS, SQUARE_COUNT};
use crate::coordinate::Coordinate;
use crate::error::{DraughtsError, Result};
use crate::piece::{Piece, Side};

/// 棋盘
///
/// 8x8 格子，索引为 row * 8 + col。所有读写都经过 [`Board::index`]
/// 做边界检查。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; SQUARE_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: [None; SQUARE_COUNT],
        }
    }

    /// 创建初始棋盘
    ///
    /// 布局是固定的，`try_initial` 不可能失败；失败说明布局代码有缺陷。
    pub fn initial() -> Self {
        Self::try_initial().expect("standard layout places every piece on an empty square")
    }

    /// 按标准布局摆放双方棋子，重复摆放会返回错误
    pub fn try_initial() -> Result<Self> {
        let mut board = Self::empty();

        // X 方在上方（第 0-2 行），向下走
        for row in 0..HOME_ROWS {
            board.fill_home_row(row, Side::X)?;
        }

        // O 方在下方（第 5-7 行），向上走
        for row in (BOARD_SIZE - HOME_ROWS)..BOARD_SIZE {
            board.fill_home_row(row, Side::O)?;
        }

        Ok(board)
    }

    /// 偶数行从第 1 列开始，奇数行从第 0 列开始，隔列摆放
    fn fill_home_row(&mut self, row: usize, side: Side) -> Result<()> {
        let start = if row % 2 == 0 { 1 } else { 0 };
        for col in (start..BOARD_SIZE).step_by(2) {
            let coord = Coordinate::new(row as i8, col as i8);
            if !self.place(Piece::for_side(side), coord)? {
                return Err(DraughtsError::SquareOccupied {
                    row: coord.row,
                    col: coord.col,
                });
            }
        }
        Ok(())
    }

    /// 坐标转索引，越界返回错误
    fn index(coord: Coordinate) -> Result<usize> {
        coord.to_index().ok_or(DraughtsError::InvalidCoordinate {
            row: coord.row,
            col: coord.col,
        })
    }

    /// 获取指定位置的棋子
    pub fn at(&self, coord: Coordinate) -> Result<Option<Piece>> {
        Ok(self.squares[Self::index(coord)?])
    }

    /// 在空格子上放置棋子，格子已有棋子时不覆盖并返回 false
    pub fn place(&mut self, piece: Piece, coord: Coordinate) -> Result<bool> {
        let slot = &mut self.squares[Self::index(coord)?];
        if slot.is_some() {
            return Ok(false);
        }
        *slot = Some(piece);
        Ok(true)
    }

    /// 移除指定位置的棋子，格子为空时返回 false
    pub fn remove(&mut self, coord: Coordinate) -> Result<bool> {
        Ok(self.take(coord)?.is_some())
    }

    /// 取走指定位置的棋子并返回它
    pub fn take(&mut self, coord: Coordinate) -> Result<Option<Piece>> {
        Ok(self.squares[Self::index(coord)?].take())
    }

    /// 获取所有棋子（按行优先顺序）
    pub fn pieces(&self) -> Vec<(Coordinate, Piece)> {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|piece| (Coordinate::from_index(index), piece)))
            .collect()
    }

    /// 获取指定阵营的所有棋子位置
    pub fn pieces_of(&self, side: Side) -> Vec<(Coordinate, Piece)> {
        self.pieces()
            .into_iter()
            .filter(|(_, piece)| piece.side == side)
            .collect()
    }

    /// 棋子总数
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|slot| slot.is_some()).count()
    }

    /// 指定阵营的棋子数
    pub fn count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|piece| piece.side == side)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
