//! 坐标与斜向步

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;
use crate::error::DraughtsError;

/// 斜向单步（行增量, 列增量）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// 左上
    UpLeft,
    /// 右上
    UpRight,
    /// 左下
    DownLeft,
    /// 右下
    DownRight,
}

impl Step {
    /// 全部四个斜向
    pub const ALL: [Step; 4] = [Step::UpLeft, Step::UpRight, Step::DownLeft, Step::DownRight];

    /// 获取 (行增量, 列增量)
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Step::UpLeft => (-1, -1),
            Step::UpRight => (-1, 1),
            Step::DownLeft => (1, -1),
            Step::DownRight => (1, 1),
        }
    }
}

/// 棋盘坐标
///
/// 行列使用有符号整数，越界的中间结果（例如从边缘再走一步）可以直接表示，
/// 是否在棋盘内由 [`Coordinate::in_bounds`] 判断。原点在左上角。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// 行 (0-7)
    pub row: i8,
    /// 列 (0-7)
    pub col: i8,
}

impl Coordinate {
    /// 创建坐标（不检查边界）
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// 创建坐标，越界时返回 None
    pub fn checked(row: i8, col: i8) -> Option<Self> {
        let coord = Self { row, col };
        coord.in_bounds().then_some(coord)
    }

    /// 沿斜向走一步（不检查边界）
    pub fn add(self, step: Step) -> Self {
        let (dr, dc) = step.delta();
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }

    /// 检查坐标是否在棋盘内
    pub fn in_bounds(&self) -> bool {
        let size = BOARD_SIZE as i8;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// 两个坐标的行距
    pub fn row_distance(&self, other: Coordinate) -> u8 {
        (self.row as i16 - other.row as i16).unsigned_abs() as u8
    }

    /// 两个坐标的中点（整数平均）
    pub fn midpoint(&self, other: Coordinate) -> Coordinate {
        let row = (self.row as i16 + other.row as i16).div_euclid(2);
        let col = (self.col as i16 + other.col as i16).div_euclid(2);
        Coordinate::new(row as i8, col as i8)
    }

    /// 转换为数组索引，越界时返回 None
    pub(crate) fn to_index(self) -> Option<usize> {
        self.in_bounds()
            .then(|| self.row as usize * BOARD_SIZE + self.col as usize)
    }

    /// 从数组索引转换
    pub(crate) fn from_index(index: usize) -> Self {
        Self {
            row: (index / BOARD_SIZE) as i8,
            col: (index % BOARD_SIZE) as i8,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 解析 `row,col` 形式的坐标，要求在棋盘内
impl FromStr for Coordinate {
    type Err = DraughtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DraughtsError::InvalidLayout {
            reason: format!("Expected `row,col`, got `{}`", s),
        };

        let (row, col) = s.trim().split_once(',').ok_or_else(invalid)?;
        let row: i8 = row.trim().parse().map_err(|_| invalid())?;
        let col: i8 = col.trim().parse().map_err(|_| invalid())?;

        Coordinate::checked(row, col).ok_or(DraughtsError::InvalidCoordinate { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_exhaustive() {
        for row in -3i8..11 {
            for col in -3i8..11 {
                let expected = (0..8).contains(&row) && (0..8).contains(&col);
                assert_eq!(Coordinate::new(row, col).in_bounds(), expected);
            }
        }
    }

    #[test]
    fn test_add_step() {
        let c = Coordinate::new(3, 3);
        assert_eq!(c.add(Step::UpLeft), Coordinate::new(2, 2));
        assert_eq!(c.add(Step::UpRight), Coordinate::new(2, 4));
        assert_eq!(c.add(Step::DownLeft), Coordinate::new(4, 2));
        assert_eq!(c.add(Step::DownRight), Coordinate::new(4, 4));

        // 越界结果照常返回
        let edge = Coordinate::new(0, 0).add(Step::UpLeft);
        assert_eq!(edge, Coordinate::new(-1, -1));
        assert!(!edge.in_bounds());
    }

    #[test]
    fn test_row_distance_and_midpoint() {
        let a = Coordinate::new(5, 0);
        let b = Coordinate::new(3, 2);
        assert_eq!(a.row_distance(b), 2);
        assert_eq!(b.row_distance(a), 2);
        assert_eq!(a.midpoint(b), Coordinate::new(4, 1));

        assert_eq!(Coordinate::new(2, 1).row_distance(Coordinate::new(3, 2)), 1);
    }

    #[test]
    fn test_checked() {
        assert!(Coordinate::checked(0, 0).is_some());
        assert!(Coordinate::checked(7, 7).is_some());
        assert!(Coordinate::checked(8, 0).is_none());
        assert!(Coordinate::checked(0, -1).is_none());
    }

    #[test]
    fn test_parse() {
        assert_eq!("2,1".parse::<Coordinate>(), Ok(Coordinate::new(2, 1)));
        assert_eq!(" 7 , 0 ".parse::<Coordinate>(), Ok(Coordinate::new(7, 0)));
        assert_eq!(
            "8,0".parse::<Coordinate>(),
            Err(DraughtsError::InvalidCoordinate { row: 8, col: 0 })
        );
        assert!("a,b".parse::<Coordinate>().is_err());
        assert!("3".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_index_roundtrip() {
        let c = Coordinate::new(6, 3);
        let index = c.to_index().unwrap();
        assert_eq!(index, 51);
        assert_eq!(Coordinate::from_index(index), c);
        assert_eq!(Coordinate::new(-1, 0).to_index(), None);
    }
}
