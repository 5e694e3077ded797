//! 棋子定义

use serde::{Deserialize, Serialize};

use crate::coordinate::Step;

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// X 方（初始在上方，向下走）
    X,
    /// O 方（初始在下方，向上走）
    O,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// 该阵营棋子的前进方向
    pub fn home_direction(&self) -> Direction {
        match self {
            Side::X => Direction::Down,
            Side::O => Direction::Up,
        }
    }

    /// 获取显示字符
    pub fn glyph(&self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }

    /// 从显示字符解析
    pub fn from_glyph(c: char) -> Option<Side> {
        match c {
            'X' | 'x' => Some(Side::X),
            'O' | 'o' => Some(Side::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// 前进方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// 朝第 0 行
    Up,
    /// 朝第 7 行
    Down,
}

impl Direction {
    /// 该方向允许的两个斜向，左在前右在后
    pub fn steps(&self) -> [Step; 2] {
        match self {
            Direction::Up => [Step::UpLeft, Step::UpRight],
            Direction::Down => [Step::DownLeft, Step::DownRight],
        }
    }
}

/// 棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub direction: Direction,
}

impl Piece {
    /// 创建新棋子
    pub fn new(side: Side, direction: Direction) -> Self {
        Self { side, direction }
    }

    /// 创建按本方前进方向行走的棋子
    pub fn for_side(side: Side) -> Self {
        Self::new(side, side.home_direction())
    }

    /// 获取显示字符
    pub fn glyph(&self) -> char {
        self.side.glyph()
    }

    /// 是否与另一个棋子属于对立阵营
    pub fn is_opponent_of(&self, other: &Piece) -> bool {
        self.side != other.side
    }
}
