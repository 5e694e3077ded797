//! 简化版英式跳棋规则引擎
//!
//! 包含:
//! - 坐标、斜向步、棋子、棋盘等核心数据结构
//! - 走法生成（斜向前进一步、单次跳吃）
//! - 走法执行（含被吃棋子的移除）
//! - 棋盘文本布局

mod board;
mod constants;
mod coordinate;
mod error;
mod layout;
mod moves;
mod piece;

pub use board::Board;
pub use constants::*;
pub use coordinate::{Coordinate, Step};
pub use error::{DraughtsError, Result};
pub use layout::{Layout, INITIAL_LAYOUT};
pub use moves::{Move, MoveGenerator};
pub use piece::{Direction, Piece, Side};
