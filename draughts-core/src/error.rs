//! 错误类型定义

use thiserror::Error;

/// 跳棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraughtsError {
    /// 坐标超出棋盘
    #[error("Invalid coordinate: ({row}, {col})")]
    InvalidCoordinate { row: i8, col: i8 },

    /// 布局时目标格子已有棋子
    #[error("Square already occupied: ({row}, {col})")]
    SquareOccupied { row: i8, col: i8 },

    /// 无效的文本布局
    #[error("Invalid layout: {reason}")]
    InvalidLayout { reason: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, DraughtsError>;
