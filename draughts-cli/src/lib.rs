//! 跳棋命令行驱动
//!
//! 包含:
//! - 设置（JSON 文件）
//! - 棋盘绘制
//! - 对局会话（轮流走子、随机对弈）

pub mod render;
pub mod session;
pub mod settings;

pub use render::render;
pub use session::{MoveRequest, Session};
pub use settings::{BoardStyle, Settings};
