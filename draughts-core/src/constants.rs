//! 规则常量定义

/// 棋盘边长（行数与列数相同）
pub const BOARD_SIZE: usize = 8;

/// 棋盘格子总数
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 每方初始占据的行数
pub const HOME_ROWS: usize = 3;

/// 每方初始棋子数
pub const PIECES_PER_SIDE: usize = 12;

/// 文本布局中空格子的字符
pub const EMPTY_GLYPH: char = '-';
