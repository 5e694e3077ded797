//! 走法生成和执行

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::Board;
use crate::coordinate::{Coordinate, Step};
use crate::error::Result;
use crate::piece::{Piece, Side};

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始位置
    pub from: Coordinate,
    /// 目标位置
    pub to: Coordinate,
    /// 被吃的棋子（如果有）
    pub captured: Option<Piece>,
}

impl Move {
    /// 创建新走法
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    /// 创建带吃子的走法
    pub fn with_capture(from: Coordinate, to: Coordinate, captured: Piece) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    /// 是否为吃子走法
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// 被吃棋子所在的格子
    pub fn captured_square(&self) -> Option<Coordinate> {
        self.is_capture().then(|| self.from.midpoint(self.to))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定格子上棋子的所有走法
    ///
    /// 只考虑棋子前进方向的两个斜向，左在前右在后；每个斜向最多产生一个走法。
    /// 格子为空时返回空列表，格子越界时返回错误。
    pub fn generate(board: &Board, origin: Coordinate) -> Result<Vec<Move>> {
        let mut moves = Vec::with_capacity(2);

        let piece = match board.at(origin)? {
            Some(piece) => piece,
            None => return Ok(moves),
        };

        for step in piece.direction.steps() {
            if let Some(mv) = Self::try_step(board, origin, piece, step)? {
                moves.push(mv);
            }
        }

        Ok(moves)
    }

    /// 生成指定格子上棋子的所有合法落点
    pub fn legal_destinations(board: &Board, origin: Coordinate) -> Result<Vec<Coordinate>> {
        Ok(Self::generate(board, origin)?
            .into_iter()
            .map(|mv| mv.to)
            .collect())
    }

    /// 生成指定阵营的所有走法（按行优先顺序）
    pub fn generate_for_side(board: &Board, side: Side) -> Vec<Move> {
        let mut moves = Vec::new();

        for (origin, piece) in board.pieces_of(side) {
            for step in piece.direction.steps() {
                // pieces_of 只返回棋盘内的坐标
                if let Ok(Some(mv)) = Self::try_step(board, origin, piece, step) {
                    moves.push(mv);
                }
            }
        }

        moves
    }

    /// 沿一个斜向尝试走子：相邻格为空则走一步，相邻格为对方棋子且其后为空则跳吃
    fn try_step(board: &Board, origin: Coordinate, piece: Piece, step: Step) -> Result<Option<Move>> {
        let adjacent = origin.add(step);
        if !adjacent.in_bounds() {
            return Ok(None);
        }

        let target = match board.at(adjacent)? {
            None => return Ok(Some(Move::new(origin, adjacent))),
            Some(target) => target,
        };

        if !target.is_opponent_of(&piece) {
            return Ok(None);
        }

        let landing = adjacent.add(step);
        if landing.in_bounds() && board.at(landing)?.is_none() {
            Ok(Some(Move::with_capture(origin, landing, target)))
        } else {
            Ok(None)
        }
    }

    /// 执行走法，返回实际执行的走法；目标不是合法落点时返回 None，棋盘不变
    pub fn execute(board: &mut Board, origin: Coordinate, destination: Coordinate) -> Result<Option<Move>> {
        let candidate = Self::generate(board, origin)?
            .into_iter()
            .find(|mv| mv.to == destination);

        let mv = match candidate {
            Some(mv) => mv,
            None => {
                trace!("Rejected move {} -> {}: not a legal destination", origin, destination);
                return Ok(None);
            }
        };

        // 生成的落点一定为空，起点一定有棋子
        let piece = match board.at(origin)? {
            Some(piece) => piece,
            None => return Ok(None),
        };
        if !board.place(piece, destination)? {
            return Ok(None);
        }
        board.remove(origin)?;

        if origin.row_distance(destination) == 2 {
            let jumped = origin.midpoint(destination);
            board.remove(jumped)?;
            debug!("{} captured {} at {}", mv, piece.side.opponent(), jumped);
        } else {
            debug!("{} moved {}", mv, piece.side);
        }

        Ok(Some(mv))
    }

    /// 执行走法，成功返回 true；目标不是合法落点时返回 false，棋盘不变
    pub fn apply_move(board: &mut Board, origin: Coordinate, destination: Coordinate) -> Result<bool> {
        Ok(Self::execute(board, origin, destination)?.is_some())
    }
}
