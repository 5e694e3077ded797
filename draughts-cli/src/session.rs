//! 对局会话
//!
//! 规则引擎本身不关心轮到谁走，轮流走子由会话负责。

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use draughts_core::{Board, Coordinate, Move, MoveGenerator, Side};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

/// 一次走子请求，文本形式为 `row,col:row,col`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl FromStr for MoveRequest {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (from, to) = s
            .split_once(':')
            .with_context(|| format!("Expected `row,col:row,col`, got `{}`", s))?;
        Ok(Self {
            from: from.parse()?,
            to: to.parse()?,
        })
    }
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 对局会话
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    turn: Side,
    plies: u32,
}

impl Session {
    /// 创建会话，O 方先走
    pub fn new(board: Board) -> Self {
        Self::with_turn(board, Side::O)
    }

    /// 创建会话并指定先走方
    pub fn with_turn(board: Board, turn: Side) -> Self {
        Self {
            board,
            turn,
            plies: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 当前走子方
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// 已走步数
    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// 当前走子方的所有走法
    pub fn candidates(&self) -> Vec<Move> {
        MoveGenerator::generate_for_side(&self.board, self.turn)
    }

    /// 走一步；起点不是当前走子方的棋子时报错，落点不合法时返回 None
    pub fn play(&mut self, from: Coordinate, to: Coordinate) -> Result<Option<Move>> {
        match self.board.at(from)? {
            Some(piece) if piece.side == self.turn => {}
            Some(piece) => bail!("It is {}'s turn, the piece at {} belongs to {}", self.turn, from, piece.side),
            None => bail!("No piece at {}", from),
        }

        let applied = MoveGenerator::execute(&mut self.board, from, to)?;
        match applied {
            Some(mv) => self.advance(mv),
            None => warn!("{} -> {} is not a legal move for {}", from, to, self.turn),
        }
        Ok(applied)
    }

    /// 当前走子方随机走一步；无子可走时返回 None
    pub fn random_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<Move>> {
        let candidates = self.candidates();
        let chosen = match candidates.choose(rng) {
            Some(mv) => *mv,
            None => {
                info!("{} has no legal move after {} plies", self.turn, self.plies);
                return Ok(None);
            }
        };

        let applied = MoveGenerator::execute(&mut self.board, chosen.from, chosen.to)?;
        if let Some(mv) = applied {
            self.advance(mv);
        }
        Ok(applied)
    }

    fn advance(&mut self, mv: Move) {
        info!(ply = self.plies + 1, side = %self.turn, capture = mv.is_capture(), "{}", mv);
        self.plies += 1;
        self.turn = self.turn.opponent();
    }
}
