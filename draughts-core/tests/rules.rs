//! 规则集成测试：开局布局、走子与吃子的完整流程

use draughts_core::{
    Board, Coordinate, Layout, Move, MoveGenerator, Piece, Side, BOARD_SIZE, PIECES_PER_SIDE,
};

fn c(row: i8, col: i8) -> Coordinate {
    Coordinate::new(row, col)
}

/// 返回两个棋盘之间内容不同的格子
fn diff(a: &Board, b: &Board) -> Vec<Coordinate> {
    let mut changed = Vec::new();
    for row in 0..BOARD_SIZE as i8 {
        for col in 0..BOARD_SIZE as i8 {
            if a.at(c(row, col)).unwrap() != b.at(c(row, col)).unwrap() {
                changed.push(c(row, col));
            }
        }
    }
    changed
}

#[test]
fn fresh_board_layout() {
    let board = Board::initial();

    assert_eq!(board.count(Side::X), PIECES_PER_SIDE);
    assert_eq!(board.count(Side::O), PIECES_PER_SIDE);

    for (coord, piece) in board.pieces() {
        let start = if coord.row % 2 == 0 { 1 } else { 0 };
        assert_eq!(coord.col % 2, start, "{} off the alternating pattern", coord);
        match piece.side {
            Side::X => assert!((0..=2).contains(&coord.row)),
            Side::O => assert!((5..=7).contains(&coord.row)),
        }
    }

    for row in 3..=4 {
        for col in 0..8 {
            assert_eq!(board.at(c(row, col)).unwrap(), None);
        }
    }
}

#[test]
fn scripted_opening_with_capture() {
    let mut board = Board::initial();

    // 简单走子：第 3 行为空
    assert!(MoveGenerator::apply_move(&mut board, c(2, 1), c(3, 2)).unwrap());
    assert_eq!(board.at(c(2, 1)).unwrap(), None);
    assert_eq!(board.at(c(3, 2)).unwrap(), Some(Piece::for_side(Side::X)));

    // 继续向下走到空的第 4 行
    assert!(MoveGenerator::apply_move(&mut board, c(3, 2), c(4, 1)).unwrap());
    assert_eq!(board.at(c(4, 1)).unwrap(), Some(Piece::for_side(Side::X)));

    // O 方跳过 (4,1) 落到 (3,2)
    assert_eq!(
        MoveGenerator::legal_destinations(&board, c(5, 0)).unwrap(),
        vec![c(3, 2)]
    );
    assert!(MoveGenerator::apply_move(&mut board, c(5, 0), c(3, 2)).unwrap());
    assert_eq!(board.at(c(4, 1)).unwrap(), None);
    assert_eq!(board.at(c(5, 0)).unwrap(), None);
    assert_eq!(board.at(c(3, 2)).unwrap(), Some(Piece::for_side(Side::O)));
    assert_eq!(board.piece_count(), 23);
    assert_eq!(board.count(Side::X), 11);
}

#[test]
fn move_from_empty_square_fails() {
    let mut board = Board::initial();
    let before = board.clone();

    assert!(!MoveGenerator::apply_move(&mut board, c(0, 0), c(1, 1)).unwrap());
    assert_eq!(board, before);
}

#[test]
fn rejected_moves_leave_board_unchanged() {
    let mut board = Board::initial();
    let before = board.clone();

    for row in 0..8 {
        for col in 0..8 {
            let origin = c(row, col);
            let legal = MoveGenerator::legal_destinations(&board, origin).unwrap();
            for dr in -3..=3 {
                for dc in -3..=3 {
                    let destination = c(row + dr, col + dc);
                    if legal.contains(&destination) {
                        continue;
                    }
                    assert!(!MoveGenerator::apply_move(&mut board, origin, destination).unwrap());
                    assert_eq!(board, before);
                }
            }
        }
    }
}

#[test]
fn simple_moves_touch_only_two_squares() {
    let board = Board::initial();

    for mv in MoveGenerator::generate_for_side(&board, Side::X)
        .into_iter()
        .chain(MoveGenerator::generate_for_side(&board, Side::O))
    {
        let mut after = board.clone();
        assert!(MoveGenerator::apply_move(&mut after, mv.from, mv.to).unwrap());
        assert_eq!(mv.from.row_distance(mv.to), 1);

        let mut changed = diff(&board, &after);
        changed.sort_by_key(|coord| (coord.row, coord.col));
        let mut expected = vec![mv.from, mv.to];
        expected.sort_by_key(|coord| (coord.row, coord.col));

        assert_eq!(changed, expected);
        assert_eq!(after.at(mv.from).unwrap(), None);
        assert_eq!(after.at(mv.to).unwrap(), board.at(mv.from).unwrap());
        assert_eq!(after.piece_count(), board.piece_count());
    }
}

#[test]
fn captures_remove_exactly_the_jumped_piece() {
    let board = Layout::parse(
        "
        --------
        --X-X---
        ---O----
        --------
        ----X---
        ---O-O--
        --------
        --------
        ",
    )
    .unwrap();

    let moves = MoveGenerator::generate_for_side(&board, Side::O);
    let captures: Vec<Move> = moves.iter().copied().filter(Move::is_capture).collect();
    assert_eq!(captures.len(), 4);

    for mv in captures {
        let mut after = board.clone();
        let jumped = mv.from.midpoint(mv.to);

        assert!(MoveGenerator::apply_move(&mut after, mv.from, mv.to).unwrap());
        assert_eq!(mv.from.row_distance(mv.to), 2);
        assert_eq!(after.at(jumped).unwrap(), None);
        assert_eq!(after.at(mv.to).unwrap(), board.at(mv.from).unwrap());
        assert_eq!(after.piece_count(), board.piece_count() - 1);
        assert_eq!(diff(&board, &after).len(), 3);
    }
}

#[test]
fn retrying_a_rejected_move_is_safe() {
    let mut board = Board::initial();

    assert!(!MoveGenerator::apply_move(&mut board, c(2, 1), c(4, 3)).unwrap());
    assert!(!MoveGenerator::apply_move(&mut board, c(2, 1), c(4, 3)).unwrap());
    assert!(MoveGenerator::apply_move(&mut board, c(2, 1), c(3, 2)).unwrap());
    // 同一走法再执行一次：起点已空
    assert!(!MoveGenerator::apply_move(&mut board, c(2, 1), c(3, 2)).unwrap());
}

#[test]
fn move_record_serializes() {
    let mv = Move::with_capture(c(5, 0), c(3, 2), Piece::for_side(Side::X));
    let json = serde_json::to_string(&mv).unwrap();
    let back: Move = serde_json::from_str(&json).unwrap();

    assert_eq!(back, mv);
    assert!(json.contains("\"captured\""));
}
