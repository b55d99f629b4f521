//! Tests for the tic-tac-toe search engine.

use std::collections::HashSet;
use strictly_grids::{
    Board, GameStatus, Move, Player, Position, SearchStrategy, Square, best_move,
    best_move_in_place, best_move_with, check_winner, is_full, score_moves, status,
};

/// Walks every line the opponent can choose, with the engine replying,
/// and checks the engine never ends up lost.
fn assert_engine_never_loses(board: &mut Board, to_move: Player, engine: Player) -> usize {
    match status(board) {
        GameStatus::Won(winner) => {
            assert_eq!(winner, engine, "engine lost on {board}");
            return 1;
        }
        GameStatus::Draw => return 1,
        GameStatus::InProgress => {}
    }

    if to_move == engine {
        let mov = best_move(board, engine).expect("unfinished board must have a move");
        board.place(mov).unwrap();
        let games = assert_engine_never_loses(board, to_move.opponent(), engine);
        board.clear(mov.position);
        games
    } else {
        let mut games = 0;
        for pos in Position::ALL {
            if board.is_empty(pos) {
                board.set(pos, Square::Occupied(to_move));
                games += assert_engine_never_loses(board, to_move.opponent(), engine);
                board.clear(pos);
            }
        }
        games
    }
}

#[test]
fn test_engine_as_o_never_loses() {
    let games = assert_engine_never_loses(&mut Board::new(), Player::X, Player::O);
    assert!(games > 0);
}

#[test]
fn test_engine_as_x_never_loses() {
    let games = assert_engine_never_loses(&mut Board::new(), Player::X, Player::X);
    assert!(games > 0);
}

#[test]
fn test_engine_as_x_beats_careless_corner_reply() {
    // X corner, O edge: X has a forced win and must find it.
    let mut board: Board = "XO./.../...".parse().unwrap();
    let mut to_move = Player::X;
    let mut opponent_pos = Position::ALL.into_iter();
    while !status(&board).is_over() {
        if to_move == Player::X {
            let mov = best_move(&board, Player::X).unwrap();
            board.place(mov).unwrap();
        } else {
            // O keeps taking the first empty square.
            let pos = opponent_pos.find(|p| board.is_empty(*p)).unwrap();
            board.place(Move::new(Player::O, pos)).unwrap();
        }
        to_move = to_move.opponent();
    }
    assert_eq!(status(&board), GameStatus::Won(Player::X));
}

#[test]
fn test_empty_board_tie_break_is_top_left() {
    for side in [Player::X, Player::O] {
        let mov = best_move(&Board::new(), side).unwrap();
        assert_eq!((mov.row(), mov.col()), (0, 0));
        assert_eq!(mov.player, side);
    }
    // Every opening draws under perfect play, so all root scores tie.
    let scores = score_moves(&Board::new(), Player::X);
    assert_eq!(scores.len(), 9);
    assert!(scores.iter().all(|(_, score)| *score == 0));
}

#[test]
fn test_terminal_boards_return_none() {
    for s in ["XXX/OO./...", "OX./OX./O.X", "XOX/XOO/OXX", "XOX/OXO/OXO"] {
        let board: Board = s.parse().unwrap();
        assert!(check_winner(&board).is_some() || is_full(&board), "{s}");
        for side in [Player::X, Player::O] {
            for strategy in [SearchStrategy::Exhaustive, SearchStrategy::AlphaBeta] {
                assert_eq!(best_move_with(&board, side, strategy), None, "{s}");
            }
        }
    }
}

#[test]
fn test_search_leaves_board_untouched() {
    for s in [".........", "X...O....", "XO..X..O.", "X.O.X.O.."] {
        let mut board: Board = s.parse().unwrap();
        let snapshot = board.clone();
        for strategy in [SearchStrategy::Exhaustive, SearchStrategy::AlphaBeta] {
            let side = if board.marks_placed() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            best_move_in_place(&mut board, side, strategy);
            assert_eq!(board, snapshot);
        }
        let scored = score_moves(&board, Player::X);
        assert_eq!(scored.len(), 9 - board.marks_placed());
        assert_eq!(board, snapshot);
    }
}

/// Every position reachable in legal play with X moving first.
fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut stack = vec![(Board::new(), Player::X)];
    let mut out = Vec::new();
    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board.clone()) {
            continue;
        }
        if status(&board).is_over() {
            continue;
        }
        for pos in board.empty_positions() {
            let mut next = board.clone();
            next.set(pos, Square::Occupied(to_move));
            stack.push((next, to_move.opponent()));
        }
        out.push((board, to_move));
    }
    out
}

#[test]
fn test_alpha_beta_matches_exhaustive_everywhere() {
    let positions = reachable_positions();
    assert!(positions.len() > 4000);
    for (board, to_move) in positions.iter().filter(|(b, _)| b.marks_placed() >= 3) {
        assert_eq!(
            best_move_with(board, *to_move, SearchStrategy::AlphaBeta),
            best_move_with(board, *to_move, SearchStrategy::Exhaustive),
            "board {board}"
        );
    }
}

#[test]
fn test_best_move_is_among_top_scores() {
    for (board, to_move) in reachable_positions()
        .into_iter()
        .filter(|(b, _)| b.marks_placed() >= 4)
    {
        let scores = score_moves(&board, to_move);
        let top = scores.iter().map(|(_, s)| *s).max().unwrap();
        let first_top = scores.iter().find(|(_, s)| *s == top).map(|(m, _)| *m);
        assert_eq!(best_move(&board, to_move), first_top, "board {board}");
    }
}
