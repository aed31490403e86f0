//! Exhaustive checks of win detection over every 3x3 board.

use tictactoe_history::{evaluate, winning_line, Board, Player, Position, Square};

const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Decodes `n` in base 3 into a board: 0 empty, 1 X, 2 O.
fn board_from_code(mut n: u32) -> Board {
    let mut board = Board::new();
    for pos in Position::ALL {
        let square = match n % 3 {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        };
        board.set(pos, square);
        n /= 3;
    }
    board
}

fn reference_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    TRIPLES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(p) if squares[b] == squares[a] && squares[c] == squares[a] => Some(p),
        _ => None,
    })
}

#[test]
fn test_evaluate_matches_reference_on_all_boards() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        assert_eq!(evaluate(&board), reference_winner(&board), "board {}", code);
    }
}

#[test]
fn test_boards_without_lines_have_no_winner() {
    let no_line = (0..3u32.pow(9))
        .map(board_from_code)
        .filter(|board| reference_winner(board).is_none());

    let mut count = 0;
    for board in no_line {
        assert_eq!(evaluate(&board), None);
        assert_eq!(winning_line(&board), None);
        count += 1;
    }
    assert!(count > 0);
}

#[test]
fn test_winning_line_holds_the_winner() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        if let Some(line) = winning_line(&board) {
            let winner = evaluate(&board).expect("line implies winner");
            assert!(line.iter().all(|pos| board.get(*pos) == Square::Occupied(winner)));
        }
    }
}
