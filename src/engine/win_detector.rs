use super::board::Board;
use super::types::{Mark, WinningLine};

/// The 8 winning index triples: rows top to bottom, columns left to right,
/// then the two diagonals. `check_win` scans them in this order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for &[a, b, c] in &WIN_LINES {
        if let Some(mark) = board.line_owner(a, b, c) {
            return Some(WinningLine::new(mark, [a, b, c]));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_every_line_detected_for_both_marks() {
        for &line in &WIN_LINES {
            for mark in [Mark::X, Mark::O] {
                let mut board = Board::new();
                for &index in &line {
                    board.set(index, mark).unwrap();
                }
                assert_eq!(check_win(&board), Some(mark), "line {:?}", line);
                assert_eq!(
                    check_win_with_line(&board),
                    Some(WinningLine::new(mark, line))
                );
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(0, Mark::X).unwrap();
        board.set(1, Mark::O).unwrap();
        board.set(2, Mark::X).unwrap();
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_full_board_without_winner() {
        let board = Board::from_marks([
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::X,
        ]);
        assert!(board.is_full());
        assert_eq!(check_win(&board), None);
    }
}
