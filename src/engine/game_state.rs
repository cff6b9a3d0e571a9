use super::board::Board;
use super::types::{GameStatus, Mark, MoveError, WinningLine};
use super::win_detector::check_win_with_line;

/// Turn and status bookkeeping around a [`Board`]. X always moves first;
/// the human side of the original game plays X and the bot plays O, but the
/// state itself only tracks whose mark is due.
#[derive(Clone, Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub turn_count: usize,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            turn_count: 0,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    /// Places the current mark, then either finishes the game or hands the
    /// turn to the other mark.
    pub fn place_mark(&mut self, index: usize) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        if self.board.get(index)? != Mark::Empty {
            return Err(MoveError::CellOccupied(index));
        }

        self.board.set(index, self.current_mark)?;
        self.last_move = Some(index);
        self.turn_count += 1;

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!("current mark is never empty"),
        };
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.status = match line.mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!("winning line is never empty"),
            };
            self.winning_line = Some(line);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }
}
