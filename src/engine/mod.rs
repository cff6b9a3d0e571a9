mod board;
mod bot;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot::{BotInput, BotType, calculate_minimax_move, calculate_move};
pub use game_state::TicTacToeGameState;
pub use types::{GameStatus, Mark, MoveError, WinningLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
