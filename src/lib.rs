pub mod config;
pub mod engine;
pub mod logger;
pub mod session;
pub mod session_rng;
pub mod settings;

pub use engine::{
    Board, BotInput, BotType, CELL_COUNT, GameStatus, Mark, MoveError, TicTacToeGameState,
    WIN_LINES, WinningLine, calculate_minimax_move, calculate_move, check_win,
    check_win_with_line,
};
pub use session::TicTacToeSession;
pub use session_rng::SessionRng;
pub use settings::TicTacToeConfig;
