use crate::config::Validate;
use crate::engine::{
    BotInput, BotType, GameStatus, Mark, TicTacToeGameState, WinningLine, calculate_move,
};
use crate::log;
use crate::session_rng::SessionRng;
use crate::settings::TicTacToeConfig;

/// One human-versus-bot game. The presentation layer feeds in the human's
/// moves; the session answers each one with the bot's reply while the game
/// is still in progress. All calls are synchronous, so the board is never
/// observable mid-search.
pub struct TicTacToeSession {
    state: TicTacToeGameState,
    bot_type: BotType,
    bot_mark: Mark,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(config: &TicTacToeConfig) -> Result<Self, String> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };

        let mut session = Self {
            state: TicTacToeGameState::new(),
            bot_type: config.bot_type,
            bot_mark: config.bot_mark,
            rng,
        };

        // X opens, so a bot playing X moves before any human input arrives.
        session.play_bot_turns()?;
        Ok(session)
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state.winning_line
    }

    pub fn bot_mark(&self) -> Mark {
        self.bot_mark
    }

    /// Applies the human's move, then the bot's reply if the game is still
    /// open. Returns the status after both half-moves.
    pub fn play_human_move(&mut self, index: usize) -> Result<GameStatus, String> {
        if self.state.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }
        if self.state.current_mark == self.bot_mark {
            return Err("Not your turn".to_string());
        }

        let human_mark = self.state.current_mark;
        self.state.place_mark(index).map_err(|e| e.to_string())?;
        log!("Player {} placed at {}", human_mark, index);

        self.play_bot_turns()?;
        Ok(self.state.status)
    }

    fn play_bot_turns(&mut self) -> Result<(), String> {
        while self.state.status == GameStatus::InProgress && self.state.current_mark == self.bot_mark
        {
            let input = BotInput::from_game_state(&self.state);
            let Some(index) = calculate_move(self.bot_type, &input, &mut self.rng) else {
                // No legal move only happens on a full board, which the
                // status check above already classifies as a draw.
                break;
            };
            self.state.place_mark(index).map_err(|e| e.to_string())?;
            log!("Bot {} placed at {}", self.bot_mark, index);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MoveError;

    fn minimax_config() -> TicTacToeConfig {
        TicTacToeConfig {
            bot_type: BotType::Minimax,
            bot_mark: Mark::O,
            seed: Some(1),
        }
    }

    #[test]
    fn test_bot_replies_with_center_to_corner_opening() {
        let mut session = TicTacToeSession::new(&minimax_config()).unwrap();
        let status = session.play_human_move(0).unwrap();
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(session.state().board.get(4), Ok(Mark::O));
        // Turn is back with the human.
        assert_eq!(session.state().current_mark, Mark::X);
        assert_eq!(session.state().turn_count, 2);
    }

    #[test]
    fn test_bot_playing_x_opens_immediately() {
        let config = TicTacToeConfig {
            bot_mark: Mark::X,
            ..minimax_config()
        };
        let session = TicTacToeSession::new(&config).unwrap();
        assert_eq!(session.state().turn_count, 1);
        assert_eq!(session.state().current_mark, Mark::O);
    }

    #[test]
    fn test_rejects_move_on_occupied_cell() {
        let mut session = TicTacToeSession::new(&minimax_config()).unwrap();
        session.play_human_move(0).unwrap();
        let err = session.play_human_move(4).unwrap_err();
        assert_eq!(err, MoveError::CellOccupied(4).to_string());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = TicTacToeConfig {
            bot_mark: Mark::Empty,
            ..minimax_config()
        };
        assert!(TicTacToeSession::new(&config).is_err());
    }

    #[test]
    fn test_minimax_session_never_lets_random_human_win() {
        for seed in 0..20 {
            let mut session = TicTacToeSession::new(&minimax_config()).unwrap();
            let mut human_rng = SessionRng::new(seed);
            while session.status() == GameStatus::InProgress {
                let open: Vec<usize> = session.state().board.empty_indices().collect();
                let index = open[human_rng.random_range(0..open.len())];
                session.play_human_move(index).unwrap();
            }
            assert_ne!(session.status(), GameStatus::XWon, "seed {}", seed);
            if session.status() == GameStatus::OWon {
                assert_eq!(session.winning_line().map(|line| line.mark), Some(Mark::O));
            }
        }
    }

    #[test]
    fn test_random_bot_session_is_reproducible() {
        let config = TicTacToeConfig {
            bot_type: BotType::Random,
            ..minimax_config()
        };
        let mut first = TicTacToeSession::new(&config).unwrap();
        let mut second = TicTacToeSession::new(&config).unwrap();
        while first.status() == GameStatus::InProgress {
            let index = first.state().board.empty_indices().next().unwrap();
            let a = first.play_human_move(index).unwrap();
            let b = second.play_human_move(index).unwrap();
            assert_eq!(a, b);
            assert_eq!(first.state().board, second.state().board);
        }
        assert_eq!(first.status(), second.status());
    }
}
