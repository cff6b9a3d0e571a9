use serde::{Deserialize, Serialize};

use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::Mark;
use super::win_detector::check_win;
use crate::session_rng::SessionRng;

/// Score of a board that the bot (or its opponent) has won outright.
const WIN_SCORE: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    Random,
    Minimax,
}

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board.clone(),
            bot_mark: state.current_mark,
        }
    }
}

/// Picks the bot's move, or `None` when the board has no empty cell left.
pub fn calculate_move(bot_type: BotType, input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    match bot_type {
        BotType::Random => calculate_random_move(input, rng),
        BotType::Minimax => calculate_minimax_move(input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves: Vec<usize> = input.board.empty_indices().collect();
    if available_moves.is_empty() {
        return None;
    }
    let choice = rng.random_range(0..available_moves.len());
    Some(available_moves[choice])
}

/// Exhaustive minimax driver: tries every empty cell in ascending order and
/// keeps the first one with the strictly best score.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent()?;
    let available_moves: Vec<usize> = input.board.empty_indices().collect();

    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board.clone();
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        board.put(index, bot_mark);
        let score = minimax(&mut board, bot_mark, opponent_mark, false);
        board.put(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Scores a board from the bot's point of view: +10 when the bot owns a
/// line, -10 when the opponent does, 0 for anything else (in progress or
/// drawn alike).
fn evaluate(board: &Board, bot_mark: Mark) -> i32 {
    match check_win(board) {
        Some(mark) if mark == bot_mark => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0,
    }
}

/// Full-depth search over every continuation. The board is mutated in place;
/// each explored move is reverted before the next sibling so the caller's
/// board comes back untouched. The draw check must run before the move loop,
/// otherwise a full board would fall through and return the i32::MIN/MAX
/// accumulator.
fn minimax(board: &mut Board, bot_mark: Mark, opponent_mark: Mark, is_maximizing: bool) -> i32 {
    let score = evaluate(board, bot_mark);
    if score != 0 {
        return score;
    }

    if board.is_full() {
        return 0;
    }

    let available_moves: Vec<usize> = board.empty_indices().collect();

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in available_moves {
            board.put(index, bot_mark);
            let eval = minimax(board, bot_mark, opponent_mark, false);
            board.put(index, Mark::Empty);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in available_moves {
            board.put(index, opponent_mark);
            let eval = minimax(board, bot_mark, opponent_mark, true);
            board.put(index, Mark::Empty);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
