use serde::{Deserialize, Serialize};

use super::types::{Mark, MoveError};
use super::win_detector::check_win;

pub const CELL_COUNT: usize = 9;

/// 3x3 grid stored row-major: indices 0-2 are the top row, 3-5 the middle,
/// 6-8 the bottom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    #[cfg(test)]
    pub fn from_marks(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Result<Mark, MoveError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(MoveError::OutOfRange(index))
    }

    /// Overwrites the cell unconditionally. Turn legality is the caller's
    /// responsibility; the search relies on this to undo explored moves.
    pub fn set(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = mark;
                Ok(())
            }
            None => Err(MoveError::OutOfRange(index)),
        }
    }

    pub(crate) fn put(&mut self, index: usize, mark: Mark) {
        debug_assert!(index < CELL_COUNT);
        self.cells[index] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Empty cell indices in ascending order. The ordering is what makes
    /// the bot's tie-breaking reproducible.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, &cell)| (cell == Mark::Empty).then_some(index))
    }

    /// Returns the mark holding all three cells, if any.
    pub fn line_owner(&self, a: usize, b: usize, c: usize) -> Option<Mark> {
        let mark = self.cells[a];
        if mark != Mark::Empty && self.cells[b] == mark && self.cells[c] == mark {
            Some(mark)
        } else {
            None
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(self)
    }
}
