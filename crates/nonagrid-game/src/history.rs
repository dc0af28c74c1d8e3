//! Undo/redo move history.

use crate::{Game, GameError, Move};

/// An append-only log of applied moves with an undo/redo cursor.
///
/// History is layered on top of the [`Move`] metadata returned by
/// [`Game::apply_move`]: the caller records each successful move, and
/// [`undo`](Self::undo)/[`redo`](Self::redo) replay the logged previous/new
/// values back onto the game. Recording a new move after undos discards the
/// redo tail, as editors do.
///
/// # Examples
///
/// ```
/// use nonagrid_core::{Digit, Position};
/// use nonagrid_game::{Game, MoveLog};
/// use nonagrid_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
/// let mut game = Game::new(puzzle);
/// let mut log = MoveLog::new();
///
/// let pos = Position::ALL
///     .into_iter()
///     .find(|&pos| game.cell(pos).is_empty())
///     .unwrap();
/// let digit = game.solution().get(pos).unwrap();
///
/// log.record(game.apply_move(pos, Some(digit)).unwrap());
/// log.undo(&mut game).unwrap();
/// assert!(game.cell(pos).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    entries: Vec<Move>,
    cursor: usize,
}

impl MoveLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
        }
    }

    /// Appends a move at the cursor, discarding any undone tail.
    pub fn record(&mut self, mv: Move) {
        self.entries.truncate(self.cursor);
        self.entries.push(mv);
        self.cursor += 1;
    }

    /// Returns whether there is a move to undo.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns whether there is an undone move to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Returns the number of recorded moves (including undone ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log holds no moves at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Undoes the most recent move by restoring its previous value.
    ///
    /// Returns the undone move, or `None` if there is nothing to undo.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GivenCell`] if the logged cell has become a
    /// given, which cannot happen for a log recorded against the same game
    /// instance. The cursor is unchanged on error.
    pub fn undo(&mut self, game: &mut Game) -> Result<Option<Move>, GameError> {
        let Some(index) = self.cursor.checked_sub(1) else {
            return Ok(None);
        };
        let mv = self.entries[index];
        game.restore(mv.position, mv.previous)?;
        self.cursor = index;
        Ok(Some(mv))
    }

    /// Redoes the most recently undone move by reapplying its new value.
    ///
    /// Returns the redone move, or `None` if there is nothing to redo.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GivenCell`] if the logged cell has become a
    /// given, which cannot happen for a log recorded against the same game
    /// instance. The cursor is unchanged on error.
    pub fn redo(&mut self, game: &mut Game) -> Result<Option<Move>, GameError> {
        let Some(mv) = self.entries.get(self.cursor).copied() else {
            return Ok(None);
        };
        game.restore(mv.position, mv.new)?;
        self.cursor += 1;
        Ok(Some(mv))
    }
}
