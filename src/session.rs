//! Recorded Piezas sessions.
//!
//! A session wraps one [`BoardGame`] with the history of every drop made on
//! it, so a game can be replayed from a move script and reported as JSON.

use crate::games::piezas::{BoardGame, DropRecord, Piece, Player, ROWS};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A game plus its drop history.
#[derive(Debug, Clone)]
pub struct Session {
    game: BoardGame,
    opening_turn: Player,
    history: Vec<DropRecord>,
}

impl Session {
    /// Creates a session on a fresh board.
    #[instrument]
    pub fn new() -> Self {
        Self::from_game(BoardGame::new())
    }

    /// Wraps an existing game. Drops made before this call are not recorded,
    /// so the game should be empty for the history to replay cleanly.
    pub fn from_game(game: BoardGame) -> Self {
        Self {
            opening_turn: game.turn(),
            game,
            history: Vec::new(),
        }
    }

    /// Plays `columns` in order on a fresh session.
    #[instrument]
    pub fn replay(columns: &[i32]) -> Self {
        let mut session = Self::new();
        for &column in columns {
            session.drop_piece(column);
        }
        info!(drops = columns.len(), state = %session.game.game_state(), "Replay finished");
        session
    }

    /// Returns the game.
    pub fn game(&self) -> &BoardGame {
        &self.game
    }

    /// Returns the recorded drops, oldest first.
    pub fn history(&self) -> &[DropRecord] {
        &self.history
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut Vec<DropRecord> {
        &mut self.history
    }

    /// The player on turn when the history began.
    pub fn opening_turn(&self) -> Player {
        self.opening_turn
    }

    /// Drops into `column` and records the attempt.
    #[instrument(skip(self))]
    pub fn drop_piece(&mut self, column: i32) -> Piece {
        let player = self.game.turn();
        let result = self.game.drop_piece(column);
        let record = DropRecord::new(player, column, result);
        debug!(%record, "Drop recorded");
        self.history.push(record);
        result
    }

    /// Resets the board and starts a new history from the current turn.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        self.history.clear();
        self.opening_turn = self.game.turn();
    }

    /// Summarizes the session for output.
    #[instrument(skip(self))]
    pub fn report(&self) -> GameReport {
        GameReport {
            rows: (0..ROWS)
                .rev()
                .map(|row| self.game.board().row_string(row))
                .collect(),
            turn: self.game.turn(),
            outcome: self.game.game_state().into(),
            history: self.history.clone(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome as shown in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "player")]
pub enum ReportOutcome {
    /// The board still has empty squares.
    InProgress,
    /// The board is full and neither player holds more lines.
    Tie,
    /// The board is full and this player holds more lines.
    Winner(Player),
}

impl From<Piece> for ReportOutcome {
    fn from(state: Piece) -> Self {
        match state {
            Piece::OutOfRange => ReportOutcome::InProgress,
            Piece::Empty => ReportOutcome::Tie,
            Piece::PlayerA => ReportOutcome::Winner(Player::A),
            Piece::PlayerB => ReportOutcome::Winner(Player::B),
        }
    }
}

impl std::fmt::Display for ReportOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportOutcome::InProgress => write!(f, "In progress"),
            ReportOutcome::Tie => write!(f, "Tie"),
            ReportOutcome::Winner(player) => write!(f, "Player {} wins", player),
        }
    }
}

/// Serializable snapshot of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// Board rows as symbols, top row first.
    pub rows: Vec<String>,
    /// Player to move next.
    pub turn: Player,
    /// Current outcome.
    pub outcome: ReportOutcome,
    /// Every drop made, oldest first.
    pub history: Vec<DropRecord>,
}

/// Move script that could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses a move script such as `"3,2,3,1"` or `"3 2 3 1"`.
///
/// Any integer is accepted; columns off the board are left for the engine
/// to answer with `OutOfRange`.
#[instrument]
pub fn parse_columns(script: &str) -> Result<Vec<i32>, ScriptError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|e| ScriptError::new(format!("Invalid column {:?}: {}", token, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_columns_separators() {
        assert_eq!(parse_columns("3,2, 3\n1").unwrap(), vec![3, 2, 3, 1]);
        assert_eq!(parse_columns("-1 4").unwrap(), vec![-1, 4]);
        assert!(parse_columns("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_columns_rejects_garbage() {
        let err = parse_columns("1,two,3").unwrap_err();
        assert!(err.message.contains("two"));
    }

    #[test]
    fn test_history_records_player_on_turn() {
        let session = Session::replay(&[0, 7, 0]);
        let players: Vec<_> = session.history().iter().map(|r| r.player).collect();
        assert_eq!(players, vec![Player::A, Player::B, Player::B]);
        assert_eq!(session.history()[1].result, Piece::OutOfRange);
    }

    #[test]
    fn test_reset_restarts_history_from_current_turn() {
        let mut session = Session::replay(&[2]);
        session.reset();
        assert!(session.history().is_empty());
        assert_eq!(session.opening_turn(), Player::B);
    }

    #[test]
    fn test_report_outcome_from_state() {
        assert_eq!(ReportOutcome::from(Piece::OutOfRange), ReportOutcome::InProgress);
        assert_eq!(ReportOutcome::from(Piece::Empty), ReportOutcome::Tie);
        assert_eq!(ReportOutcome::from(Piece::PlayerB), ReportOutcome::Winner(Player::B));
    }
}
