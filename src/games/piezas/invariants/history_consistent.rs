//! History consistency invariant: the history explains the board.

use super::super::BoardGame;
use super::Invariant;
use crate::session::Session;

/// Invariant: Replaying the history reproduces the game.
///
/// Starting from an empty board with the session's opening turn, each
/// recorded column must yield the recorded player and result, and the
/// final board and turn must match the live game.
pub struct HistoryConsistentInvariant;

impl Invariant<Session> for HistoryConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let mut replayed = BoardGame::starting_with(session.opening_turn());

        for record in session.history() {
            if replayed.turn() != record.player {
                return false;
            }
            if replayed.drop_piece(record.column) != record.result {
                return false;
            }
        }

        replayed == *session.game()
    }

    fn description() -> &'static str {
        "Drop history reproduces the board and turn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::piezas::Piece;

    #[test]
    fn test_replayed_session_holds() {
        let session = Session::replay(&[3, 2, 3, 1, 2, 0, 1, 0, 0, 1, 3, 2]);
        assert!(HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_holds_after_reset() {
        let mut session = Session::replay(&[0, 0, 1]);
        session.reset();
        session.drop_piece(2);
        assert!(HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_rewritten_result_violates() {
        let mut session = Session::replay(&[0, 1]);
        session.history_mut()[0].result = Piece::Empty;
        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
