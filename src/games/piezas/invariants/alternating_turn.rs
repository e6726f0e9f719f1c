//! Alternating turn invariant: the turn passes on every in-range drop.

use super::Invariant;
use crate::session::Session;

/// Invariant: Players alternate turns.
///
/// Each recorded drop is made by the opponent of the previous dropper,
/// unless the previous drop was off the board, in which case the same
/// player goes again. The current turn follows the same rule from the
/// last record.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let mut expected = session.opening_turn();

        for record in session.history() {
            if record.player != expected {
                return false;
            }
            if record.advanced_turn() {
                expected = expected.opponent();
            }
        }

        session.game().turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns; only off-board drops keep the turn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::piezas::Player;

    #[test]
    fn test_empty_session_holds() {
        assert!(AlternatingTurnInvariant::holds(&Session::new()));
    }

    #[test]
    fn test_full_column_and_off_board_hold() {
        let session = Session::replay(&[1, 1, 1, 1, -3, 2, 8, 0]);
        assert!(AlternatingTurnInvariant::holds(&session));
        // B forfeits on the full column, then A and B each miss once
        // off the board.
        assert_eq!(session.game().turn(), Player::A);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut session = Session::replay(&[0, 1]);
        session.history_mut()[1].player = Player::A;
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
