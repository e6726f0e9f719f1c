//! Completeness detection for Piezas.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// Only a full board has an outcome.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|s| *s != Square::Empty)
}
