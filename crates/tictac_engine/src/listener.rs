//! Best-effort notifications emitted after each applied move.

use crate::types::{Coord, Line, PlayerId};
use serde::{Deserialize, Serialize};

/// Something that happened in the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A mark was placed and the round continues or ends.
    MovePlayed {
        /// Who moved.
        seat: PlayerId,
        /// Where.
        at: Coord,
    },
    /// The mover completed a line.
    RoundWon {
        /// The winner.
        seat: PlayerId,
        /// The completed line.
        line: Line,
    },
    /// The board filled without a winner.
    RoundDrawn,
}

/// Observer of round events.
///
/// Listeners cannot fail the move that triggered them; anything they do
/// (sound, logging) is on their own account.
pub trait RoundListener: Send {
    /// Called once per event, in the order the events happen.
    fn on_event(&self, event: RoundEvent);
}

impl<F> RoundListener for F
where
    F: Fn(RoundEvent) + Send,
{
    fn on_event(&self, event: RoundEvent) {
        self(event)
    }
}
