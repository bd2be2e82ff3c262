//! Session and round phase types.
//!
//! Both phases are tagged variants rather than flag sets, so states like
//! "finished but still awaiting a card" or "burn count during play" cannot
//! be represented.

use crate::result::Winner;

/// A deal slot in the fixed baccarat dealing sequence.
///
/// The initial four cards go out `Player1`, `Player2`, `Banker1`, `Banker2`;
/// the tableau may then call for `Player3` and/or `Banker3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The player's first card.
    Player1,
    /// The player's second card.
    Player2,
    /// The banker's first card.
    Banker1,
    /// The banker's second card.
    Banker2,
    /// The player's third card.
    Player3,
    /// The banker's third card.
    Banker3,
}

impl Slot {
    /// Returns whether this slot deals to the player hand.
    #[must_use]
    pub const fn is_player(self) -> bool {
        matches!(self, Self::Player1 | Self::Player2 | Self::Player3)
    }
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// The round needs a card dealt to the given slot.
    Awaiting(Slot),
    /// The round is over.
    Finished {
        /// The winning side.
        winner: Winner,
        /// Whether the round ended on a natural 8 or 9.
        natural: bool,
    },
}

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pre-play burn: dealt cards are counted but assigned to no hand.
    Burn {
        /// Number of cards burned so far.
        burned: u32,
    },
    /// Rounds are being dealt.
    Playing,
}
