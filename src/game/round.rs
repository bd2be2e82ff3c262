//! The per-round dealing sequence.

use crate::card::Card;
use crate::hand::{self, Hand};
use crate::result::Winner;

use super::state::{RoundPhase, Slot};
use super::tableau;

/// The live state of a single baccarat round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// The player hand.
    player: Hand,
    /// The banker hand.
    banker: Hand,
    /// Awaiting slot or terminal outcome.
    phase: RoundPhase,
}

impl RoundState {
    /// Creates an empty round awaiting the first player card.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player: Hand::new(),
            banker: Hand::new(),
            phase: RoundPhase::Awaiting(Slot::Player1),
        }
    }

    /// The player hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// The banker hand.
    #[must_use]
    pub const fn banker(&self) -> &Hand {
        &self.banker
    }

    /// The round phase: the awaited slot, or the terminal outcome.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, RoundPhase::Finished { .. })
    }

    /// The winning side, once the round has finished.
    #[must_use]
    pub const fn winner(&self) -> Option<Winner> {
        match self.phase {
            RoundPhase::Finished { winner, .. } => Some(winner),
            RoundPhase::Awaiting(_) => None,
        }
    }

    /// Returns whether the round ended on a natural 8 or 9.
    #[must_use]
    pub const fn is_natural(&self) -> bool {
        matches!(self.phase, RoundPhase::Finished { natural: true, .. })
    }

    /// Applies one dealt card and returns the resulting round state, as a
    /// single transition covering the hand append, the deal sequence, and
    /// the tableau decision.
    ///
    /// The side receiving the card is determined solely by the slot the
    /// round is awaiting, never by the caller. Applying a card to a finished
    /// round returns the state unchanged; rolling over into the next round
    /// is the tracker's concern.
    #[must_use]
    pub fn apply(&self, card: Card) -> Self {
        let RoundPhase::Awaiting(slot) = self.phase else {
            return self.clone();
        };

        let mut player = self.player.clone();
        let mut banker = self.banker.clone();
        if slot.is_player() {
            player.add_card(card);
        } else {
            banker.add_card(card);
        }

        let phase = match slot {
            Slot::Player1 => RoundPhase::Awaiting(Slot::Player2),
            Slot::Player2 => RoundPhase::Awaiting(Slot::Banker1),
            Slot::Banker1 => RoundPhase::Awaiting(Slot::Banker2),
            Slot::Banker2 if hand::is_natural(&player, &banker) => RoundPhase::Finished {
                winner: winner_of(&player, &banker),
                natural: true,
            },
            Slot::Banker2 | Slot::Player3 | Slot::Banker3 => {
                match tableau::third_card(&player, &banker) {
                    Some(next) => RoundPhase::Awaiting(next),
                    None => RoundPhase::Finished {
                        winner: winner_of(&player, &banker),
                        natural: false,
                    },
                }
            }
        };

        Self {
            player,
            banker,
            phase,
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

fn winner_of(player: &Hand, banker: &Hand) -> Winner {
    Winner::from_values(player.value(), banker.value())
}
