//! The standard baccarat third-card tableau.

use crate::hand::{self, Hand};

use super::state::Slot;

/// Decides whether a third card is required, and for which side.
///
/// Returns `Some(Slot::Player3)` or `Some(Slot::Banker3)` when a draw is
/// required, or `None` when no further card is dealt and the round is over.
/// Deterministic in the two hands' lengths and values.
#[must_use]
pub fn third_card(player: &Hand, banker: &Hand) -> Option<Slot> {
    // A natural on the initial four cards ends the round outright.
    if hand::is_natural(player, banker) {
        return None;
    }

    // Player draws on 0-5, stands on 6-7.
    if player.len() == 2 && player.value() <= 5 {
        return Some(Slot::Player3);
    }

    if banker.len() == 2 {
        // Player stood: banker draws on 0-5, stands on 6-9.
        if player.len() == 2 {
            return (banker.value() <= 5).then_some(Slot::Banker3);
        }

        // Player drew: banker's decision keys on the player's third card.
        if let Some(third) = player.third_card() {
            let p3 = third.point;
            let draws = match banker.value() {
                0..=2 => true,
                3 => p3 != 8,
                4 => (2..=7).contains(&p3),
                5 => (4..=7).contains(&p3),
                6 => p3 == 6 || p3 == 7,
                // Banker stands on 7.
                _ => false,
            };
            return draws.then_some(Slot::Banker3);
        }
    }

    // Banker already holds three cards; the round is over.
    None
}
