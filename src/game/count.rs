//! Shoe-level counting and results bookkeeping.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE};
use crate::result::Winner;

/// Running-count and results state for one shoe.
///
/// Counting does not distinguish phases: burned cards and round cards move
/// the running count and the dealt total identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    /// Total cards in the shoe (decks × 52). Constant for the shoe's life.
    total_cards: u32,
    /// Cards dealt since the shoe was opened, burn and play alike.
    cards_dealt: u32,
    /// Cumulative sum of count values of all dealt cards.
    running_count: i32,
    /// 1-based number of the current round.
    round_count: u32,
    /// Winners of finished rounds, oldest first.
    results: Vec<Winner>,
}

impl Shoe {
    /// Creates bookkeeping for a fresh shoe of `total_cards` cards.
    #[must_use]
    pub const fn new(total_cards: u32) -> Self {
        Self {
            total_cards,
            cards_dealt: 0,
            running_count: 0,
            round_count: 1,
            results: Vec::new(),
        }
    }

    /// Records one dealt card: moves the running count by the card's count
    /// value and increments the dealt total by one.
    pub fn record(&mut self, card: Card) {
        self.running_count += i32::from(card.count);
        self.cards_dealt += 1;
    }

    /// Appends a finished round's winner to the results log.
    pub fn record_result(&mut self, winner: Winner) {
        self.results.push(winner);
    }

    /// Advances to the next round.
    pub const fn next_round(&mut self) {
        self.round_count += 1;
    }

    /// Total cards in the shoe.
    #[must_use]
    pub const fn total_cards(&self) -> u32 {
        self.total_cards
    }

    /// Cards dealt since the shoe was opened.
    #[must_use]
    pub const fn cards_dealt(&self) -> u32 {
        self.cards_dealt
    }

    /// Cards not yet dealt. Zero once the shoe is notionally exhausted,
    /// even if dealing continues past it.
    #[must_use]
    pub const fn cards_remaining(&self) -> u32 {
        self.total_cards.saturating_sub(self.cards_dealt)
    }

    /// Cumulative count of all dealt cards.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// 1-based number of the current round.
    #[must_use]
    pub const fn round_count(&self) -> u32 {
        self.round_count
    }

    /// Winners of finished rounds, oldest first.
    #[must_use]
    pub fn results(&self) -> &[Winner] {
        &self.results
    }

    /// The running count normalized by estimated decks remaining.
    ///
    /// The divisor is floored at `min_decks` so the ratio stays bounded as
    /// the shoe empties (or is dealt past its nominal size).
    #[must_use]
    pub fn true_count(&self, min_decks: f64) -> f64 {
        let remaining = f64::from(self.total_cards) - f64::from(self.cards_dealt);
        let decks_remaining = (remaining / f64::from(DECK_SIZE)).max(min_decks);
        f64::from(self.running_count) / decks_remaining
    }
}
