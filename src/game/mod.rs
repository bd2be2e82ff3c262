//! Shoe-tracking engine and session flow.

use crate::card::{Card, Rank};
use crate::options::TrackerOptions;
use crate::result::{Recommendation, Winner};

mod count;
mod history;
mod round;
pub mod state;
pub mod tableau;

pub use count::Shoe;
pub use history::{History, Snapshot};
pub use round::RoundState;
pub use state::{Phase, RoundPhase, Slot};

/// A live baccarat shoe tracker.
///
/// The tracker owns all session state: the burn/play phase, the current
/// round, shoe-level counting, and the undo history. Feed it observed cards
/// with [`Tracker::submit_card`]; every input is applied as one atomic
/// transition, with the prior state archived so the input can be undone.
///
/// Use [`TrackerOptions`] to configure the shoe size and the
/// recommendation thresholds.
#[derive(Debug, Clone)]
pub struct Tracker {
    /// Session options.
    options: TrackerOptions,
    /// Burn or play.
    phase: Phase,
    /// Shoe-level counting state.
    shoe: Shoe,
    /// The live round.
    round: RoundState,
    /// Undo log.
    history: History,
}

impl Tracker {
    /// Creates a tracker for a fresh shoe, starting in the burn phase.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::{Tracker, TrackerOptions};
    ///
    /// let tracker = Tracker::new(TrackerOptions::default());
    /// assert_eq!(tracker.cards_remaining(), 416);
    /// assert_eq!(tracker.burn_count(), Some(0));
    /// ```
    #[must_use]
    pub fn new(options: TrackerOptions) -> Self {
        let shoe = Shoe::new(options.total_cards());
        Self {
            options,
            phase: Phase::Burn { burned: 0 },
            shoe,
            round: RoundState::new(),
            history: History::new(),
        }
    }

    /// Feeds one observed card into the session.
    ///
    /// During the burn phase the card is counted but assigned to no hand.
    /// During play it goes to the slot the round is awaiting; a card
    /// submitted after a round has finished opens the next round as its
    /// first player card. Never an error: any rank is accepted, even once
    /// the shoe is notionally exhausted.
    pub fn submit_card(&mut self, rank: Rank) {
        let card = Card::new(rank);
        self.archive();

        match self.phase {
            Phase::Burn { burned } => {
                self.phase = Phase::Burn { burned: burned + 1 };
                self.shoe.record(card);
            }
            Phase::Playing => {
                if self.round.is_finished() {
                    self.round = RoundState::new();
                    self.shoe.next_round();
                }
                let round = self.round.apply(card);
                self.shoe.record(card);
                if let Some(winner) = round.winner() {
                    self.shoe.record_result(winner);
                }
                self.round = round;
            }
        }
    }

    /// Reverts the most recent mutating input, restoring hands, counts,
    /// results log, and phase.
    ///
    /// Returns `false` (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.shoe = snapshot.shoe;
        self.round = snapshot.round;
        self.phase = snapshot.phase;
        true
    }

    /// Ends the burn phase and opens play on the first round.
    ///
    /// Silently ignored unless the session is burning.
    pub fn finish_burn(&mut self) {
        if let Phase::Burn { .. } = self.phase {
            self.archive();
            self.phase = Phase::Playing;
        }
    }

    /// Abandons the shoe: zeroes all counts and results, clears the undo
    /// history, and re-enters the burn phase.
    ///
    /// Destructive and not undoable. Obtaining user confirmation is the
    /// caller's responsibility.
    pub fn reset_shoe(&mut self) {
        self.shoe = Shoe::new(self.options.total_cards());
        self.round = RoundState::new();
        self.phase = Phase::Burn { burned: 0 };
        self.history.clear();
    }

    /// Archives the live state for undo.
    fn archive(&mut self) {
        self.history.push(Snapshot {
            shoe: self.shoe.clone(),
            round: self.round.clone(),
            phase: self.phase,
        });
    }

    /// The configured options.
    #[must_use]
    pub const fn options(&self) -> &TrackerOptions {
        &self.options
    }

    /// The current session phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of cards burned, while the burn phase is active.
    #[must_use]
    pub const fn burn_count(&self) -> Option<u32> {
        match self.phase {
            Phase::Burn { burned } => Some(burned),
            Phase::Playing => None,
        }
    }

    /// The live round.
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    /// Cumulative count of all cards dealt since the last reset, burn
    /// cards included.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.shoe.running_count()
    }

    /// The running count normalized by estimated decks remaining.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        self.shoe.true_count(self.options.min_decks)
    }

    /// Cards dealt since the last reset.
    #[must_use]
    pub const fn cards_dealt(&self) -> u32 {
        self.shoe.cards_dealt()
    }

    /// Cards not yet dealt from the shoe.
    #[must_use]
    pub const fn cards_remaining(&self) -> u32 {
        self.shoe.cards_remaining()
    }

    /// 1-based number of the current round.
    #[must_use]
    pub const fn round_count(&self) -> u32 {
        self.shoe.round_count()
    }

    /// Winners of all finished rounds, oldest first.
    #[must_use]
    pub fn results(&self) -> &[Winner] {
        self.shoe.results()
    }

    /// The betting suggestion for the current true count, recomputed on
    /// every read.
    #[must_use]
    pub fn recommendation(&self) -> Recommendation {
        Recommendation::for_true_count(
            self.true_count(),
            self.options.player_threshold,
            self.options.banker_threshold,
        )
    }

    /// Number of archived undo snapshots.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
