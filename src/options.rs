//! Tracker configuration options.

use crate::card::DECK_SIZE;

/// Configuration options for a shoe-tracking session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bacrs::TrackerOptions;
///
/// let options = TrackerOptions::default()
///     .with_decks(6)
///     .with_player_threshold(2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// True count at or above which betting the player side is suggested.
    pub player_threshold: f64,
    /// True count at or below which betting the banker side is suggested.
    pub banker_threshold: f64,
    /// Lower bound on estimated decks remaining when computing the true
    /// count, so the ratio stays bounded as the shoe empties.
    pub min_decks: f64,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            decks: 8,
            player_threshold: 1.5,
            banker_threshold: -1.5,
            min_decks: 0.5,
        }
    }
}

impl TrackerOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::TrackerOptions;
    ///
    /// let options = TrackerOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the true-count threshold for suggesting the player side.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::TrackerOptions;
    ///
    /// let options = TrackerOptions::default().with_player_threshold(2.0);
    /// assert_eq!(options.player_threshold, 2.0);
    /// ```
    #[must_use]
    pub const fn with_player_threshold(mut self, threshold: f64) -> Self {
        self.player_threshold = threshold;
        self
    }

    /// Sets the true-count threshold for suggesting the banker side.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::TrackerOptions;
    ///
    /// let options = TrackerOptions::default().with_banker_threshold(-2.0);
    /// assert_eq!(options.banker_threshold, -2.0);
    /// ```
    #[must_use]
    pub const fn with_banker_threshold(mut self, threshold: f64) -> Self {
        self.banker_threshold = threshold;
        self
    }

    /// Sets the floor on estimated decks remaining.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::TrackerOptions;
    ///
    /// let options = TrackerOptions::default().with_min_decks(1.0);
    /// assert_eq!(options.min_decks, 1.0);
    /// ```
    #[must_use]
    pub const fn with_min_decks(mut self, min_decks: f64) -> Self {
        self.min_decks = min_decks;
        self
    }

    /// Total number of cards in the configured shoe.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        u32::from(self.decks) * DECK_SIZE
    }
}
