//! Round outcome and betting recommendation types.

/// The winning side of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The player hand won.
    Player,
    /// The banker hand won.
    Banker,
    /// Both hands finished on the same value.
    Tie,
}

impl Winner {
    /// Determines the winner from the two final hand values.
    ///
    /// Exactly one of the three outcomes holds for any pair of values, and
    /// [`Winner::Tie`] holds iff the values are equal.
    #[must_use]
    pub const fn from_values(player: u8, banker: u8) -> Self {
        if player > banker {
            Self::Player
        } else if banker > player {
            Self::Banker
        } else {
            Self::Tie
        }
    }
}

/// The betting suggestion derived from the true count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    /// Bet on the player side.
    Player,
    /// Bet on the banker side.
    Banker,
    /// No edge either way; wait.
    Neutral,
}

impl Recommendation {
    /// Derives the suggestion for a true count against the two thresholds.
    ///
    /// `tc >= player_threshold` suggests the player side,
    /// `tc <= banker_threshold` the banker side, anything between is
    /// [`Recommendation::Neutral`]. There is no hysteresis; callers
    /// recompute on every read.
    #[must_use]
    pub fn for_true_count(true_count: f64, player_threshold: f64, banker_threshold: f64) -> Self {
        if true_count >= player_threshold {
            Self::Player
        } else if true_count <= banker_threshold {
            Self::Banker
        } else {
            Self::Neutral
        }
    }
}
