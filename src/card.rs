//! Card ranks and the point/count value catalog.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseRankError;

/// Card rank. Suits carry no meaning in baccarat and are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// The rank's contribution to a hand total (0-9; tens and faces count 0).
    #[must_use]
    pub const fn point_value(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 0,
        }
    }

    /// The rank's weight in the running count.
    #[must_use]
    pub const fn count_value(self) -> i8 {
        match self {
            Self::Ace | Self::Two | Self::Three => 1,
            Self::Four => 2,
            Self::Five | Self::Six | Self::Seven => -1,
            Self::Eight => -2,
            Self::Nine | Self::Ten | Self::Jack | Self::Queen | Self::King => 0,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        })
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" | "1" => Ok(Self::Ace),
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::Five),
            "6" => Ok(Self::Six),
            "7" => Ok(Self::Seven),
            "8" => Ok(Self::Eight),
            "9" => Ok(Self::Nine),
            "10" | "T" | "t" => Ok(Self::Ten),
            "J" | "j" => Ok(Self::Jack),
            "Q" | "q" => Ok(Self::Queen),
            "K" | "k" => Ok(Self::King),
            _ => Err(ParseRankError),
        }
    }
}

/// A dealt card with its catalog values resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// Point value for hand totals (0-9).
    pub point: u8,
    /// Weight in the running count.
    pub count: i8,
}

impl Card {
    /// Creates a card from its rank, resolving point and count values.
    #[must_use]
    pub const fn new(rank: Rank) -> Self {
        Self {
            rank,
            point: rank.point_value(),
            count: rank.count_value(),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: u32 = 52;

/// All thirteen ranks in keypad order.
pub const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];
