//! A baccarat card-counting and play-decision engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Tracker`] type that manages the full shoe flow:
//! the pre-play burn, the fixed dealing sequence and third-card tableau,
//! running/true-count bookkeeping, betting recommendations, and
//! snapshot-based undo.
//!
//! # Example
//!
//! ```
//! use bacrs::{Rank, Tracker, TrackerOptions, Winner};
//!
//! let mut tracker = Tracker::new(TrackerOptions::default());
//! tracker.submit_card(Rank::Four); // burned card: counted, dealt to no hand
//! tracker.finish_burn();
//!
//! // Player 4,4 (8) against banker 3,2 (5): a natural.
//! for rank in [Rank::Four, Rank::Four, Rank::Three, Rank::Two] {
//!     tracker.submit_card(rank);
//! }
//! assert_eq!(tracker.round().winner(), Some(Winner::Player));
//! assert_eq!(tracker.running_count(), 8);
//! assert_eq!(tracker.cards_remaining(), 411);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Rank};
pub use error::ParseRankError;
pub use game::{History, Phase, RoundPhase, RoundState, Shoe, Slot, Snapshot, Tracker};
pub use hand::Hand;
pub use options::TrackerOptions;
pub use result::{Recommendation, Winner};
