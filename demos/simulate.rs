//! Plays a full simulated shoe through the tracker.
//!
//! Shuffles a multi-deck shoe with a seeded RNG, burns the top card, and
//! deals every remaining card, printing each finished round and a final
//! tally. Pass a seed as the first argument for a different shoe.

#![allow(clippy::missing_docs_in_private_items)]

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use bacrs::{RANKS, Rank, Tracker, TrackerOptions, Winner};

fn shuffled_shoe(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Rank> {
    let mut cards = Vec::with_capacity(decks as usize * 52);
    for _ in 0..decks {
        // Four suits of each rank per deck; suits themselves don't matter.
        for _ in 0..4 {
            cards.extend_from_slice(&RANKS);
        }
    }
    cards.shuffle(rng);
    cards
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let options = TrackerOptions::default();
    let shoe = shuffled_shoe(options.decks, &mut rng);
    let mut tracker = Tracker::new(options);

    let mut cards = shoe.into_iter();
    if let Some(rank) = cards.next() {
        tracker.submit_card(rank);
    }
    tracker.finish_burn();

    println!("Seed {seed}: dealing {} cards after the burn.\n", tracker.cards_remaining());

    for rank in cards {
        tracker.submit_card(rank);
        if tracker.round().is_finished() {
            let round = tracker.round();
            let winner = match round.winner() {
                Some(Winner::Player) => "PLAYER",
                Some(Winner::Banker) => "BANKER",
                Some(Winner::Tie) => "TIE",
                None => unreachable!("finished round always has a winner"),
            };
            let natural = if round.is_natural() { " natural" } else { "" };
            println!(
                "Round {:>3}: player {} banker {} -> {winner}{natural} | RC {:+} TC {:+.2} {:?}",
                tracker.round_count(),
                round.player().value(),
                round.banker().value(),
                tracker.running_count(),
                tracker.true_count(),
                tracker.recommendation(),
            );
        }
    }

    let results = tracker.results();
    let player = results.iter().filter(|w| **w == Winner::Player).count();
    let banker = results.iter().filter(|w| **w == Winner::Banker).count();
    let ties = results.iter().filter(|w| **w == Winner::Tie).count();
    println!(
        "\n{} rounds: {player} player, {banker} banker, {ties} ties.",
        results.len()
    );
    if !tracker.round().is_finished() {
        println!("The shoe ran out mid-round.");
    }
    println!(
        "Final running count {:+}, true count {:+.2}.",
        tracker.running_count(),
        tracker.true_count(),
    );
}
