//! Interactive shoe-tracking keypad.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use bacrs::{Hand, Phase, Rank, Recommendation, RoundPhase, Slot, Tracker, TrackerOptions, Winner};

fn main() {
    println!("Baccarat shoe tracker");
    println!("Enter a card rank (A, 2-10, J, Q, K) to deal it.");
    println!("Commands: [u]ndo  [d]one burning  [r]eset shoe  [q]uit");

    let mut tracker = Tracker::new(TrackerOptions::default());

    loop {
        print_stats(&tracker);
        match tracker.phase() {
            Phase::Burn { burned } => {
                println!("Burn phase: {burned} card(s) burned. Enter burned cards, then 'd' to start play.");
            }
            Phase::Playing => print_table(&tracker),
        }

        let input = prompt_line("> ");
        match input.as_str() {
            "" => {}
            "q" | "quit" => break,
            "u" | "undo" => {
                if !tracker.undo() {
                    println!("Nothing to undo.");
                }
            }
            "d" | "done" => tracker.finish_burn(),
            "r" | "reset" => {
                if prompt_line("End the shoe and reset all data? (y/n): ") == "y" {
                    tracker.reset_shoe();
                }
            }
            other => match other.parse::<Rank>() {
                Ok(rank) => tracker.submit_card(rank),
                Err(err) => println!("{err}: {other}"),
            },
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_stats(tracker: &Tracker) {
    println!(
        "\nRC {:+} | TC {:.1} | {} cards remaining | round {}",
        tracker.running_count(),
        tracker.true_count(),
        tracker.cards_remaining(),
        tracker.round_count(),
    );
}

fn print_table(tracker: &Tracker) {
    let round = tracker.round();
    println!(
        "Player: {} (value {})",
        format_hand(round.player()),
        round.player().value()
    );
    println!(
        "Banker: {} (value {})",
        format_hand(round.banker()),
        round.banker().value()
    );

    match round.phase() {
        RoundPhase::Awaiting(slot) => {
            println!("Waiting for {}", format_slot(slot));
            // Fresh shoe: suggest before the first card goes out.
            if tracker.round_count() == 1 && round.player().is_empty() {
                print_recommendation(tracker.recommendation());
            }
        }
        RoundPhase::Finished { winner, natural } => {
            let label = match winner {
                Winner::Player => "PLAYER wins",
                Winner::Banker => "BANKER wins",
                Winner::Tie => "TIE",
            };
            let suffix = if natural { " (natural)" } else { "" };
            println!("{label}{suffix} - next card starts round {}", tracker.round_count() + 1);
            println!("Results: {}", format_results(tracker.results()));
            print_recommendation(tracker.recommendation());
        }
    }
}

fn print_recommendation(recommendation: Recommendation) {
    match recommendation {
        Recommendation::Player => println!("Suggestion: bet PLAYER"),
        Recommendation::Banker => println!("Suggestion: bet BANKER"),
        Recommendation::Neutral => println!("Suggestion: wait"),
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(|card| card.rank.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_slot(slot: Slot) -> &'static str {
    match slot {
        Slot::Player1 => "player card 1",
        Slot::Player2 => "player card 2",
        Slot::Banker1 => "banker card 1",
        Slot::Banker2 => "banker card 2",
        Slot::Player3 => "player third card",
        Slot::Banker3 => "banker third card",
    }
}

fn format_results(results: &[Winner]) -> String {
    if results.is_empty() {
        return "(none)".to_string();
    }
    results
        .iter()
        .map(|winner| match winner {
            Winner::Player => "P",
            Winner::Banker => "B",
            Winner::Tie => "T",
        })
        .collect::<Vec<_>>()
        .join(" ")
}
