//! Exhaustive third-card tableau tests.

use bacrs::game::tableau;
use bacrs::{Card, Hand, Rank, RoundPhase, RoundState, Slot};

/// Draw matrix for the banker after the player drew: rows are banker totals
/// 0-7, columns are the point value of the player's third card (0-9).
const BANKER_DRAWS: [[bool; 10]; 8] = [
    [true, true, true, true, true, true, true, true, true, true],
    [true, true, true, true, true, true, true, true, true, true],
    [true, true, true, true, true, true, true, true, true, true],
    [true, true, true, true, true, true, true, true, false, true],
    [false, false, true, true, true, true, true, true, false, false],
    [false, false, false, false, true, true, true, true, false, false],
    [false, false, false, false, false, false, true, true, false, false],
    [false, false, false, false, false, false, false, false, false, false],
];

fn rank_for_point(point: u8) -> Rank {
    match point {
        0 => Rank::Ten,
        1 => Rank::Ace,
        2 => Rank::Two,
        3 => Rank::Three,
        4 => Rank::Four,
        5 => Rank::Five,
        6 => Rank::Six,
        7 => Rank::Seven,
        8 => Rank::Eight,
        9 => Rank::Nine,
        _ => panic!("no rank with point value {point}"),
    }
}

fn hand(points: &[u8]) -> Hand {
    let mut hand = Hand::new();
    for &point in points {
        hand.add_card(Card::new(rank_for_point(point)));
    }
    hand
}

#[test]
fn natural_ends_round_without_draws() {
    for p in 0..=9u8 {
        for b in 0..=9u8 {
            if p.max(b) >= 8 {
                let player = hand(&[p, 0]);
                let banker = hand(&[b, 0]);
                assert_eq!(
                    tableau::third_card(&player, &banker),
                    None,
                    "natural at player {p} banker {b}"
                );
            }
        }
    }
}

#[test]
fn player_draws_on_zero_through_five() {
    for p in 0..=5u8 {
        for b in 0..=7u8 {
            let player = hand(&[p, 0]);
            let banker = hand(&[b, 0]);
            assert_eq!(
                tableau::third_card(&player, &banker),
                Some(Slot::Player3),
                "player {p} banker {b}"
            );
        }
    }
}

#[test]
fn stood_player_leaves_banker_drawing_on_zero_through_five() {
    for p in 6..=7u8 {
        for b in 0..=7u8 {
            let player = hand(&[p, 0]);
            let banker = hand(&[b, 0]);
            let expected = (b <= 5).then_some(Slot::Banker3);
            assert_eq!(
                tableau::third_card(&player, &banker),
                expected,
                "player {p} banker {b}"
            );
        }
    }
}

#[test]
fn banker_draw_matrix_after_player_drew() {
    for (b, row) in BANKER_DRAWS.iter().enumerate() {
        for (p3, &draws) in row.iter().enumerate() {
            // Any three-card player hand works; only its third card matters.
            let player = hand(&[0, 0, p3 as u8]);
            let banker = hand(&[b as u8, 0]);
            assert_eq!(
                tableau::third_card(&player, &banker),
                draws.then_some(Slot::Banker3),
                "banker {b} against player third card {p3}"
            );
        }
    }
}

#[test]
fn three_card_banker_ends_round() {
    let player = hand(&[0, 0, 5]);
    let banker = hand(&[1, 2, 3]);
    assert_eq!(tableau::third_card(&player, &banker), None);
}

/// Drives the round machine over every point-value combination and asserts
/// the hypothetical "player stood on two cards while banker holds three"
/// shape never appears in any awaiting state. The tableau assigns it no
/// behavior because the deal protocol cannot produce it.
#[test]
fn stood_player_never_faces_three_card_banker() {
    fn assert_shape(round: &RoundState) {
        if !round.is_finished() {
            assert!(
                !(round.player().len() == 2 && round.banker().len() == 3),
                "reachable awaiting state with a stood player and a three-card banker"
            );
        }
    }

    for p1 in 0..=9u8 {
        for p2 in 0..=9u8 {
            for b1 in 0..=9u8 {
                for b2 in 0..=9u8 {
                    let mut round = RoundState::new();
                    for point in [p1, p2, b1, b2] {
                        round = round.apply(Card::new(rank_for_point(point)));
                        assert_shape(&round);
                    }

                    match round.phase() {
                        RoundPhase::Awaiting(Slot::Player3) => {
                            for p3 in 0..=9u8 {
                                let after = round.apply(Card::new(rank_for_point(p3)));
                                assert_shape(&after);
                                if let RoundPhase::Awaiting(slot) = after.phase() {
                                    assert_eq!(slot, Slot::Banker3);
                                    let done = after.apply(Card::new(rank_for_point(0)));
                                    assert_shape(&done);
                                    assert!(done.is_finished());
                                }
                            }
                        }
                        RoundPhase::Awaiting(Slot::Banker3) => {
                            let done = round.apply(Card::new(rank_for_point(0)));
                            assert_shape(&done);
                            assert!(done.is_finished());
                        }
                        RoundPhase::Awaiting(slot) => {
                            panic!("initial deal left the round awaiting {slot:?}")
                        }
                        RoundPhase::Finished { .. } => {}
                    }
                }
            }
        }
    }
}
