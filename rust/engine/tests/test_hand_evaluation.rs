use std::cmp::Ordering;

use drawpoker_engine::cards::{Card, Rank};
use drawpoker_engine::hand::{compare_hands, evaluate_hand, Category, HandEvaluation};

fn cards(s: &str) -> [Card; 5] {
    let v: Vec<Card> = s.split_whitespace().map(|c| c.parse().unwrap()).collect();
    v.try_into().expect("five cards")
}

fn eval(s: &str) -> HandEvaluation {
    evaluate_hand(&cards(s))
}

#[test]
fn category_fixtures() {
    let fixtures = [
        ("10h Jh Qh Kh Ah", Category::StraightFlush, Rank::Ace),
        ("2c 2d 2h 2s 9c", Category::Quads, Rank::Two),
        ("3c 3d 3h 9s 9c", Category::FullHouse, Rank::Three),
        ("2h 5h 7h 9h Kh", Category::Flush, Rank::King),
        ("4c 5d 6h 7s 8c", Category::Straight, Rank::Eight),
        ("4c 4d 4h 7s Kc", Category::Trips, Rank::Four),
        ("2c 2d 9h 9s Kc", Category::TwoPair, Rank::Nine),
        ("Qc Qd 9h 5s 2c", Category::Pair, Rank::Queen),
        ("Ac Kd Qh Js 2c", Category::HighCard, Rank::Ace),
    ];
    for (hand, category, tiebreak) in fixtures {
        assert_eq!(
            eval(hand),
            HandEvaluation { category, tiebreak },
            "fixture {}",
            hand
        );
    }
}

#[test]
fn card_order_does_not_matter() {
    assert_eq!(eval("9c 3d 9s 3h 3c"), eval("3c 3d 3h 9s 9c"));
    assert_eq!(eval("8c 4c 7s 5d 6h"), eval("4c 5d 6h 7s 8c"));
}

#[test]
fn ace_is_never_low() {
    let wheel = eval("Ac 2d 3h 4s 5c");
    assert_eq!(wheel.category, Category::HighCard);
    assert_eq!(wheel.tiebreak, Rank::Ace);
}

#[test]
fn higher_category_always_wins() {
    let ladder = [
        "Ac Kd Qh Js 9c",
        "2c 2d 4h 5s 7c",
        "2c 2d 3h 3s 5c",
        "2c 2d 2h 4s 6c",
        "2c 3d 4h 5s 6c",
        "2h 4h 6h 8h 10h",
        "2c 2d 2h 3s 3c",
        "2c 2d 2h 2s 3c",
        "2s 3s 4s 5s 6s",
    ];
    for pair in ladder.windows(2) {
        assert_eq!(
            compare_hands(&eval(pair[1]), &eval(pair[0])),
            Ordering::Greater,
            "{} should beat {}",
            pair[1],
            pair[0]
        );
    }
}

#[test]
fn same_category_compares_tiebreak_rank() {
    assert_eq!(
        compare_hands(&eval("Kc Kd 5h 4s 2c"), &eval("Qc Qd Ah Ks Jc")),
        Ordering::Greater
    );
    assert_eq!(
        compare_hands(&eval("9c 9d 9h 2s 2c"), &eval("8c 8d 8h As Ac")),
        Ordering::Greater
    );
    assert_eq!(
        compare_hands(&eval("Jc Jd 2h 2s 3c"), &eval("10c 10d 9h 9s Ac")),
        Ordering::Greater
    );
}

#[test]
fn kickers_are_not_compared() {
    assert_eq!(
        compare_hands(&eval("Ac Kd Qh Js 9c"), &eval("Ad 5c 4h 3s 2d")),
        Ordering::Equal
    );
    assert_eq!(
        compare_hands(&eval("7c 7d Ah Ks Qc"), &eval("7h 7s 4c 3d 2h")),
        Ordering::Equal
    );
}

#[test]
fn comparison_is_antisymmetric_and_transitive() {
    let hands = [
        "Ac Kd Qh Js 9c",
        "Kc Qd 9h 7s 5c",
        "7c 7d Ah Ks Qc",
        "2c 2d 9h 9s Kc",
        "4c 5d 6h 7s 8c",
        "2h 5h 7h 9h Kh",
        "3c 3d 3h 9s 9c",
    ];
    let evals: Vec<HandEvaluation> = hands.iter().map(|h| eval(h)).collect();
    for a in &evals {
        for b in &evals {
            assert_eq!(compare_hands(a, b), compare_hands(b, a).reverse());
            for c in &evals {
                if compare_hands(a, b) == Ordering::Greater
                    && compare_hands(b, c) == Ordering::Greater
                {
                    assert_eq!(compare_hands(a, c), Ordering::Greater);
                }
            }
        }
    }
}

#[test]
fn display_reads_naturally() {
    assert_eq!(eval("2h 5h 7h 9h Kh").to_string(), "Flush, K high");
    assert_eq!(eval("Qc Qd 9h 5s 2c").to_string(), "Pair of Q");
}
