use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::errors::HandError;

/// Hand category, weakest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Ranking {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Ranking {
    /// Human-readable name of a hand; `cards` must be in significance order.
    pub fn describe(self, cards: &[Card; 5]) -> String {
        let lead = cards[0].rank;
        match self {
            Ranking::RoyalFlush => "royal flush".to_string(),
            Ranking::StraightFlush => format!("straight flush {} high", lead.singular_name()),
            Ranking::FourOfAKind => format!("four of a kind {}", lead.plural_name()),
            Ranking::FullHouse => format!(
                "full house {} full of {}",
                lead.plural_name(),
                cards[4].rank.plural_name()
            ),
            Ranking::Flush => format!("flush {} high", lead.singular_name()),
            Ranking::Straight => format!("straight {} high", lead.singular_name()),
            Ranking::ThreeOfAKind => format!("three of a kind {}", lead.plural_name()),
            Ranking::TwoPair => format!(
                "two pair {} and {}",
                lead.plural_name(),
                cards[3].rank.plural_name()
            ),
            Ranking::Pair => format!("pair of {}", lead.plural_name()),
            Ranking::HighCard => format!("{} high", lead.singular_name()),
        }
    }
}

/// A five-card poker hand.
///
/// Cards are kept in significance order: quads, then trips, then pairs, then
/// singles, each group by descending rank (a wheel puts its ace last). Two
/// hands compare by [`Ranking`] and then rank by rank along that order, so
/// suits and descriptions never affect equality.
#[derive(Debug, Clone, Serialize)]
pub struct Hand {
    cards: [Card; 5],
    ranking: Ranking,
    description: String,
}

impl Hand {
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn ranking(&self) -> Ranking {
        self.ranking
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ranking.cmp(&other.ranking).then_with(|| {
            self.cards
                .iter()
                .zip(other.cards.iter())
                .map(|(a, b)| a.cmp_rank(b))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Classifies exactly five cards.
pub fn classify(cards: [Card; 5]) -> Hand {
    let formed = significance_order(cards);
    let flush = formed.iter().all(|c| c.suit == formed[0].suit);
    let straight = is_straight(&formed);

    let ranking = match (straight, flush, multiplicities(&formed).as_slice()) {
        (true, true, _) if formed[0].rank == Rank::Ace => Ranking::RoyalFlush,
        (true, true, _) => Ranking::StraightFlush,
        (_, _, [4, 1]) => Ranking::FourOfAKind,
        (_, _, [3, 2]) => Ranking::FullHouse,
        (_, true, _) => Ranking::Flush,
        (true, _, _) => Ranking::Straight,
        (_, _, [3, 1, 1]) => Ranking::ThreeOfAKind,
        (_, _, [2, 2, 1]) => Ranking::TwoPair,
        (_, _, [2, 1, 1, 1]) => Ranking::Pair,
        _ => Ranking::HighCard,
    };

    Hand {
        description: ranking.describe(&formed),
        cards: formed,
        ranking,
    }
}

/// Finds the best hand among every five-card subset of 5 to 7 distinct cards.
pub fn evaluate(cards: &[Card]) -> Result<Hand, HandError> {
    let n = cards.len();
    if n < 5 {
        return Err(HandError::TooFewCards(n));
    }
    if n > 7 {
        return Err(HandError::TooManyCards(n));
    }
    let mut seen = HashSet::with_capacity(n);
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(HandError::DuplicateCard(*dup));
    }

    (0u32..1 << n)
        .filter(|mask| mask.count_ones() == 5)
        .map(|mask| {
            let mut five = [cards[0]; 5];
            let picked = cards
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1u32 << i) != 0)
                .map(|(_, c)| *c);
            for (slot, card) in five.iter_mut().zip(picked) {
                *slot = card;
            }
            classify(five)
        })
        .max()
        .ok_or(HandError::TooFewCards(n))
}

fn suit_index(s: Suit) -> u8 {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

fn significance_order(cards: [Card; 5]) -> [Card; 5] {
    let mut sorted = cards;
    // Suit only fixes the layout of equal ranks so any input order gives the same array.
    sorted.sort_by(|a, b| {
        b.cmp_rank(a)
            .then_with(|| suit_index(b.suit).cmp(&suit_index(a.suit)))
    });

    let mut counts = [0u8; 15];
    for c in &sorted {
        counts[c.rank.value() as usize] += 1;
    }

    let mut formed = sorted;
    let tiers = [4u8, 3, 2, 1].into_iter().flat_map(|tier| {
        sorted
            .iter()
            .filter(move |c| counts[c.rank.value() as usize] == tier)
            .copied()
    });
    for (slot, card) in formed.iter_mut().zip(tiers) {
        *slot = card;
    }

    if ranks(&formed) == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
        formed.rotate_left(1);
    }
    formed
}

fn ranks(cards: &[Card; 5]) -> [Rank; 5] {
    cards.map(|c| c.rank)
}

fn is_straight(cards: &[Card; 5]) -> bool {
    let run = cards
        .windows(2)
        .all(|w| w[0].rank.value() == w[1].rank.value() + 1);
    run || ranks(cards) == [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace]
}

/// Sizes of consecutive equal-rank groups, e.g. `[3, 2]` for a full house.
fn multiplicities(cards: &[Card; 5]) -> Vec<u8> {
    let mut groups: Vec<u8> = Vec::with_capacity(5);
    for (i, c) in cards.iter().enumerate() {
        if i > 0 && cards[i - 1].rank == c.rank {
            if let Some(last) = groups.last_mut() {
                *last += 1;
            }
        } else {
            groups.push(1);
        }
    }
    groups
}
