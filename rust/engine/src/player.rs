use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// One of the two seats at a heads-up table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }

    pub fn all() -> [Seat; 2] {
        [Seat::One, Seat::Two]
    }
}

/// Represents a player's chips, hole cards and betting state for the current hand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    /// Chips behind (not yet committed to the pot)
    chips: u32,
    /// Hole cards, empty only before the first deal
    hole: Vec<Card>,
    /// Chips put in during the current betting round
    round_committed: u32,
    /// Chips put in during the current hand
    hand_committed: u32,
    /// Whether the player has acted since the last bet or raise
    acted: bool,
    /// Set when a commitment leaves the player with no chips
    all_in: bool,
}

impl Player {
    pub fn new(chips: u32) -> Self {
        Self {
            chips,
            hole: Vec::with_capacity(2),
            round_committed: 0,
            hand_committed: 0,
            acted: false,
            all_in: chips == 0,
        }
    }

    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }
    pub fn round_committed(&self) -> u32 {
        self.round_committed
    }
    pub fn hand_committed(&self) -> u32 {
        self.hand_committed
    }
    pub fn has_acted(&self) -> bool {
        self.acted
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    pub(crate) fn set_acted(&mut self, acted: bool) {
        self.acted = acted;
    }

    pub(crate) fn set_hole_cards(&mut self, cards: &[Card]) {
        self.hole.clear();
        self.hole.extend_from_slice(cards);
    }

    /// Moves up to `amount` chips out of the stack and returns what was actually taken.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.chips);
        self.chips -= taken;
        self.round_committed += taken;
        self.hand_committed += taken;
        self.all_in = self.chips == 0;
        taken
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
        self.all_in = self.chips == 0;
    }

    pub(crate) fn reset_round(&mut self) {
        self.acted = false;
        self.round_committed = 0;
    }

    pub(crate) fn reset_hand(&mut self) {
        self.reset_round();
        self.hand_committed = 0;
    }
}
