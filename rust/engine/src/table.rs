use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::{Deck, SeededShuffler, Shuffler};
use crate::errors::{GameError, HandError};
use crate::hand::{evaluate, Hand};
use crate::player::{Player, Seat};

/// A betting round of one hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Round {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Round {
    /// River wraps to Preflop; that step is the showdown, not a playable round.
    pub fn next(self) -> Round {
        match self {
            Round::Preflop => Round::Flop,
            Round::Flop => Round::Turn,
            Round::Turn => Round::River,
            Round::River => Round::Preflop,
        }
    }
}

/// The three fixed-limit actions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    CheckCall,
    BetRaise,
}

/// Stakes and stacks for a table.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Bet increment on preflop and flop
    pub small_bet: u32,
    /// Bet increment on turn and river
    pub big_bet: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_stack: 200,
            small_blind: 1,
            big_blind: 2,
            small_bet: 2,
            big_bet: 4,
        }
    }
}

impl TableConfig {
    pub fn bet_size(&self, round: Round) -> u32 {
        match round {
            Round::Preflop | Round::Flop => self.small_bet,
            Round::Turn | Round::River => self.big_bet,
        }
    }
}

/// How a hand ended.
#[derive(Debug, Clone, Serialize)]
pub enum HandEnd {
    Fold { folder: Seat },
    Showdown { hands: [Hand; 2] },
}

/// Summary of a finished hand, indexed by seat.
#[derive(Debug, Clone, Serialize)]
pub struct HandResult {
    pub hand_number: u64,
    pub pot: u32,
    pub payouts: [u32; 2],
    pub end: HandEnd,
}

impl HandResult {
    pub fn winners(&self) -> Vec<Seat> {
        match &self.end {
            HandEnd::Fold { folder } => vec![folder.other()],
            HandEnd::Showdown { hands } => match hands[0].cmp(&hands[1]) {
                Ordering::Greater => vec![Seat::One],
                Ordering::Less => vec![Seat::Two],
                Ordering::Equal => vec![Seat::One, Seat::Two],
            },
        }
    }

    pub fn is_split(&self) -> bool {
        self.winners().len() == 2
    }
}

/// What an applied action led to.
#[derive(Debug, Clone)]
pub enum ActionOutcome {
    /// The other seat is now to act.
    Continue,
    /// Betting closed and the table moved to this round.
    RoundComplete(Round),
    /// The hand finished and a new one has been dealt.
    HandOver(HandResult),
}

/// Read-only snapshot of a table for presenters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableView {
    pub hand_number: u64,
    pub round: Round,
    pub button: Seat,
    pub turn: Seat,
    pub pot: u32,
    pub round_outstanding: u32,
    pub bet_size: u32,
    pub board: Vec<Card>,
    pub players: [Player; 2],
}

/// Heads-up fixed-limit table: two players, the deck, the board and whose turn it is.
///
/// # Examples
///
/// ```
/// use headsup_engine::table::{Action, Round, Table, TableConfig};
/// use headsup_engine::player::Seat;
///
/// let mut table = Table::with_seed(TableConfig::default(), 7);
/// assert_eq!(table.pot(), 3);
/// assert_eq!(table.turn(), Seat::One);
///
/// table.apply_action(Action::CheckCall).unwrap();
/// table.apply_action(Action::CheckCall).unwrap();
/// assert_eq!(table.round(), Round::Flop);
/// assert_eq!(table.board().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Table<S: Shuffler = SeededShuffler> {
    config: TableConfig,
    players: [Player; 2],
    button: Seat,
    turn: Seat,
    round: Round,
    pot: u32,
    round_outstanding: u32,
    deck: Deck,
    board: Vec<Card>,
    hand_number: u64,
    shuffler: S,
}

impl Table<SeededShuffler> {
    pub fn with_seed(config: TableConfig, seed: u64) -> Self {
        Self::start(config, SeededShuffler::new(seed))
    }
}

impl<S: Shuffler> Table<S> {
    /// Seats both players, gives seat One the button, posts blinds and deals the first hand.
    pub fn start(config: TableConfig, mut shuffler: S) -> Self {
        let deck = Deck::new(&mut shuffler);
        let mut table = Self {
            config,
            players: [
                Player::new(config.starting_stack),
                Player::new(config.starting_stack),
            ],
            button: Seat::One,
            turn: Seat::One,
            round: Round::Preflop,
            pot: 0,
            round_outstanding: 0,
            deck,
            board: Vec::with_capacity(5),
            hand_number: 1,
            shuffler,
        };
        table.post_blinds();
        table.deal_hole_cards();
        debug!(hand = table.hand_number, button = ?table.button, "table started");
        table
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }
    pub fn button(&self) -> Seat {
        self.button
    }
    pub fn turn(&self) -> Seat {
        self.turn
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn round_outstanding(&self) -> u32 {
        self.round_outstanding
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn bet_size(&self) -> u32 {
        self.config.bet_size(self.round)
    }

    /// Chips the player to act must add to match the outstanding commitment.
    pub fn to_call(&self) -> u32 {
        self.round_outstanding
            .saturating_sub(self.player(self.turn).round_committed())
    }

    /// Chips `action` would move for the player to act, clamped to their stack.
    pub fn cost(&self, action: Action) -> u32 {
        let wanted = match action {
            Action::Fold => 0,
            Action::CheckCall => self.to_call(),
            Action::BetRaise => self.to_call() + self.bet_size(),
        };
        wanted.min(self.player(self.turn).chips())
    }

    /// A seat with no chips left and nothing in the current hand.
    ///
    /// The table keeps dealing regardless; drivers decide whether to stop.
    pub fn busted_seat(&self) -> Option<Seat> {
        Seat::all().into_iter().find(|&seat| {
            let p = self.player(seat);
            p.chips() == 0 && p.hand_committed() == 0
        })
    }

    pub fn view(&self) -> TableView {
        TableView {
            hand_number: self.hand_number,
            round: self.round,
            button: self.button,
            turn: self.turn,
            pot: self.pot,
            round_outstanding: self.round_outstanding,
            bet_size: self.bet_size(),
            board: self.board.clone(),
            players: self.players.clone(),
        }
    }

    /// Applies `action` for the seat whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Showdown`] only if the showdown cards cannot form
    /// hands, which a table dealing from its own deck never produces. The
    /// table is left untouched in that case.
    pub fn apply_action(&mut self, action: Action) -> Result<ActionOutcome, GameError> {
        let seat = self.turn;
        let to_call = self.to_call();

        let contributed = match action {
            Action::Fold => return Ok(ActionOutcome::HandOver(self.fold(seat))),
            Action::CheckCall => self.commit(seat, to_call),
            Action::BetRaise => {
                let taken = self.commit(seat, to_call + self.bet_size());
                self.players[seat.other().index()].set_acted(false);
                taken
            }
        };
        self.players[seat.index()].set_acted(true);
        debug!(
            hand = self.hand_number,
            round = ?self.round,
            seat = ?seat,
            action = ?action,
            contributed,
            pot = self.pot,
            "action applied"
        );

        self.advance()
    }

    fn advance(&mut self) -> Result<ActionOutcome, GameError> {
        if !self.players.iter().all(Player::has_acted) {
            self.turn = self.turn.other();
            return Ok(ActionOutcome::Continue);
        }

        let next = self.round.next();
        if next == Round::Preflop {
            let hands = self.showdown_hands()?;
            self.reset_round();
            self.round = next;
            let result = self.settle_showdown(hands);
            self.new_hand();
            return Ok(ActionOutcome::HandOver(result));
        }

        self.reset_round();
        self.round = next;
        let reveal = if next == Round::Flop { 3 } else { 1 };
        self.board
            .extend(std::iter::from_fn(|| self.deck.deal_card()).take(reveal));
        self.turn = self.button.other();
        debug!(
            hand = self.hand_number,
            round = ?next,
            board = %format_cards(&self.board),
            "round complete"
        );
        Ok(ActionOutcome::RoundComplete(next))
    }

    fn fold(&mut self, folder: Seat) -> HandResult {
        let pot = self.pot;
        let mut payouts = [0u32; 2];
        payouts[folder.other().index()] = pot;
        self.pay(payouts);
        let result = HandResult {
            hand_number: self.hand_number,
            pot,
            payouts,
            end: HandEnd::Fold { folder },
        };
        info!(hand = result.hand_number, folder = ?folder, pot, "hand won by fold");
        self.new_hand();
        result
    }

    fn showdown_hands(&self) -> Result<[Hand; 2], HandError> {
        let best = |seat: Seat| {
            let mut cards = self.board.clone();
            cards.extend_from_slice(self.player(seat).hole_cards());
            evaluate(&cards)
        };
        Ok([best(Seat::One)?, best(Seat::Two)?])
    }

    fn settle_showdown(&mut self, hands: [Hand; 2]) -> HandResult {
        let pot = self.pot;
        let mut payouts = [0u32; 2];
        match hands[0].cmp(&hands[1]) {
            Ordering::Greater => payouts[0] = pot,
            Ordering::Less => payouts[1] = pot,
            Ordering::Equal => {
                payouts = [pot / 2; 2];
                // Odd chip goes to the seat after the button.
                payouts[self.button.other().index()] += pot % 2;
            }
        }
        self.pay(payouts);
        info!(
            hand = self.hand_number,
            one = hands[0].description(),
            two = hands[1].description(),
            payout_one = payouts[0],
            payout_two = payouts[1],
            "showdown"
        );
        HandResult {
            hand_number: self.hand_number,
            pot,
            payouts,
            end: HandEnd::Showdown { hands },
        }
    }

    fn pay(&mut self, payouts: [u32; 2]) {
        for (player, amount) in self.players.iter_mut().zip(payouts) {
            self.pot -= amount;
            player.add_chips(amount);
        }
    }

    /// Moves up to `amount` from `seat` into the pot, clamped to its stack.
    fn commit(&mut self, seat: Seat, amount: u32) -> u32 {
        let player = &mut self.players[seat.index()];
        let taken = player.commit(amount);
        self.pot += taken;
        self.round_outstanding = self.round_outstanding.max(player.round_committed());
        taken
    }

    fn reset_round(&mut self) {
        for p in &mut self.players {
            p.reset_round();
        }
        self.round_outstanding = 0;
    }

    fn new_hand(&mut self) {
        self.button = self.button.other();
        self.turn = self.button;
        self.round = Round::Preflop;
        self.hand_number += 1;
        for p in &mut self.players {
            p.reset_hand();
        }
        self.round_outstanding = 0;
        self.post_blinds();
        self.deck = Deck::new(&mut self.shuffler);
        self.deal_hole_cards();
        debug!(hand = self.hand_number, button = ?self.button, "new hand dealt");
    }

    fn post_blinds(&mut self) {
        self.commit(self.button, self.config.small_blind);
        self.commit(self.button.other(), self.config.big_blind);
    }

    fn deal_hole_cards(&mut self) {
        self.board.clear();
        for p in &mut self.players {
            let hole: Vec<Card> = std::iter::from_fn(|| self.deck.deal_card())
                .take(2)
                .collect();
            p.set_hole_cards(&hole);
        }
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect()
}
