use core::fmt::Write;

use super::card::Card;
use super::deck::Deck;
use super::error::DealError;
use super::hand::Hand;
use crate::io::{Effect, Effects, Label};

pub const STARTING_COINS: u32 = 4;

/// First card row and the spacing between rows.
const ROW_TOP: i32 = 35;
const ROW_STEP: i32 = 10;
const PLAYER_COLUMN: i32 = 35;
const CPU_COLUMN: i32 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Player,
    Cpu,
}

/// How a round ended, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub hand: Hand,
    pub coins: u32,
    /// Stake for the current round, never more than `coins`.
    pub bet: u32,
    /// Last evaluated hand total.
    pub sum: u8,
    pub turn: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            hand: Hand::new(),
            coins: STARTING_COINS,
            bet: 0,
            sum: 0,
            turn: false,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the next card glyph of each side goes on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealCursor {
    pub player_y: i32,
    pub cpu_y: i32,
}

impl DealCursor {
    pub const fn new() -> Self {
        Self {
            player_y: ROW_TOP,
            cpu_y: ROW_TOP,
        }
    }

    /// Moves both columns back to the top row, for a fresh table screen.
    pub fn rewind(&mut self) {
        *self = Self::new();
    }
}

impl Default for DealCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Both players, the deck and the deal bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub player: Player,
    pub cpu: Player,
    pub cursor: DealCursor,
    deck: Deck,
}

impl Table {
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            cpu: Player::new(),
            cursor: DealCursor::new(),
            deck: Deck::populated(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Rebuilds the deck and shuffles it with the cut digit.
    pub fn cut(&mut self, seed: u8) {
        self.deck = Deck::cut(seed);
        debug!("deck cut at {=u8}", seed);
    }

    pub fn side_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Player => &mut self.player,
            Side::Cpu => &mut self.cpu,
        }
    }

    /// The side the turn flag points at.
    pub fn turn(&self) -> Side {
        if self.player.turn { Side::Player } else { Side::Cpu }
    }

    /// Opening deal: two cards to the player, then one to the CPU.
    pub fn init_hands(&mut self, fx: &mut Effects) -> Result<(), DealError> {
        self.deal(Side::Player, fx)?;
        self.deal(Side::Player, fx)?;
        self.deal(Side::Cpu, fx)?;
        Ok(())
    }

    /// One card to whoever holds the turn.
    pub fn deal_to_turn(&mut self, fx: &mut Effects) -> Result<Card, DealError> {
        self.deal(self.turn(), fx)
    }

    pub fn deal(&mut self, side: Side, fx: &mut Effects) -> Result<Card, DealError> {
        let card = self.deck.deal()?;
        self.side_mut(side).hand.push(card.value)?;

        let (x, y) = match side {
            Side::Player => (PLAYER_COLUMN, &mut self.cursor.player_y),
            Side::Cpu => (CPU_COLUMN, &mut self.cursor.cpu_y),
        };
        let mut glyph = Label::new();
        // A card glyph is three characters, always fits.
        let _ = write!(&mut glyph, "{}", card);
        fx.push(Effect::Text { label: glyph, x, y: *y });
        *y += ROW_STEP;
        trace!("dealt {} to {}", card, side);
        Ok(card)
    }

    /// Re-evaluates and stores the total of `side`.
    pub fn evaluate(&mut self, side: Side) -> u8 {
        let player = self.side_mut(side);
        player.sum = player.hand.total();
        player.sum
    }

    /// Moves the stake of the losing side to the winner.
    pub fn settle(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => {
                let stake = self.cpu.bet;
                self.cpu.coins -= stake;
                self.player.coins += stake;
            }
            Outcome::Lose => {
                let stake = self.player.bet;
                self.player.coins -= stake;
                self.cpu.coins += stake;
            }
            Outcome::Draw => {}
        }
        debug!(
            "settled {}: player {=u32} cpu {=u32}",
            outcome,
            self.player.coins,
            self.cpu.coins
        );
    }

    /// Empties both hands and starts dealing from the top of the deck.
    /// Coins survive.
    pub fn reset_hands(&mut self) {
        self.player.hand.clear();
        self.cpu.hand.clear();
        self.cursor.rewind();
        self.deck.rewind();
    }

    /// Back to the start of a match: fresh hands, four coins each, no bets.
    pub fn full_reset(&mut self) {
        self.reset_hands();
        self.player = Player::new();
        self.cpu = Player::new();
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blackjack::hand::MAX_CARDS;

    fn dealt_table(seed: u8) -> (Table, Effects) {
        let mut table = Table::new();
        table.cut(seed);
        let mut fx = Effects::new();
        table.init_hands(&mut fx).unwrap();
        (table, fx)
    }

    #[test]
    fn opening_deal_is_two_and_one() {
        let (table, fx) = dealt_table(3);
        assert_eq!(table.player.hand.values(), [11, 10]);
        assert_eq!(table.cpu.hand.values(), [5]);
        assert_eq!(table.deck().dealt(), 3);
        assert_eq!(table.cursor.player_y, 55);
        assert_eq!(table.cursor.cpu_y, 45);

        let glyphs: Vec<_> = fx
            .iter()
            .map(|effect| match effect {
                Effect::Text { label, x, y } => (label.as_str(), *x, *y),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(glyphs, [("S-A", 35, 35), ("C-X", 35, 45), ("D-5", 95, 35)]);
    }

    #[test]
    fn turn_flag_picks_the_side() {
        let (mut table, _) = dealt_table(3);
        let mut fx = Effects::new();

        table.player.turn = true;
        table.deal_to_turn(&mut fx).unwrap();
        assert_eq!(table.player.hand.len(), 3);
        assert_eq!(table.evaluate(Side::Player), 17);

        table.player.turn = false;
        table.deal_to_turn(&mut fx).unwrap();
        assert_eq!(table.cpu.hand.len(), 2);
        assert_eq!(table.evaluate(Side::Cpu), 11);
    }

    #[test]
    fn settlement_moves_the_right_stake() {
        let mut table = Table::new();
        table.player.bet = 4;
        table.cpu.bet = 2;

        table.settle(Outcome::Win);
        assert_eq!((table.player.coins, table.cpu.coins), (6, 2));

        table.settle(Outcome::Draw);
        assert_eq!((table.player.coins, table.cpu.coins), (6, 2));

        table.settle(Outcome::Lose);
        assert_eq!((table.player.coins, table.cpu.coins), (2, 6));
    }

    #[test]
    fn full_hand_leaves_the_screen_alone() {
        let (mut table, _) = dealt_table(3);
        table.player.hand.clear();
        for _ in 0..MAX_CARDS {
            table.player.hand.push(2).unwrap();
        }
        let cursor = table.cursor;
        let mut fx = Effects::new();

        assert_eq!(table.deal(Side::Player, &mut fx), Err(DealError::HandFull));
        assert!(fx.is_empty());
        assert_eq!(table.cursor, cursor);
        assert_eq!(table.player.hand.len(), MAX_CARDS);
    }

    #[test]
    fn resets() {
        let (mut table, _) = dealt_table(3);
        table.player.coins = 7;
        table.player.bet = 3;
        table.player.sum = 21;

        table.reset_hands();
        assert!(table.player.hand.is_empty() && table.cpu.hand.is_empty());
        assert_eq!(table.cursor, DealCursor::new());
        assert_eq!(table.deck().dealt(), 0);
        assert_eq!(table.player.coins, 7);

        table.full_reset();
        assert_eq!(table.player, Player::new());
        assert_eq!(table.cpu, Player::new());
    }
}
