use super::error::DealError;
use super::hand::BUST;
use super::table::{Outcome, Side, Table};
use crate::io::{BoardLeds, Buttons, Colors, Effects};

/// Rounds in a match.
pub const ROUNDS: u8 = 3;
/// The CPU keeps drawing below this total.
pub const CPU_STAND: u8 = 17;

const CENTER_X: i32 = 64;
const LEFT_X: i32 = 35;
const RIGHT_X: i32 = 95;
/// Soft-key labels along the bottom edge.
const KEYS_Y: i32 = 115;
/// Past this row the card columns run off the screen.
const LAST_ROW: i32 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Start,
    Cut,
    ReadCut,
    Gamble,
    ReadGamble,
    Deal,
    PlayerBet,
    CpuBet,
    Win,
    Lose,
    Draw,
    Reset,
    TotalReset,
}

/// The round state machine.
///
/// Feed it the board buttons once per poll with [`Blackjack::step`]. States
/// that wait for the player draw their screen when they are entered, so
/// idle polls return no effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blackjack {
    state: State,
    table: Table,
    cut: u8,
    round: u8,
}

impl Blackjack {
    pub fn new() -> Self {
        Self {
            state: State::Start,
            table: Table::new(),
            cut: 0,
            round: 1,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Digit the deck gets cut with, 0 to 9.
    pub fn cut(&self) -> u8 {
        self.cut
    }

    /// Current round, 1 to [`ROUNDS`].
    pub fn round(&self) -> u8 {
        self.round
    }

    /// Title screen shown at power on.
    pub fn boot(&mut self) -> Effects {
        let mut fx = Effects::new();
        self.enter(State::Start, &mut fx);
        fx
    }

    /// Advances the machine by one poll.
    pub fn step(&mut self, buttons: Buttons) -> Result<Effects, DealError> {
        let mut fx = Effects::new();
        let next = match self.state {
            State::Start => self.start(buttons, &mut fx),
            State::Cut => self.show_cut(&mut fx),
            State::ReadCut => self.read_cut(buttons, &mut fx),
            State::Gamble => self.show_coins(&mut fx),
            State::ReadGamble => self.read_bet(buttons, &mut fx),
            State::Deal => self.deal(&mut fx)?,
            State::PlayerBet => self.player_turn(buttons, &mut fx)?,
            State::CpuBet => self.cpu_turn(&mut fx)?,
            State::Win => self.finish_round(Outcome::Win, buttons, &mut fx),
            State::Lose => self.finish_round(Outcome::Lose, buttons, &mut fx),
            State::Draw => self.finish_round(Outcome::Draw, buttons, &mut fx),
            State::Reset => self.reset(&mut fx),
            State::TotalReset => self.total_reset(&mut fx),
        };
        if next != self.state {
            debug!("blackjack {} -> {}", self.state, next);
            self.enter(next, &mut fx);
        }
        Ok(fx)
    }

    /// Entry screens of the states that wait on the player.
    fn enter(&mut self, next: State, fx: &mut Effects) {
        self.state = next;
        match next {
            State::Start => {
                fx.lamps_off();
                fx.text("MSP430", CENTER_X, 45);
                fx.text("Blackjack", CENTER_X, 55);
                fx.text("Push to Start", CENTER_X, 75);
                fx.flush();
            }
            State::PlayerBet => {
                self.table.player.turn = true;
                fx.lamps(Colors::empty(), BoardLeds::RIGHT);
            }
            State::Win => self.announce("Won Round!", BoardLeds::RIGHT, fx),
            State::Lose => self.announce("Lost Round!", BoardLeds::LEFT, fx),
            State::Draw => self.announce("Draw", BoardLeds::LEFT | BoardLeds::RIGHT, fx),
            _ => {}
        }
    }

    fn announce(&self, banner: &str, lamps: BoardLeds, fx: &mut Effects) {
        fx.lamps(Colors::empty(), lamps);
        fx.text(banner, CENTER_X, 45);
        if self.round < ROUNDS {
            fx.text("Continue?", CENTER_X, 55);
            fx.text("Yes", RIGHT_X, KEYS_Y);
            fx.text("No", LEFT_X, KEYS_Y);
        }
        fx.flush();
    }

    fn start(&mut self, buttons: Buttons, fx: &mut Effects) -> State {
        if buttons.is_empty() {
            return State::Start;
        }
        fx.clear();
        State::Cut
    }

    fn show_cut(&mut self, fx: &mut Effects) -> State {
        fx.text("Select Cut:", CENTER_X, 45);
        fx.framed(self.cut, CENTER_X, 55);
        fx.flush();
        State::ReadCut
    }

    fn read_cut(&mut self, buttons: Buttons, fx: &mut Effects) -> State {
        if buttons.contains(Buttons::RIGHT) {
            fx.clear();
            self.table.cut(self.cut);
            info!("round {=u8}: cut {=u8}", self.round, self.cut);
            State::Gamble
        } else if buttons.contains(Buttons::LEFT) {
            self.cut = (self.cut + 1) % 10;
            State::Cut
        } else {
            State::ReadCut
        }
    }

    fn show_coins(&mut self, fx: &mut Effects) -> State {
        fx.text("Your coins:", 55, 35);
        fx.text("CPU coins:", 55, 45);
        fx.framed(self.table.player.coins, RIGHT_X, 35);
        fx.framed(self.table.cpu.coins, RIGHT_X, 45);
        fx.text("Select Bet:", CENTER_X, 65);
        fx.text("All", RIGHT_X, KEYS_Y);
        fx.text("Half", LEFT_X, KEYS_Y);
        fx.flush();
        State::ReadGamble
    }

    fn read_bet(&mut self, buttons: Buttons, fx: &mut Effects) -> State {
        self.table.cpu.bet = self.table.cpu.coins / 2;
        let player = &mut self.table.player;
        if buttons.contains(Buttons::RIGHT) {
            player.bet = player.coins;
        } else if buttons.contains(Buttons::LEFT) {
            player.bet = player.coins / 2;
        } else {
            return State::ReadGamble;
        }
        fx.clear();
        info!("bets: player {=u32} cpu {=u32}", player.bet, self.table.cpu.bet);
        State::Deal
    }

    fn table_labels(fx: &mut Effects) {
        fx.text("Player:", LEFT_X, 25);
        fx.text("CPU:", RIGHT_X, 25);
        fx.text("Hit", RIGHT_X, KEYS_Y);
        fx.text("Stay", LEFT_X, KEYS_Y);
    }

    fn deal(&mut self, fx: &mut Effects) -> Result<State, DealError> {
        fx.text("Round", LEFT_X, 10);
        fx.framed(self.round, 65, 10);
        fx.text("of 3", RIGHT_X, 10);
        Self::table_labels(fx);
        self.table.init_hands(fx)?;
        fx.flush();
        Ok(State::PlayerBet)
    }

    fn player_turn(&mut self, buttons: Buttons, fx: &mut Effects) -> Result<State, DealError> {
        if buttons.contains(Buttons::RIGHT) {
            if self.table.cursor.player_y > LAST_ROW {
                fx.clear();
                self.table.cursor.rewind();
                fx.text("Playing Table (Cont'd)", 65, 10);
                Self::table_labels(fx);
            }
            self.table.deal(Side::Player, fx)?;
            let sum = self.table.evaluate(Side::Player);
            fx.flush();
            fx.pause(1);
            if sum <= BUST {
                Ok(State::CpuBet)
            } else {
                fx.clear();
                Ok(State::Lose)
            }
        } else if buttons.contains(Buttons::LEFT) {
            self.table.evaluate(Side::Player);
            Ok(State::CpuBet)
        } else {
            Ok(State::PlayerBet)
        }
    }

    fn cpu_turn(&mut self, fx: &mut Effects) -> Result<State, DealError> {
        fx.lamps_off();
        let (player, cpu) = (self.table.player.sum, self.table.cpu.sum);
        if cpu < CPU_STAND {
            self.table.player.turn = false;
            fx.lamps(Colors::empty(), BoardLeds::LEFT);
            self.table.deal_to_turn(fx)?;
            let sum = self.table.evaluate(Side::Cpu);
            fx.flush();
            fx.pause(1);
            if sum <= BUST {
                return Ok(State::PlayerBet);
            }
            fx.clear();
            return Ok(State::Win);
        }
        fx.clear();
        Ok(if cpu < player {
            State::Win
        } else if cpu == player {
            State::Draw
        } else {
            State::Lose
        })
    }

    fn finish_round(&mut self, outcome: Outcome, buttons: Buttons, fx: &mut Effects) -> State {
        let current = self.state;
        if self.round >= ROUNDS {
            self.table.settle(outcome);
            fx.pause(1);
            fx.clear();
            return State::TotalReset;
        }
        if buttons.contains(Buttons::RIGHT) {
            self.table.settle(outcome);
            self.round += 1;
            fx.clear();
            State::Reset
        } else if buttons.contains(Buttons::LEFT) {
            self.table.settle(outcome);
            fx.clear();
            State::TotalReset
        } else {
            current
        }
    }

    fn reset(&mut self, fx: &mut Effects) -> State {
        fx.lamps_off();
        self.table.reset_hands();
        self.table.cpu.sum = 0;
        State::Cut
    }

    fn total_reset(&mut self, fx: &mut Effects) -> State {
        let (player, cpu) = (self.table.player.coins, self.table.cpu.coins);
        let (banner, lamps) = if player > cpu {
            ("You Won!", BoardLeds::RIGHT)
        } else if player < cpu {
            ("You Lost!", BoardLeds::LEFT)
        } else {
            ("Draw!", BoardLeds::LEFT | BoardLeds::RIGHT)
        };
        info!("match over: player {=u32} cpu {=u32}", player, cpu);
        fx.lamps(Colors::empty(), lamps);
        fx.text(banner, CENTER_X, 45);
        fx.flush();
        fx.pause(1);
        self.table.full_reset();
        self.round = 1;
        fx.clear();
        State::Start
    }
}

impl Default for Blackjack {
    fn default() -> Self {
        Self::new()
    }
}
