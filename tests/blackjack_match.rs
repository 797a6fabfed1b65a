use launchpad_games::blackjack::{Blackjack, DECK_SIZE, Deck, State};
use launchpad_games::io::Buttons;

/// Deck order after cutting with 3, as suit and face pairs.
const CUT_3: &str = "SA CX D5 S6 D6 C6 DA S9 CA HJ C8 D2 D9 DK SJ D8 HX C9 SK H2 SX H7 HK DX DQ \
                     H4 H3 D7 C4 S5 H8 HA S8 DJ H5 CK S3 C3 D4 D3 C5 C7 CQ CJ SQ C2 HQ H6 S2 S4 \
                     S7 H9";

#[test]
fn cut_three_fixture() {
    let deck = Deck::cut(3);
    let expected: Vec<String> = CUT_3
        .split_whitespace()
        .map(|pair| {
            let (suit, face) = pair.split_at(1);
            format!("{suit}-{face}")
        })
        .collect();
    let actual: Vec<String> = deck.cards().iter().map(ToString::to_string).collect();
    assert_eq!(actual.len(), DECK_SIZE);
    assert_eq!(actual, expected);
}

#[test]
fn cut_zero_starts_with_spades() {
    let deck = Deck::cut(0);
    let top: Vec<String> = deck.cards()[..5].iter().map(ToString::to_string).collect();
    assert_eq!(top, ["S-X", "S-J", "S-A", "H-X", "S-9"]);
}

/// Plays the way a reckless player would: cut 3, bet everything, always
/// hit, always play on.
struct Reckless {
    game: Blackjack,
    texts: Vec<String>,
    visited: Vec<State>,
}

impl Reckless {
    fn new() -> Self {
        let mut game = Blackjack::new();
        let boot = game.boot();
        Self {
            texts: boot.texts().map(String::from).collect(),
            game,
            visited: vec![State::Start],
        }
    }

    fn choose(&self) -> Buttons {
        match self.game.state() {
            State::Start => Buttons::RIGHT,
            State::ReadCut if self.game.cut() < 3 => Buttons::LEFT,
            State::ReadCut | State::ReadGamble | State::PlayerBet => Buttons::RIGHT,
            State::Win | State::Lose | State::Draw => Buttons::RIGHT,
            _ => Buttons::empty(),
        }
    }

    fn step(&mut self) {
        let buttons = self.choose();
        let fx = self.game.step(buttons).expect("the deck never runs out");
        self.texts.extend(fx.texts().map(String::from));
        if self.visited.last() != Some(&self.game.state()) {
            self.visited.push(self.game.state());
        }
    }

    /// Steps until the game reaches `state`.
    fn until(&mut self, state: State) {
        for _ in 0..200 {
            self.step();
            if self.game.state() == state {
                return;
            }
        }
        panic!("never reached {state:?}, stuck in {:?}", self.game.state());
    }
}

#[test]
fn reckless_player_loses_every_round() {
    let mut play = Reckless::new();

    play.until(State::PlayerBet);
    assert_eq!(play.game.cut(), 3);
    assert_eq!(play.game.table().player.bet, 4);
    assert_eq!(play.game.table().cpu.bet, 2);
    assert_eq!(play.game.table().player.hand.values(), [11, 10]);
    assert_eq!(play.game.table().cpu.hand.values(), [5]);

    play.until(State::Lose);
    assert_eq!(play.game.table().player.sum, 23);
    assert_eq!(play.game.table().cpu.sum, 11);
    assert_eq!(play.game.table().deck().dealt(), 6);

    play.until(State::Reset);
    assert_eq!(play.game.round(), 2);
    let coins = (play.game.table().player.coins, play.game.table().cpu.coins);
    assert_eq!(coins, (0, 8));

    play.until(State::ReadGamble);
    play.until(State::PlayerBet);
    assert_eq!(play.game.table().player.bet, 0);
    assert_eq!(play.game.table().cpu.bet, 4);
    assert_eq!(play.game.table().player.hand.values(), [11, 10]);

    play.until(State::TotalReset);
    assert_eq!(play.game.round(), 3);
    let coins = (play.game.table().player.coins, play.game.table().cpu.coins);
    assert_eq!(coins, (0, 8));

    play.step();
    assert_eq!(play.game.state(), State::Start);
    assert!(play.texts.iter().any(|text| text == "You Lost!"));
    assert_eq!(play.texts.iter().filter(|text| *text == "Lost Round!").count(), 3);

    assert_eq!(play.game.round(), 1);
    assert_eq!(play.game.table().player.coins, 4);
    assert_eq!(play.game.table().cpu.coins, 4);
    assert!(play.game.table().player.hand.is_empty());

    let rounds = play.visited.iter().filter(|state| **state == State::Deal).count();
    assert_eq!(rounds, 3);
}

#[test]
fn every_round_shows_its_number() {
    let mut play = Reckless::new();
    play.until(State::TotalReset);
    let banners: Vec<&str> = play
        .texts
        .windows(2)
        .filter(|pair| pair[0] == "Round")
        .map(|pair| pair[1].as_str())
        .collect();
    assert_eq!(banners, [">1<", ">2<", ">3<"]);
    // The last round has nothing to ask.
    assert_eq!(play.texts.iter().filter(|text| *text == "Continue?").count(), 2);
}

#[test]
fn waiting_states_stay_quiet() {
    let mut game = Blackjack::new();
    game.boot();
    for _ in 0..5 {
        assert!(game.step(Buttons::empty()).unwrap().is_empty());
    }
    game.step(Buttons::LEFT).unwrap();
    game.step(Buttons::empty()).unwrap();
    assert_eq!(game.state(), State::ReadCut);
    for _ in 0..5 {
        assert!(game.step(Buttons::empty()).unwrap().is_empty());
    }
}
