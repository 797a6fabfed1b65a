//! Single player Blackjack against a CPU dealer, best of three rounds.

mod card;
mod deck;
mod error;
mod hand;
mod machine;
mod table;

pub use card::{Card, Face, Suit};
pub use deck::{CutRng, DECK_SIZE, Deck};
pub use error::DealError;
pub use hand::{ACE, BUST, Hand, MAX_CARDS, evaluate};
pub use machine::{Blackjack, CPU_STAND, ROUNDS, State};
pub use table::{DealCursor, Outcome, Player, STARTING_COINS, Side, Table};
