//! "Hero": press the colour button under the LED that lights up, in time
//! with the song.

mod machine;
mod note;
mod session;
pub mod songs;

pub use machine::{ABORT_AFTER, COUNTDOWN_PHASES, Hero, State, WRONG_PITCH};
pub use note::{Note, pitch};
pub use session::{RhythmScore, RhythmSession, Verdict};
