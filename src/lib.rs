//! Two launchpad course-lab games: Blackjack against a CPU dealer and a
//! "Hero" rhythm game.
//!
//! Each game is a state machine stepped by the polling loop of its firmware
//! binary. A step reads an input snapshot and returns the [`io::Effects`] the
//! loop must play on the screen, LEDs and buzzer, so the games run unchanged
//! on the host under test.

#![cfg_attr(not(test), no_std)]

// Goes first so the other modules see its logging macros.
mod fmt;

pub mod blackjack;
pub mod board;
pub mod hero;
pub mod io;

#[cfg(feature = "rp")]
pub mod firmware;
