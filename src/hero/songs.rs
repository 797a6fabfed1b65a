//! The fixed song table.

use super::note::{Note, pitch::*};
use crate::io::{Colors, Effects};

const BLUE: Colors = Colors::BLUE;
const RED: Colors = Colors::RED;
const YELLOW: Colors = Colors::YELLOW;
const GREEN: Colors = Colors::GREEN;

/// Played once after power on, doubles as a buzzer check.
pub static STARTUP: [Note; 5] = [
    Note::new(D6_SHARP, 64, RED),
    Note::new(A5_SHARP, 64, GREEN),
    Note::new(G5_SHARP, 64, YELLOW),
    Note::new(D6_SHARP, 64, RED),
    Note::new(A5_SHARP, 64, GREEN),
];

/// The song the player plays along with.
pub static ASTRONOMIA: [Note; 24] = [
    Note::new(B4, 77, GREEN),
    Note::new(A4, 77, YELLOW),
    Note::new(G4_SHARP, 77, RED),
    Note::new(E4, 77, YELLOW),
    Note::new(F4_SHARP, 150, BLUE),
    Note::new(C5_SHARP, 77, RED),
    Note::new(B4, 120, GREEN),
    Note::new(A4, 120, YELLOW),
    Note::new(G4_SHARP, 180, RED),
    Note::new(B4, 150, GREEN),
    Note::new(A4, 77, YELLOW),
    Note::new(G4_SHARP, 77, RED),
    Note::new(F4_SHARP, 150, BLUE),
    Note::new(A5, 77, GREEN),
    Note::new(G5_SHARP, 77, YELLOW),
    Note::new(A5, 77, GREEN),
    Note::new(G5_SHARP, 77, YELLOW),
    Note::new(A5, 77, GREEN),
    Note::new(F4_SHARP, 180, BLUE),
    Note::new(A5, 77, GREEN),
    Note::new(G5_SHARP, 77, YELLOW),
    Note::new(A5, 77, GREEN),
    Note::new(G5_SHARP, 77, YELLOW),
    Note::new(A5, 77, GREEN),
];

/// After a completed song.
pub static VICTORY: [Note; 4] = [
    Note::new(B5, 50, BLUE),
    Note::new(E6, 60, RED),
    Note::new(F6_SHARP, 50, YELLOW),
    Note::new(B6, 60, GREEN),
];

/// After an aborted song.
pub static SHUTDOWN: [Note; 4] = [
    Note::new(G6, 64, GREEN),
    Note::new(D6, 64, YELLOW),
    Note::new(G5, 64, RED),
    Note::new(A5, 64, BLUE),
];

/// Queues `tune` as lamp, tone and hold effects, then goes dark and quiet.
pub fn play_tune(tune: &[Note], fx: &mut Effects) {
    for note in tune {
        fx.lamps(note.color, Default::default());
        fx.tone_on(note.pitch);
        fx.hold(note.duration);
    }
    fx.lamps_off();
    fx.tone_off();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::Effect;

    #[test]
    fn every_note_lights_exactly_one_led() {
        for song in [&STARTUP[..], &ASTRONOMIA[..], &VICTORY[..], &SHUTDOWN[..]] {
            for note in song {
                assert_eq!(note.color.bits().count_ones(), 1, "{note:?}");
                assert!(note.duration > 0);
            }
        }
    }

    #[test]
    fn tune_becomes_timed_effects() {
        let mut fx = Effects::new();
        play_tune(&VICTORY[..1], &mut fx);
        assert_eq!(
            fx.as_slice(),
            [
                Effect::Lamps { colors: Colors::BLUE, board: Default::default() },
                Effect::ToneOn(B5),
                Effect::Hold(50),
                Effect::Lamps { colors: Colors::empty(), board: Default::default() },
                Effect::ToneOff,
            ]
        );
    }
}
