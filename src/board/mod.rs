//! Timing constants and the thin adapters between the games and the
//! board peripherals.

#[cfg(feature = "graphics")]
mod lcd;
mod pins;

#[cfg(feature = "graphics")]
pub use lcd::{FIELD_SIZE, LcdText};
pub use pins::{ButtonBank, LedBank};

/// One clock tick.
pub const TICK_MS: u64 = 5;
/// One pacing unit, the coarse delay between screens.
pub const PACE_UNIT_MS: u64 = 250;
/// Gap between two polls of the board buttons.
pub const POLL_MS: u64 = 20;

pub const SYS_CLOCK_HZ: u32 = 150_000_000;
/// PWM clock divider for the buzzer slice.
pub const PWM_DIVIDER: u32 = 125;
pub const SPI_FREQUENCY: u32 = 32_000_000;

/// PWM counter top that makes the buzzer slice wrap `hz` times a second.
///
/// Zero means silence. Pitches too low for the counter clamp to the
/// longest period.
pub const fn pwm_top(hz: u16) -> u16 {
    if hz == 0 {
        return 0;
    }
    let top = SYS_CLOCK_HZ / PWM_DIVIDER / hz as u32 - 1;
    if top > u16::MAX as u32 {
        u16::MAX
    } else {
        top as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::pitch;

    #[test]
    fn pwm_top_follows_the_clock() {
        assert_eq!(pwm_top(0), 0);
        assert_eq!(pwm_top(pitch::A4), 2726);
        assert_eq!(pwm_top(pitch::G6), 764);
        assert_eq!(pwm_top(1), u16::MAX);
    }

    #[test]
    fn song_pitches_fit_the_counter() {
        for note in crate::hero::songs::ASTRONOMIA.iter() {
            let top = pwm_top(note.pitch);
            assert!(top > 0 && top < u16::MAX, "{note:?}");
        }
    }
}
