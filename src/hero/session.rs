/// Mistakes tallied over one attempt at a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RhythmScore {
    /// Notes with no button pressed at all.
    pub miss: u8,
    /// Notes whose last press was the wrong colour.
    pub error: u8,
    /// One point per note in the song.
    pub max_score: u8,
}

impl RhythmScore {
    pub const fn new(max_score: u8) -> Self {
        Self {
            miss: 0,
            error: 0,
            max_score,
        }
    }

    pub const fn mistakes(&self) -> u8 {
        self.miss + self.error
    }

    /// Points left after every mistake cost one, never below zero.
    pub const fn score(&self) -> u8 {
        self.max_score.saturating_sub(self.mistakes())
    }
}

/// How the current note window is going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// Nothing pressed yet.
    #[default]
    Missed,
    /// Last press matched the note.
    Hit,
    /// Last press was some other colour.
    Wrong,
}

/// All mutable state of one run through the rhythm game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RhythmSession {
    pub score: RhythmScore,
    /// Tick the countdown counts from.
    pub mark: u32,
    /// Countdown labels already shown.
    pub countdown: usize,
    /// Index of the note being played.
    pub note: usize,
    /// Tick the current note window opened at.
    pub window: Option<u32>,
    pub verdict: Verdict,
    /// Pitch the buzzer is sounding, if any.
    pub sounding: Option<u16>,
    /// Colour LEDs lit during the button test.
    pub lit: crate::io::Colors,
}

impl RhythmSession {
    pub fn new(song_len: usize) -> Self {
        let mut session = Self::default();
        session.reset(song_len);
        session
    }

    /// Fresh attempt at a song of `song_len` notes.
    pub fn reset(&mut self, song_len: usize) {
        *self = Self {
            score: RhythmScore::new(u8::try_from(song_len).unwrap_or(u8::MAX)),
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_counts_down_per_mistake() {
        let mut score = RhythmScore::new(24);
        assert_eq!(score.score(), 24);
        score.miss = 6;
        score.error = 4;
        assert_eq!(score.mistakes(), 10);
        assert_eq!(score.score(), 14);
    }

    #[test]
    fn score_has_a_floor() {
        let score = RhythmScore {
            miss: 3,
            error: 2,
            max_score: 4,
        };
        assert_eq!(score.score(), 0);
    }

    #[test]
    fn reset_clears_everything_but_the_song_length() {
        let mut session = RhythmSession::new(24);
        session.score.miss = 4;
        session.note = 7;
        session.window = Some(99);
        session.sounding = Some(440);
        session.reset(24);
        assert_eq!(session, RhythmSession::new(24));
        assert_eq!(session.score.max_score, 24);
    }
}
