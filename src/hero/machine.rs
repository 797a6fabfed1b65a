use core::fmt::Write;

use super::note::{Note, pitch};
use super::session::{RhythmSession, Verdict};
use super::songs::{self, ASTRONOMIA, SHUTDOWN, STARTUP, VICTORY};
use crate::io::{BoardLeds, Buttons, Colors, Effects, Label, Snapshot};

/// The song stops once misses and wrong notes add up to this.
pub const ABORT_AFTER: u8 = 10;
/// Sounded while a wrong colour is held.
pub const WRONG_PITCH: u16 = pitch::G6;

/// Countdown screens: shown once `now - mark` passes the tick count.
pub const COUNTDOWN_PHASES: [(u32, &str, Colors); 4] = [
    (0, "3", Colors::GREEN),
    (200, "2", Colors::YELLOW),
    (400, "1", Colors::RED),
    (600, "START", Colors::BLUE),
];

const CENTER_X: i32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Start,
    Test,
    Countdown,
    Play,
    Win,
    Lose,
}

/// The rhythm game.
///
/// Poll it with a fresh [`Snapshot`] as often as possible. Note windows are
/// timed from `now`, so the poll rate only limits how finely presses are
/// sampled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    state: State,
    intro_played: bool,
    session: RhythmSession,
    song: &'static [Note],
}

impl Hero {
    pub fn new() -> Self {
        Self::with_song(&ASTRONOMIA)
    }

    /// A game that plays `song` instead of the stock one.
    pub fn with_song(song: &'static [Note]) -> Self {
        Self {
            state: State::Start,
            intro_played: false,
            session: RhythmSession::new(song.len()),
            song,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn session(&self) -> &RhythmSession {
        &self.session
    }

    pub fn song(&self) -> &'static [Note] {
        self.song
    }

    pub fn step(&mut self, input: Snapshot) -> Effects {
        let mut fx = Effects::new();
        let next = match self.state {
            State::Start => self.start(&mut fx),
            State::Test => self.test(input, &mut fx),
            State::Countdown => self.countdown(input.now, &mut fx),
            State::Play => self.play(input, &mut fx),
            State::Win => self.win(&mut fx),
            State::Lose => self.lose(&mut fx),
        };
        if next != self.state {
            debug!("hero {} -> {}", self.state, next);
            self.state = next;
        }
        fx
    }

    fn start(&mut self, fx: &mut Effects) -> State {
        self.session.reset(self.song.len());
        fx.clear();
        if !self.intro_played {
            songs::play_tune(&STARTUP, fx);
            self.intro_played = true;
        }
        fx.text("MSP430 Hero", CENTER_X, 55);
        fx.text("Push Right to Start", CENTER_X, 65);
        fx.flush();
        State::Test
    }

    fn test(&mut self, input: Snapshot, fx: &mut Effects) -> State {
        if input.colors != self.session.lit {
            self.session.lit = input.colors;
            fx.lamps(input.colors, BoardLeds::empty());
        }
        if !input.buttons.contains(Buttons::RIGHT) {
            return State::Test;
        }
        fx.clear();
        fx.tone_off();
        self.session.mark = input.now;
        State::Countdown
    }

    fn countdown(&mut self, now: u32, fx: &mut Effects) -> State {
        let Some(&(after, text, color)) = COUNTDOWN_PHASES.get(self.session.countdown) else {
            return State::Play;
        };
        if now.wrapping_sub(self.session.mark) <= after {
            return State::Countdown;
        }
        if self.session.countdown > 0 {
            fx.clear();
        }
        fx.text(text, CENTER_X, 64);
        fx.lamps(color, BoardLeds::empty());
        fx.flush();
        self.session.countdown += 1;
        if self.session.countdown < COUNTDOWN_PHASES.len() {
            return State::Countdown;
        }
        fx.pause(2);
        fx.clear();
        fx.pause(1);
        State::Play
    }

    fn play(&mut self, input: Snapshot, fx: &mut Effects) -> State {
        let song = self.song;
        if let Some(opened) = self.session.window {
            let Some(note) = song.get(self.session.note) else {
                return self.finish(fx);
            };
            if input.now.wrapping_sub(opened) < u32::from(note.duration) {
                self.sample(note, input.colors, fx);
                return State::Play;
            }
            self.close_note();
            if self.session.score.mistakes() >= ABORT_AFTER {
                info!(
                    "song aborted at note {=usize}: {=u8} missed, {=u8} wrong",
                    self.session.note,
                    self.session.score.miss,
                    self.session.score.error
                );
                fx.tone_off();
                fx.lamps_off();
                self.session.sounding = None;
                return State::Lose;
            }
            self.session.note += 1;
        }

        let Some(note) = song.get(self.session.note) else {
            return self.finish(fx);
        };
        self.session.window = Some(input.now);
        self.session.verdict = Verdict::Missed;
        fx.lamps(note.color, BoardLeds::empty());
        self.sample(note, input.colors, fx);
        State::Play
    }

    /// One look at the colour buttons inside a note window.
    fn sample(&mut self, note: &Note, pressed: Colors, fx: &mut Effects) {
        if pressed.is_empty() {
            return;
        }
        let (verdict, hz) = if pressed == note.color {
            (Verdict::Hit, note.pitch)
        } else {
            (Verdict::Wrong, WRONG_PITCH)
        };
        self.session.verdict = verdict;
        if self.session.sounding != Some(hz) {
            self.session.sounding = Some(hz);
            fx.tone_on(hz);
        }
    }

    fn close_note(&mut self) {
        let score = &mut self.session.score;
        match self.session.verdict {
            Verdict::Hit => {}
            Verdict::Wrong => score.error += 1,
            Verdict::Missed => score.miss += 1,
        }
        trace!("note {=usize}: {}", self.session.note, self.session.verdict);
    }

    fn finish(&mut self, fx: &mut Effects) -> State {
        fx.tone_off();
        fx.lamps_off();
        fx.pause(3);
        self.session.sounding = None;
        self.session.window = None;
        State::Win
    }

    fn win(&mut self, fx: &mut Effects) -> State {
        let score = self.session.score;
        info!("song complete, score {=u8}/{=u8}", score.score(), score.max_score);
        fx.text("Song Complete!", CENTER_X, 45);
        let mut heading = Label::new();
        if write!(&mut heading, "Score (/{}):", score.max_score).is_err() {
            warn!("score heading too long");
        }
        fx.text(&heading, CENTER_X, 65);
        fx.number(score.score().into(), CENTER_X, 75);
        fx.flush();
        songs::play_tune(&VICTORY, fx);
        fx.pause(10);
        State::Start
    }

    fn lose(&mut self, fx: &mut Effects) -> State {
        let score = self.session.score;
        fx.text("Try again", CENTER_X, 35);
        fx.text("Missed notes:", CENTER_X, 55);
        fx.number(score.miss.into(), CENTER_X, 65);
        fx.text("Wrong notes:", CENTER_X, 75);
        fx.number(score.error.into(), CENTER_X, 85);
        fx.flush();
        songs::play_tune(&SHUTDOWN, fx);
        fx.pause(10);
        State::Start
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new()
    }
}
