//! The services a game talks to, and the effects a game step asks for.
//!
//! A state machine step never touches hardware. It returns an [`Effects`]
//! list, and [`present`] plays that list against whatever implements the
//! service traits: the board adapters in firmware, fakes in tests.

use core::fmt::Write;
use core::slice;

use bitflags::bitflags;
use heapless::{String, Vec};

bitflags! {
    /// Launchpad push buttons.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u8 {
        const RIGHT = 0x01;
        const LEFT = 0x02;
    }
}

bitflags! {
    /// External colour buttons and the LEDs above them. Bit order follows
    /// the wiring: blue on bit 0 up to green on bit 3.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Colors: u8 {
        const BLUE = 0x1;
        const RED = 0x2;
        const YELLOW = 0x4;
        const GREEN = 0x8;
    }
}

bitflags! {
    /// The two LEDs on the launchpad itself.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BoardLeds: u8 {
        /// LED1, red.
        const LEFT = 0x01;
        /// LED2, green.
        const RIGHT = 0x02;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Buttons {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Buttons({=u8:#x})", self.bits())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Colors {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Colors({=u8:#x})", self.bits())
    }
}

/// Longest text a single draw call carries.
pub const LABEL_LEN: usize = 24;

/// Short screen text.
pub type Label = String<LABEL_LEN>;

/// Builds a label, cutting `text` at [`LABEL_LEN`] characters.
pub fn label(text: &str) -> Label {
    let mut out = Label::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            warn!("label cut at {=usize} chars", LABEL_LEN);
            break;
        }
    }
    out
}

/// One thing a game wants done to the outside world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Blank the screen.
    Clear,
    /// Draw text centred on `(x, y)` of the 128x128 playfield.
    Text { label: Label, x: i32, y: i32 },
    /// Push pending drawing to the panel.
    Flush,
    /// Light exactly these LEDs, everything else off.
    Lamps { colors: Colors, board: BoardLeds },
    /// Sound the buzzer at a pitch in Hz.
    ToneOn(u16),
    ToneOff,
    /// Coarse pacing delay, in pacing units.
    Pause(u8),
    /// Wait this many clock ticks.
    Hold(u16),
}

/// Effects a single step can emit.
pub const MAX_EFFECTS: usize = 32;

/// Ordered effects from one state machine step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects(Vec<Effect, MAX_EFFECTS>);

impl Effects {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends an effect.
    ///
    /// # Panics
    ///
    /// When a step emits more than [`MAX_EFFECTS`] effects.
    pub fn push(&mut self, effect: Effect) {
        if self.0.push(effect).is_err() {
            panic!("effect list full");
        }
    }

    pub fn clear(&mut self) {
        self.push(Effect::Clear);
    }

    pub fn text(&mut self, text: &str, x: i32, y: i32) {
        self.push(Effect::Text { label: label(text), x, y });
    }

    pub fn number(&mut self, value: u32, x: i32, y: i32) {
        let mut buffer = itoa::Buffer::new();
        self.text(buffer.format(value), x, y);
    }

    /// Draws `value` inside a `>..<` frame, the way selections are shown.
    pub fn framed(&mut self, value: impl core::fmt::Display, x: i32, y: i32) {
        let mut text = Label::new();
        if write!(&mut text, ">{}<", value).is_err() {
            warn!("framed label too long");
        }
        self.push(Effect::Text { label: text, x, y });
    }

    pub fn flush(&mut self) {
        self.push(Effect::Flush);
    }

    pub fn lamps(&mut self, colors: Colors, board: BoardLeds) {
        self.push(Effect::Lamps { colors, board });
    }

    pub fn lamps_off(&mut self) {
        self.lamps(Colors::empty(), BoardLeds::empty());
    }

    pub fn tone_on(&mut self, hz: u16) {
        self.push(Effect::ToneOn(hz));
    }

    pub fn tone_off(&mut self) {
        self.push(Effect::ToneOff);
    }

    pub fn pause(&mut self, units: u8) {
        self.push(Effect::Pause(units));
    }

    pub fn hold(&mut self, ticks: u16) {
        self.push(Effect::Hold(ticks));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Effect> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Effect] {
        &self.0
    }

    /// Every text drawn, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|effect| match effect {
            Effect::Text { label, .. } => Some(label.as_str()),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a Effects {
    type Item = &'a Effect;
    type IntoIter = slice::Iter<'a, Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Button reads. Board buttons report fresh presses, colour buttons report
/// what is held right now.
pub trait Input {
    fn buttons(&mut self) -> Buttons;
    fn colors(&mut self) -> Colors;
}

/// Text-only view of the LCD.
pub trait Display {
    fn clear(&mut self);
    fn draw_centered(&mut self, text: &str, x: i32, y: i32);
    fn flush(&mut self);
}

/// The four colour LEDs plus the two board LEDs.
pub trait Indicator {
    fn set(&mut self, colors: Colors, board: BoardLeds);
}

/// On/off buzzer.
pub trait Tone {
    fn tone_on(&mut self, hz: u16);
    fn tone_off(&mut self);
}

/// Monotonic tick counter, one tick every 5 ms.
pub trait Clock {
    fn now_ticks(&self) -> u32;
}

/// Open-loop waits. Neither can be cut short once started.
#[allow(async_fn_in_trait)]
pub trait Pacing {
    async fn pause(&mut self, units: u8);
    async fn hold(&mut self, ticks: u16);
}

/// Everything a game step looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub now: u32,
    pub buttons: Buttons,
    pub colors: Colors,
}

impl Snapshot {
    pub fn read(input: &mut impl Input, clock: &impl Clock) -> Self {
        Self {
            now: clock.now_ticks(),
            buttons: input.buttons(),
            colors: input.colors(),
        }
    }
}

/// Plays `effects` in order.
pub async fn present<P>(panel: &mut P, effects: &Effects)
where
    P: Display + Indicator + Tone + Pacing,
{
    for effect in effects {
        match effect {
            Effect::Clear => panel.clear(),
            Effect::Text { label, x, y } => panel.draw_centered(label, *x, *y),
            Effect::Flush => panel.flush(),
            Effect::Lamps { colors, board } => panel.set(*colors, *board),
            Effect::ToneOn(0) | Effect::ToneOff => panel.tone_off(),
            Effect::ToneOn(hz) => panel.tone_on(*hz),
            Effect::Pause(units) => panel.pause(*units).await,
            Effect::Hold(ticks) => panel.hold(*ticks).await,
        }
    }
}
