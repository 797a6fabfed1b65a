use crate::io::Colors;

/// Buzzer pitches in Hz.
pub mod pitch {
    pub const E4: u16 = 330;
    pub const F4: u16 = 349;
    pub const F4_SHARP: u16 = 370;
    pub const G4_SHARP: u16 = 415;
    pub const A4: u16 = 440;
    pub const A4_SHARP: u16 = 466;
    pub const B4: u16 = 494;
    pub const C5_SHARP: u16 = 554;
    pub const D5: u16 = 587;
    pub const D5_SHARP: u16 = 622;
    pub const G5: u16 = 784;
    pub const G5_SHARP: u16 = 831;
    pub const A5: u16 = 880;
    pub const A5_SHARP: u16 = 932;
    pub const B5: u16 = 988;
    pub const D6: u16 = 1175;
    pub const D6_SHARP: u16 = 1245;
    pub const E6: u16 = 1318;
    pub const F6_SHARP: u16 = 1480;
    pub const G6: u16 = 1568;
    pub const A6: u16 = 1760;
    pub const B6: u16 = 1975;
}

/// One step of a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    /// Hz, 0 for a rest.
    pub pitch: u16,
    /// Clock ticks, 5 ms each.
    pub duration: u16,
    /// LED to light, and the button that plays the note.
    pub color: Colors,
}

impl Note {
    pub const fn new(pitch: u16, duration: u16, color: Colors) -> Self {
        Self {
            pitch,
            duration,
            color,
        }
    }
}
