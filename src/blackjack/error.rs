use core::fmt;

/// Dealing ran past a fixed-size boundary. The round logic never gets here
/// in a real match, so callers treat it as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DealError {
    /// All 52 cards are already dealt.
    DeckExhausted,
    /// The hand already holds its maximum number of cards.
    HandFull,
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealError::DeckExhausted => f.write_str("deck exhausted"),
            DealError::HandFull => f.write_str("hand full"),
        }
    }
}

impl core::error::Error for DealError {}
