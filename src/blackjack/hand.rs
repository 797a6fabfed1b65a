use heapless::Vec;

use super::error::DealError;

/// Most cards one hand can hold: 2 2 2 2 3 A A A A 3 3 is 21.
pub const MAX_CARDS: usize = 11;
/// Anything above this is a bust.
pub const BUST: u8 = 21;
/// Value of an ace while it is still soft.
pub const ACE: u8 = 11;

/// Best blackjack total for `values`.
///
/// Aces count 11 until the total goes over 21, then turn into 1s one at a
/// time until it does not.
pub fn evaluate(values: &[u8]) -> u8 {
    let mut total: u16 = values.iter().map(|&value| u16::from(value)).sum();
    let mut soft_aces = values.iter().filter(|&&value| value == ACE).count();
    while total > u16::from(BUST) && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    u8::try_from(total).unwrap_or(u8::MAX)
}

/// Card values held by one side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    values: Vec<u8, MAX_CARDS>,
}

impl Hand {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn push(&mut self, value: u8) -> Result<(), DealError> {
        self.values.push(value).map_err(|_| DealError::HandFull)
    }

    pub fn total(&self) -> u8 {
        evaluate(&self.values)
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals() {
        assert_eq!(evaluate(&[10, 10]), 20);
        assert_eq!(evaluate(&[11, 10]), 21);
        assert_eq!(evaluate(&[11, 11, 9]), 21);
        assert_eq!(evaluate(&[11, 11, 11, 11]), 14);
        assert_eq!(evaluate(&[]), 0);
    }

    #[test]
    fn aces_stay_soft_until_needed() {
        assert_eq!(evaluate(&[11, 5]), 16);
        assert_eq!(evaluate(&[11, 5, 10]), 16);
        assert_eq!(evaluate(&[10, 10, 5]), 25);
    }

    #[test]
    fn hand_caps_at_eleven_cards() {
        let mut hand = Hand::new();
        for value in [2, 2, 2, 2, 3, 11, 11, 11, 11, 3, 3] {
            hand.push(value).unwrap();
        }
        assert_eq!(hand.total(), 21);
        assert_eq!(hand.push(2), Err(DealError::HandFull));
        assert_eq!(hand.len(), MAX_CARDS);
    }
}
