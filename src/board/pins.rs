use embedded_hal_1::digital::{InputPin, OutputPin, PinState};

use crate::io::{BoardLeds, Buttons, Colors, Indicator, Input};

/// Colour masks in the order the colour pins are passed in.
const COLOR_ORDER: [Colors; 4] = [Colors::BLUE, Colors::RED, Colors::YELLOW, Colors::GREEN];

/// The four colour LEDs and the two board LEDs, all active high.
pub struct LedBank<P> {
    colors: [P; 4],
    board: [P; 2],
}

impl<P: OutputPin> LedBank<P> {
    /// `colors` is blue, red, yellow, green; `board` is left, right.
    pub fn new(colors: [P; 4], board: [P; 2]) -> Self {
        Self { colors, board }
    }
}

fn drive<P: OutputPin>(pin: &mut P, on: bool) {
    if pin.set_state(PinState::from(on)).is_err() {
        warn!("led pin refused a write");
    }
}

impl<P: OutputPin> Indicator for LedBank<P> {
    fn set(&mut self, colors: Colors, board: BoardLeds) {
        for (pin, color) in self.colors.iter_mut().zip(COLOR_ORDER) {
            drive(pin, colors.contains(color));
        }
        let [left, right] = &mut self.board;
        drive(left, board.contains(BoardLeds::LEFT));
        drive(right, board.contains(BoardLeds::RIGHT));
    }
}

/// Pulled-up buttons that short to ground when pressed.
///
/// Board buttons report a press once, on the poll that first sees it
/// down. Colour buttons report whatever is held.
pub struct ButtonBank<P> {
    board: [P; 2],
    colors: [P; 4],
    held: Buttons,
}

impl<P: InputPin> ButtonBank<P> {
    /// `board` is right, left; `colors` is blue, red, yellow, green.
    pub fn new(board: [P; 2], colors: [P; 4]) -> Self {
        Self {
            board,
            colors,
            held: Buttons::empty(),
        }
    }

    /// Board buttons that are down right now.
    pub fn held(&mut self) -> Buttons {
        let [right, left] = &mut self.board;
        let mut held = Buttons::empty();
        held.set(Buttons::RIGHT, is_down(right));
        held.set(Buttons::LEFT, is_down(left));
        held
    }
}

fn is_down<P: InputPin>(pin: &mut P) -> bool {
    pin.is_low().unwrap_or(false)
}

impl<P: InputPin> Input for ButtonBank<P> {
    fn buttons(&mut self) -> Buttons {
        let held = self.held();
        let pressed = held - self.held;
        self.held = held;
        if !pressed.is_empty() {
            trace!("pressed {}", pressed);
        }
        pressed
    }

    fn colors(&mut self) -> Colors {
        let mut held = Colors::empty();
        for (pin, color) in self.colors.iter_mut().zip(COLOR_ORDER) {
            if is_down(pin) {
                held |= color;
            }
        }
        held
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use core::convert::Infallible;
    use std::rc::Rc;

    use embedded_hal_1::digital::ErrorType;

    use super::*;

    /// A pin whose level is shared with the test.
    #[derive(Clone, Default)]
    struct FakePin(Rc<Cell<bool>>);

    impl FakePin {
        fn high(&self) -> bool {
            self.0.get()
        }

        fn put(&self, high: bool) {
            self.0.set(high);
        }
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.set(true);
            Ok(())
        }
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0.get())
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0.get())
        }
    }

    fn pins<const N: usize>(level: bool) -> [FakePin; N] {
        core::array::from_fn(|_| {
            let pin = FakePin::default();
            pin.put(level);
            pin
        })
    }

    #[test]
    fn leds_follow_the_masks() {
        let colors: [FakePin; 4] = pins(false);
        let board: [FakePin; 2] = pins(false);
        let mut bank = LedBank::new(colors.clone(), board.clone());

        bank.set(Colors::RED | Colors::GREEN, BoardLeds::RIGHT);
        let lit: Vec<bool> = colors.iter().map(FakePin::high).collect();
        assert_eq!(lit, [false, true, false, true]);
        assert!(!board[0].high() && board[1].high());

        bank.set(Colors::empty(), BoardLeds::empty());
        assert!(colors.iter().chain(&board).all(|pin| !pin.high()));
    }

    #[test]
    fn board_buttons_report_presses_once() {
        let board: [FakePin; 2] = pins(true);
        let mut bank = ButtonBank::new(board.clone(), pins::<4>(true));
        assert_eq!(bank.buttons(), Buttons::empty());

        board[0].put(false);
        assert_eq!(bank.buttons(), Buttons::RIGHT);
        assert_eq!(bank.buttons(), Buttons::empty());
        assert_eq!(bank.held(), Buttons::RIGHT);

        board[0].put(true);
        board[1].put(false);
        assert_eq!(bank.buttons(), Buttons::LEFT);
    }

    #[test]
    fn colour_buttons_are_active_low_levels() {
        let colors: [FakePin; 4] = pins(true);
        let mut bank = ButtonBank::new(pins::<2>(true), colors.clone());
        assert_eq!(bank.colors(), Colors::empty());

        colors[0].put(false);
        colors[2].put(false);
        assert_eq!(bank.colors(), Colors::BLUE | Colors::YELLOW);
        assert_eq!(bank.colors(), Colors::BLUE | Colors::YELLOW);
    }
}
