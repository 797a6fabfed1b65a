//! RP2350 bring-up shared by the two game binaries.

use core::cell::RefCell;
use core::sync::atomic::{AtomicU32, Ordering};

use display_interface_spi::SPIInterface;
use embassy_embedded_hal::shared_bus::blocking::spi::SpiDevice;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::{
    gpio::{Input, Level, Output, Pull},
    peripherals::SPI0,
    pwm::{Config as ConfigPwm, Pwm},
    spi::{Blocking, Config as ConfigSpi, Spi},
};
use embassy_sync::blocking_mutex::{NoopMutex, raw::NoopRawMutex};
use embassy_time::{Delay, Duration, Ticker, Timer};
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use fixed::traits::ToFixed;
use ili9341::{DisplaySize240x320, Ili9341, ModeState, Orientation};
use static_cell::StaticCell;

use crate::board::{self, ButtonBank, LcdText, LedBank, pwm_top};
use crate::io::{BoardLeds, Clock, Colors, Display, Indicator, Pacing, Tone};

type SpiBus = NoopMutex<RefCell<Spi<'static, SPI0, Blocking>>>;

/// The ILI9341 as wired to SPI0.
pub type Screen = Ili9341<
    SPIInterface<
        SpiDevice<'static, NoopRawMutex, Spi<'static, SPI0, Blocking>, Output<'static>>,
        Output<'static>,
    >,
    Output<'static>,
>;

static SPI_BUS: StaticCell<SpiBus> = StaticCell::new();

/// Ticks since boot, written only by [`tick_task`].
pub static TICKS: AtomicU32 = AtomicU32::new(0);

#[embassy_executor::task]
pub async fn tick_task() {
    let mut ticker = Ticker::every(Duration::from_millis(board::TICK_MS));
    loop {
        ticker.next().await;
        TICKS.fetch_add(1, Ordering::Relaxed);
    }
}

/// Reads [`TICKS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TickClock;

impl Clock for TickClock {
    fn now_ticks(&self) -> u32 {
        TICKS.load(Ordering::Relaxed)
    }
}

/// Piezo on one PWM channel, square wave at half duty.
pub struct Buzzer {
    pwm: Pwm<'static>,
    config: ConfigPwm,
}

impl Buzzer {
    pub fn new(pwm: Pwm<'static>) -> Self {
        let mut config: ConfigPwm = Default::default();
        config.divider = (board::PWM_DIVIDER as i32).to_fixed();
        config.top = 0;
        config.compare_a = 0;
        let mut buzzer = Self { pwm, config };
        buzzer.pwm.set_config(&buzzer.config);
        buzzer
    }
}

impl Tone for Buzzer {
    fn tone_on(&mut self, hz: u16) {
        self.config.top = pwm_top(hz);
        self.config.compare_a = self.config.top / 2;
        self.pwm.set_config(&self.config);
    }

    fn tone_off(&mut self) {
        self.config.compare_a = 0;
        self.pwm.set_config(&self.config);
    }
}

/// Everything a game draws, lights or sounds on.
pub struct Panel<D> {
    pub lcd: LcdText<D>,
    pub leds: LedBank<Output<'static>>,
    pub buzzer: Buzzer,
}

impl<D: DrawTarget<Color = Rgb565>> Display for Panel<D> {
    fn clear(&mut self) {
        self.lcd.clear();
    }

    fn draw_centered(&mut self, text: &str, x: i32, y: i32) {
        self.lcd.draw_centered(text, x, y);
    }

    fn flush(&mut self) {
        self.lcd.flush();
    }
}

impl<D> Indicator for Panel<D> {
    fn set(&mut self, colors: Colors, board: BoardLeds) {
        self.leds.set(colors, board);
    }
}

impl<D> Tone for Panel<D> {
    fn tone_on(&mut self, hz: u16) {
        self.buzzer.tone_on(hz);
    }

    fn tone_off(&mut self) {
        self.buzzer.tone_off();
    }
}

impl<D> Pacing for Panel<D> {
    async fn pause(&mut self, units: u8) {
        Timer::after_millis(board::PACE_UNIT_MS * u64::from(units)).await;
    }

    async fn hold(&mut self, ticks: u16) {
        let clock = TickClock;
        let start = clock.now_ticks();
        while clock.now_ticks().wrapping_sub(start) < u32::from(ticks) {
            yield_now().await;
        }
    }
}

pub struct Board {
    pub panel: Panel<Screen>,
    pub buttons: ButtonBank<Input<'static>>,
}

/// Takes the peripherals, sets up the LCD, LEDs, buttons and buzzer, and
/// starts the tick counter.
///
/// Breadboard wiring:
///
/// | GPIO | Part |
/// |------|------|
/// | 2, 3, 4, 5 | yellow, green, blue, red LEDs |
/// | 6, 7 | right, left buttons |
/// | 8, 9, 12, 13 | blue, red, yellow, green buttons |
/// | 10, 11 | left, right board LEDs |
/// | 14, 15, 17 | LCD DC, reset, CS |
/// | 16, 18, 19 | SPI0 MISO, CLK, MOSI |
/// | 22 | buzzer, PWM slice 3 A |
pub fn init(spawner: Spawner) -> Board {
    let p = embassy_rp::init(Default::default());

    let leds = LedBank::new(
        [
            Output::new(p.PIN_4, Level::Low),
            Output::new(p.PIN_5, Level::Low),
            Output::new(p.PIN_2, Level::Low),
            Output::new(p.PIN_3, Level::Low),
        ],
        [Output::new(p.PIN_10, Level::Low), Output::new(p.PIN_11, Level::Low)],
    );
    let buttons = ButtonBank::new(
        [Input::new(p.PIN_6, Pull::Up), Input::new(p.PIN_7, Pull::Up)],
        [
            Input::new(p.PIN_8, Pull::Up),
            Input::new(p.PIN_9, Pull::Up),
            Input::new(p.PIN_12, Pull::Up),
            Input::new(p.PIN_13, Pull::Up),
        ],
    );

    let mut spiconfig = ConfigSpi::default();
    spiconfig.frequency = board::SPI_FREQUENCY;

    let miso = p.PIN_16;
    let mosi = p.PIN_19;
    let clk = p.PIN_18;

    let spi = Spi::new_blocking(p.SPI0, clk, mosi, miso, spiconfig);
    let spi_bus = SPI_BUS.init(NoopMutex::new(RefCell::new(spi)));

    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_14, Level::Low);
    let reset = Output::new(p.PIN_15, Level::High);

    let spi_dev = SpiDevice::new(spi_bus, cs);
    let iface = SPIInterface::new(spi_dev, dc);

    let mut display = Ili9341::new(
        iface,
        reset,
        &mut Delay,
        Orientation::LandscapeFlipped,
        DisplaySize240x320,
    )
    .unwrap();

    display.idle_mode(ModeState::Off).unwrap();
    display.invert_mode(ModeState::On).unwrap();
    let _ = display.normal_mode_frame_rate(
        ili9341::FrameRateClockDivision::Fosc,
        ili9341::FrameRate::FrameRate100,
    );
    display.clear(Rgb565::BLACK).unwrap();

    let buzzer = Buzzer::new(Pwm::new_output_a(p.PWM_SLICE3, p.PIN_22, ConfigPwm::default()));

    spawner.spawn(tick_task()).unwrap();
    let size = display.bounding_box().size;
    info!("board up, lcd {=u32}x{=u32}", size.width, size.height);

    Board {
        panel: Panel {
            lcd: LcdText::new(display),
            leds,
            buzzer,
        },
        buttons,
    }
}
