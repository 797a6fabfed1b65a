use embedded_graphics::{
    mono_font::{MonoTextStyle, MonoTextStyleBuilder, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder},
};

use crate::io::Display;

/// Side of the square the games lay their screens out on.
pub const FIELD_SIZE: u32 = 128;

/// Centred text on a colour panel.
///
/// Games place text on a 128x128 field. The field sits in the middle of
/// the panel, so a larger panel just gets a black border.
pub struct LcdText<D> {
    target: D,
    origin: Point,
    character: MonoTextStyle<'static, Rgb565>,
    layout: TextStyle,
}

impl<D> LcdText<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        let size = target.bounding_box().size;
        let origin = Point::new(
            (size.width.saturating_sub(FIELD_SIZE) / 2) as i32,
            (size.height.saturating_sub(FIELD_SIZE) / 2) as i32,
        );
        Self {
            target,
            origin,
            character: MonoTextStyleBuilder::new()
                .font(&FONT_6X10)
                .text_color(Rgb565::GREEN)
                .background_color(Rgb565::BLACK)
                .build(),
            layout: TextStyleBuilder::new()
                .alignment(Alignment::Center)
                .baseline(Baseline::Middle)
                .build(),
        }
    }

    /// Panel position of a field position.
    pub fn to_panel(&self, x: i32, y: i32) -> Point {
        self.origin + Point::new(x, y)
    }

    pub fn target(&self) -> &D {
        &self.target
    }
}

impl<D> Display for LcdText<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn clear(&mut self) {
        if self.target.clear(Rgb565::BLACK).is_err() {
            warn!("lcd clear failed");
        }
    }

    fn draw_centered(&mut self, text: &str, x: i32, y: i32) {
        let at = self.to_panel(x, y);
        let drawn = Text::with_text_style(text, at, self.character, self.layout)
            .draw(&mut self.target);
        if drawn.is_err() {
            warn!("lcd text draw failed");
        }
    }

    // The panel is written straight through, nothing is buffered.
    fn flush(&mut self) {}
}
