//! SSD1306 OLED display wrapper.

use crate::config::DISPLAY_I2C_ADDRESS;
use crate::error::Error;
use crate::ui::layout::{Frame, TextSize};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_5X8};
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
///
/// Fails if the panel does not answer at [`DISPLAY_I2C_ADDRESS`].
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

fn text_style(size: TextSize) -> MonoTextStyle<'static, BinaryColor> {
    let font = match size {
        TextSize::Small => &FONT_5X8,
        TextSize::Large => &FONT_10X20,
    };
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .build()
}

/// Replace whatever is on the panel with `frame`.
pub fn draw<I2C>(display: &mut Display<I2C>, frame: &Frame) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    for line in frame.lines() {
        Text::with_baseline(
            line.text,
            Point::new(0, line.top),
            text_style(line.size),
            Baseline::Top,
        )
        .draw(display)
        .map_err(|_| Error::Display)?;
    }

    display.flush().map_err(|_| Error::Display)
}
