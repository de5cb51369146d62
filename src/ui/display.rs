//! SSD1306 OLED display wrapper and the firmware's `RenderSink`.

use core::fmt::Write as _;

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X15_BOLD};
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use slidekeys::config::DISPLAY_I2C_ADDR;
use slidekeys::{ImageId, RenderSink, SecretEntry};

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDR);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn small_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn field_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_9X15_BOLD)
        .text_color(BinaryColor::On)
        .build()
}

/// OLED renderer driven by the mode controller.
pub struct OledRenderer<I2C> {
    display: Display<I2C>,
}

impl<I2C> OledRenderer<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(display: Display<I2C>) -> Self {
        Self { display }
    }
}

impl<I2C> RenderSink for OledRenderer<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Draw a slide: a framed landscape placeholder and a camera-style
    /// file name. Decoding real bitmaps is left to a richer renderer.
    fn show_image(&mut self, image: ImageId) {
        let display = &mut self.display;
        display.clear_buffer();

        let outline = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        let fill = PrimitiveStyle::with_fill(BinaryColor::On);
        let _ = Rectangle::new(Point::new(0, 0), Size::new(128, 52))
            .into_styled(outline)
            .draw(display);

        // Vary the scene a little per image so slides look distinct.
        let shift = (image.0 % 5) as i32 * 14;
        let _ = Circle::new(Point::new(90 - shift, 6), 14)
            .into_styled(fill)
            .draw(display);
        let _ = Triangle::new(
            Point::new(2 + shift / 2, 50),
            Point::new(40 + shift / 2, 18),
            Point::new(78 + shift / 2, 50),
        )
        .into_styled(fill)
        .draw(display);

        let mut caption: heapless::String<16> = heapless::String::new();
        let _ = write!(caption, "IMG_{:04}.JPG", image.0);
        let _ = Text::new(caption.as_str(), Point::new(0, 62), small_style()).draw(display);

        let _ = display.flush();
    }

    /// Site, user and password on three rows, top to bottom.
    fn show_fields(&mut self, entry: &SecretEntry<'_>) {
        let display = &mut self.display;
        display.clear_buffer();

        for (row, text) in [entry.site, entry.username, entry.password]
            .into_iter()
            .enumerate()
        {
            let y = 13 + row as i32 * 21;
            let _ = Text::new(text, Point::new(2, y), field_style()).draw(display);
        }

        let _ = display.flush();
    }
}
