//! HD44780 16x2 character LCD as the calculator's display

use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use hd44780_driver::bus::DataBus;
use hd44780_driver::error::Error;
use hd44780_driver::{Cursor, CursorBlink, Display, DisplayMode, HD44780};

use keypad_calc::display::CharDisplay;

/// DDRAM address of the first character of the second line
const LINE_OFFSET: u8 = 0x40;

pub struct Lcd<B: DataBus, D> {
    lcd: HD44780<B>,
    delay: D,
}

impl<B: DataBus, D: DelayUs<u16> + DelayMs<u8>> Lcd<B, D> {
    pub fn new(mut lcd: HD44780<B>, mut delay: D) -> Result<Self, Error> {
        lcd.reset(&mut delay)?;
        lcd.set_display_mode(
            DisplayMode {
                display: Display::On,
                cursor_visibility: Cursor::Invisible,
                cursor_blink: CursorBlink::Off,
            },
            &mut delay,
        )?;
        Ok(Self { lcd, delay })
    }
}

impl<B: DataBus, D: DelayUs<u16> + DelayMs<u8>> CharDisplay for Lcd<B, D> {
    type Error = Error;

    fn clear(&mut self) -> Result<(), Error> {
        self.lcd.clear(&mut self.delay)
    }

    fn set_cursor(&mut self, column: u8, line: u8) -> Result<(), Error> {
        self.lcd
            .set_cursor_pos(line * LINE_OFFSET + column, &mut self.delay)
    }

    fn write_str(&mut self, text: &str) -> Result<(), Error> {
        self.lcd.write_str(text, &mut self.delay)
    }
}
