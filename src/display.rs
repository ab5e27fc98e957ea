//! The character display the calculator draws on

use core::convert::Infallible;

/// Characters per line
pub const WIDTH: usize = 16;
pub const LINES: usize = 2;

pub const TOP: u8 = 0;
pub const BOTTOM: u8 = 1;

const BLANK: &str = "                ";

/// A 16x2 character display. Text does not wrap onto the next line.
pub trait CharDisplay {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;
    fn set_cursor(&mut self, column: u8, line: u8) -> Result<(), Self::Error>;
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Blanks `line` and writes `text` at its start
    fn show_line(&mut self, line: u8, text: &str) -> Result<(), Self::Error> {
        self.set_cursor(0, line)?;
        self.write_str(BLANK)?;
        self.put_line(line, text)
    }

    /// Writes `text` at the start of `line` over whatever is there
    fn put_line(&mut self, line: u8, text: &str) -> Result<(), Self::Error> {
        self.set_cursor(0, line)?;
        self.write_str(text)
    }
}

/// A display held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    cells: [[u8; WIDTH]; LINES],
    cursor: (usize, usize),
    writes: usize,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            cells: [[b' '; WIDTH]; LINES],
            cursor: (0, 0),
            writes: 0,
        }
    }

    /// The text on `line` without trailing blanks
    pub fn line(&self, line: usize) -> &str {
        core::str::from_utf8(&self.cells[line])
            .unwrap_or_default()
            .trim_end()
    }

    /// Number of operations performed on the display so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl CharDisplay for Screen {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.writes += 1;
        self.cells = [[b' '; WIDTH]; LINES];
        self.cursor = (0, 0);
        Ok(())
    }

    fn set_cursor(&mut self, column: u8, line: u8) -> Result<(), Self::Error> {
        self.writes += 1;
        self.cursor = (
            usize::from(column).min(WIDTH),
            usize::from(line).min(LINES - 1),
        );
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.writes += 1;
        let (column, line) = &mut self.cursor;
        for c in text.chars() {
            if *column >= WIDTH {
                break;
            }
            self.cells[*line][*column] = if c.is_ascii() { c as u8 } else { b'?' };
            *column += 1;
        }
        Ok(())
    }
}
