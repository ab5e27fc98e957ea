//! Scans the 4x4 keypad matrix

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub const COLUMNS: usize = 4;
pub const ROWS: usize = 4;
pub const KEYS: usize = COLUMNS * ROWS;

/// Time for the row lines to settle after a column is driven
pub const SETTLE_US: u32 = 5;

/// A single key switch, addressed by the column line driving it and the row line sensing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Intersection {
    pub column: u8,
    pub row: u8,
}

impl Intersection {
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        (usize::from(index) < KEYS).then(|| Self {
            column: index / ROWS as u8,
            row: index % ROWS as u8,
        })
    }

    /// Column-major key number, 0..16
    pub const fn index(&self) -> u8 {
        self.column * ROWS as u8 + self.row
    }
}

/// Something that can look at the keypad once and name at most one pressed key
pub trait Scan {
    type Error;

    fn scan_once<D: DelayUs<u32>>(
        &mut self,
        delay: &mut D,
    ) -> Result<Option<Intersection>, Self::Error>;
}

pub struct Matrix<C, R> {
    columns: [C; COLUMNS],
    rows: [R; ROWS],
    output_active: bool,
    settle_us: u32,
}

impl<E, C: OutputPin<Error = E>, R: InputPin<Error = E>> Matrix<C, R> {
    /// `output_active` is the level a driven column is set to, and the level a closed switch
    /// shows on its row
    pub fn new(columns: [C; COLUMNS], rows: [R; ROWS], output_active: bool) -> Self {
        Self {
            columns,
            rows,
            output_active,
            settle_us: SETTLE_US,
        }
    }

    pub fn with_settle_us(mut self, settle_us: u32) -> Self {
        self.settle_us = settle_us;
        self
    }

    pub fn release(self) -> ([C; COLUMNS], [R; ROWS]) {
        (self.columns, self.rows)
    }
}

impl<E, C: OutputPin<Error = E>, R: InputPin<Error = E>> Scan for Matrix<C, R> {
    type Error = E;

    /// Drives one column at a time and stops at the first column with any row active, picking
    /// the lowest row in it. Keys in later columns are not looked at.
    fn scan_once<D: DelayUs<u32>>(&mut self, delay: &mut D) -> Result<Option<Intersection>, E> {
        for column in self.columns.iter_mut() {
            column.set_state((!self.output_active).into())?;
        }

        for (c, column) in self.columns.iter_mut().enumerate() {
            column.set_state(self.output_active.into())?;
            delay.delay_us(self.settle_us);

            let mut sensed = 0u8;
            for (r, row) in self.rows.iter().enumerate() {
                if row.is_high()? == self.output_active {
                    sensed |= 1 << r;
                }
            }
            column.set_state((!self.output_active).into())?;

            if sensed != 0 {
                return Ok(Some(Intersection::new(
                    c as u8,
                    sensed.trailing_zeros() as u8,
                )));
            }
        }
        Ok(None)
    }
}
