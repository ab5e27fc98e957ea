//! Simulated keypad wiring and clock for tests

extern crate std;

use core::cell::RefCell;
use core::convert::Infallible;
use std::vec::Vec;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::matrix::{Intersection, Matrix, COLUMNS};

/// A switch that is closed during `[from_us, until_us)`
struct Contact {
    key: Intersection,
    from_us: u64,
    until_us: u64,
}

#[derive(Default)]
struct Lines {
    driven: [bool; COLUMNS],
    most_driven: usize,
    now_us: u64,
    contacts: Vec<Contact>,
}

impl Lines {
    fn closed(&self, key: Intersection) -> bool {
        self.contacts
            .iter()
            .any(|c| c.key == key && c.from_us <= self.now_us && self.now_us < c.until_us)
    }
}

/// Active-high columns and rows, with time advanced only by the simulated delay
#[derive(Default)]
pub struct Board {
    lines: RefCell<Lines>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(&self, key: Intersection) {
        self.close(key, 0, u64::MAX);
    }

    pub fn close(&self, key: Intersection, from_us: u64, until_us: u64) {
        self.lines.borrow_mut().contacts.push(Contact {
            key,
            from_us,
            until_us,
        });
    }

    /// Presses each key in turn for `hold_us`, with `gap_us` between releases and presses,
    /// starting at `start_us`. Returns the time the last key is let go.
    pub fn type_keys(
        &self,
        keys: &[Intersection],
        start_us: u64,
        hold_us: u64,
        gap_us: u64,
    ) -> u64 {
        let mut at = start_us;
        for key in keys {
            self.close(*key, at, at + hold_us);
            at += hold_us + gap_us;
        }
        at.saturating_sub(gap_us)
    }

    pub fn now_us(&self) -> u64 {
        self.lines.borrow().now_us
    }

    pub fn driven(&self) -> [bool; COLUMNS] {
        self.lines.borrow().driven
    }

    pub fn most_driven(&self) -> usize {
        self.lines.borrow().most_driven
    }

    pub fn matrix(&self) -> Matrix<ColumnLine<'_>, RowLine<'_>> {
        Matrix::new(
            core::array::from_fn(|column| ColumnLine {
                board: self,
                column,
            }),
            core::array::from_fn(|row| RowLine { board: self, row }),
            true,
        )
    }

    pub fn clock(&self) -> Clock<'_> {
        Clock { board: self }
    }
}

pub struct ColumnLine<'a> {
    board: &'a Board,
    column: usize,
}

impl ColumnLine<'_> {
    fn drive(&mut self, level: bool) {
        let mut lines = self.board.lines.borrow_mut();
        lines.driven[self.column] = level;
        let driven = lines.driven.iter().filter(|d| **d).count();
        lines.most_driven = lines.most_driven.max(driven);
    }
}

impl OutputPin for ColumnLine<'_> {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
    }
}

pub struct RowLine<'a> {
    board: &'a Board,
    row: usize,
}

impl InputPin for RowLine<'_> {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        let lines = self.board.lines.borrow();
        Ok((0..COLUMNS).any(|column| {
            lines.driven[column]
                && lines.closed(Intersection::new(column as u8, self.row as u8))
        }))
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

pub struct Clock<'a> {
    board: &'a Board,
}

impl DelayUs<u32> for Clock<'_> {
    fn delay_us(&mut self, us: u32) {
        self.board.lines.borrow_mut().now_us += u64::from(us);
    }
}
