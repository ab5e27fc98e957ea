//! Confirms key presses by scanning twice, and waits for release so a held key counts once

use embedded_hal::blocking::delay::DelayUs;

use crate::calculator::KeySource;
use crate::keymap::{self, Symbol, KEYMAP};
use crate::matrix::Scan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Time between the two scans that must agree, longer than the switches bounce for
    pub confirm_us: u32,
    /// Pause between checks that a confirmed key has been let go
    pub release_poll_us: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            confirm_us: 20_000,
            release_poll_us: 5_000,
        }
    }
}

pub struct Keypad<S, D> {
    scanner: S,
    delay: D,
    timing: Timing,
}

impl<S: Scan, D: DelayUs<u32>> Keypad<S, D> {
    pub fn new(scanner: S, delay: D) -> Self {
        Self::with_timing(scanner, delay, Timing::default())
    }

    pub fn with_timing(scanner: S, delay: D, timing: Timing) -> Self {
        Self {
            scanner,
            delay,
            timing,
        }
    }

    pub fn release(self) -> (S, D) {
        (self.scanner, self.delay)
    }

    /// The key number if a key is down now and is still the same key one confirmation interval
    /// later. Returns at once when nothing is pressed.
    pub fn poll_index(&mut self) -> Result<Option<u8>, S::Error> {
        let first = match self.scanner.scan_once(&mut self.delay)? {
            Some(key) => key,
            None => return Ok(None),
        };

        self.delay.delay_us(self.timing.confirm_us);
        let second = self.scanner.scan_once(&mut self.delay)?;

        if second == Some(first) {
            Ok(Some(first.index()))
        } else {
            trace!("bounce on {}, then {}", first, second);
            Ok(None)
        }
    }

    /// Blocks until a key is pressed and let go again, with no time limit
    pub fn wait_for_index(&mut self) -> Result<u8, S::Error> {
        let index = loop {
            if let Some(index) = self.poll_index()? {
                break index;
            }
        };

        loop {
            let held = self.poll_index()?;
            self.delay.delay_us(self.timing.release_poll_us);
            if held.is_none() {
                break;
            }
        }

        debug!("key {}", index);
        Ok(index)
    }

    pub fn poll_char(&mut self) -> Result<Option<Symbol>, S::Error> {
        Ok(self.poll_index()?.and_then(keymap::symbol))
    }

    pub fn wait_for_char(&mut self) -> Result<Symbol, S::Error> {
        let index = self.wait_for_index()?;
        Ok(KEYMAP[usize::from(index)])
    }
}

impl<S: Scan, D: DelayUs<u32>> KeySource for Keypad<S, D> {
    type Error = S::Error;

    fn next_symbol(&mut self) -> Result<Symbol, Self::Error> {
        self.wait_for_char()
    }
}
