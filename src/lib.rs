//! Matrix keypad scanning and a four-function calculator for 16x2 character displays

#![no_std]

#[macro_use]
mod log;

pub mod calculator;
pub mod debounce;
pub mod display;
pub mod entry;
pub mod format;
pub mod keymap;
pub mod matrix;

#[cfg(test)]
pub(crate) mod sim;
