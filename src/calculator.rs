//! Four-function calculator driven one key at a time
//!
//! The top line shows the expression being built (`12.5*4=`), the bottom line the number being
//! typed or the result. After a result, typing a digit starts over while an operator carries the
//! result on as the first operand.

use core::convert::Infallible;

use heapless::String;

use crate::display::{CharDisplay, BOTTOM, TOP, WIDTH};
use crate::entry::EntryBuffer;
use crate::format::compact;
use crate::keymap::{Kind, Operator, Symbol};

pub const READY: &str = "Calc Ready";
pub const DIVISION_BY_ZERO: &str = "Err: Div by 0  ";
pub const PRESS_ANY_KEY: &str = "Press any key  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    EnteringFirst,
    EnteringSecond { op: Operator },
    ShowingResult,
}

/// Where confirmed key presses come from
pub trait KeySource {
    type Error;

    /// Blocks until the next key
    fn next_symbol(&mut self) -> Result<Symbol, Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<K, D> {
    Keypad(K),
    Display(D),
}

pub struct Calculator<D> {
    display: D,
    state: State,
    entry: EntryBuffer,
    op1: f64,
    op2: f64,
    result: f64,
}

impl<D: CharDisplay> Calculator<D> {
    /// Nothing is drawn until [`Calculator::start`]
    pub fn new(display: D) -> Self {
        Self {
            display,
            state: State::EnteringFirst,
            entry: EntryBuffer::new(),
            op1: 0.0,
            op2: 0.0,
            result: 0.0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        match self.state {
            State::EnteringSecond { op } => Some(op),
            _ => None,
        }
    }

    pub fn entry(&self) -> &str {
        self.entry.as_str()
    }

    pub fn operands(&self) -> (f64, f64) {
        (self.op1, self.op2)
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Draws the ready screen with an empty entry
    pub fn start(&mut self) -> Result<(), D::Error> {
        self.entry.reset();
        self.display.clear()?;
        self.display.put_line(TOP, READY)?;
        self.display.put_line(BOTTOM, self.entry.as_str())
    }

    /// Reads keys and feeds them in for as long as the keypad and display keep working
    pub fn run<K: KeySource>(
        &mut self,
        keys: &mut K,
    ) -> Result<Infallible, Error<K::Error, D::Error>> {
        self.start().map_err(Error::Display)?;
        loop {
            let symbol = keys.next_symbol().map_err(Error::Keypad)?;
            self.feed(symbol).map_err(Error::Display)?;
        }
    }

    /// Processes one key
    pub fn feed(&mut self, symbol: Symbol) -> Result<(), D::Error> {
        match (self.state, symbol.kind()) {
            (State::ShowingResult, Kind::Entry(c)) => self.start_over(c),
            (_, Kind::Entry(c)) => self.type_char(c),

            (State::EnteringFirst, Kind::Operator(op)) => {
                self.op1 = self.entry.value();
                self.begin_second(op)
            }
            (State::EnteringFirst, Kind::Equals) => {
                self.op1 = self.entry.value();
                self.result = self.op1;
                self.enter(State::ShowingResult);
                self.display.clear()?;
                self.display.put_line(BOTTOM, &compact(self.result))
            }

            (State::EnteringSecond { .. }, Kind::Operator(op)) => {
                self.enter(State::EnteringSecond { op });
                self.show_expression(op, None)
            }
            (State::EnteringSecond { op }, Kind::Equals) => self.evaluate(op),

            (State::ShowingResult, Kind::Operator(op)) => {
                self.op1 = self.result;
                self.op2 = 0.0;
                self.begin_second(op)
            }
            (State::ShowingResult, Kind::Equals) => Ok(()),
        }
    }

    fn enter(&mut self, state: State) {
        if state != self.state {
            debug!("{} -> {}", self.state, state);
        }
        self.state = state;
    }

    fn type_char(&mut self, c: char) -> Result<(), D::Error> {
        if let Err(rejected) = self.entry.push(c) {
            trace!("dropped {}: {}", c, rejected);
        }
        self.display.show_line(BOTTOM, self.entry.as_str())
    }

    fn start_over(&mut self, c: char) -> Result<(), D::Error> {
        self.op1 = 0.0;
        self.op2 = 0.0;
        self.entry = EntryBuffer::starting_with(c);
        self.enter(State::EnteringFirst);
        self.display.clear()?;
        self.display.put_line(TOP, READY)?;
        self.display.show_line(BOTTOM, self.entry.as_str())
    }

    fn begin_second(&mut self, op: Operator) -> Result<(), D::Error> {
        self.enter(State::EnteringSecond { op });
        self.show_expression(op, None)?;
        self.entry.reset();
        self.display.show_line(BOTTOM, self.entry.as_str())
    }

    fn evaluate(&mut self, op: Operator) -> Result<(), D::Error> {
        self.op2 = self.entry.value();
        self.show_expression(op, Some(self.op2))?;
        self.enter(State::ShowingResult);

        match op.apply(self.op1, self.op2) {
            Some(result) => {
                self.result = result;
                self.display.show_line(BOTTOM, &compact(result))
            }
            None => {
                info!("division by zero");
                self.display.put_line(TOP, DIVISION_BY_ZERO)?;
                self.display.put_line(BOTTOM, PRESS_ANY_KEY)
            }
        }
    }

    fn show_expression(&mut self, op: Operator, op2: Option<f64>) -> Result<(), D::Error> {
        let line = expression(self.op1, op, op2);
        self.display.show_line(TOP, &line)
    }
}

/// `op1`, the operator, `op2` and `=`, each only added if it fits whole on the line
fn expression(op1: f64, op: Operator, op2: Option<f64>) -> String<WIDTH> {
    let mut line = compact(op1);
    line.push(op.as_char()).ok();
    if let Some(op2) = op2 {
        line.push_str(&compact(op2)).ok();
        line.push('=').ok();
    }
    line
}
