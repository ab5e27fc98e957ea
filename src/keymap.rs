//! Associates key numbers to calculator symbols

// Export as pub so that it can be used from macro
#[doc(hidden)]
pub use paste::paste;

use crate::matrix::KEYS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// `None` for division by zero
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(lhs + rhs),
            Operator::Subtract => Some(lhs - rhs),
            Operator::Multiply => Some(lhs * rhs),
            Operator::Divide if rhs == 0.0 => None,
            Operator::Divide => Some(lhs / rhs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    Point,
    Plus,
    Minus,
    Times,
    Divide,
    Equals,
}

/// What a symbol means to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Part of a number being typed, a digit or the decimal point
    Entry(char),
    Operator(Operator),
    Equals,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::D0 => '0',
            Symbol::D1 => '1',
            Symbol::D2 => '2',
            Symbol::D3 => '3',
            Symbol::D4 => '4',
            Symbol::D5 => '5',
            Symbol::D6 => '6',
            Symbol::D7 => '7',
            Symbol::D8 => '8',
            Symbol::D9 => '9',
            Symbol::Point => '.',
            Symbol::Plus => '+',
            Symbol::Minus => '-',
            Symbol::Times => '*',
            Symbol::Divide => '/',
            Symbol::Equals => '=',
        }
    }

    pub fn operator(self) -> Option<Operator> {
        match self {
            Symbol::Plus => Some(Operator::Add),
            Symbol::Minus => Some(Operator::Subtract),
            Symbol::Times => Some(Operator::Multiply),
            Symbol::Divide => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn kind(self) -> Kind {
        match (self, self.operator()) {
            (Symbol::Equals, _) => Kind::Equals,
            (_, Some(op)) => Kind::Operator(op),
            (symbol, None) => Kind::Entry(symbol.as_char()),
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            '0' => Symbol::D0,
            '1' => Symbol::D1,
            '2' => Symbol::D2,
            '3' => Symbol::D3,
            '4' => Symbol::D4,
            '5' => Symbol::D5,
            '6' => Symbol::D6,
            '7' => Symbol::D7,
            '8' => Symbol::D8,
            '9' => Symbol::D9,
            '.' => Symbol::Point,
            '+' => Symbol::Plus,
            '-' => Symbol::Minus,
            '*' => Symbol::Times,
            '/' => Symbol::Divide,
            '=' => Symbol::Equals,
            other => return Err(other),
        })
    }
}

#[rustfmt::skip]
#[macro_export]
macro_rules! make_symbol {
    (Dot) => { $crate::keymap::Symbol::Point };
    (Eql) => { $crate::keymap::Symbol::Equals };
    (Add) => { $crate::keymap::Symbol::Plus };
    (Sub) => { $crate::keymap::Symbol::Minus };
    (Mul) => { $crate::keymap::Symbol::Times };
    (Div) => { $crate::keymap::Symbol::Divide };

    // Have numbers translate to digit symbols
    ($n:literal) => {
        $crate::keymap::paste! { $crate::keymap::Symbol::[<D $n>] }
    };
}

/// Each bracketed group is one column of the keypad, listed top row first
#[macro_export]
macro_rules! make_keymap {
    ( $( [ $( $t:tt ),* $(,)? ] ),* $(,)? ) => {[ $( $( $crate::keymap::make_symbol!($t) ),* ),* ]};
}

// Export the macros
pub use make_keymap;
pub use make_symbol;

// Reads as the physical layout turned on its side:
//
//   7 8 9 /
//   4 5 6 *
//   1 2 3 -
//   0 . = +
#[rustfmt::skip]
pub const KEYMAP: [Symbol; KEYS] = make_keymap![
    [7,      4,      1,      0],
    [8,      5,      2,      Dot],
    [9,      6,      3,      Eql],
    [Div,    Mul,    Sub,    Add],
];

pub fn symbol(index: u8) -> Option<Symbol> {
    KEYMAP.get(usize::from(index)).copied()
}
