//! The operand being typed, as text

use heapless::String;

use crate::display::WIDTH;

/// Never more than fits on one display line
pub const CAPACITY: usize = WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Append {
    Appended,
    /// A lone leading zero was replaced by the new digit
    ReplacedZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rejected {
    SecondPoint,
    Full,
}

/// Digits and at most one decimal point; reads `"0"` when nothing has been typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryBuffer {
    text: String<CAPACITY>,
}

impl EntryBuffer {
    pub fn new() -> Self {
        let mut text = String::new();
        text.push('0').ok();
        Self { text }
    }

    /// A buffer holding just `c`, as when a new calculation starts from a typed key
    pub fn starting_with(c: char) -> Self {
        let mut text = String::new();
        text.push(c).ok();
        Self { text }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn push(&mut self, c: char) -> Result<Append, Rejected> {
        if c == '.' && self.text.contains('.') {
            return Err(Rejected::SecondPoint);
        }
        if c != '.' && self.text.as_str() == "0" {
            self.text.clear();
            self.text.push(c).map_err(|_| Rejected::Full)?;
            return Ok(Append::ReplacedZero);
        }
        self.text.push(c).map_err(|_| Rejected::Full)?;
        Ok(Append::Appended)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Reads the longest numeric prefix, or 0.0 when there is none
    pub fn value(&self) -> f64 {
        parse_prefix(&self.text)
    }
}

impl Default for EntryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_prefix(text: &str) -> f64 {
    (1..=text.len())
        .rev()
        .filter(|end| text.is_char_boundary(*end))
        .find_map(|end| text[..end].parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn typed(keys: &str) -> EntryBuffer {
        let mut entry = EntryBuffer::new();
        for c in keys.chars() {
            entry.push(c).ok();
        }
        entry
    }

    #[test]
    fn starts_at_zero() {
        let entry = EntryBuffer::new();
        assert_eq!(entry.as_str(), "0");
        assert_eq!(entry.value(), 0.0);
    }

    #[test]
    fn digit_replaces_lone_zero() {
        let mut entry = EntryBuffer::new();
        assert_eq!(entry.push('7'), Ok(Append::ReplacedZero));
        assert_eq!(entry.as_str(), "7");
        assert_eq!(entry.push('0'), Ok(Append::Appended));
        assert_eq!(entry.as_str(), "70");
    }

    #[test]
    fn zero_replaces_lone_zero() {
        let mut entry = EntryBuffer::new();
        assert_eq!(entry.push('0'), Ok(Append::ReplacedZero));
        assert_eq!(entry.as_str(), "0");
    }

    #[test]
    fn point_keeps_leading_zero() {
        let mut entry = EntryBuffer::new();
        assert_eq!(entry.push('.'), Ok(Append::Appended));
        assert_eq!(entry.as_str(), "0.");
        entry.push('5').unwrap();
        assert_eq!(entry.value(), 0.5);
    }

    #[test]
    fn second_point_is_rejected() {
        let mut entry = typed("1.2");
        assert_eq!(entry.push('.'), Err(Rejected::SecondPoint));
        assert_eq!(entry.as_str(), "1.2");
        entry.push('3').unwrap();
        assert_eq!(entry.push('.'), Err(Rejected::SecondPoint));
        assert_eq!(entry.as_str(), "1.23");
    }

    #[test]
    fn full_buffer_drops_input() {
        let mut entry = typed("1234567890123456");
        assert_eq!(entry.as_str().len(), CAPACITY);
        assert_eq!(entry.push('7'), Err(Rejected::Full));
        assert_eq!(entry.push('.'), Err(Rejected::Full));
        assert_eq!(entry.as_str(), "1234567890123456");
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut entry = typed("42.5");
        entry.reset();
        assert_eq!(entry, EntryBuffer::new());
    }

    #[test]
    fn values() {
        assert_eq!(typed("12.").value(), 12.0);
        assert_eq!(typed("3.25").value(), 3.25);
        assert_eq!(EntryBuffer::starting_with('.').value(), 0.0);
        assert_eq!(EntryBuffer::starting_with('.').as_str(), ".");
        assert_eq!(EntryBuffer::starting_with('9').value(), 9.0);
    }

    #[test]
    fn prefix_parsing() {
        assert_eq!(parse_prefix(""), 0.0);
        assert_eq!(parse_prefix("."), 0.0);
        assert_eq!(parse_prefix("1.5x"), 1.5);
        assert_eq!(parse_prefix("abc"), 0.0);
    }
}
