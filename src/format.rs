//! Renders numbers compactly enough for one display line
//!
//! Numbers get at most ten significant digits. Those whose decimal exponent is between -4 and 9
//! are written out in full, the rest in scientific notation (`1.5e+12`), and trailing zeros in
//! the fraction are dropped. Anything still longer than a line is cut at the line width.

use core::fmt::{self, Write};

use heapless::String;

use crate::display::WIDTH;

pub const SIGNIFICANT_DIGITS: usize = 10;

/// Longest rendering before cutting, `-1.234567891e+300`, with room to spare
const SCRATCH: usize = 32;

pub fn compact(x: f64) -> String<WIDTH> {
    let mut scratch = String::<SCRATCH>::new();
    // Every rendering fits the scratch buffer
    render(&mut scratch, x).ok();

    let mut line = String::new();
    for c in scratch.chars().take(WIDTH) {
        line.push(c).ok();
    }
    line
}

fn render(out: &mut String<SCRATCH>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return out.write_str("nan");
    }
    if x.is_infinite() {
        return out.write_str(if x < 0.0 { "-inf" } else { "inf" });
    }
    if x == 0.0 {
        return out.write_str(if x.is_sign_negative() { "-0" } else { "0" });
    }

    // Rounding to the significant digits first decides which notation is used, so that e.g.
    // 9999999999.9 becomes 1e+10
    let mut scientific = String::<SCRATCH>::new();
    write!(scientific, "{:.*e}", SIGNIFICANT_DIGITS - 1, x)?;
    let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

    if (-4..SIGNIFICANT_DIGITS as i32).contains(&exponent) {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        let mut fixed = String::<SCRATCH>::new();
        write!(fixed, "{:.*}", decimals, x)?;
        out.write_str(trim_fraction(&fixed))
    } else {
        out.write_str(trim_fraction(mantissa))?;
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(out, "e{}{:02}", sign, exponent.unsigned_abs())
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
