//! Decimal text form of an [`Octobool`]: the numeral of its packed byte (`0` to `255`).
//!
//! The selector is not part of the text form. Parsing a numeral back yields a value with
//! the selector at `0`.

use core::fmt::{self, Write};
use core::str::FromStr;

use heapless::String;

use crate::{Octobool, OctoboolError, OctoboolResult, TypeCode};

/// Room for the numeral produced by any [`NumeralFormat`] that `to_numeral_string_with` accepts.
pub const NUMERAL_CAPACITY: usize = 16;

/// A numeric formatting context.
pub trait NumeralFormat {
    fn write_numeral(&self, value: u8, out: &mut dyn Write) -> fmt::Result;
}

/// Plain ASCII digits, no grouping, no sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invariant;

impl NumeralFormat for Invariant {
    fn write_numeral(&self, value: u8, out: &mut dyn Write) -> fmt::Result {
        write!(out, "{}", value)
    }
}

impl Octobool {
    pub fn write_numeral_with<W: Write>(&self, out: &mut W, format: &impl NumeralFormat) -> fmt::Result {
        format.write_numeral(self.values(), out)
    }

    pub fn to_numeral_string_with(
        &self,
        format: &impl NumeralFormat,
    ) -> OctoboolResult<String<NUMERAL_CAPACITY>> {
        let mut numeral = String::new();
        self.write_numeral_with(&mut numeral, format)
            .map_err(|_| OctoboolError::UnsupportedConversion { to: TypeCode::String })?;
        Ok(numeral)
    }

    pub fn to_numeral_string(&self) -> String<NUMERAL_CAPACITY> {
        // At most three digits, always fits
        self.to_numeral_string_with(&Invariant).unwrap_or_default()
    }
}

impl fmt::Display for Octobool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.values(), f)
    }
}

impl FromStr for Octobool {
    type Err = OctoboolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map(Octobool::from)
            .map_err(|_| OctoboolError::InvalidNumeral)
    }
}
