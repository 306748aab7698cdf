#![no_std]

use core::fmt;

pub use self::convert::{Converted, TypeCode};
pub use self::flags::Octobool;
pub use self::numeral::{Invariant, NumeralFormat, NUMERAL_CAPACITY};

pub mod convert;
pub mod flags;
pub mod numeral;

pub type OctoboolResult<T> = Result<T, OctoboolError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OctoboolError {
    /// An index or selector outside `0..=7`. `None` when the input did not even fit an `i64`.
    IndexOutOfRange { index: Option<i64> },
    UnsupportedConversion { to: TypeCode },
    TypeMismatch,
    InvalidNumeral,
}

impl fmt::Display for OctoboolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OctoboolError::IndexOutOfRange { index: Some(index) } => {
                write!(f, "index {} out of range, must be between 0 and 7", index)
            }
            OctoboolError::IndexOutOfRange { index: None } => {
                write!(f, "index out of range, must be between 0 and 7")
            }
            OctoboolError::UnsupportedConversion { to } => {
                write!(f, "cannot convert from Octobool to {:?}", to)
            }
            OctoboolError::TypeMismatch => write!(f, "argument must be an Octobool"),
            OctoboolError::InvalidNumeral => write!(f, "not a decimal numeral between 0 and 255"),
        }
    }
}
