use heapless::String;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{NumCast, PrimInt, ToPrimitive};

use crate::{Octobool, OctoboolError, OctoboolResult, NUMERAL_CAPACITY};

/// Conversion targets reachable through [`Octobool::to_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum TypeCode {
    Boolean = 3,
    Char = 4,
    SByte = 5,
    Byte = 6,
    Int16 = 7,
    UInt16 = 8,
    Int32 = 9,
    UInt32 = 10,
    Int64 = 11,
    UInt64 = 12,
    Single = 13,
    Double = 14,
    Decimal = 15,
    DateTime = 16,
    String = 18,
}

/// The result of [`Octobool::to_type`].
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    Boolean(bool),
    Char(char),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Single(f32),
    Double(f64),
    Decimal(f64),
    String(String<NUMERAL_CAPACITY>),
}

impl Octobool {
    /// The storage type, as seen by [`Octobool::to_type`].
    pub fn type_code(&self) -> TypeCode {
        TypeCode::Byte
    }

    /// Converts the packed byte into any numeric type. `None` if `T` cannot hold it.
    pub fn to_numeral<T: NumCast>(&self) -> Option<T> {
        <T as NumCast>::from(self.values())
    }

    /// Reads the flag under the selector.
    pub fn to_bool(&self) -> bool {
        self.current()
    }

    /// Same as [`Octobool::get_at`], including moving the selector.
    pub fn to_bool_at(&mut self, index: impl PrimInt) -> OctoboolResult<bool> {
        self.get_at(index)
    }

    /// Only succeeds when the numeral is a single digit, i.e. for values `0..=9`.
    pub fn to_char(&self) -> OctoboolResult<char> {
        let numeral = self.to_numeral_string();
        let mut chars = numeral.chars();
        match (chars.next(), chars.next()) {
            (Some(digit), None) => Ok(digit),
            _ => Err(OctoboolError::UnsupportedConversion { to: TypeCode::Char }),
        }
    }

    /// There is no date or time an `Octobool` stands for; this always fails.
    pub fn to_date_time<T>(&self) -> OctoboolResult<T> {
        Err(OctoboolError::UnsupportedConversion {
            to: TypeCode::DateTime,
        })
    }

    pub fn to_type(&self, code: TypeCode) -> OctoboolResult<Converted> {
        let converted = match code {
            TypeCode::Boolean => Converted::Boolean(self.to_bool()),
            TypeCode::Char => Converted::Char(self.to_char()?),
            TypeCode::SByte => Converted::SByte(self.numeral_or_unsupported(code)?),
            TypeCode::Byte => Converted::Byte(self.values()),
            TypeCode::Int16 => Converted::Int16(self.into()),
            TypeCode::UInt16 => Converted::UInt16(self.into()),
            TypeCode::Int32 => Converted::Int32(self.into()),
            TypeCode::UInt32 => Converted::UInt32(self.into()),
            TypeCode::Int64 => Converted::Int64(self.into()),
            TypeCode::UInt64 => Converted::UInt64(self.into()),
            TypeCode::Single => Converted::Single(self.into()),
            TypeCode::Double => Converted::Double(self.into()),
            TypeCode::Decimal => Converted::Decimal(self.into()),
            TypeCode::DateTime => return self.to_date_time(),
            TypeCode::String => Converted::String(self.to_numeral_string()),
        };
        Ok(converted)
    }

    #[inline(always)]
    fn numeral_or_unsupported<T: NumCast>(&self, to: TypeCode) -> OctoboolResult<T> {
        self.to_numeral()
            .ok_or(OctoboolError::UnsupportedConversion { to })
    }
}

impl ToPrimitive for Octobool {
    fn to_i64(&self) -> Option<i64> {
        Some(self.values().into())
    }

    fn to_u64(&self) -> Option<u64> {
        Some(self.values().into())
    }

    fn to_u8(&self) -> Option<u8> {
        Some(self.values())
    }
}

macro_rules! impl_widening {
    ($($ty:ty),*) => {
        $(
            impl From<Octobool> for $ty {
                fn from(flags: Octobool) -> $ty {
                    flags.values().into()
                }
            }

            impl From<&Octobool> for $ty {
                fn from(flags: &Octobool) -> $ty {
                    flags.values().into()
                }
            }
        )*
    };
}

impl_widening!(u8, u16, u32, u64, u128, i16, i32, i64, i128, f32, f64);

impl TryFrom<Octobool> for i8 {
    type Error = OctoboolError;

    fn try_from(flags: Octobool) -> Result<Self, Self::Error> {
        flags.numeral_or_unsupported(TypeCode::SByte)
    }
}

#[cfg(test)]
mod tests {
    use num_traits::FromPrimitive;

    use super::*;

    #[test]
    fn widening_preserves_value() {
        let flags = Octobool::from(200);
        let byte: u8 = flags.into();
        let wide: u16 = flags.into();
        let signed: i16 = flags.into();
        let long: u64 = flags.into();
        let huge: i128 = flags.into();
        let single: f32 = flags.into();
        let double: f64 = (&flags).into();
        assert_eq!(byte, 200);
        assert_eq!(wide, 200);
        assert_eq!(signed, 200);
        assert_eq!(long, 200);
        assert_eq!(huge, 200);
        assert_eq!(single, 200.0);
        assert_eq!(double, 200.0);
    }

    #[test]
    fn generic_numeral() {
        let flags = Octobool::from(200);
        assert_eq!(flags.to_numeral::<u32>(), Some(200));
        assert_eq!(flags.to_numeral::<f64>(), Some(200.0));
        assert_eq!(flags.to_numeral::<i8>(), None);
        assert_eq!(Octobool::from(100).to_numeral::<i8>(), Some(100));
        assert_eq!(flags.to_i32(), Some(200));
        assert_eq!(flags.to_i8(), None);
    }

    #[test]
    fn narrowing_to_i8() {
        assert_eq!(i8::try_from(Octobool::from(127)), Ok(127));
        assert_eq!(
            i8::try_from(Octobool::from(128)),
            Err(OctoboolError::UnsupportedConversion { to: TypeCode::SByte })
        );
        assert_eq!(
            Octobool::from(200).to_type(TypeCode::SByte),
            Err(OctoboolError::UnsupportedConversion { to: TypeCode::SByte })
        );
        assert_eq!(Octobool::from(127).to_type(TypeCode::SByte), Ok(Converted::SByte(127)));
    }

    #[test]
    fn bool_follows_selector() {
        let mut flags = Octobool::from(0b0000_0100);
        assert!(!flags.to_bool());
        assert_eq!(flags.to_bool_at(2), Ok(true));
        assert_eq!(flags.selector(), 2);
        assert!(flags.to_bool());
        assert_eq!(
            flags.to_bool_at(8),
            Err(OctoboolError::IndexOutOfRange { index: Some(8) })
        );
        assert_eq!(flags.selector(), 2);
    }

    #[test]
    fn single_digit_char() {
        assert_eq!(Octobool::from(7).to_char(), Ok('7'));
        assert_eq!(Octobool::from(0).to_char(), Ok('0'));
        assert_eq!(Octobool::from(9).to_char(), Ok('9'));
        assert_eq!(
            Octobool::from(10).to_char(),
            Err(OctoboolError::UnsupportedConversion { to: TypeCode::Char })
        );
        assert_eq!(
            Octobool::from(42).to_char(),
            Err(OctoboolError::UnsupportedConversion { to: TypeCode::Char })
        );
    }

    #[test]
    fn date_time_never_converts() {
        for value in [0u8, 1, 255] {
            assert_eq!(
                Octobool::from(value).to_date_time::<u64>(),
                Err(OctoboolError::UnsupportedConversion { to: TypeCode::DateTime })
            );
        }
    }

    #[test]
    fn to_type_dispatch() {
        let flags = Octobool::from(5);
        assert_eq!(flags.type_code(), TypeCode::Byte);
        assert_eq!(flags.to_type(TypeCode::Boolean), Ok(Converted::Boolean(true)));
        assert_eq!(flags.to_type(TypeCode::Char), Ok(Converted::Char('5')));
        assert_eq!(flags.to_type(TypeCode::SByte), Ok(Converted::SByte(5)));
        assert_eq!(flags.to_type(TypeCode::Byte), Ok(Converted::Byte(5)));
        assert_eq!(flags.to_type(TypeCode::Int64), Ok(Converted::Int64(5)));
        assert_eq!(flags.to_type(TypeCode::Double), Ok(Converted::Double(5.0)));
        assert_eq!(flags.to_type(TypeCode::Decimal), Ok(Converted::Decimal(5.0)));
        assert_eq!(
            flags.to_type(TypeCode::String),
            Ok(Converted::String(flags.to_numeral_string()))
        );
        assert_eq!(
            flags.to_type(TypeCode::DateTime),
            Err(OctoboolError::UnsupportedConversion { to: TypeCode::DateTime })
        );
        assert_eq!(
            Octobool::from(42).to_type(TypeCode::Char),
            Err(OctoboolError::UnsupportedConversion { to: TypeCode::Char })
        );
    }

    #[test]
    fn type_code_from_raw() {
        assert_eq!(TypeCode::from_u8(6), Some(TypeCode::Byte));
        assert_eq!(TypeCode::from_i32(16), Some(TypeCode::DateTime));
        assert_eq!(TypeCode::from_u8(17), None);
        assert_eq!(TypeCode::String.to_u8(), Some(18));
    }
}
