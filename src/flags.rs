use core::any::Any;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use num_traits::{PrimInt, ToPrimitive};

use crate::{OctoboolError, OctoboolResult};

pub const BIT_COUNT: u8 = 8;

/// Eight booleans packed into one byte, plus a cursor ("selector") pointing at one of them.
///
/// Bit `i` (LSB first) holds flag `i`. The selector is not part of the value's identity:
/// equality, ordering and hashing only look at the packed byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct Octobool {
    values: u8,
    // Holds the index, not a mask
    selector: u8,
}

impl Octobool {
    #[allow(clippy::too_many_arguments)]
    pub fn new(a: bool, b: bool, c: bool, d: bool, e: bool, f: bool, g: bool, h: bool) -> Self {
        let values = [a, b, c, d, e, f, g, h]
            .iter()
            .enumerate()
            .fold(0u8, |acc, (index, &flag)| acc | ((flag as u8) << index));
        Self { values, selector: 0 }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn values(&self) -> u8 {
        self.values
    }

    pub fn selector(&self) -> u8 {
        self.selector
    }

    /// Moves the selector to `index` and returns the flag found there.
    ///
    /// Only integers are accepted as an index:
    ///
    /// ```compile_fail
    /// let mut flags = octobool::Octobool::from(0b1000_0000);
    /// flags.get_at(7.9);
    /// ```
    pub fn get_at(&mut self, index: impl PrimInt) -> OctoboolResult<bool> {
        self.set_selector(index)?;
        Ok(self.current())
    }

    /// Overwrites the flag at `index`. The selector stays where it is.
    ///
    /// ```compile_fail
    /// let mut flags = octobool::Octobool::zero();
    /// flags.set_at(octobool::Octobool::from(2), true);
    /// ```
    pub fn set_at(&mut self, index: impl PrimInt, value: bool) -> OctoboolResult<&mut Self> {
        let index = check_index(index)?;
        self.values &= !(1 << index);
        self.values |= (value as u8) << index;
        Ok(self)
    }

    pub fn set_selector(&mut self, index: impl PrimInt) -> OctoboolResult<()> {
        self.selector = check_index(index)?;
        Ok(())
    }

    pub fn current(&self) -> bool {
        self.bit(self.selector)
    }

    /// Returns the current flag, then moves the selector forward (wrapping 7 -> 0).
    pub fn increment(&mut self) -> bool {
        let prev = self.current();
        self.selector = (self.selector + 1) % BIT_COUNT;
        prev
    }

    /// Returns the current flag, then moves the selector backward (wrapping 0 -> 7).
    pub fn decrement(&mut self) -> bool {
        let prev = self.current();
        self.selector = (self.selector + BIT_COUNT - 1) % BIT_COUNT;
        prev
    }

    /// Moves the selector forward, then returns the flag at the new position.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        self.increment();
        self.current()
    }

    /// Moves the selector backward, then returns the flag at the new position.
    pub fn previous(&mut self) -> bool {
        self.decrement();
        self.current()
    }

    /// Compares against a dynamically typed value. A missing value sorts before any `Octobool`.
    pub fn compare_any(&self, other: Option<&dyn Any>) -> OctoboolResult<Ordering> {
        let Some(other) = other else {
            return Ok(Ordering::Greater);
        };
        other
            .downcast_ref::<Octobool>()
            .map(|other| self.cmp(other))
            .ok_or(OctoboolError::TypeMismatch)
    }

    #[inline(always)]
    fn bit(&self, index: u8) -> bool {
        (self.values >> index) & 1 != 0
    }
}

#[inline(always)]
fn check_index(index: impl PrimInt) -> OctoboolResult<u8> {
    match index.to_u8() {
        Some(checked) if checked < BIT_COUNT => Ok(checked),
        _ => Err(OctoboolError::IndexOutOfRange {
            index: index.to_i64(),
        }),
    }
}

impl PartialEq for Octobool {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for Octobool {}

impl Hash for Octobool {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl PartialOrd for Octobool {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Octobool {
    fn cmp(&self, other: &Self) -> Ordering {
        self.values.cmp(&other.values)
    }
}

impl From<u8> for Octobool {
    fn from(values: u8) -> Self {
        Self { values, selector: 0 }
    }
}
