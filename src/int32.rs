use crate::cache::integer_cache;
use crate::error::NumberError;
use crate::number::Number;
use crate::{decode, format, parse, unsigned};
use num_traits::ToPrimitive;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// An immutable 32-bit two's-complement integer.
///
/// `Int32::new` always builds a plain value. [`Int32::value_of`] is the
/// canonicalizing factory: it hands out shared instances for small values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int32 {
    value: i32,
}

impl Int32 {
    pub const MIN_VALUE: i32 = i32::MIN;
    pub const MAX_VALUE: i32 = i32::MAX;
    /// Width in bits.
    pub const SIZE: u32 = 32;
    /// Width in bytes.
    pub const BYTES: u32 = Self::SIZE / 8;

    pub const fn new(value: i32) -> Self {
        Int32 { value }
    }

    pub const fn get(self) -> i32 {
        self.value
    }

    /// Shared instance for `i` when it lies in the cache range, otherwise a
    /// new one.
    pub fn value_of(i: i32) -> Arc<Int32> {
        integer_cache().canonicalize(i)
    }

    /// Parses decimal `s`, then canonicalizes.
    pub fn value_of_str(s: &str) -> Result<Arc<Int32>, NumberError> {
        Self::value_of_str_radix(s, 10)
    }

    /// Parses `s` in `radix`, then canonicalizes.
    pub fn value_of_str_radix(s: &str, radix: i32) -> Result<Arc<Int32>, NumberError> {
        parse::parse_int_radix(s, radix).map(Self::value_of)
    }

    /// Decodes a prefixed literal (see [`decode::decode`]), then canonicalizes.
    pub fn decode(nm: &str) -> Result<Arc<Int32>, NumberError> {
        decode::decode(nm).map(Self::value_of)
    }

    pub fn parse_int(s: &str) -> Result<i32, NumberError> {
        parse::parse_int(s)
    }

    pub fn parse_int_radix(s: &str, radix: i32) -> Result<i32, NumberError> {
        parse::parse_int_radix(s, radix)
    }

    /// Parses an unsigned decimal value and returns its bit pattern.
    pub fn parse_unsigned_int(s: &str) -> Result<i32, NumberError> {
        Self::parse_unsigned_int_radix(s, 10)
    }

    /// Parses an unsigned value and returns its bit pattern.
    pub fn parse_unsigned_int_radix(s: &str, radix: i32) -> Result<i32, NumberError> {
        unsigned::parse_unsigned_int_radix(s, radix).map(|v| v as i32)
    }

    pub fn to_string_radix(i: i32, radix: i32) -> String {
        format::to_string_radix(i, radix)
    }

    /// -1, 0 or 1 as `x` is less than, equal to or greater than `y`.
    pub fn compare(x: i32, y: i32) -> i32 {
        if x < y {
            -1
        } else if x == y {
            0
        } else {
            1
        }
    }

    pub fn compare_unsigned(x: i32, y: i32) -> i32 {
        unsigned::compare_unsigned(x, y)
    }

    pub fn compare_to(&self, other: &Int32) -> i32 {
        Self::compare(self.value, other.value)
    }

    pub fn hash_code(value: i32) -> i32 {
        value
    }

    pub fn sum(a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }

    pub fn max(a: i32, b: i32) -> i32 {
        std::cmp::max(a, b)
    }

    pub fn min(a: i32, b: i32) -> i32 {
        std::cmp::min(a, b)
    }
}

impl From<i32> for Int32 {
    fn from(value: i32) -> Self {
        Int32::new(value)
    }
}

impl From<Int32> for i32 {
    fn from(value: Int32) -> Self {
        value.value
    }
}

impl fmt::Display for Int32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format::to_string(self.value))
    }
}

impl FromStr for Int32 {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_int(s).map(Int32::new)
    }
}

impl Number for Int32 {
    fn int_value(&self) -> i32 {
        self.value
    }

    fn long_value(&self) -> i64 {
        self.value as i64
    }

    fn float_value(&self) -> f32 {
        self.value as f32
    }

    fn double_value(&self) -> f64 {
        self.value as f64
    }
}

impl ToPrimitive for Int32 {
    fn to_i64(&self) -> Option<i64> {
        Some(self.value as i64)
    }

    fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }

    fn to_i32(&self) -> Option<i32> {
        Some(self.value)
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.value as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_and_hash() {
        assert_eq!(Int32::compare(1, 2), -1);
        assert_eq!(Int32::compare(2, 2), 0);
        assert_eq!(Int32::compare(i32::MAX, i32::MIN), 1);
        assert_eq!(Int32::new(5).compare_to(&Int32::new(-5)), 1);
        assert_eq!(Int32::hash_code(-42), -42);
        assert_eq!(Int32::sum(i32::MAX, 1), i32::MIN);
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(Int32::new(i32::MIN).to_string(), "-2147483648");
        assert_eq!(format!("{:>5}", Int32::new(42)), "   42");
        assert_eq!("-17".parse::<Int32>(), Ok(Int32::new(-17)));
        assert!("0x11".parse::<Int32>().is_err());
    }

    #[test]
    fn test_number_conversions() {
        let v = Int32::new(0x1234_5678);
        assert_eq!(v.byte_value(), 0x78);
        assert_eq!(v.short_value(), 0x5678);
        assert_eq!(v.long_value(), 0x1234_5678);
        assert_eq!(Int32::new(-1).to_u64(), None);
        assert_eq!(Int32::new(-1).to_i8(), Some(-1));
        assert_eq!(Int32::new(300).to_u8(), None);
    }

    #[test]
    fn test_parse_unsigned_int_bit_pattern() {
        assert_eq!(Int32::parse_unsigned_int("4294967295"), Ok(-1));
        assert_eq!(Int32::parse_unsigned_int("+2147483648"), Ok(i32::MIN));
        assert_eq!(Int32::parse_unsigned_int("42"), Ok(42));
        assert!(matches!(Int32::parse_unsigned_int("-1"), Err(NumberError::MalformedNumber { .. })));
        assert!(matches!(Int32::parse_unsigned_int("4294967296"), Err(NumberError::OutOfRange { .. })));
        assert_eq!(Int32::parse_unsigned_int_radix("ffffffff", 16), Ok(-1));
    }
}
