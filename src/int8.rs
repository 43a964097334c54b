use crate::cache::byte_cache;
use crate::error::NumberError;
use crate::number::Number;
use crate::{decode, format, out_of_range, parse};
use num_traits::ToPrimitive;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// An immutable 8-bit two's-complement integer. Every value is cached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int8 {
    value: i8,
}

impl Int8 {
    pub const MIN_VALUE: i8 = i8::MIN;
    pub const MAX_VALUE: i8 = i8::MAX;
    pub const SIZE: u32 = 8;
    pub const BYTES: u32 = Self::SIZE / 8;

    pub const fn new(value: i8) -> Self {
        Int8 { value }
    }

    pub const fn get(self) -> i8 {
        self.value
    }

    /// The shared instance for `b`.
    pub fn value_of(b: i8) -> Arc<Int8> {
        byte_cache().get(b)
    }

    pub fn value_of_str(s: &str) -> Result<Arc<Int8>, NumberError> {
        Self::value_of_str_radix(s, 10)
    }

    pub fn value_of_str_radix(s: &str, radix: i32) -> Result<Arc<Int8>, NumberError> {
        Self::parse_byte_radix(s, radix).map(Self::value_of)
    }

    pub fn parse_byte(s: &str) -> Result<i8, NumberError> {
        Self::parse_byte_radix(s, 10)
    }

    /// Parses `s` as a 32-bit integer in `radix`, then checks it fits in 8 bits.
    pub fn parse_byte_radix(s: &str, radix: i32) -> Result<i8, NumberError> {
        let i = parse::parse_int_radix(s, radix)?;
        i8::try_from(i).map_err(|_| out_of_range!(s, radix))
    }

    /// Decodes a prefixed literal as for `Int32`, then checks it fits in 8 bits.
    pub fn decode(nm: &str) -> Result<Arc<Int8>, NumberError> {
        let i = decode::decode(nm)?;
        let b = i8::try_from(i).map_err(|_| out_of_range!(nm, 10))?;
        Ok(Self::value_of(b))
    }

    /// Difference `x - y`, widened so it cannot overflow.
    pub fn compare(x: i8, y: i8) -> i32 {
        x as i32 - y as i32
    }

    pub fn compare_to(&self, other: &Int8) -> i32 {
        Self::compare(self.value, other.value)
    }

    pub fn hash_code(value: i8) -> i32 {
        value as i32
    }

    /// Zero-extends the bit pattern of `x`.
    pub fn to_unsigned_int(x: i8) -> i32 {
        (x as i32) & 0xff
    }

    /// Zero-extends the bit pattern of `x`.
    pub fn to_unsigned_long(x: i8) -> i64 {
        (x as i64) & 0xff
    }
}

impl From<i8> for Int8 {
    fn from(value: i8) -> Self {
        Int8::new(value)
    }
}

impl From<Int8> for i8 {
    fn from(value: Int8) -> Self {
        value.value
    }
}

impl fmt::Display for Int8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format::to_string(self.value as i32))
    }
}

impl FromStr for Int8 {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Int8::parse_byte(s).map(Int8::new)
    }
}

impl Number for Int8 {
    fn int_value(&self) -> i32 {
        self.value as i32
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

    fn byte_value(&self) -> i8 {
        self.value
    }
}

impl ToPrimitive for Int8 {
    fn to_i64(&self) -> Option<i64> {
        Some(self.value as i64)
    }

    fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }
}
