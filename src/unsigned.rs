// Operations that read an i32 bit pattern as an unsigned 32-bit value. Parsing
// and formatting go through the signed 64-bit routines, where every u32 is a
// non-negative value.

use crate::error::NumberError;
use crate::format::format_signed;
use crate::parse::parse_signed;
use crate::{malformed, out_of_range};

/// Zero-extends the bit pattern of `x`.
pub fn to_unsigned_long(x: i32) -> i64 {
    (x as i64) & 0xffff_ffff
}

/// Compares two bit patterns as unsigned values; -1, 0 or 1.
pub fn compare_unsigned(x: i32, y: i32) -> i32 {
    crate::Int32::compare(x.wrapping_add(i32::MIN), y.wrapping_add(i32::MIN))
}

/// Unsigned quotient of two bit patterns.
pub fn divide_unsigned(dividend: i32, divisor: i32) -> Result<i32, NumberError> {
    if divisor == 0 {
        return Err(NumberError::DivideByZero);
    }
    Ok((to_unsigned_long(dividend) / to_unsigned_long(divisor)) as i32)
}

/// Unsigned remainder of two bit patterns.
pub fn remainder_unsigned(dividend: i32, divisor: i32) -> Result<i32, NumberError> {
    if divisor == 0 {
        return Err(NumberError::DivideByZero);
    }
    Ok((to_unsigned_long(dividend) % to_unsigned_long(divisor)) as i32)
}

/// Parses an unsigned decimal integer.
pub fn parse_unsigned_int(s: &str) -> Result<u32, NumberError> {
    parse_unsigned_int_radix(s, 10)
}

/// Parses an unsigned integer in `radix`.
///
/// A leading `+` is accepted, a leading `-` is not. Inputs too short to
/// overflow an `i32` go through the 32-bit parser; longer ones are parsed as
/// `i64` and must fit in 32 unsigned bits.
pub fn parse_unsigned_int_radix(s: &str, radix: i32) -> Result<u32, NumberError> {
    let len = s.len();
    match s.as_bytes().first() {
        None => Err(malformed!(s, "empty input")),
        Some(b'-') => Err(malformed!(s, "illegal leading minus sign on unsigned string")),
        // i32::MAX has 6 digits in radix 36 and 10 in radix 10.
        Some(_) if len <= 5 || (radix == 10 && len <= 9) => parse_signed::<i32>(s, radix).map(|v| v as u32),
        Some(_) => {
            let ell = parse_signed::<i64>(s, radix)?;
            if (ell as u64) & 0xffff_ffff_0000_0000 == 0 {
                Ok(ell as u32)
            } else {
                Err(out_of_range!(s, radix))
            }
        }
    }
}

/// Unsigned decimal representation of the bit pattern of `i`.
pub fn to_unsigned_string(i: i32) -> String {
    format_signed(to_unsigned_long(i), 10)
}

/// Unsigned representation of the bit pattern of `i` in `radix`; a radix
/// outside `[2, 36]` is replaced by 10.
pub fn to_unsigned_string_radix(i: i32, radix: i32) -> String {
    format_signed(to_unsigned_long(i), radix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_parse_thresholds() {
        assert_eq!(parse_unsigned_int("4294967295"), Ok(u32::MAX));
        assert_eq!(parse_unsigned_int("2147483648"), Ok(1 << 31));
        assert_eq!(parse_unsigned_int("+123"), Ok(123));
        assert_eq!(parse_unsigned_int_radix("ffffffff", 16), Ok(u32::MAX));
        assert_eq!(parse_unsigned_int_radix("1z141z3", 36), Ok(u32::MAX));
        assert!(matches!(parse_unsigned_int("4294967296"), Err(NumberError::OutOfRange { .. })));
        assert!(matches!(parse_unsigned_int_radix("100000000", 16), Err(NumberError::OutOfRange { .. })));
        assert!(matches!(parse_unsigned_int("-1"), Err(NumberError::MalformedNumber { .. })));
        assert!(matches!(parse_unsigned_int(""), Err(NumberError::MalformedNumber { .. })));
        assert_eq!(parse_unsigned_int_radix("11", 99), Err(NumberError::InvalidRadix { radix: 99 }));
    }

    #[test]
    fn test_unsigned_arithmetic() {
        assert_eq!(to_unsigned_long(-1), 0xffff_ffff);
        assert_eq!(compare_unsigned(-1, 1), 1);
        assert_eq!(compare_unsigned(1, -1), -1);
        assert_eq!(compare_unsigned(7, 7), 0);
        assert_eq!(divide_unsigned(-1, 2), Ok(i32::MAX));
        assert_eq!(remainder_unsigned(-1, 16), Ok(15));
        assert_eq!(divide_unsigned(1, 0), Err(NumberError::DivideByZero));
        assert_eq!(remainder_unsigned(1, 0), Err(NumberError::DivideByZero));
    }

    #[test]
    fn test_unsigned_formatting() {
        assert_eq!(to_unsigned_string(-1), "4294967295");
        assert_eq!(to_unsigned_string(i32::MIN), "2147483648");
        assert_eq!(to_unsigned_string_radix(-6, 2), "11111111111111111111111111111010");
        assert_eq!(to_unsigned_string_radix(-1, 36), "1z141z3");
        assert_eq!(to_unsigned_string_radix(255, 99), "255");
    }
}
