use crate::digits::{digit, is_valid_radix};
use crate::error::NumberError;
use crate::{malformed, out_of_range};
use num_traits::{AsPrimitive, PrimInt, Signed};

/// Parses a signed decimal integer.
pub fn parse_int(s: &str) -> Result<i32, NumberError> {
    parse_int_radix(s, 10)
}

/// Parses a signed integer in `radix`.
///
/// Accepts an optional leading `+` or `-` followed by at least one digit of
/// `radix`; letters are case-insensitive. Fails with
/// [`NumberError::InvalidRadix`] when `radix` is outside `[2, 36]`,
/// [`NumberError::MalformedNumber`] on bad syntax and
/// [`NumberError::OutOfRange`] when the value does not fit in an `i32`.
pub fn parse_int_radix(s: &str, radix: i32) -> Result<i32, NumberError> {
    parse_signed(s, radix).inspect_err(|e| log::trace!("parse_int_radix({s:?}, {radix}) failed: {e}"))
}

/// Parses a signed decimal 64-bit integer.
pub fn parse_long(s: &str) -> Result<i64, NumberError> {
    parse_long_radix(s, 10)
}

/// Parses a signed 64-bit integer in `radix`, see [`parse_int_radix`].
pub fn parse_long_radix(s: &str, radix: i32) -> Result<i64, NumberError> {
    parse_signed(s, radix).inspect_err(|e| log::trace!("parse_long_radix({s:?}, {radix}) failed: {e}"))
}

/// Radix-generic parser for any signed primitive width.
///
/// The running total is kept negative so that `T::min_value()`, which has no
/// positive counterpart, is reachable. Overflow is detected before each
/// multiply and before each subtract.
pub(crate) fn parse_signed<T>(s: &str, radix: i32) -> Result<T, NumberError>
where
    T: PrimInt + Signed + 'static,
    i32: AsPrimitive<T>,
    u32: AsPrimitive<T>,
{
    if !is_valid_radix(radix) {
        return Err(NumberError::InvalidRadix { radix });
    }
    let Some(first) = s.chars().next() else {
        return Err(malformed!(s, "empty input"));
    };

    let mut negative = false;
    let mut limit = -T::max_value();
    let mut digits = s;
    if first < '0' {
        match first {
            '-' => {
                negative = true;
                limit = T::min_value();
            }
            '+' => {}
            _ => return Err(malformed!(s, "unexpected leading character")),
        }
        digits = &s[1..];
        if digits.is_empty() {
            return Err(malformed!(s, "lone sign"));
        }
    }

    let radix_t: T = radix.as_();
    let multmin = limit / radix_t;
    let mut result = T::zero();
    for ch in digits.chars() {
        let Some(d) = digit(ch, radix) else {
            return Err(malformed!(s, "invalid digit for radix"));
        };
        let d: T = d.as_();
        if result < multmin {
            return Err(out_of_range!(s, radix));
        }
        result = result * radix_t;
        if result < limit + d {
            return Err(out_of_range!(s, radix));
        }
        result = result - d;
    }
    Ok(if negative { result } else { -result })
}
