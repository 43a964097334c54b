use crate::bits::number_of_leading_zeros;
use crate::digits::{DIGIT_ONES, DIGIT_TENS, DIGITS, is_valid_radix, string_size};
use num_traits::{AsPrimitive, PrimInt, Signed};

// ═══════════════════════════════════════════════════════════════════════════════
// Signed formatting
// ═══════════════════════════════════════════════════════════════════════════════

/// Decimal representation of `i`.
pub fn to_string(i: i32) -> String {
    if i == i32::MIN {
        return "-2147483648".to_string();
    }
    let size = if i < 0 { string_size(-i) + 1 } else { string_size(i) };
    let mut buf = vec![0u8; size];
    get_chars(i, &mut buf);
    ascii(&buf)
}

/// Representation of `i` in `radix`, lowercase, `-` prefixed when negative.
///
/// A radix outside `[2, 36]` is replaced by 10. Parsing rejects such a radix
/// instead; see [`crate::parse_int_radix`].
pub fn to_string_radix(i: i32, radix: i32) -> String {
    let radix = if is_valid_radix(radix) { radix } else { 10 };
    if radix == 10 {
        return to_string(i);
    }
    format_signed(i, radix)
}

/// Representation of a 64-bit `i` in `radix`, with the same radix fallback as
/// [`to_string_radix`].
pub fn format_i64_radix(i: i64, radix: i32) -> String {
    format_signed(i, radix)
}

/// Radix-generic formatter for any signed primitive width.
///
/// Digits are produced from the negated magnitude so that the minimum value
/// of `T` needs no special case.
pub(crate) fn format_signed<T>(value: T, radix: i32) -> String
where
    T: PrimInt + Signed + AsPrimitive<usize> + 'static,
    i32: AsPrimitive<T>,
{
    let radix = if is_valid_radix(radix) { radix } else { 10 };
    let radix_t: T = radix.as_();

    // 64 digits plus sign covers i64::MIN in radix 2.
    let mut buf = [0u8; 65];
    let mut pos = buf.len();
    let negative = value < T::zero();
    let mut i = if negative { value } else { -value };

    while i <= -radix_t {
        pos -= 1;
        buf[pos] = DIGITS[AsPrimitive::<usize>::as_(-(i % radix_t))];
        i = i / radix_t;
    }
    pos -= 1;
    buf[pos] = DIGITS[AsPrimitive::<usize>::as_(-i)];

    if negative {
        pos -= 1;
        buf[pos] = b'-';
    }
    ascii(&buf[pos..])
}

// ═══════════════════════════════════════════════════════════════════════════════
// Decimal fast path
// ═══════════════════════════════════════════════════════════════════════════════

/// Writes the decimal digits of `i` into `buf`, right aligned, back to front.
/// `buf.len()` must be exactly the output length; `i` must not be `i32::MIN`.
fn get_chars(i: i32, buf: &mut [u8]) {
    let mut pos = buf.len();
    let negative = i < 0;
    let mut i = if negative { -i } else { i };

    // Two digits per iteration. q = i / 100 via the u32 reciprocal 2^37 / 100,
    // exact for every u32; r = i - q * 100 via shifts.
    while i >= 65536 {
        let q = ((i as u64 * 0x51eb_851f) >> 37) as i32;
        let r = (i - ((q << 6) + (q << 5) + (q << 2))) as usize;
        i = q;
        pos -= 1;
        buf[pos] = DIGIT_ONES[r];
        pos -= 1;
        buf[pos] = DIGIT_TENS[r];
    }

    // One digit per iteration. 52429 / 2^19 approximates 1/10 exactly for
    // i < 65536; the product fits in a u32.
    loop {
        let q = ((i as u32 * 52429) >> (16 + 3)) as i32;
        let r = i - ((q << 3) + (q << 1));
        pos -= 1;
        buf[pos] = DIGITS[r as usize];
        i = q;
        if i == 0 {
            break;
        }
    }

    if negative {
        pos -= 1;
        buf[pos] = b'-';
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Power-of-two unsigned formatting
// ═══════════════════════════════════════════════════════════════════════════════

/// Unsigned base-2 representation of the bit pattern of `i`.
pub fn to_binary_string(i: i32) -> String {
    to_unsigned_string_shift(i, 1)
}

/// Unsigned base-8 representation of the bit pattern of `i`.
pub fn to_octal_string(i: i32) -> String {
    to_unsigned_string_shift(i, 3)
}

/// Unsigned base-16 representation of the bit pattern of `i`.
pub fn to_hex_string(i: i32) -> String {
    to_unsigned_string_shift(i, 4)
}

fn to_unsigned_string_shift(val: i32, shift: u32) -> String {
    debug_assert!((1..=5).contains(&shift), "illegal shift value {shift}");
    let mag = i32::BITS - number_of_leading_zeros(val);
    let chars = ((mag + (shift - 1)) / shift).max(1) as usize;
    let mut buf = vec![0u8; chars];
    format_unsigned_int(val, shift, &mut buf);
    ascii(&buf)
}

/// Fills `buf` from the end with digits of radix `1 << shift`, stopping when
/// the value is exhausted or the buffer is full.
fn format_unsigned_int(val: i32, shift: u32, buf: &mut [u8]) {
    let mask = (1u32 << shift) - 1;
    let mut val = val as u32;
    let mut pos = buf.len();
    loop {
        pos -= 1;
        buf[pos] = DIGITS[(val & mask) as usize];
        val >>= shift;
        if val == 0 || pos == 0 {
            break;
        }
    }
}

fn ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_fast_path_boundaries() {
        for v in [0, 9, 10, 99, 100, 65535, 65536, 65537, 99_999, 1_000_000, 999_999_999, 1_000_000_000, i32::MAX] {
            assert_eq!(to_string(v), v.to_string());
            assert_eq!(to_string(-v), (-v).to_string());
        }
        assert_eq!(to_string(i32::MIN), "-2147483648");
    }

    #[test]
    fn test_decimal_fast_path_dense_low_range() {
        for v in -70_000..70_000 {
            assert_eq!(to_string(v), v.to_string());
        }
    }

    #[test]
    fn test_generic_formatter_widths() {
        assert_eq!(format_signed(i64::MIN, 2), format!("-1{}", "0".repeat(63)));
        assert_eq!(format_signed(i64::MAX, 10), i64::MAX.to_string());
        assert_eq!(format_signed(i8::MIN, 16), "-80");
        assert_eq!(format_signed(-255i32, 16), "-ff");
    }

    #[test]
    fn test_shift_formatting() {
        assert_eq!(to_binary_string(0), "0");
        assert_eq!(to_binary_string(10), "1010");
        assert_eq!(to_octal_string(8), "10");
        assert_eq!(to_hex_string(255), "ff");
        assert_eq!(to_hex_string(-1), "ffffffff");
        assert_eq!(to_octal_string(-1), "37777777777");
        assert_eq!(to_binary_string(i32::MIN), format!("1{}", "0".repeat(31)));
    }
}
