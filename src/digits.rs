/// Smallest radix accepted by the codec.
pub const MIN_RADIX: i32 = 2;

/// Largest radix accepted by the codec.
pub const MAX_RADIX: i32 = 36;

/// Digit value to its canonical lowercase character.
pub(crate) static DIGITS: [u8; 36] = *b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Tens character of every two-digit remainder `r` in `[0, 99]`.
pub(crate) static DIGIT_TENS: [u8; 100] = two_digit_table(true);

/// Ones character of every two-digit remainder `r` in `[0, 99]`.
pub(crate) static DIGIT_ONES: [u8; 100] = two_digit_table(false);

const fn two_digit_table(tens: bool) -> [u8; 100] {
    let mut table = [0u8; 100];
    let mut r = 0;
    while r < 100 {
        table[r] = if tens { b'0' + (r / 10) as u8 } else { b'0' + (r % 10) as u8 };
        r += 1;
    }
    table
}

// Largest value with `index + 1` decimal digits.
static SIZE_TABLE: [i32; 10] = [9, 99, 999, 9_999, 99_999, 999_999, 9_999_999, 99_999_999, 999_999_999, i32::MAX];

/// Number of decimal digits of a non-negative `x`.
pub(crate) fn string_size(x: i32) -> usize {
    debug_assert!(x >= 0, "string_size expects a non-negative value, got {x}");
    SIZE_TABLE.iter().position(|&bound| x <= bound).map_or(SIZE_TABLE.len(), |i| i + 1)
}

pub(crate) fn is_valid_radix(radix: i32) -> bool {
    (MIN_RADIX..=MAX_RADIX).contains(&radix)
}

/// Value of `ch` as a digit in `radix`, letters matched case-insensitively.
///
/// Returns `None` when `ch` is not a digit of that radix. Only ASCII digits
/// and letters are recognized.
pub fn digit(ch: char, radix: i32) -> Option<u32> {
    if !is_valid_radix(radix) {
        return None;
    }
    let value = match ch {
        '0'..='9' => ch as u32 - '0' as u32,
        'a'..='z' => ch as u32 - 'a' as u32 + 10,
        'A'..='Z' => ch as u32 - 'A' as u32 + 10,
        _ => return None,
    };
    (value < radix as u32).then_some(value)
}

/// Lowercase character for `value` as a digit in `radix`.
///
/// Returns `None` when `radix` is outside `[2, 36]` or `value` is not below it.
pub fn for_digit(value: u32, radix: i32) -> Option<char> {
    if !is_valid_radix(radix) || value >= radix as u32 {
        return None;
    }
    Some(DIGITS[value as usize] as char)
}
