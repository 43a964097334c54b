// Bit-level primitives on a 32-bit two's-complement word.
//
// Every function is total: `0`, `-1` and `i32::MIN` need no special casing
// beyond what is written here. Unsigned right shifts are done on the `u32`
// reinterpretation of the word.

/// Number of zero bits above the highest set bit; 32 for zero.
pub fn number_of_leading_zeros(i: i32) -> u32 {
    if i == 0 {
        return 32;
    }
    let mut i = i as u32;
    let mut n = 1;
    if i >> 16 == 0 {
        n += 16;
        i <<= 16;
    }
    if i >> 24 == 0 {
        n += 8;
        i <<= 8;
    }
    if i >> 28 == 0 {
        n += 4;
        i <<= 4;
    }
    if i >> 30 == 0 {
        n += 2;
        i <<= 2;
    }
    n - (i >> 31)
}

/// Number of zero bits below the lowest set bit; 32 for zero.
pub fn number_of_trailing_zeros(i: i32) -> u32 {
    if i == 0 {
        return 32;
    }
    let mut i = i as u32;
    let mut n = 31;
    let mut y = i << 16;
    if y != 0 {
        n -= 16;
        i = y;
    }
    y = i << 8;
    if y != 0 {
        n -= 8;
        i = y;
    }
    y = i << 4;
    if y != 0 {
        n -= 4;
        i = y;
    }
    y = i << 2;
    if y != 0 {
        n -= 2;
        i = y;
    }
    n - ((i << 1) >> 31)
}

/// Population count, summing bit groups in parallel.
pub fn bit_count(i: i32) -> u32 {
    let mut i = i as u32;
    i -= (i >> 1) & 0x5555_5555;
    i = (i & 0x3333_3333) + ((i >> 2) & 0x3333_3333);
    i = (i + (i >> 4)) & 0x0f0f_0f0f;
    i += i >> 8;
    i += i >> 16;
    i & 0x3f
}

/// The word with only the highest set bit of `i` kept; 0 for zero.
pub fn highest_one_bit(i: i32) -> i32 {
    let mut i = i as u32;
    i |= i >> 1;
    i |= i >> 2;
    i |= i >> 4;
    i |= i >> 8;
    i |= i >> 16;
    (i - (i >> 1)) as i32
}

/// The word with only the lowest set bit of `i` kept; 0 for zero.
pub fn lowest_one_bit(i: i32) -> i32 {
    i & i.wrapping_neg()
}

/// Circular left shift. Only the low five bits of `distance` are used, so a
/// negative distance rotates right.
pub fn rotate_left(i: i32, distance: i32) -> i32 {
    let i = i as u32;
    ((i << (distance & 31)) | (i >> (distance.wrapping_neg() & 31))) as i32
}

/// Circular right shift, see [`rotate_left`].
pub fn rotate_right(i: i32, distance: i32) -> i32 {
    let i = i as u32;
    ((i >> (distance & 31)) | (i << (distance.wrapping_neg() & 31))) as i32
}

/// Reverses the order of all 32 bits.
pub fn reverse(i: i32) -> i32 {
    let mut i = i as u32;
    i = ((i & 0x5555_5555) << 1) | ((i >> 1) & 0x5555_5555);
    i = ((i & 0x3333_3333) << 2) | ((i >> 2) & 0x3333_3333);
    i = ((i & 0x0f0f_0f0f) << 4) | ((i >> 4) & 0x0f0f_0f0f);
    i = (i << 24) | ((i & 0xff00) << 8) | ((i >> 8) & 0xff00) | (i >> 24);
    i as i32
}

/// Reverses the order of the four bytes.
pub fn reverse_bytes(i: i32) -> i32 {
    let i = i as u32;
    ((i >> 24) | ((i >> 8) & 0xff00) | ((i << 8) & 0x00ff_0000) | (i << 24)) as i32
}

/// -1, 0 or 1 by sign, without branching.
pub fn signum(i: i32) -> i32 {
    (i >> 31) | (((i.wrapping_neg() as u32) >> 31) as i32)
}
