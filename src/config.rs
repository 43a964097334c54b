// External integer configuration, read from the process environment.
//
// Lookups never fail: an absent variable, an unusable name or a value that
// does not decode all fall back to the caller's default.

use crate::Int32;
use crate::decode::decode;
use crate::parse::parse_int;
use std::sync::Arc;

/// Environment variable raising the upper bound of the `Int32` cache.
pub const INTEGER_CACHE_HIGH_KEY: &str = "FIXINT_INTEGER_CACHE_HIGH";

/// Default, and minimum, upper bound of the `Int32` cache.
pub const DEFAULT_CACHE_HIGH: i32 = 127;

/// Largest upper bound whose index range `[low, high]` still fits in an i32.
pub const MAX_CACHE_HIGH: i32 = i32::MAX - 128 - 1;

/// Integer value of the environment variable `name`, decoded with
/// [`decode`] so `0x`, `#` and octal forms are accepted.
pub fn get_integer(name: &str) -> Option<Arc<Int32>> {
    get_integer_or_boxed(name, None)
}

/// Like [`get_integer`], with a default for absent or malformed values.
pub fn get_integer_or(name: &str, val: i32) -> Arc<Int32> {
    get_integer(name).unwrap_or_else(|| Int32::value_of(val))
}

/// Like [`get_integer`], returning `val` for absent or malformed values.
pub fn get_integer_or_boxed(name: &str, val: Option<Arc<Int32>>) -> Option<Arc<Int32>> {
    if name.is_empty() || name.contains(['=', '\0']) {
        return val;
    }
    let Ok(raw) = std::env::var(name) else {
        return val;
    };
    match decode(&raw) {
        Ok(i) => Some(Int32::value_of(i)),
        Err(e) => {
            log::debug!("ignoring malformed integer configuration {name}={raw:?}: {e}");
            val
        }
    }
}

/// Upper bound of the `Int32` cache for the raw configuration value `raw`.
///
/// The value is parsed as a plain decimal and clamped to
/// `[DEFAULT_CACHE_HIGH, MAX_CACHE_HIGH]`. A value that does not parse is
/// ignored.
pub fn cache_high_from(raw: Option<&str>) -> i32 {
    let Some(raw) = raw else {
        return DEFAULT_CACHE_HIGH;
    };
    match parse_int(raw) {
        Ok(high) => high.clamp(DEFAULT_CACHE_HIGH, MAX_CACHE_HIGH),
        Err(e) => {
            log::debug!("ignoring {INTEGER_CACHE_HIGH_KEY}={raw:?}: {e}");
            DEFAULT_CACHE_HIGH
        }
    }
}
