pub mod bits;
pub mod cache;
pub mod config;
pub(crate) mod decode;
pub(crate) mod digits;
pub(crate) mod error;
pub(crate) mod format;
pub(crate) mod int32;
pub(crate) mod int8;
pub(crate) mod number;
pub(crate) mod parse;
pub mod unsigned;

pub use decode::decode;
pub use digits::{MAX_RADIX, MIN_RADIX, digit, for_digit};
pub use error::NumberError;
pub use format::{format_i64_radix, to_binary_string, to_hex_string, to_octal_string, to_string, to_string_radix};
pub use int8::Int8;
pub use int32::Int32;
pub use number::Number;
pub use parse::{parse_int, parse_int_radix, parse_long, parse_long_radix};
