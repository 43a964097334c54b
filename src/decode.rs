use crate::error::NumberError;
use crate::parse::parse_signed;
use crate::{malformed, out_of_range};

/// Decodes an integer literal with optional sign and radix prefix.
///
/// ```text
/// Sign? ('0x' | '0X' | '#') HexDigits
/// Sign? '0' OctalDigits
/// Sign? DecimalDigits
/// ```
///
/// A lone `0` is decimal zero. No whitespace or digit separators are allowed.
pub fn decode(nm: &str) -> Result<i32, NumberError> {
    if nm.is_empty() {
        return Err(malformed!(nm, "zero length string"));
    }

    let mut index = 0;
    let mut negative = false;
    match nm.as_bytes()[0] {
        b'-' => {
            negative = true;
            index += 1;
        }
        b'+' => index += 1,
        _ => {}
    }

    let mut radix = 10;
    let rest = &nm[index..];
    if rest.starts_with("0x") || rest.starts_with("0X") {
        index += 2;
        radix = 16;
    } else if rest.starts_with('#') {
        index += 1;
        radix = 16;
    } else if rest.starts_with('0') && nm.len() > 1 + index {
        index += 1;
        radix = 8;
    }

    let digits = &nm[index..];
    if digits.starts_with('-') || digits.starts_with('+') {
        return Err(malformed!(nm, "sign character in wrong position"));
    }

    match parse_signed::<i32>(digits, radix) {
        Ok(magnitude) => Ok(if negative { -magnitude } else { magnitude }),
        Err(_) => {
            // The magnitude of i32::MIN does not fit; parsing the literal with
            // its sign attached reaches it, and reports any genuine error.
            let constant = if negative { format!("-{digits}") } else { digits.to_string() };
            parse_signed::<i32>(&constant, radix)
                .map_err(|e| with_input(e, nm))
                .inspect_err(|e| log::trace!("decode({nm:?}) failed: {e}"))
        }
    }
}

// Errors report the literal as the caller wrote it, prefix and all.
fn with_input(err: NumberError, nm: &str) -> NumberError {
    match err {
        NumberError::MalformedNumber { reason, .. } => malformed!(nm, reason),
        NumberError::OutOfRange { radix, .. } => out_of_range!(nm, radix),
        other => other,
    }
}
