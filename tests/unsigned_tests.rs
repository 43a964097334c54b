use fixint::unsigned::{
    compare_unsigned, divide_unsigned, parse_unsigned_int, parse_unsigned_int_radix, remainder_unsigned, to_unsigned_long, to_unsigned_string,
    to_unsigned_string_radix,
};
use fixint::{Int32, MAX_RADIX, MIN_RADIX, NumberError};

// Initialize logger for this integration test binary so `RUST_LOG` is honored.
// Using `ctor` ensures initialization runs before tests start.
#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).is_test(true).try_init();
}

#[cfg(test)]
mod unsigned_tests {
    use super::*;

    fn sample_patterns() -> Vec<i32> {
        let mut values: Vec<i32> = (i32::MIN..=i32::MAX).step_by(13_421_771).collect();
        values.extend([i32::MIN, -1, 0, 1, i32::MAX]);
        values
    }

    #[test]
    fn test_unsigned_round_trip_every_radix() {
        for radix in MIN_RADIX..=MAX_RADIX {
            for x in sample_patterns() {
                let text = to_unsigned_string_radix(x, radix);
                assert!(!text.starts_with('-'), "unsigned output carries a sign: {text}");
                assert_eq!(parse_unsigned_int_radix(&text, radix), Ok(x as u32), "radix {radix}, text {text:?}");
                assert_eq!(Int32::parse_unsigned_int_radix(&text, radix), Ok(x));
            }
        }
    }

    #[test]
    fn test_unsigned_decimal_matches_std() {
        for x in sample_patterns() {
            assert_eq!(to_unsigned_string(x), (x as u32).to_string());
            assert_eq!(parse_unsigned_int(&(x as u32).to_string()), Ok(x as u32));
            assert_eq!(to_unsigned_long(x), (x as u32) as i64);
        }
    }

    #[test]
    fn test_unsigned_ordering_and_division_match_std() {
        let values = sample_patterns();
        for &x in values.iter().step_by(11) {
            for &y in values.iter().step_by(13) {
                let expected = (x as u32).cmp(&(y as u32)) as i32;
                assert_eq!(compare_unsigned(x, y), expected);
                if y != 0 {
                    assert_eq!(divide_unsigned(x, y), Ok(((x as u32) / (y as u32)) as i32));
                    assert_eq!(remainder_unsigned(x, y), Ok(((x as u32) % (y as u32)) as i32));
                }
            }
        }
    }

    #[test]
    fn test_unsigned_rejections() {
        assert!(matches!(parse_unsigned_int("-0"), Err(NumberError::MalformedNumber { .. })));
        assert!(matches!(parse_unsigned_int("99999999999"), Err(NumberError::OutOfRange { .. })));
        assert!(matches!(parse_unsigned_int_radix("zzzzzzz", 36), Err(NumberError::OutOfRange { .. })));
        assert!(matches!(parse_unsigned_int_radix("123456", 7), Ok(_)));
    }
}
