use fixint::cache::{IntegerCache, integer_cache};
use fixint::config::DEFAULT_CACHE_HIGH;
use fixint::{Int8, Int32, Number};
use std::sync::Arc;

// Initialize logger for this integration test binary so `RUST_LOG` is honored.
// Using `ctor` ensures initialization runs before tests start.
#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).is_test(true).try_init();
}

#[cfg(test)]
mod value_cache_tests {
    use super::*;

    #[test]
    fn test_identity_within_default_range() {
        for v in -128..=127 {
            let a = Int32::value_of(v);
            let b = Int32::value_of(v);
            assert!(Arc::ptr_eq(&a, &b), "value {v} not interned");
            assert_eq!(a.int_value(), v);
        }
    }

    #[test]
    fn test_outside_range_is_fresh() {
        let cache = IntegerCache::new(DEFAULT_CACHE_HIGH);
        assert_eq!(cache.low(), -128);
        assert_eq!(cache.high(), 127);
        for v in [128, 200, -129, i32::MAX, i32::MIN] {
            assert!(cache.get(v).is_none(), "value {v} unexpectedly cached");
            let a = cache.canonicalize(v);
            let b = cache.canonicalize(v);
            assert!(!Arc::ptr_eq(&a, &b), "value {v} unexpectedly interned");
            assert_eq!(a, b);
        }
        assert!(Arc::ptr_eq(&cache.canonicalize(127), &cache.canonicalize(127)));
        assert!(Arc::ptr_eq(&cache.canonicalize(-128), &cache.canonicalize(-128)));
    }

    #[test]
    fn test_value_of_follows_process_cache_bounds() {
        let cache = integer_cache();
        let past_high = cache.high() + 1;
        assert!(cache.high() >= 127);
        assert!(!Arc::ptr_eq(&Int32::value_of(past_high), &Int32::value_of(past_high)));
        assert!(!Arc::ptr_eq(&Int32::value_of(-129), &Int32::value_of(-129)));
        assert!(Arc::ptr_eq(&Int32::value_of(cache.high()), &Int32::value_of(cache.high())));
    }

    #[test]
    fn test_new_never_consults_cache() {
        let cached = Int32::value_of(5);
        let plain = Arc::new(Int32::new(5));
        assert!(!Arc::ptr_eq(&cached, &plain));
        assert_eq!(*cached, *plain);
    }

    #[test]
    fn test_value_of_str_canonicalizes() {
        let a = Int32::value_of_str("100").expect("parses");
        let b = Int32::value_of_str_radix("64", 16).expect("parses");
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Int32::value_of_str("1e3").is_err());
    }

    #[test]
    fn test_concurrent_readers_share_instances() {
        let handles: Vec<_> = (0..8).map(|_| std::thread::spawn(|| Int32::value_of(42))).collect();
        let first = Int32::value_of(42);
        for handle in handles {
            let v = handle.join().expect("thread finished");
            assert!(Arc::ptr_eq(&first, &v));
        }
    }

    #[test]
    fn test_byte_values_always_shared() {
        for b in i8::MIN..=i8::MAX {
            assert!(Arc::ptr_eq(&Int8::value_of(b), &Int8::value_of(b)));
        }
        let parsed = Int8::value_of_str("-7").expect("parses");
        assert!(Arc::ptr_eq(&parsed, &Int8::value_of(-7)));
    }
}
