/// Widening and narrowing conversions shared by the fixed-width value types.
///
/// Narrowing truncates to the low bits of the two's-complement pattern;
/// widening sign-extends.
pub trait Number {
    fn int_value(&self) -> i32;

    fn long_value(&self) -> i64;

    fn float_value(&self) -> f32;

    fn double_value(&self) -> f64;

    fn byte_value(&self) -> i8 {
        self.int_value() as i8
    }

    fn short_value(&self) -> i16 {
        self.int_value() as i16
    }
}
