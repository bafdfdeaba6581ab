/// Implements [`SumValue`](super::SumValue) for primitive signed integers.
/// format is:
///```ignore
/// impl_sum_value!(i32, i64);
///```
/// `times` multiplies by the count converted to the integer type.
/// Panics if the count doesn't fit in it.
macro_rules! impl_sum_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl SumValue for $t {
                fn times(self, count: usize) -> Self {
                    let count = <$t>::try_from(count)
                        .expect(concat!("segment length doesn't fit in ", stringify!($t)));
                    self * count
                }
            }
        )*
    }
}
