//! Zero-value defaults and bounded comparisons over primitive numbers

mod fallback;

pub use fallback::{greater_or, gte_or, is_zero, less_or, lte_or, max_of, min_of, or_else};

/// An ordered scalar with a natural zero value
pub trait Number: Copy + PartialOrd {
    /// The type's zero (`0` for integers, `0.0` for floats)
    fn zero() -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

macro_rules! impl_number {
    ($zero:literal => $($ty:ty),+) => {
        $(
            impl Number for $ty {
                #[inline]
                fn zero() -> Self {
                    $zero
                }
            }
        )+
    };
}

impl_number!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(0.0 => f32, f64);
