use super::Number;

/// Returns true if `value` equals its type's zero
pub fn is_zero<T: Number>(value: T) -> bool {
    value.is_zero()
}

/// Return `value`, or `fallback` when `value` is zero
pub fn or_else<T: Number>(value: T, fallback: T) -> T {
    if value.is_zero() { fallback } else { value }
}

/// Return `a` if `a < b`, otherwise `fallback`
pub fn less_or<T: Number>(a: T, b: T, fallback: T) -> T {
    if a < b { a } else { fallback }
}

/// Return `a` if `a <= b`, otherwise `fallback`
pub fn lte_or<T: Number>(a: T, b: T, fallback: T) -> T {
    if a <= b { a } else { fallback }
}

/// Return `a` if `a > b`, otherwise `fallback`
pub fn greater_or<T: Number>(a: T, b: T, fallback: T) -> T {
    if a > b { a } else { fallback }
}

/// Return `a` if `a >= b`, otherwise `fallback`
pub fn gte_or<T: Number>(a: T, b: T, fallback: T) -> T {
    if a >= b { a } else { fallback }
}

/// The larger of two values. Ties and NaN keep `a`.
pub fn max_of<T: Number>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// The smaller of two values. Ties and NaN keep `a`.
pub fn min_of<T: Number>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_else() {
        assert_eq!(or_else(23, 21), 23);
        assert_eq!(or_else(0.0_f64, 21.3), 21.3);
        assert_eq!(or_else(0_u8, 7), 7);
        assert_eq!(or_else(-1_i64, 7), -1);
    }

    #[test]
    fn test_or_else_negative_zero() {
        assert_eq!(or_else(-0.0_f32, 1.5), 1.5);
    }

    #[test]
    fn test_less_or() {
        assert_eq!(less_or(23, 25, 0), 23);
        assert_eq!(less_or(23, 21, 11), 11);
        assert_eq!(less_or(21, 21, 11), 11);
    }

    #[test]
    fn test_lte_or() {
        assert_eq!(lte_or(23, 25, 0), 23);
        assert_eq!(lte_or(23, 21, 11), 11);
        assert_eq!(lte_or(21, 21, 11), 21);
    }

    #[test]
    fn test_greater_or() {
        assert_eq!(greater_or(23, 21, 0), 23);
        assert_eq!(greater_or(23, 25, 21), 21);
        assert_eq!(greater_or(21, 21, 11), 11);
    }

    #[test]
    fn test_gte_or() {
        assert_eq!(gte_or(23, 21, 0), 23);
        assert_eq!(gte_or(23, 25, 21), 21);
        assert_eq!(gte_or(21, 21, 11), 21);
    }

    #[test]
    fn test_float_bounds() {
        assert_eq!(lte_or(1.5_f64, 1.5, 0.0), 1.5);
        assert_eq!(less_or(1.5_f64, 1.5, 0.0), 0.0);
        // NaN never compares, so the fallback wins
        assert_eq!(gte_or(f64::NAN, 1.0, 2.0), 2.0);
    }

    #[test]
    fn test_max_min() {
        assert_eq!(max_of(3, 9), 9);
        assert_eq!(max_of(9, 3), 9);
        assert_eq!(min_of(3_usize, 9), 3);
        assert!(is_zero(0_u32));
        assert!(!is_zero(0.1_f32));
    }
}
