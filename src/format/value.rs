//! Type-tagged, length-bounded rendering of arbitrary values

use std::any::type_name;
use std::fmt::Debug;
use std::time::Duration;

use crate::error::{Error, Result};

/// Default ceiling for one formatted value: the 64 KiB line limit of
/// common log scanners, minus room for the type tag and label column.
pub const MAX_VALUE_LEN: usize = 64 * 1024 - 1000;

pub const NIL: &str = "<nil>";
pub const TRUNCATED_SUFFIX: &str = "<... truncated>";

/// Format `value` with its type tag, bounded by [`MAX_VALUE_LEN`]
pub fn format_value<T: Debug + ?Sized>(value: Option<&T>) -> String {
    truncating_format(value, MAX_VALUE_LEN)
}

/// Format `value` with its type tag and truncate it past `max_len` bytes
///
/// - absent values render as `<nil>`
/// - strings render as `string("...")` with escapes
/// - everything else renders as `Type(debug form)`
pub fn truncating_format<T: Debug + ?Sized>(value: Option<&T>, max_len: usize) -> String {
    let Some(value) = value else {
        return NIL.to_string();
    };

    let name = type_name::<T>();
    let rendered = if is_string_type(name) {
        format!("string({:?})", value)
    } else {
        format!("{}({:?})", short_type_name(name), value)
    };

    truncate(rendered, max_len)
}

/// Render an expected/actual pair for a "not equal" message
///
/// Durations render in their human-readable form without a type tag.
/// Everything else goes through [`truncating_format`].
pub fn format_unequal_values<E, A>(
    expected: Option<&E>,
    actual: Option<&A>,
    max_len: usize,
) -> (String, String)
where
    E: Debug + ?Sized,
    A: Debug + ?Sized,
{
    let expected_type = type_name::<E>();
    if expected_type != type_name::<A>() {
        return (
            truncating_format(expected, max_len),
            truncating_format(actual, max_len),
        );
    }

    if expected_type.trim_start_matches('&') == type_name::<Duration>()
        && let (Some(e), Some(a)) = (expected, actual)
    {
        return (format!("{:?}", e), format!("{:?}", a));
    }

    (
        truncating_format(expected, max_len),
        truncating_format(actual, max_len),
    )
}

/// Reject callables as comparison arguments
pub fn check_equal_args<E, A>(expected: Option<&E>, actual: Option<&A>) -> Result<()>
where
    E: ?Sized,
    A: ?Sized,
{
    if expected.is_none() && actual.is_none() {
        return Ok(());
    }

    let args = [
        ("expected", expected.is_some(), type_name::<E>()),
        ("actual", actual.is_some(), type_name::<A>()),
    ];
    for (position, present, name) in args {
        if present && is_callable_type(name) {
            return Err(Error::FuncArgument {
                position,
                type_name: short_type_name(name),
            });
        }
    }
    Ok(())
}

/// Type name of `T` without module paths, e.g. `Option<Vec<i32>>`
pub fn type_name_of<T: ?Sized>() -> String {
    short_type_name(type_name::<T>())
}

fn truncate(mut value: String, max_len: usize) -> String {
    if value.len() <= max_len {
        return value;
    }

    tracing::debug!(len = value.len(), max_len, "truncating formatted value");
    let end = value.floor_char_boundary(max_len);
    value.truncate(end);
    value.push_str(TRUNCATED_SUFFIX);
    value
}

fn is_string_type(name: &str) -> bool {
    matches!(
        name.trim_start_matches('&'),
        "str" | "mut str" | "alloc::string::String" | "mut alloc::string::String"
    )
}

fn is_callable_type(name: &str) -> bool {
    let name = name.trim_start_matches('&').trim_start_matches("mut ");
    let name = name.strip_prefix("alloc::boxed::Box<").unwrap_or(name);

    name.starts_with("fn(")
        || name.starts_with("unsafe ")
        || name.starts_with("extern ")
        || name.starts_with("dyn core::ops::function::Fn")
        || name.ends_with("{{closure}}")
}

/// Strip module paths from every path segment of a type name
pub(crate) fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut token = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            token.push(c);
        } else {
            push_last_segment(&mut out, &token);
            token.clear();
            out.push(c);
        }
    }
    push_last_segment(&mut out, &token);

    out
}

fn push_last_segment(out: &mut String, token: &str) {
    out.push_str(token.rsplit("::").next().unwrap_or(token));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil() {
        assert_eq!(format_value::<i32>(None), "<nil>");
        assert_eq!(format_value::<str>(None), "<nil>");
    }

    #[test]
    fn test_strings() {
        assert_eq!(format_value(Some("abc")), r#"string("abc")"#);
        assert_eq!(format_value(Some(&"abc")), r#"string("abc")"#);
        assert_eq!(
            format_value(Some(&String::from("a\tb\"c"))),
            r#"string("a\tb\"c")"#
        );
    }

    #[test]
    fn test_typed_values() {
        assert_eq!(format_value(Some(&42)), "i32(42)");
        assert_eq!(format_value(Some(&2.5_f64)), "f64(2.5)");
        assert_eq!(format_value(Some(&vec![1_u8, 2])), "Vec<u8>([1, 2])");
        assert_eq!(format_value(Some(&Some(true))), "Option<bool>(Some(true))");
    }

    #[test]
    fn test_truncation() {
        let value = vec![0_u8; 50];
        let out = truncating_format(Some(&value), 20);
        assert_eq!(out.len(), 20 + TRUNCATED_SUFFIX.len());
        assert!(out.starts_with("Vec<u8>([0, 0, 0"));
        assert!(out.ends_with("<... truncated>"));
    }

    #[test]
    fn test_truncation_at_ceiling_is_noop() {
        assert_eq!(truncating_format(Some(&12345), 10), "i32(12345)");
    }

    #[test]
    fn test_truncation_default_ceiling() {
        let long = "x".repeat(MAX_VALUE_LEN);
        let out = format_value(Some(long.as_str()));
        assert_eq!(out.len(), MAX_VALUE_LEN + TRUNCATED_SUFFIX.len());
        assert!(out.starts_with("string(\"xxx"));
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // `string("` is 8 bytes, each `é` is 2
        let out = truncating_format(Some("ééé"), 11);
        assert_eq!(out, "string(\"é<... truncated>");
    }

    #[test]
    fn test_unequal_same_type() {
        assert_eq!(
            format_unequal_values(Some(&1), Some(&2), MAX_VALUE_LEN),
            ("i32(1)".to_string(), "i32(2)".to_string())
        );
    }

    #[test]
    fn test_unequal_mismatched_types() {
        assert_eq!(
            format_unequal_values(Some(&1_i32), Some(&1_i64), MAX_VALUE_LEN),
            ("i32(1)".to_string(), "i64(1)".to_string())
        );
        assert_eq!(
            format_unequal_values(Some("a"), None::<&i32>, MAX_VALUE_LEN),
            (r#"string("a")"#.to_string(), "<nil>".to_string())
        );
    }

    #[test]
    fn test_unequal_durations() {
        let (e, a) = format_unequal_values(
            Some(&Duration::from_millis(1500)),
            Some(&Duration::from_millis(250)),
            MAX_VALUE_LEN,
        );
        assert_eq!(e, "1.5s");
        assert_eq!(a, "250ms");
    }

    #[test]
    fn test_unequal_borrowed_durations() {
        let (e, a) = (Duration::from_millis(1500), Duration::from_secs(2));
        let (e, a) = format_unequal_values(Some(&&e), Some(&&a), MAX_VALUE_LEN);
        assert_eq!(e, "1.5s");
        assert_eq!(a, "2s");
    }

    #[test]
    fn test_check_equal_args() {
        assert!(check_equal_args::<i32, i32>(None, None).is_ok());
        assert!(check_equal_args(Some(&1), Some("x")).is_ok());

        let f: fn(i32) -> i32 = |x| x;
        let err = check_equal_args(Some(&f), Some(&1)).unwrap_err();
        assert!(matches!(err, Error::FuncArgument { position: "expected", .. }));
        assert!(err.to_string().contains("fn(i32) -> i32"));
    }

    #[test]
    fn test_check_equal_args_closures() {
        let add_one = |x: i32| x + 1;
        assert!(matches!(
            check_equal_args(Some(&1), Some(&add_one)),
            Err(Error::FuncArgument { position: "actual", .. })
        ));

        let boxed: Box<dyn Fn()> = Box::new(|| {});
        assert!(check_equal_args(Some(&boxed), None::<&i32>).is_err());
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("alloc::string::String"), "String");
        assert_eq!(
            short_type_name("core::option::Option<alloc::vec::Vec<i32>>"),
            "Option<Vec<i32>>"
        );
        assert_eq!(short_type_name("&str"), "&str");
        assert_eq!(
            short_type_name("(i32, std::collections::hash::map::HashMap<u8, u8>)"),
            "(i32, HashMap<u8, u8>)"
        );
        assert_eq!(type_name_of::<Vec<String>>(), "Vec<String>");
    }
}
